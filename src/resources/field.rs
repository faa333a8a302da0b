//! Template field builder.
use super::Creatable;
use crate::config::Settings;
use crate::model::Field;
use crate::remote::FieldValue;

/// A template field item inside a `Data` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateField {
    name: String,
    parent: String,
    field_type: String,
    title: String,
    source: Option<String>,
}

impl TemplateField {
    /// Field item for `field`, created under the section `parent`.
    #[must_use]
    pub fn new(field: &Field, parent: impl Into<String>) -> Self {
        Self {
            name: field.name.clone(),
            parent: parent.into(),
            field_type: field.field_type.clone(),
            title: field.display_name.clone(),
            source: None,
        }
    }

    /// Attach a multilist `Source`.
    ///
    /// The value is written as given; callers pass a formatted identifier or
    /// an empty string when no source is available.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The attached `Source`, if any.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl Creatable for TemplateField {
    fn kind(&self) -> &'static str {
        "field"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent(&self) -> &str {
        &self.parent
    }

    fn template_id<'a>(&'a self, settings: &'a Settings) -> &'a str {
        &settings.template_ids.field
    }

    fn fields(&self, _settings: &Settings) -> Vec<FieldValue> {
        let mut fields = vec![
            FieldValue::new("Type", &self.field_type),
            FieldValue::new("Title", &self.title),
        ];
        if let Some(source) = &self.source {
            fields.push(FieldValue::new("Source", source));
        }
        fields
    }
}
