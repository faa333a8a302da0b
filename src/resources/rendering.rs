//! Rendering builder.
use super::Creatable;
use crate::config::Settings;
use crate::remote::FieldValue;

/// A JSON rendering binding a front-end component to a datasource template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    name: String,
    parent: String,
    component_name: String,
    datasource_template: String,
}

impl Rendering {
    /// Rendering called `name` under `parent`.
    ///
    /// `datasource_template` is the content template's *path*, not its id.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        parent: impl Into<String>,
        component_name: impl Into<String>,
        datasource_template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            parent: parent.into(),
            component_name: component_name.into(),
            datasource_template: datasource_template.into(),
        }
    }
}

impl Creatable for Rendering {
    fn kind(&self) -> &'static str {
        "rendering"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent(&self) -> &str {
        &self.parent
    }

    fn template_id<'a>(&'a self, settings: &'a Settings) -> &'a str {
        &settings.template_ids.rendering
    }

    fn fields(&self, settings: &Settings) -> Vec<FieldValue> {
        vec![
            FieldValue::new("componentName", &self.component_name),
            FieldValue::new(
                "Rendering Contents Resolver",
                &settings.template_ids.rendering_contents_resolver,
            ),
            FieldValue::new("Datasource Template", &self.datasource_template),
        ]
    }
}
