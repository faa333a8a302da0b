//! Content item builder for sample items and Page Data.
use super::Creatable;
use crate::config::Settings;
use crate::model::Field;
use crate::remote::FieldValue;

/// Name of the aggregate item written at the end of a run.
pub const PAGE_DATA_ITEM_NAME: &str = "Page Data";

/// A content item with arbitrary field values.
///
/// Used for sample datasource items and for the Page Data item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    kind: &'static str,
    name: String,
    parent: String,
    template_id: String,
    fields: Vec<FieldValue>,
}

impl ContentItem {
    /// Sample item populated from every field with non-blank sample data.
    ///
    /// `name` must already be sanitized.
    #[must_use]
    pub fn sample(
        name: impl Into<String>,
        data_folder_id: impl Into<String>,
        content_template_id: impl Into<String>,
        fields: &[Field],
    ) -> Self {
        Self {
            kind: "sample item",
            name: name.into(),
            parent: data_folder_id.into(),
            template_id: content_template_id.into(),
            fields: sample_values(fields),
        }
    }

    /// The Page Data item with the serialized component records.
    #[must_use]
    pub fn page_data(settings: &Settings, components_json: impl Into<String>) -> Self {
        Self {
            kind: "page data item",
            name: PAGE_DATA_ITEM_NAME.to_string(),
            parent: settings.parents.page_data.clone(),
            template_id: settings.template_ids.page_data.clone(),
            fields: vec![
                FieldValue::new("Page Name", &settings.page_data.page_name),
                FieldValue::new("Page Template", &settings.page_data.page_template),
                FieldValue::new("Components", components_json),
            ],
        }
    }
}

/// `name`/`value` pairs for every field carrying sample data, in order.
#[must_use]
pub fn sample_values(fields: &[Field]) -> Vec<FieldValue> {
    fields
        .iter()
        .filter_map(|f| f.sample().map(|value| FieldValue::new(&f.name, value)))
        .collect()
}

impl Creatable for ContentItem {
    fn kind(&self) -> &'static str {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent(&self) -> &str {
        &self.parent
    }

    fn template_id<'a>(&'a self, _settings: &'a Settings) -> &'a str {
        &self.template_id
    }

    fn fields(&self, _settings: &Settings) -> Vec<FieldValue> {
        self.fields.clone()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::test_helpers::settings;

    fn field(name: &str, sample: Option<&str>) -> Field {
        Field {
            name: name.to_string(),
            field_type: "Single-Line Text".to_string(),
            display_name: name.to_string(),
            sample_data: sample.map(String::from),
        }
    }

    #[test]
    fn sample_skips_fields_without_data() {
        let fields = [
            field("title", Some("Summer Sale")),
            field("subtitle", None),
            field("body", Some("  ")),
            field("cta", Some("Shop now")),
        ];
        let request = ContentItem::sample("Summer Sale 1", "{folder}", "{template}", &fields)
            .request(&settings());
        assert_eq!(request.name, "Summer Sale 1");
        assert_eq!(request.parent, "{folder}");
        assert_eq!(request.template_id, "{template}");
        assert_eq!(
            request.fields,
            vec![
                FieldValue::new("title", "Summer Sale"),
                FieldValue::new("cta", "Shop now"),
            ]
        );
    }

    #[test]
    fn page_data_uses_configured_parent_and_template() {
        let settings = settings();
        let item = ContentItem::page_data(&settings, "[]");
        let request = item.request(&settings);
        assert_eq!(item.description(), "page data item 'Page Data'");
        assert_eq!(request.parent, settings.parents.page_data);
        assert_eq!(request.template_id, settings.template_ids.page_data);
        assert_eq!(request.field("Page Name"), Some("Figma To Sitecore Demo"));
        assert_eq!(
            request.field("Page Template"),
            Some("{807349B6-97BB-4A7A-B356-3900EBF2A629}")
        );
        assert_eq!(request.field("Components"), Some("[]"));
    }
}
