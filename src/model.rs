//! Component definitions (input) and creation summaries (output).
use serde::{Deserialize, Serialize};

/// Field type tag that turns a field into a reference list with a `Source`.
pub const MULTILIST_TYPE: &str = "multilist";

/// A single template field declared by a component.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field item name.
    pub name: String,
    /// Free-form field type (e.g. `Single-Line Text`, `Multilist`).
    #[serde(rename = "type")]
    pub field_type: String,
    /// Title shown to content authors.
    #[serde(default)]
    pub display_name: String,
    /// Example value used to seed sample content items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<String>,
}

impl Field {
    /// Whether this field is a multilist and therefore needs a `Source`.
    #[must_use]
    pub fn is_multilist(&self) -> bool {
        self.field_type.eq_ignore_ascii_case(MULTILIST_TYPE)
    }

    /// The sample value, if it is present and not blank.
    #[must_use]
    pub fn sample(&self) -> Option<&str> {
        self.sample_data
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }

    /// Whether the field can name a sample item (`title` or `name`).
    #[must_use]
    pub fn is_title_like(&self) -> bool {
        self.name.eq_ignore_ascii_case("title") || self.name.eq_ignore_ascii_case("name")
    }
}

/// Declarative description of one provisionable component.
///
/// Accepts both the current key names and the ones written by the design
/// export (`nextJsComponentName`, `child`, `multiListSourceIds`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    /// Name used for the template, rendering and data folder items.
    pub component_name: String,
    /// Name of the front-end component the rendering binds to.
    #[serde(default, alias = "nextJsComponentName")]
    pub external_component_name: String,
    /// Template fields, in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Nested components provisioned before this one.
    #[serde(default, alias = "child")]
    pub children: Vec<ComponentDefinition>,
    /// Pre-existing multilist sources, consumed before any collected from
    /// children.
    #[serde(default, alias = "multiListSourceIds")]
    pub multilist_source_ids: Vec<String>,
}

impl ComponentDefinition {
    /// Whether this component has nested children.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of multilist fields declared by this component.
    #[must_use]
    pub fn multilist_field_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_multilist()).count()
    }

    /// Whether any field carries non-blank sample data.
    #[must_use]
    pub fn has_sample_data(&self) -> bool {
        self.fields.iter().any(|f| f.sample().is_some())
    }
}

/// Handle returned by the remote store for every created item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResource {
    /// Item identifier as reported by the remote store.
    #[serde(rename = "itemId", alias = "id")]
    pub id: String,
    /// Item name.
    pub name: String,
    /// Full content path of the item.
    #[serde(default)]
    pub path: String,
}

/// A field recorded in a [`CreationSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedField {
    /// Field name.
    pub name: String,
}

/// Outcome of provisioning one top-level definition.
///
/// Child summaries only carry the component name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationSummary {
    /// Component name.
    pub component_name: String,
    /// Identifier of the component template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Identifier of the component rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendering_id: Option<String>,
    /// Identifier of the component data folder item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_folder_id: Option<String>,
    /// Fields created on the template.
    #[serde(default)]
    pub created_fields: Vec<CreatedField>,
    /// One entry per child definition.
    #[serde(default)]
    pub child_summaries: Vec<CreationSummary>,
    /// Identifier of the sample content item, when one was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_item_id: Option<String>,
}

impl CreationSummary {
    /// Name-only summary used for children.
    #[must_use]
    pub fn named(component_name: &str) -> Self {
        Self {
            component_name: component_name.to_string(),
            ..Self::default()
        }
    }
}

/// Flattened per-component record embedded in the Page Data item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDataRecord {
    /// Component name.
    pub component_name: String,
    /// Identifier of the component template.
    pub template_id: String,
    /// Identifier of the component rendering.
    pub rendering_id: String,
    /// Identifier of the component data folder item.
    pub data_folder_id: String,
    /// Identifier of the sample content item, when one was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_item_id: Option<String>,
}

impl From<&CreationSummary> for PageDataRecord {
    fn from(summary: &CreationSummary) -> Self {
        Self {
            component_name: summary.component_name.clone(),
            template_id: summary.template_id.clone().unwrap_or_default(),
            rendering_id: summary.rendering_id.clone().unwrap_or_default(),
            data_folder_id: summary.data_folder_id.clone().unwrap_or_default(),
            data_source_item_id: summary.data_source_item_id.clone(),
        }
    }
}
