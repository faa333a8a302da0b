//! Data-folder template and data-folder item builders.
//!
//! Every component gets a folder template (`<name> Data Folder`) next to its
//! content template and one folder item under the data-folder root. The
//! folder item's `__Masters` restricts insert options to the content template.
use super::Creatable;
use crate::config::Settings;
use crate::naming::title_case_with_spacing;
use crate::remote::FieldValue;

/// Template for a component's data folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFolderTemplate {
    name: String,
    parent: String,
}

impl DataFolderTemplate {
    /// Folder template for `component_name`, created under `parent`.
    #[must_use]
    pub fn new(component_name: &str, parent: impl Into<String>) -> Self {
        Self {
            name: format!("{component_name} Data Folder"),
            parent: parent.into(),
        }
    }
}

impl Creatable for DataFolderTemplate {
    fn kind(&self) -> &'static str {
        "data folder template"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent(&self) -> &str {
        &self.parent
    }

    fn template_id<'a>(&'a self, settings: &'a Settings) -> &'a str {
        &settings.template_ids.template
    }
}

/// A component's data folder holding its content items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFolderItem {
    name: String,
    parent: String,
    folder_template_id: String,
    masters: String,
}

impl DataFolderItem {
    /// Folder item named after `component_name` in title case.
    ///
    /// `folder_template_id` is the id of the matching [`DataFolderTemplate`];
    /// `content_template_id` becomes the `__Masters` value.
    #[must_use]
    pub fn new(
        component_name: &str,
        parent: impl Into<String>,
        folder_template_id: impl Into<String>,
        content_template_id: impl Into<String>,
    ) -> Self {
        Self {
            name: title_case_with_spacing(component_name),
            parent: parent.into(),
            folder_template_id: folder_template_id.into(),
            masters: content_template_id.into(),
        }
    }
}

impl Creatable for DataFolderItem {
    fn kind(&self) -> &'static str {
        "data folder"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent(&self) -> &str {
        &self.parent
    }

    fn template_id<'a>(&'a self, _settings: &'a Settings) -> &'a str {
        &self.folder_template_id
    }

    fn fields(&self, _settings: &Settings) -> Vec<FieldValue> {
        vec![FieldValue::new("__Masters", &self.masters)]
    }
}
