//! Template and template folder builders.
use super::Creatable;
use crate::config::Settings;

/// A template item holding one component's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    parent: String,
}

impl Template {
    /// Template item named `name` under `parent`.
    #[must_use]
    pub fn new(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: parent.into(),
        }
    }
}

impl Creatable for Template {
    fn kind(&self) -> &'static str {
        "template"
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

/// A folder grouping a parent component with its children.
///
/// Used both under the templates root and under the renderings root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    name: String,
    parent: String,
}

impl Folder {
    /// Folder named `name` under `parent`.
    #[must_use]
    pub fn new(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: parent.into(),
        }
    }
}

impl Creatable for Folder {
    fn kind(&self) -> &'static str {
        "folder"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent(&self) -> &str {
        &self.parent
    }

    fn template_id<'a>(&'a self, settings: &'a Settings) -> &'a str {
        &settings.template_ids.folder
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::test_helpers::settings;
    use crate::config::{DEFAULT_FOLDER_TEMPLATE_ID, DEFAULT_TEMPLATE_TEMPLATE_ID};

    #[test]
    fn template_uses_template_kind_and_no_fields() {
        let request = Template::new("HeroBanner", "{root}").request(&settings());
        assert_eq!(request.name, "HeroBanner");
        assert_eq!(request.parent, "{root}");
        assert_eq!(request.template_id, DEFAULT_TEMPLATE_TEMPLATE_ID);
        assert!(request.fields.is_empty());
    }

    #[test]
    fn folder_uses_folder_kind() {
        let request = Folder::new("PromoGrid", "{root}").request(&settings());
        assert_eq!(request.template_id, DEFAULT_FOLDER_TEMPLATE_ID);
        assert!(request.fields.is_empty());
    }

    #[test]
    fn template_kind_follows_settings() {
        let mut settings = settings();
        settings.template_ids.template = "{99999999-9999-9999-9999-999999999999}".to_string();
        let request = Template::new("Hero", "{root}").request(&settings);
        assert_eq!(request.template_id, "{99999999-9999-9999-9999-999999999999}");
    }
}
