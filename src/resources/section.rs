//! Template section builder.
use super::Creatable;
use crate::config::Settings;

/// Name of the single section every provisioned template gets.
pub const SECTION_NAME: &str = "Data";

/// The `Data` section under a template; fields are created inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    parent: String,
}

impl Section {
    /// The `Data` section of the template `template_id`.
    #[must_use]
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            parent: template_id.into(),
        }
    }
}

impl Creatable for Section {
    fn kind(&self) -> &'static str {
        "section"
    }

    fn name(&self) -> &str {
        SECTION_NAME
    }

    fn parent(&self) -> &str {
        &self.parent
    }

    fn template_id<'a>(&'a self, settings: &'a Settings) -> &'a str {
        &settings.template_ids.section
    }
}
