//! Item builders: one type per kind of remote item.
//!
//! Builders are plain data. They know their name, parent, template and field
//! values; turning them into remote items is the provisioner's job.
pub mod content_item;
pub mod data_folder;
pub mod field;
pub mod rendering;
pub mod section;
pub mod template;

pub use content_item::ContentItem;
pub use data_folder::{DataFolderItem, DataFolderTemplate};
pub use field::TemplateField;
pub use rendering::Rendering;
pub use section::Section;
pub use template::{Folder, Template};

use crate::config::Settings;
use crate::remote::{CreateItemRequest, FieldValue};

/// Interface for items that can be sent to an [`ItemClient`](crate::remote::ItemClient).
pub trait Creatable {
    /// Short kind label used in logs and the run log (e.g. `template`).
    fn kind(&self) -> &'static str;

    /// Item name as it will be sent.
    fn name(&self) -> &str;

    /// Identifier of the parent item.
    fn parent(&self) -> &str;

    /// Template the item is based on.
    fn template_id<'a>(&'a self, settings: &'a Settings) -> &'a str;

    /// Field values written on creation. Empty by default.
    fn fields(&self, _settings: &Settings) -> Vec<FieldValue> {
        Vec::new()
    }

    /// Human-readable description, e.g. `template 'Hero'`.
    fn description(&self) -> String {
        format!("{} '{}'", self.kind(), self.name())
    }

    /// Build the create request for this item.
    fn request(&self, settings: &Settings) -> CreateItemRequest {
        CreateItemRequest {
            database: settings.remote.database.clone(),
            language: settings.remote.language.clone(),
            name: self.name().to_string(),
            parent: self.parent().to_string(),
            template_id: self.template_id(settings).to_string(),
            fields: self.fields(settings),
        }
    }
}
