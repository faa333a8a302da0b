//! Remote item store access.
//!
//! Every item the provisioner creates goes through [`ItemClient::create_item`].
//! [`GraphqlClient`] talks to the authoring API; [`DryRunClient`] fabricates
//! results offline.
pub mod dry_run;
pub mod graphql;
pub mod run_log;

pub use dry_run::DryRunClient;
pub use graphql::GraphqlClient;
pub use run_log::{RunLog, RunLogEntry};

use serde::Serialize;

use crate::error::RemoteError;
use crate::model::CreatedResource;

/// A single `name`/`value` pair written on a created item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValue {
    /// Field name as known to the item's template.
    pub name: String,
    /// Raw field value.
    pub value: String,
}

impl FieldValue {
    /// Pair `name` with `value`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Input of one create call, serialized as the mutation's `input` variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    /// Target database (usually `master`).
    pub database: String,
    /// Language of the created version.
    pub language: String,
    /// Item name, already sanitized where required.
    pub name: String,
    /// Identifier of the parent item.
    pub parent: String,
    /// Identifier of the template the new item is based on.
    pub template_id: String,
    /// Field values, in order.
    pub fields: Vec<FieldValue>,
}

impl CreateItemRequest {
    /// Value of the field called `name`, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

/// Creates items in the remote store.
///
/// Calls are blocking and never retried; the first error is returned as-is.
#[cfg_attr(test, mockall::automock)]
pub trait ItemClient: Send + Sync {
    /// Create one item and return the handle reported by the store.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure, a non-success status,
    /// a reported error list, or a response without a created item.
    fn create_item(&self, request: &CreateItemRequest) -> Result<CreatedResource, RemoteError>;
}
