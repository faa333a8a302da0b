//! Offline client that fabricates created items.
use std::collections::HashMap;
use std::sync::Mutex;

use super::{CreateItemRequest, ItemClient};
use crate::error::RemoteError;
use crate::model::CreatedResource;

#[derive(Debug, Default)]
struct State {
    next: u64,
    paths: HashMap<String, String>,
}

/// [`ItemClient`] that never leaves the process.
///
/// Identifiers are sequential (`{D0000000-0000-0000-0000-000000000001}`,
/// ...) so repeated dry runs over the same definitions print the same
/// output. Paths are built from the parent's fabricated path when the parent
/// was created in this run, and from the parent identifier otherwise.
#[derive(Debug, Default)]
pub struct DryRunClient {
    state: Mutex<State>,
}

impl DryRunClient {
    /// Client whose first fabricated id ends in `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items fabricated so far.
    #[must_use]
    pub fn created_count(&self) -> u64 {
        self.state.lock().map_or(0, |s| s.next)
    }
}

impl ItemClient for DryRunClient {
    fn create_item(&self, request: &CreateItemRequest) -> Result<CreatedResource, RemoteError> {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        state.next += 1;
        let id = format!("{{D0000000-0000-0000-0000-{:012X}}}", state.next);
        let parent_path = state
            .paths
            .get(&request.parent)
            .cloned()
            .unwrap_or_else(|| request.parent.clone());
        let path = format!("{parent_path}/{}", request.name);
        state.paths.insert(id.clone(), path.clone());
        drop(state);
        Ok(CreatedResource {
            id,
            name: request.name.clone(),
            path,
        })
    }
}
