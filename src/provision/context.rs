use std::sync::Arc;

use crate::config::Settings;
use crate::error::ProvisionError;
use crate::logging::Log;
use crate::model::CreatedResource;
use crate::remote::{ItemClient, RunLog};
use crate::resources::Creatable;

/// Shared state for one provisioning run.
pub struct Context {
    /// Resolved settings; read-only for the whole run.
    pub settings: Arc<Settings>,
    /// Client every create call goes through.
    pub client: Arc<dyn ItemClient>,
    /// Logger for output and component recording.
    pub log: Arc<dyn Log>,
    /// Whether the client is fabricating results.
    pub dry_run: bool,
    run_log: RunLog,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("settings", &self.settings)
            .field("client", &"<dyn ItemClient>")
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .field("run_log", &self.run_log)
            .finish()
    }
}

impl Context {
    /// Context with an empty run log.
    #[must_use]
    pub fn new(
        settings: Arc<Settings>,
        client: Arc<dyn ItemClient>,
        log: Arc<dyn Log>,
        dry_run: bool,
    ) -> Self {
        Self {
            settings,
            client,
            log,
            dry_run,
            run_log: RunLog::new(),
        }
    }

    /// Items created so far, in order.
    #[must_use]
    pub const fn run_log(&self) -> &RunLog {
        &self.run_log
    }

    /// Create one item and record it in the run log.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::RemoteCreateFailed`] naming `item` when the
    /// client call fails.
    pub fn create(&self, item: &dyn Creatable) -> Result<CreatedResource, ProvisionError> {
        let request = item.request(&self.settings);
        let description = item.description();
        if self.dry_run {
            self.log
                .dry_run(&format!("would create {description} under {}", request.parent));
        }
        let created = self
            .client
            .create_item(&request)
            .map_err(|source| ProvisionError::RemoteCreateFailed {
                item: description.clone(),
                source,
            })?;
        self.log
            .debug(&format!("created {description}: {} {}", created.id, created.path));
        self.run_log.record(item.kind(), &request.parent, &created);
        Ok(created)
    }
}
