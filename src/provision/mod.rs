//! Provisioning orchestration.
//!
//! A run walks the definitions strictly in order. For each top-level
//! definition the children are created first, then the parent template,
//! fields, data folder, optional sample item and rendering. After the last
//! definition a single Page Data item records what was created.
//!
//! Every create call goes through [`Context::create`], which maps client
//! failures to [`ProvisionError::RemoteCreateFailed`] and appends successes
//! to the run log. The first failure ends the run.
pub mod children;
pub mod component;
mod context;
pub mod fields;
pub mod run;
pub mod sample;

pub use context::Context;

use std::sync::Arc;

use crate::config::Settings;
use crate::config::definitions::check_all;
use crate::error::ProvisionError;
use crate::logging::Log;
use crate::model::{ComponentDefinition, CreationSummary};
use crate::remote::{ItemClient, RunLog};

/// Entry point for provisioning a set of component definitions.
#[derive(Debug)]
pub struct Provisioner {
    ctx: Context,
}

impl Provisioner {
    /// Create a provisioner sending every create call to `client`.
    #[must_use]
    pub fn new(settings: Arc<Settings>, client: Arc<dyn ItemClient>, log: Arc<dyn Log>) -> Self {
        Self {
            ctx: Context::new(settings, client, log, false),
        }
    }

    /// Mark the run as a dry run (the client is expected to fabricate
    /// results); would-be create calls are logged.
    #[must_use]
    pub fn with_dry_run(self, dry_run: bool) -> Self {
        let Context {
            settings,
            client,
            log,
            ..
        } = self.ctx;
        Self {
            ctx: Context::new(settings, client, log, dry_run),
        }
    }

    /// Provision all `definitions` and write the Page Data item.
    ///
    /// Definitions are checked before the first create call.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::InvalidInput`] without contacting the client
    /// when a definition is malformed, otherwise the first
    /// [`ProvisionError`]; the run log keeps everything created up to that
    /// point.
    pub fn run(
        &self,
        definitions: &[ComponentDefinition],
    ) -> Result<Vec<CreationSummary>, ProvisionError> {
        check_all(definitions)?;
        run::run(&self.ctx, definitions)
    }

    /// Provision a single definition without writing Page Data.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::InvalidInput`] before any create call for a
    /// malformed definition, otherwise the first [`ProvisionError`] raised
    /// while creating its items.
    pub fn provision_component(
        &self,
        definition: &ComponentDefinition,
    ) -> Result<CreationSummary, ProvisionError> {
        check_all(std::slice::from_ref(definition))?;
        component::provision_component(&self.ctx, definition)
    }

    /// Items created so far, in creation order.
    #[must_use]
    pub const fn run_log(&self) -> &RunLog {
        self.ctx.run_log()
    }
}
