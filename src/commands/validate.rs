//! Command: check a definitions file without creating anything.
use anyhow::Result;

use crate::cli::{GlobalOpts, ValidateOpts};
use crate::config::Settings;
use crate::logging::Logger;

/// Run the validate command.
///
/// Settings are checked too when a config file is given, so a broken
/// configuration shows up before an import is attempted.
///
/// # Errors
///
/// Returns an error if the definitions cannot be loaded or the given
/// settings file does not resolve.
pub fn run(global: &GlobalOpts, opts: &ValidateOpts, log: &Logger) -> Result<()> {
    let definitions = super::load_definitions(&opts.path, log)?;
    let fields: usize = definitions
        .iter()
        .flat_map(|d| std::iter::once(d).chain(&d.children))
        .map(|d| d.fields.len())
        .sum();
    log.info(&format!("{fields} field(s) in total"));

    if global.config.is_some() {
        log.stage("Resolving settings");
        Settings::from_process_env(global.config.as_deref(), !global.dry_run)?;
        log.info("settings ok");
    }
    Ok(())
}
