//! Subcommand implementations.
pub mod completions;
pub mod import;
pub mod validate;
pub mod version;

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::config::{definitions, validation};
use crate::logging::Log;
use crate::model::ComponentDefinition;

/// Load definitions from `path` and log any validation warnings.
///
/// # Errors
///
/// Returns an error if the definitions cannot be read or are structurally
/// invalid.
pub fn load_definitions(path: &Path, log: &dyn Log) -> Result<Vec<ComponentDefinition>> {
    log.stage("Loading definitions");
    let file = definitions::definitions_path(path);
    let defs = definitions::load(path)
        .with_context(|| format!("failed to load definitions from {}", path.display()))?;
    let children: usize = defs.iter().map(|d| d.children.len()).sum();
    log.info(&format!(
        "loaded {} component(s), {children} child component(s) from {}",
        defs.len(),
        file.display()
    ));
    if defs.is_empty() {
        log.warn("definitions list is empty; only the Page Data item will be written");
    }

    let warnings = validation::validate_all(&defs);
    if !warnings.is_empty() {
        log.warn(&format!("found {} definition warning(s):", warnings.len()));
        for warning in &warnings {
            log.warn(&format!(
                "  {} [{}]: {}",
                warning.source, warning.item, warning.message
            ));
        }
    }
    Ok(defs)
}
