//! Command: provision every definition in a definitions file.
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use crate::cli::{GlobalOpts, ImportOpts};
use crate::config::Settings;
use crate::logging::{Log, Logger};
use crate::model::{ComponentDefinition, CreationSummary};
use crate::provision::Provisioner;
use crate::remote::{DryRunClient, GraphqlClient, ItemClient};

/// Run the import command.
///
/// # Errors
///
/// Returns an error if the definitions or settings are invalid, if any
/// create call fails, or if an output file cannot be written.
pub fn run(global: &GlobalOpts, opts: &ImportOpts, log: &Arc<Logger>) -> Result<()> {
    log.info(&format!("sitecore-provision {}", super::version::version()));
    let definitions = super::load_definitions(&opts.path, log.as_ref())?;

    log.stage("Resolving settings");
    let settings = Settings::from_process_env(global.config.as_deref(), !global.dry_run)
        .context("failed to resolve settings")?;
    log.debug(&format!("{settings:?}"));

    let client: Arc<dyn ItemClient> = if global.dry_run {
        log.info("dry run: no request will be sent");
        Arc::new(DryRunClient::new())
    } else {
        log.info(&format!("endpoint: {}", settings.remote.endpoint));
        if settings.remote.skip_tls_verify {
            log.warn("TLS certificate verification is disabled");
        }
        Arc::new(GraphqlClient::new(&settings.remote))
    };

    let log_dyn: Arc<dyn Log> = Arc::clone(log) as Arc<dyn Log>;
    let result = execute(
        &definitions,
        Arc::new(settings),
        client,
        &log_dyn,
        global.dry_run,
        opts,
    );
    log.print_summary();
    result
}

/// Provision `definitions` and write the requested output files.
///
/// The run log is written whether or not provisioning succeeds; the summary
/// file only on success.
///
/// # Errors
///
/// Returns the provisioning error, if any, otherwise any output write error.
pub fn execute(
    definitions: &[ComponentDefinition],
    settings: Arc<Settings>,
    client: Arc<dyn ItemClient>,
    log: &Arc<dyn Log>,
    dry_run: bool,
    opts: &ImportOpts,
) -> Result<()> {
    let provisioner = Provisioner::new(settings, client, Arc::clone(log)).with_dry_run(dry_run);
    let result = provisioner.run(definitions);

    let created = provisioner.run_log().len();
    let run_log_written = opts.run_log.as_deref().map_or(Ok(()), |path| {
        provisioner.run_log().write_json(path).map(|()| {
            log.info(&format!("run log: {} ({created} item(s))", path.display()));
        })
    });

    let summaries = match result {
        Ok(summaries) => summaries,
        Err(e) => {
            log.error(&format!("{e}"));
            log.error(&format!(
                "{created} item(s) were created before the failure and were not removed"
            ));
            if let Err(write_err) = run_log_written {
                log.error(&format!("{write_err:#}"));
            }
            return Err(e.into());
        }
    };
    run_log_written?;

    log.info(&format!(
        "{} component(s) provisioned, {created} item(s) created",
        summaries.len()
    ));
    if let Some(path) = &opts.summary_out {
        write_summaries(path, &summaries)?;
        log.info(&format!("summary: {}", path.display()));
    }
    Ok(())
}

/// Write `summaries` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_summaries(path: &Path, summaries: &[CreationSummary]) -> Result<()> {
    let json = serde_json::to_string_pretty(summaries).context("failed to serialize summaries")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write summary: {}", path.display()))
}
