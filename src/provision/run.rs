//! Whole-run aggregation and the Page Data item.
use super::Context;
use super::component::provision_component;
use crate::error::{ProvisionError, RemoteError};
use crate::logging::TaskStatus;
use crate::model::{ComponentDefinition, CreatedResource, CreationSummary, PageDataRecord};
use crate::resources::{ContentItem, Creatable as _};

/// Provision `definitions` in order, then write the Page Data item.
///
/// Stops at the first failure; components after it are recorded as skipped
/// and the Page Data item is not created.
///
/// # Errors
///
/// Returns the first [`ProvisionError`] raised by any component or by the
/// Page Data item.
pub fn run(
    ctx: &Context,
    definitions: &[ComponentDefinition],
) -> Result<Vec<CreationSummary>, ProvisionError> {
    let mut summaries = Vec::with_capacity(definitions.len());
    let mut records = Vec::with_capacity(definitions.len());

    for (i, definition) in definitions.iter().enumerate() {
        let name = &definition.component_name;
        ctx.log.stage(&format!("Provisioning {name}"));
        match provision_component(ctx, definition) {
            Ok(summary) => {
                let status = if ctx.dry_run {
                    TaskStatus::DryRun
                } else {
                    TaskStatus::Ok
                };
                ctx.log.record_task(name, status, None);
                records.push(PageDataRecord::from(&summary));
                summaries.push(summary);
            }
            Err(e) => {
                ctx.log.record_task(name, TaskStatus::Failed, Some(&e.to_string()));
                for rest in definitions.iter().skip(i + 1) {
                    ctx.log.record_task(
                        &rest.component_name,
                        TaskStatus::Skipped,
                        Some("earlier component failed"),
                    );
                }
                return Err(e);
            }
        }
    }

    ctx.log.stage("Writing page data");
    let page_data = create_page_data(ctx, &records)?;
    ctx.log.info(&format!(
        "page data item {} ({} component(s))",
        page_data.id,
        records.len()
    ));
    Ok(summaries)
}

/// Create the aggregate Page Data item embedding `records` as JSON.
///
/// # Errors
///
/// Returns [`ProvisionError::RemoteCreateFailed`] if the records cannot be
/// encoded or the create call fails.
pub fn create_page_data(
    ctx: &Context,
    records: &[PageDataRecord],
) -> Result<CreatedResource, ProvisionError> {
    let json = serde_json::to_string(records).map_err(|e| ProvisionError::RemoteCreateFailed {
        item: ContentItem::page_data(&ctx.settings, String::new()).description(),
        source: RemoteError::Transport(format!("failed to encode components: {e}")),
    })?;
    ctx.create(&ContentItem::page_data(&ctx.settings, json))
}
