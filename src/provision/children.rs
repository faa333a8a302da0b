//! Child components of a parent definition.
use super::Context;
use super::fields::{MultilistSources, create_fields};
use super::sample;
use crate::error::ProvisionError;
use crate::model::{ComponentDefinition, CreationSummary};
use crate::resources::{DataFolderItem, DataFolderTemplate, Rendering, Section, Template};

/// Folders created for a parent that has children.
#[derive(Debug, Clone, Copy)]
pub struct ChildFolders<'a> {
    /// Template folder holding parent and child templates.
    pub templates: &'a str,
    /// Rendering folder holding parent and child renderings.
    pub renderings: &'a str,
}

/// Result of provisioning the children of one definition.
#[derive(Debug, Default)]
pub struct ChildrenOutcome {
    /// Name-only summary per child, in order.
    pub summaries: Vec<CreationSummary>,
    /// Data folder item id per child, in order; the parent's multilist
    /// fields consume these after its declared sources.
    pub source_ids: Vec<String>,
}

/// Provision every child of `parent` inside `folders`.
///
/// Children of children are not provisioned.
///
/// # Errors
///
/// Returns the first create failure or malformed source identifier.
pub fn provision_children(
    ctx: &Context,
    parent: &ComponentDefinition,
    folders: ChildFolders<'_>,
) -> Result<ChildrenOutcome, ProvisionError> {
    let mut outcome = ChildrenOutcome::default();
    for child in &parent.children {
        let name = &child.component_name;
        let _span = tracing::info_span!("child", name = %name).entered();
        ctx.log.info(&format!("child {name}"));
        if child.has_children() {
            ctx.log.warn(&format!(
                "{} nested component(s) under '{name}' are not provisioned",
                child.children.len()
            ));
        }

        let template = ctx.create(&Template::new(name, folders.templates))?;
        let section = ctx.create(&Section::new(&template.id))?;
        let mut sources = MultilistSources::new(&child.multilist_source_ids, &[]);
        create_fields(ctx, child, &section.id, &mut sources)?;

        let folder_template = ctx.create(&DataFolderTemplate::new(name, folders.templates))?;
        let folder = ctx.create(&DataFolderItem::new(
            name,
            &ctx.settings.parents.data_folders,
            &folder_template.id,
            &template.id,
        ))?;
        outcome.source_ids.push(folder.id.clone());

        ctx.create(&Rendering::new(
            name,
            folders.renderings,
            &child.external_component_name,
            &template.path,
        ))?;
        let samples = sample::create_numbered(ctx, child, &folder.id, &template.id)?;
        if !samples.is_empty() {
            ctx.log.debug(&format!("{} sample item(s) for {name}", samples.len()));
        }

        outcome.summaries.push(CreationSummary::named(name));
    }
    Ok(outcome)
}
