//! One top-level definition, children first.
use super::Context;
use super::children::{ChildFolders, ChildrenOutcome, provision_children};
use super::fields::{MultilistSources, create_fields};
use super::sample;
use crate::error::ProvisionError;
use crate::model::{ComponentDefinition, CreatedField, CreationSummary};
use crate::resources::{DataFolderItem, DataFolderTemplate, Folder, Rendering, Section, Template};

/// Provision `definition` and its direct children.
///
/// With children, a template folder and a rendering folder named after the
/// component are created first and hold both the children and the parent.
/// Children are fully created before the parent's fields so that the
/// parent's multilist fields can point at the children's data folders.
///
/// # Errors
///
/// Returns the first create failure or malformed source identifier; nothing
/// created before the failure is removed.
pub fn provision_component(
    ctx: &Context,
    definition: &ComponentDefinition,
) -> Result<CreationSummary, ProvisionError> {
    let name = &definition.component_name;
    let _span = tracing::info_span!("component", name = %name).entered();
    let roots = &ctx.settings.parents;

    let (template_parent, rendering_parent, children) = if definition.has_children() {
        let template_folder = ctx.create(&Folder::new(name, &roots.templates))?;
        let rendering_folder = ctx.create(&Folder::new(name, &roots.renderings))?;
        let children = provision_children(
            ctx,
            definition,
            ChildFolders {
                templates: &template_folder.id,
                renderings: &rendering_folder.id,
            },
        )?;
        (template_folder.id, rendering_folder.id, children)
    } else {
        (
            roots.templates.clone(),
            roots.renderings.clone(),
            ChildrenOutcome::default(),
        )
    };

    let template = ctx.create(&Template::new(name, &template_parent))?;
    let section = ctx.create(&Section::new(&template.id))?;
    let mut sources = MultilistSources::new(&definition.multilist_source_ids, &children.source_ids);
    create_fields(ctx, definition, &section.id, &mut sources)?;

    let folder_template = ctx.create(&DataFolderTemplate::new(name, &template_parent))?;
    let folder = ctx.create(&DataFolderItem::new(
        name,
        &roots.data_folders,
        &folder_template.id,
        &template.id,
    ))?;
    let sample_item = sample::create_single(ctx, definition, &folder.id, &template.id)?;

    let rendering = ctx.create(&Rendering::new(
        name,
        &rendering_parent,
        &definition.external_component_name,
        &template.path,
    ))?;

    Ok(CreationSummary {
        component_name: name.clone(),
        template_id: Some(template.id),
        rendering_id: Some(rendering.id),
        data_folder_id: Some(folder.id),
        created_fields: definition
            .fields
            .iter()
            .map(|f| CreatedField {
                name: f.name.clone(),
            })
            .collect(),
        child_summaries: children.summaries,
        data_source_item_id: sample_item.map(|item| item.id),
    })
}
