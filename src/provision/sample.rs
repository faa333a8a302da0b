//! Sample datasource items.
use super::Context;
use crate::error::ProvisionError;
use crate::model::{ComponentDefinition, CreatedResource};
use crate::naming::{sanitize_item_name, title_case_with_spacing};
use crate::resources::ContentItem;

/// Number of sample items created for each child component.
pub const SAMPLE_ITEM_COUNT: usize = 3;

/// Base name for sample items of `component`.
///
/// The sample value of the first `title` or `name` field that has one, or
/// `<Title Cased Name> Sample`.
#[must_use]
pub fn base_name(component: &ComponentDefinition) -> String {
    component
        .fields
        .iter()
        .filter(|f| f.is_title_like())
        .find_map(|f| f.sample())
        .map_or_else(
            || format!("{} Sample", title_case_with_spacing(&component.component_name)),
            str::to_string,
        )
}

/// Create [`SAMPLE_ITEM_COUNT`] numbered sample items for a child component.
///
/// Nothing is created when no field carries sample data.
///
/// # Errors
///
/// Returns the first create failure.
pub fn create_numbered(
    ctx: &Context,
    component: &ComponentDefinition,
    data_folder_id: &str,
    template_id: &str,
) -> Result<Vec<CreatedResource>, ProvisionError> {
    if !component.has_sample_data() {
        return Ok(Vec::new());
    }
    let base = base_name(component);
    (1..=SAMPLE_ITEM_COUNT)
        .map(|n| {
            let name = sanitize_item_name(&format!("{base} {n}"));
            ctx.create(&ContentItem::sample(
                name,
                data_folder_id,
                template_id,
                &component.fields,
            ))
        })
        .collect()
}

/// Create the single, unnumbered sample item for a top-level component.
///
/// # Errors
///
/// Returns the create failure, if any.
pub fn create_single(
    ctx: &Context,
    component: &ComponentDefinition,
    data_folder_id: &str,
    template_id: &str,
) -> Result<Option<CreatedResource>, ProvisionError> {
    if !component.has_sample_data() {
        return Ok(None);
    }
    let name = sanitize_item_name(&base_name(component));
    ctx.create(&ContentItem::sample(
        name,
        data_folder_id,
        template_id,
        &component.fields,
    ))
    .map(Some)
}
