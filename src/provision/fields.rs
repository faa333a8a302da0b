//! Field creation and multilist source assignment.
use super::Context;
use crate::error::ProvisionError;
use crate::model::ComponentDefinition;
use crate::naming::format_identifier;
use crate::resources::TemplateField;

/// Ordered queue of multilist sources for one component.
///
/// Declared ids come first, then ids collected from the component's
/// children. Each multilist field takes the next id in turn.
#[derive(Debug)]
pub struct MultilistSources<'a> {
    ids: Vec<&'a str>,
    next: usize,
}

impl<'a> MultilistSources<'a> {
    /// Sources in consumption order: `declared` first, then `collected`.
    #[must_use]
    pub fn new(declared: &'a [String], collected: &'a [String]) -> Self {
        Self {
            ids: declared
                .iter()
                .chain(collected)
                .map(String::as_str)
                .collect(),
            next: 0,
        }
    }

    /// Formatted next source, or `None` once the queue is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::InvalidInput`] if the next id does not reduce
    /// to 32 hex digits.
    pub fn next_source(&mut self) -> Result<Option<String>, ProvisionError> {
        let raw = self.ids.get(self.next).copied();
        self.next += 1;
        raw.map(format_identifier).transpose().map_err(Into::into)
    }
}

/// Create every field of `component` under the section `section_id`.
///
/// Multilist fields get a `Source`; when the queue runs dry the source is
/// left empty and a warning is logged.
///
/// # Errors
///
/// Returns the first create failure or malformed source identifier.
pub fn create_fields(
    ctx: &Context,
    component: &ComponentDefinition,
    section_id: &str,
    sources: &mut MultilistSources<'_>,
) -> Result<(), ProvisionError> {
    for field in &component.fields {
        let mut item = TemplateField::new(field, section_id);
        if field.is_multilist() {
            let source = sources.next_source()?.unwrap_or_else(|| {
                ctx.log.warn(&format!(
                    "no source for multilist field '{}' on '{}', leaving Source empty",
                    field.name, component.component_name
                ));
                String::new()
            });
            item = item.with_source(source);
        }
        ctx.create(&item)?;
    }
    Ok(())
}
