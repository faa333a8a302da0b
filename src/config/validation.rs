//! Non-fatal checks run over loaded definitions.
use std::collections::HashMap;

use crate::model::ComponentDefinition;

/// A validation warning detected while checking definitions.
///
/// Warnings never stop a run; they point at definitions that will produce
/// surprising remote items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Name of the validator that raised the warning.
    pub source: String,
    /// The component (or `parent/child` path) that triggered the warning.
    pub item: String,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    /// Warning from validator `source` about `item`.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        item: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            item: item.into(),
            message: message.into(),
        }
    }
}

/// Trait for definition validators.
pub trait DefinitionValidator {
    /// Validate the definitions and return any warnings found.
    fn validate(&self, definitions: &[ComponentDefinition]) -> Vec<ValidationWarning>;

    /// Return a human-readable name for this validator.
    fn name(&self) -> &'static str;
}

/// Flags component names used more than once across the whole tree.
///
/// Duplicates do not fail remotely (siblings may share names) but make the
/// Page Data records ambiguous.
#[derive(Debug)]
pub struct DuplicateNameValidator;

impl DefinitionValidator for DuplicateNameValidator {
    fn validate(&self, definitions: &[ComponentDefinition]) -> Vec<ValidationWarning> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for definition in definitions {
            *counts.entry(&definition.component_name).or_default() += 1;
            for child in &definition.children {
                *counts.entry(&child.component_name).or_default() += 1;
            }
        }
        let mut duplicates: Vec<_> = counts.into_iter().filter(|&(_, n)| n > 1).collect();
        duplicates.sort_unstable();
        duplicates
            .into_iter()
            .map(|(name, n)| {
                ValidationWarning::new(
                    self.name(),
                    name,
                    format!("component name is used {n} times"),
                )
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "names"
    }
}

/// Flags multilist fields that will not receive a `Source`.
#[derive(Debug)]
pub struct MultilistSourceValidator;

impl MultilistSourceValidator {
    fn check(
        &self,
        definition: &ComponentDefinition,
        item: &str,
        available: usize,
        warnings: &mut Vec<ValidationWarning>,
    ) {
        let wanted = definition.multilist_field_count();
        if wanted > available {
            warnings.push(ValidationWarning::new(
                self.name(),
                item,
                format!(
                    "{wanted} multilist field(s) but only {available} source(s); \
                     the remaining fields get an empty Source"
                ),
            ));
        }
    }
}

impl DefinitionValidator for MultilistSourceValidator {
    fn validate(&self, definitions: &[ComponentDefinition]) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        for definition in definitions {
            let available = definition.multilist_source_ids.len() + definition.children.len();
            self.check(definition, &definition.component_name, available, &mut warnings);
            for child in &definition.children {
                let item = format!("{}/{}", definition.component_name, child.component_name);
                self.check(child, &item, child.multilist_source_ids.len(), &mut warnings);
            }
        }
        warnings
    }

    fn name(&self) -> &'static str {
        "multilist"
    }
}

/// Flags children that declare children of their own.
///
/// Only one level of nesting is provisioned; anything deeper is ignored.
#[derive(Debug)]
pub struct NestingDepthValidator;

impl DefinitionValidator for NestingDepthValidator {
    fn validate(&self, definitions: &[ComponentDefinition]) -> Vec<ValidationWarning> {
        definitions
            .iter()
            .flat_map(|definition| {
                definition
                    .children
                    .iter()
                    .filter(|child| child.has_children())
                    .map(move |child| {
                        ValidationWarning::new(
                            self.name(),
                            format!("{}/{}", definition.component_name, child.component_name),
                            format!(
                                "{} nested component(s) will not be provisioned",
                                child.children.len()
                            ),
                        )
                    })
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "nesting"
    }
}

/// Flags components without a front-end component name for the rendering.
#[derive(Debug)]
pub struct RenderingNameValidator;

impl DefinitionValidator for RenderingNameValidator {
    fn validate(&self, definitions: &[ComponentDefinition]) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        for definition in definitions {
            for component in std::iter::once(definition).chain(&definition.children) {
                if component.external_component_name.trim().is_empty() {
                    warnings.push(ValidationWarning::new(
                        self.name(),
                        &component.component_name,
                        "externalComponentName is empty; the rendering will not bind",
                    ));
                }
            }
        }
        warnings
    }

    fn name(&self) -> &'static str {
        "renderings"
    }
}

/// Run every validator over `definitions`.
#[must_use]
pub fn validate_all(definitions: &[ComponentDefinition]) -> Vec<ValidationWarning> {
    let validators: [&dyn DefinitionValidator; 4] = [
        &DuplicateNameValidator,
        &MultilistSourceValidator,
        &NestingDepthValidator,
        &RenderingNameValidator,
    ];
    validators
        .iter()
        .flat_map(|v| v.validate(definitions))
        .collect()
}
