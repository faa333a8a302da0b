//! Loading the component definition file.
use std::path::{Path, PathBuf};

use crate::error::InputError;
use crate::model::ComponentDefinition;
use crate::naming::format_identifier;

/// File name looked up inside the extracted design directory.
pub const DEFINITIONS_FILE_NAME: &str = "sitecore-template.json";

/// Resolve `path` to the definitions file.
///
/// A directory resolves to `<dir>/sitecore-template.json`; any other path is
/// taken as the file itself.
#[must_use]
pub fn definitions_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DEFINITIONS_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// Load and check the definitions found at `path`.
///
/// # Errors
///
/// Returns [`InputError`] if the file is missing or unreadable, is not a JSON
/// array of definitions, or contains a blank name or a malformed multilist
/// source id.
pub fn load(path: &Path) -> Result<Vec<ComponentDefinition>, InputError> {
    let file = definitions_path(path);
    if !file.exists() {
        return Err(InputError::NotFound {
            path: file.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(&file).map_err(|source| InputError::Io {
        path: file.display().to_string(),
        source,
    })?;
    parse(&file.display().to_string(), &content)
}

/// Parse and check a definitions document.
///
/// `label` names the document in error messages.
///
/// # Errors
///
/// Returns [`InputError::Malformed`] if `content` is not a JSON array of
/// definitions, or [`InputError::InvalidDefinition`] for blank names.
pub fn parse(label: &str, content: &str) -> Result<Vec<ComponentDefinition>, InputError> {
    let definitions: Vec<ComponentDefinition> =
        serde_json::from_str(content).map_err(|source| InputError::Malformed {
            path: label.to_string(),
            source,
        })?;
    check_all(&definitions)?;
    Ok(definitions)
}

/// Check definitions that did not come through [`parse`].
///
/// # Errors
///
/// Returns [`InputError::InvalidDefinition`] for blank names and
/// [`InputError::Identifier`] for a malformed multilist source id.
pub fn check_all(definitions: &[ComponentDefinition]) -> Result<(), InputError> {
    for (i, definition) in definitions.iter().enumerate() {
        check(definition, &format!("[{i}]"))?;
    }
    Ok(())
}

fn check(definition: &ComponentDefinition, location: &str) -> Result<(), InputError> {
    if definition.component_name.trim().is_empty() {
        return Err(InputError::InvalidDefinition {
            location: location.to_string(),
            reason: "componentName is blank".to_string(),
        });
    }
    if let Some(pos) = definition.fields.iter().position(|f| f.name.trim().is_empty()) {
        return Err(InputError::InvalidDefinition {
            location: format!("{location}.fields[{pos}]"),
            reason: format!("field name is blank in '{}'", definition.component_name),
        });
    }
    for id in &definition.multilist_source_ids {
        format_identifier(id)?;
    }
    for (i, child) in definition.children.iter().enumerate() {
        check(child, &format!("{location}.children[{i}]"))?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "componentName": "HeroBanner",
            "nextJsComponentName": "HeroBanner",
            "fields": [
                { "name": "title", "type": "Single-Line Text", "displayName": "Title", "sampleData": "Welcome" }
            ]
        }
    ]"#;

    #[test]
    fn loads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFINITIONS_FILE_NAME), SAMPLE).unwrap();
        let defs = load(dir.path()).unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].component_name, "HeroBanner");
    }

    #[test]
    fn loads_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(load(&path).unwrap().len(), 1);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, InputError::NotFound { .. }));
        assert!(err.to_string().contains(DEFINITIONS_FILE_NAME));
    }

    #[test]
    fn non_array_is_malformed() {
        let err = parse("inline", r#"{ "componentName": "Hero" }"#).unwrap_err();
        assert!(matches!(err, InputError::Malformed { .. }));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = parse("inline", "[ { ").unwrap_err();
        assert!(matches!(err, InputError::Malformed { .. }));
    }

    #[test]
    fn empty_array_is_accepted() {
        assert!(parse("inline", "[]").unwrap().is_empty());
    }

    #[test]
    fn blank_child_name_reports_location() {
        let err = parse(
            "inline",
            r#"[ { "componentName": "Grid", "child": [ { "componentName": "Card" }, { "componentName": " " } ] } ]"#,
        )
        .unwrap_err();
        assert!(
            matches!(&err, InputError::InvalidDefinition { location, .. } if location == "[0].children[1]"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn malformed_source_id_is_rejected_up_front() {
        let err = parse(
            "inline",
            r#"[ { "componentName": "Grid", "multiListSourceIds": ["{1234}"] } ]"#,
        )
        .unwrap_err();
        assert!(matches!(err, InputError::Identifier(_)), "unexpected error: {err}");
    }

    #[test]
    fn blank_field_name_is_rejected() {
        let err = parse(
            "inline",
            r#"[ { "componentName": "Grid", "fields": [ { "name": "", "type": "Multilist" } ] } ]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("[0].fields[0]"));
    }
}
