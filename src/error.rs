//! Domain-specific error types for the provisioning engine.
//!
//! Internal modules return typed errors built with [`thiserror`]; command
//! handlers at the CLI boundary convert them to [`anyhow::Error`] via the
//! standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! ProvisionError
//! ├── InvalidInput(InputError)          : definitions file, identifiers
//! ├── RemoteCreateFailed { item, .. }   : any single create call (RemoteError)
//! └── MissingConfiguration(ConfigError) : endpoint, token, fixed ids
//! ```
//!
//! Every variant is terminal for a run: nothing is retried and nothing that
//! was already created is rolled back.

use thiserror::Error;

/// Top-level error type for a provisioning run.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// The definitions or an identifier reaching the formatter are malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// A single create call failed; the run stops at this point.
    #[error("Failed to create {item}: {source}")]
    RemoteCreateFailed {
        /// Description of the item being created (kind and name).
        item: String,
        /// Underlying client error.
        source: RemoteError,
    },

    /// Required configuration is absent or malformed.
    #[error("Missing configuration: {0}")]
    MissingConfiguration(#[from] ConfigError),
}

impl From<IdentifierError> for ProvisionError {
    fn from(err: IdentifierError) -> Self {
        Self::InvalidInput(InputError::Identifier(err))
    }
}

/// Errors raised while reading or interpreting the component definitions.
#[derive(Error, Debug)]
pub enum InputError {
    /// The definitions file does not exist.
    #[error("definitions file not found: {path}")]
    NotFound {
        /// Path that was looked up.
        path: String,
    },

    /// The definitions file could not be read.
    #[error("IO error reading definitions file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The definitions file is not a JSON array of component definitions.
    #[error("malformed definitions in {path}: {source}")]
    Malformed {
        /// Path (or label) of the offending document.
        path: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A definition is structurally unusable (e.g. blank names).
    #[error("invalid definition at {location}: {reason}")]
    InvalidDefinition {
        /// Position of the definition, e.g. `[0].children[1]`.
        location: String,
        /// Human-readable reason.
        reason: String,
    },

    /// An identifier could not be formatted.
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
}

/// Errors raised by the identifier formatter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The input does not reduce to exactly 32 hexadecimal digits.
    #[error("InvalidIdentifierFormat: expected 32 hex characters, got {found}")]
    InvalidFormat {
        /// Number of hex digits left after stripping separators.
        found: usize,
    },
}

/// Errors that arise while resolving settings at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required setting has no value in the config file or environment.
    #[error("required setting '{key}' is not set (environment variable {env})")]
    MissingSetting {
        /// Dotted key in the TOML config file.
        key: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },

    /// A setting has a value that cannot be used.
    #[error("invalid value for setting '{key}': {reason}")]
    InvalidSetting {
        /// Dotted key in the TOML config file.
        key: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// The config file could not be read.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the settings schema.
    #[error("invalid TOML in {path}: {source}")]
    Parse {
        /// Path to the file that could not be parsed.
        path: String,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Errors reported by a remote item client for a single create call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The request could not be delivered or the response could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as received.
        body: String,
    },

    /// The endpoint answered with a structured error list.
    #[error("GraphQL errors: {0}")]
    Graphql(String),

    /// The response did not contain a created item.
    #[error("invalid GraphQL response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io;

    // -----------------------------------------------------------------------
    // ProvisionError
    // -----------------------------------------------------------------------

    #[test]
    fn remote_create_failed_display_names_item_and_cause() {
        let e = ProvisionError::RemoteCreateFailed {
            item: "template 'Hero'".to_string(),
            source: RemoteError::Status {
                status: 401,
                body: "unauthorized".to_string(),
            },
        };
        assert_eq!(
            e.to_string(),
            "Failed to create template 'Hero': HTTP 401: unauthorized"
        );
    }

    #[test]
    fn remote_create_failed_has_source() {
        use std::error::Error as StdError;
        let e = ProvisionError::RemoteCreateFailed {
            item: "section 'Data'".to_string(),
            source: RemoteError::Transport("connection refused".to_string()),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn identifier_error_converts_to_invalid_input() {
        let e: ProvisionError = IdentifierError::InvalidFormat { found: 3 }.into();
        assert!(matches!(
            e,
            ProvisionError::InvalidInput(InputError::Identifier(_))
        ));
        assert!(e.to_string().contains("InvalidIdentifierFormat"));
    }

    #[test]
    fn config_error_converts_to_missing_configuration() {
        let e: ProvisionError = ConfigError::MissingSetting {
            key: "remote.token",
            env: "SITECORE_AUTHORING_API_TOKEN",
        }
        .into();
        assert!(e.to_string().starts_with("Missing configuration"));
        assert!(e.to_string().contains("SITECORE_AUTHORING_API_TOKEN"));
    }

    // -----------------------------------------------------------------------
    // InputError
    // -----------------------------------------------------------------------

    #[test]
    fn input_error_not_found_display() {
        let e = InputError::NotFound {
            path: "/tmp/x/sitecore-template.json".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "definitions file not found: /tmp/x/sitecore-template.json"
        );
    }

    #[test]
    fn input_error_io_has_source() {
        use std::error::Error as StdError;
        let e = InputError::Io {
            path: "defs.json".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn invalid_format_display() {
        let e = IdentifierError::InvalidFormat { found: 31 };
        assert_eq!(
            e.to_string(),
            "InvalidIdentifierFormat: expected 32 hex characters, got 31"
        );
    }

    // -----------------------------------------------------------------------
    // ConfigError / RemoteError
    // -----------------------------------------------------------------------

    #[test]
    fn invalid_setting_display() {
        let e = ConfigError::InvalidSetting {
            key: "parents.templates",
            reason: "not an identifier".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid value for setting 'parents.templates': not an identifier"
        );
    }

    #[test]
    fn graphql_error_display() {
        let e = RemoteError::Graphql(r#"[{"message":"denied"}]"#.to_string());
        assert_eq!(e.to_string(), r#"GraphQL errors: [{"message":"denied"}]"#);
    }

    // -----------------------------------------------------------------------
    // Send + Sync bounds
    // -----------------------------------------------------------------------

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<ProvisionError>();
        assert_send_sync::<InputError>();
        assert_send_sync::<IdentifierError>();
        assert_send_sync::<ConfigError>();
        assert_send_sync::<RemoteError>();
    }

    #[test]
    fn provision_error_converts_to_anyhow() {
        let e = ProvisionError::from(IdentifierError::InvalidFormat { found: 0 });
        let _anyhow_err: anyhow::Error = e.into();
    }
}
