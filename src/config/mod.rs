//! Run settings and definition loading.
//!
//! [`Settings`] is built once at startup from an optional TOML file overlaid
//! by environment variables, validated, and then passed by reference into the
//! provisioner.  Nothing reads the environment after that point.
pub mod definitions;
pub mod validation;

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::naming::format_identifier;

/// Built-in template of template items.
pub const DEFAULT_TEMPLATE_TEMPLATE_ID: &str = "{AB86861A-6030-46C5-B394-E8F99E8B87DB}";
/// Built-in template of template section items.
pub const DEFAULT_SECTION_TEMPLATE_ID: &str = "{E269FBB5-3750-427A-9149-7AA950B49301}";
/// Built-in template of template field items.
pub const DEFAULT_FIELD_TEMPLATE_ID: &str = "{455A3E98-A627-4B40-8035-E683A0331AC7}";
/// Built-in template of JSON rendering items.
pub const DEFAULT_RENDERING_TEMPLATE_ID: &str = "{04646A89-996F-4EE7-878A-FFDBF1F0EF0D}";
/// Built-in template of template folder items.
pub const DEFAULT_FOLDER_TEMPLATE_ID: &str = "{0437FEE2-44C9-46A6-ABE9-28858D9FEE8C}";
/// Contents resolver attached to every rendering.
pub const DEFAULT_RENDERING_CONTENTS_RESOLVER_ID: &str = "{3DF775BF-3F56-446F-9D81-43DE64DA4DDA}";
/// Page template recorded in the Page Data item.
pub const DEFAULT_PAGE_TEMPLATE_ID: &str = "{807349B6-97BB-4A7A-B356-3900EBF2A629}";
/// Page name recorded in the Page Data item.
pub const DEFAULT_PAGE_NAME: &str = "Figma To Sitecore Demo";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DATABASE: &str = "master";
const DEFAULT_LANGUAGE: &str = "en";

/// Fully resolved settings for one provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Remote endpoint and request defaults.
    pub remote: RemoteSettings,
    /// Containers new items are created under.
    pub parents: ParentIds,
    /// Template identifiers selecting each item kind.
    pub template_ids: TemplateKindIds,
    /// Values written to the aggregate Page Data item.
    pub page_data: PageDataSettings,
}

/// Connection settings for the authoring API.
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteSettings {
    /// GraphQL endpoint URL. Empty in dry-run mode when not configured.
    pub endpoint: String,
    /// Bearer token. Empty in dry-run mode when not configured.
    pub token: String,
    /// Disable TLS certificate verification (non-production endpoints only).
    pub skip_tls_verify: bool,
    /// Overall timeout for a single create call.
    pub timeout: Duration,
    /// Target database of every create call.
    pub database: String,
    /// Language of every created item version.
    pub language: String,
}

impl std::fmt::Debug for RemoteSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteSettings")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("skip_tls_verify", &self.skip_tls_verify)
            .field("timeout", &self.timeout)
            .field("database", &self.database)
            .field("language", &self.language)
            .finish()
    }
}

/// Default parent containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentIds {
    /// Root for templates, template folders and data folder templates.
    pub templates: String,
    /// Root for renderings and rendering folders.
    pub renderings: String,
    /// Root for data folder items.
    pub data_folders: String,
    /// Parent of the aggregate Page Data item.
    pub page_data: String,
}

/// Template identifiers that select the kind of item being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateKindIds {
    /// Template items (and data folder templates).
    pub template: String,
    /// Template section items.
    pub section: String,
    /// Template field items.
    pub field: String,
    /// Rendering items.
    pub rendering: String,
    /// Template folder items.
    pub folder: String,
    /// Template of the aggregate Page Data item.
    pub page_data: String,
    /// Contents resolver referenced by every rendering.
    pub rendering_contents_resolver: String,
}

/// Values written to the aggregate Page Data item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDataSettings {
    /// `Page Name` field value.
    pub page_name: String,
    /// `Page Template` field value.
    pub page_template: String,
}

// ---------------------------------------------------------------------------
// File schema
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    remote: FileRemote,
    parents: FileParents,
    template_ids: FileTemplateIds,
    page_data: FilePageData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileRemote {
    endpoint: Option<String>,
    token: Option<String>,
    skip_tls_verify: Option<bool>,
    timeout_secs: Option<u64>,
    database: Option<String>,
    language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileParents {
    templates: Option<String>,
    renderings: Option<String>,
    data_folders: Option<String>,
    page_data: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileTemplateIds {
    template: Option<String>,
    section: Option<String>,
    field: Option<String>,
    rendering: Option<String>,
    folder: Option<String>,
    page_data: Option<String>,
    rendering_contents_resolver: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FilePageData {
    page_name: Option<String>,
    page_template: Option<String>,
}

/// Read the TOML settings file, or an empty schema when `path` is `None`.
fn load_file(path: Option<&Path>) -> Result<FileSettings, ConfigError> {
    let Some(path) = path else {
        return Ok(FileSettings::default());
    };
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Overlay of the environment on top of file values.
struct Resolver<'a> {
    env: &'a dyn Fn(&str) -> Option<String>,
}

impl Resolver<'_> {
    /// Environment wins over the file; blank values count as unset.
    fn value(&self, env: &str, file: Option<String>) -> Option<String> {
        (self.env)(env)
            .filter(|v| !v.trim().is_empty())
            .or(file)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(
        &self,
        key: &'static str,
        env: &'static str,
        file: Option<String>,
    ) -> Result<String, ConfigError> {
        self.value(env, file)
            .ok_or(ConfigError::MissingSetting { key, env })
    }

    fn identifier(
        &self,
        key: &'static str,
        env: &'static str,
        file: Option<String>,
    ) -> Result<String, ConfigError> {
        let raw = self.required(key, env, file)?;
        canonical_identifier(key, &raw)
    }

    fn identifier_or(
        &self,
        key: &'static str,
        env: &'static str,
        file: Option<String>,
        default: &str,
    ) -> Result<String, ConfigError> {
        let raw = self.value(env, file).unwrap_or_else(|| default.to_string());
        canonical_identifier(key, &raw)
    }

    fn flag(
        &self,
        key: &'static str,
        env: &'static str,
        file: Option<bool>,
    ) -> Result<bool, ConfigError> {
        match (self.env)(env).map(|v| v.trim().to_ascii_lowercase()) {
            None => Ok(file.unwrap_or(false)),
            Some(v) if v.is_empty() => Ok(file.unwrap_or(false)),
            Some(v) if v == "true" || v == "1" => Ok(true),
            Some(v) if v == "false" || v == "0" => Ok(false),
            Some(v) => Err(ConfigError::InvalidSetting {
                key,
                reason: format!("expected true or false, got '{v}'"),
            }),
        }
    }
}

fn canonical_identifier(key: &'static str, raw: &str) -> Result<String, ConfigError> {
    format_identifier(raw).map_err(|e| ConfigError::InvalidSetting {
        key,
        reason: e.to_string(),
    })
}

impl Settings {
    /// Resolve settings from an optional TOML file and an environment lookup.
    ///
    /// `require_remote` is `false` only for dry runs, where no request is
    /// ever sent and the endpoint and token may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, if a
    /// required setting is absent, or if a setting value is malformed.
    pub fn resolve(
        file: Option<&Path>,
        env: &dyn Fn(&str) -> Option<String>,
        require_remote: bool,
    ) -> Result<Self, ConfigError> {
        let file = load_file(file)?;
        let r = Resolver { env };

        let (endpoint, token) = if require_remote {
            let endpoint = r.required(
                "remote.endpoint",
                "SITECORE_AUTHORING_API_GRAPHQL_ENDPOINT",
                file.remote.endpoint,
            )?;
            if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
                return Err(ConfigError::InvalidSetting {
                    key: "remote.endpoint",
                    reason: format!("'{endpoint}' is not an http(s) URL"),
                });
            }
            let token = r.required(
                "remote.token",
                "SITECORE_AUTHORING_API_TOKEN",
                file.remote.token,
            )?;
            (endpoint, token)
        } else {
            (
                r.value("SITECORE_AUTHORING_API_GRAPHQL_ENDPOINT", file.remote.endpoint)
                    .unwrap_or_default(),
                r.value("SITECORE_AUTHORING_API_TOKEN", file.remote.token)
                    .unwrap_or_default(),
            )
        };

        let timeout_secs = match r.value("SITECORE_AUTHORING_API_TIMEOUT_SECS", None) {
            Some(v) => v.parse::<u64>().map_err(|e| ConfigError::InvalidSetting {
                key: "remote.timeout_secs",
                reason: e.to_string(),
            })?,
            None => file.remote.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                key: "remote.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }

        let remote = RemoteSettings {
            endpoint,
            token,
            skip_tls_verify: r.flag(
                "remote.skip_tls_verify",
                "SKIP_TLS_VERIFY",
                file.remote.skip_tls_verify,
            )?,
            timeout: Duration::from_secs(timeout_secs),
            database: r
                .value("SITECORE_DATABASE", file.remote.database)
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            language: r
                .value("SITECORE_LANGUAGE", file.remote.language)
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        };

        let parents = ParentIds {
            templates: r.identifier(
                "parents.templates",
                "TEMPLATE_PARENT_ID",
                file.parents.templates,
            )?,
            renderings: r.identifier(
                "parents.renderings",
                "RENDERING_PARENT_ID",
                file.parents.renderings,
            )?,
            data_folders: r.identifier(
                "parents.data_folders",
                "DATA_FOLDER_PARENT_ID",
                file.parents.data_folders,
            )?,
            page_data: r.identifier(
                "parents.page_data",
                "PAGE_SAMPLE_DATA_PARENT_ID",
                file.parents.page_data,
            )?,
        };

        let ids = file.template_ids;
        let template_ids = TemplateKindIds {
            template: r.identifier_or(
                "template_ids.template",
                "TEMPLATE_TEMPLATE_ID",
                ids.template,
                DEFAULT_TEMPLATE_TEMPLATE_ID,
            )?,
            section: r.identifier_or(
                "template_ids.section",
                "SECTION_TEMPLATE_ID",
                ids.section,
                DEFAULT_SECTION_TEMPLATE_ID,
            )?,
            field: r.identifier_or(
                "template_ids.field",
                "FIELD_TEMPLATE_ID",
                ids.field,
                DEFAULT_FIELD_TEMPLATE_ID,
            )?,
            rendering: r.identifier_or(
                "template_ids.rendering",
                "RENDERING_TEMPLATE_ID",
                ids.rendering,
                DEFAULT_RENDERING_TEMPLATE_ID,
            )?,
            folder: r.identifier_or(
                "template_ids.folder",
                "TEMPLATE_FOLDER_ID",
                ids.folder,
                DEFAULT_FOLDER_TEMPLATE_ID,
            )?,
            page_data: r.identifier(
                "template_ids.page_data",
                "PAGE_SAMPLE_DATA_ITEM_TEMPLATE_ID",
                ids.page_data,
            )?,
            rendering_contents_resolver: r.identifier_or(
                "template_ids.rendering_contents_resolver",
                "RENDERING_CONTENTS_RESOLVER_ID",
                ids.rendering_contents_resolver,
                DEFAULT_RENDERING_CONTENTS_RESOLVER_ID,
            )?,
        };

        let page_data = PageDataSettings {
            page_name: r
                .value("PAGE_DATA_PAGE_NAME", file.page_data.page_name)
                .unwrap_or_else(|| DEFAULT_PAGE_NAME.to_string()),
            page_template: r.identifier_or(
                "page_data.page_template",
                "PAGE_DATA_PAGE_TEMPLATE_ID",
                file.page_data.page_template,
                DEFAULT_PAGE_TEMPLATE_ID,
            )?,
        };

        Ok(Self {
            remote,
            parents,
            template_ids,
            page_data,
        })
    }

    /// Resolve settings against the process environment.
    ///
    /// # Errors
    ///
    /// See [`Settings::resolve`].
    pub fn from_process_env(file: Option<&Path>, require_remote: bool) -> Result<Self, ConfigError> {
        Self::resolve(file, &|key: &str| std::env::var(key).ok(), require_remote)
    }
}
