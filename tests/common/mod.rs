// Shared helpers for integration tests.
//
// Provides resolved settings with recognisable parent ids, a client that
// records every request on top of the offline client, and a log that keeps
// what the provisioner reports.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use sitecore_provision::config::{Settings, definitions};
use sitecore_provision::error::RemoteError;
use sitecore_provision::logging::{Log, TaskStatus};
use sitecore_provision::model::{ComponentDefinition, CreatedResource};
use sitecore_provision::remote::{CreateItemRequest, DryRunClient, ItemClient};

pub const TEMPLATES_ROOT: &str = "{11111111-1111-1111-1111-111111111111}";
pub const RENDERINGS_ROOT: &str = "{22222222-2222-2222-2222-222222222222}";
pub const DATA_FOLDERS_ROOT: &str = "{33333333-3333-3333-3333-333333333333}";
pub const PAGE_DATA_ROOT: &str = "{44444444-4444-4444-4444-444444444444}";
pub const PAGE_DATA_TEMPLATE: &str = "{55555555-5555-5555-5555-555555555555}";

/// A grid with one child card and a plain footer.
///
/// Uses the key names written by the design export.
pub const PROMO_PAGE: &str = r#"[
    {
        "componentName": "PromoGrid",
        "nextJsComponentName": "PromoGrid",
        "fields": [
            { "name": "heading", "type": "Single-Line Text", "displayName": "Heading", "sampleData": "Deals" },
            { "name": "cards", "type": "Multilist", "displayName": "Cards" }
        ],
        "child": [
            {
                "componentName": "PromoCard",
                "nextJsComponentName": "PromoCard",
                "fields": [
                    { "name": "title", "type": "Single-Line Text", "displayName": "Title", "sampleData": "Card" }
                ]
            }
        ]
    },
    {
        "componentName": "Footer",
        "nextJsComponentName": "Footer",
        "fields": [
            { "name": "copyright", "type": "Single-Line Text", "displayName": "Copyright" }
        ]
    }
]"#;

/// Environment lookup holding only the required parent and template ids.
pub fn env(key: &str) -> Option<String> {
    let value = match key {
        "TEMPLATE_PARENT_ID" => TEMPLATES_ROOT,
        "RENDERING_PARENT_ID" => RENDERINGS_ROOT,
        "DATA_FOLDER_PARENT_ID" => DATA_FOLDERS_ROOT,
        "PAGE_SAMPLE_DATA_PARENT_ID" => PAGE_DATA_ROOT,
        "PAGE_SAMPLE_DATA_ITEM_TEMPLATE_ID" => PAGE_DATA_TEMPLATE,
        _ => return None,
    };
    Some(value.to_string())
}

/// Dry-run settings resolved from [`env`].
pub fn settings() -> Arc<Settings> {
    Arc::new(Settings::resolve(None, &env, false).expect("resolve settings"))
}

/// Parse an inline definitions document.
pub fn definitions(json: &str) -> Vec<ComponentDefinition> {
    definitions::parse("inline", json).expect("parse definitions")
}

/// Replace the configured root ids in `path` with readable labels.
pub fn label_roots(path: &str) -> String {
    path.replace(TEMPLATES_ROOT, "<templates>")
        .replace(RENDERINGS_ROOT, "<renderings>")
        .replace(DATA_FOLDERS_ROOT, "<data-folders>")
        .replace(PAGE_DATA_ROOT, "<page-data>")
}

/// [`ItemClient`] that records every request and answers like the offline
/// client, optionally failing on the n-th call (1-based).
#[derive(Debug, Default)]
pub struct RecordingClient {
    inner: DryRunClient,
    requests: Mutex<Vec<CreateItemRequest>>,
    fail_on: Option<usize>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on: Some(call),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<CreateItemRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl ItemClient for RecordingClient {
    fn create_item(&self, request: &CreateItemRequest) -> Result<CreatedResource, RemoteError> {
        let call = {
            let mut requests = self.requests.lock().expect("requests lock");
            requests.push(request.clone());
            requests.len()
        };
        if self.fail_on == Some(call) {
            return Err(RemoteError::Status {
                status: 500,
                body: "boom".to_string(),
            });
        }
        self.inner.create_item(request)
    }
}

/// [`Log`] that prints nothing and keeps tasks and warnings.
#[derive(Debug, Default)]
pub struct RecordingLog {
    tasks: Mutex<Vec<(String, TaskStatus)>>,
    warnings: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingLog {
    pub fn tasks(&self) -> Vec<(String, TaskStatus)> {
        self.tasks.lock().expect("tasks lock").clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().expect("warnings lock").clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("errors lock").clone()
    }
}

impl Log for RecordingLog {
    fn stage(&self, _msg: &str) {}
    fn info(&self, _msg: &str) {}
    fn debug(&self, _msg: &str) {}
    fn warn(&self, msg: &str) {
        self.warnings.lock().expect("warnings lock").push(msg.to_string());
    }
    fn error(&self, msg: &str) {
        self.errors.lock().expect("errors lock").push(msg.to_string());
    }
    fn dry_run(&self, _msg: &str) {}
    fn record_task(&self, name: &str, status: TaskStatus, _message: Option<&str>) {
        self.tasks
            .lock()
            .expect("tasks lock")
            .push((name.to_string(), status));
    }
}
