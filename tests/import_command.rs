#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the `import` command.
//!
//! These tests run whole definition trees through the provisioner and check
//! the order and shape of the create calls, the Page Data item, and the
//! output files written by [`commands::import::execute`].

mod common;

use std::sync::Arc;

use common::*;
use sitecore_provision::cli::ImportOpts;
use sitecore_provision::commands;
use sitecore_provision::config::Settings;
use sitecore_provision::logging::{Log, TaskStatus};
use sitecore_provision::model::{CreationSummary, PageDataRecord};
use sitecore_provision::provision::Provisioner;
use sitecore_provision::remote::{ItemClient, RunLogEntry};

fn provisioner(client: &Arc<RecordingClient>, log: &Arc<RecordingLog>) -> Provisioner {
    Provisioner::new(
        settings(),
        Arc::clone(client) as Arc<dyn ItemClient>,
        Arc::clone(log) as Arc<dyn Log>,
    )
}

fn import_opts(dir: &std::path::Path) -> ImportOpts {
    ImportOpts {
        path: dir.to_path_buf(),
        summary_out: Some(dir.join("summary.json")),
        run_log: Some(dir.join("run-log.json")),
    }
}

// ---------------------------------------------------------------------------
// Snapshot: creation order
// ---------------------------------------------------------------------------

/// Every created item, in order, as `kind: path`.
///
/// Any change to the orchestration order shows up here.
#[test]
fn creation_sequence() {
    let client = Arc::new(RecordingClient::new());
    let log = Arc::new(RecordingLog::default());
    let provisioner = provisioner(&client, &log);
    provisioner.run(&definitions(PROMO_PAGE)).unwrap();

    let lines: Vec<String> = provisioner
        .run_log()
        .entries()
        .iter()
        .map(|e| format!("{}: {}", e.kind, label_roots(&e.path)))
        .collect();
    insta::assert_snapshot!("creation_sequence", lines.join("\n"));
}

// ---------------------------------------------------------------------------
// Tree shape
// ---------------------------------------------------------------------------

/// The multilist field on the parent points at the child's data folder.
#[test]
fn multilist_source_is_child_data_folder() {
    let client = Arc::new(RecordingClient::new());
    let log = Arc::new(RecordingLog::default());
    let provisioner = provisioner(&client, &log);
    provisioner.run(&definitions(PROMO_PAGE)).unwrap();

    let entries = provisioner.run_log().entries();
    let child_folder = entries
        .iter()
        .find(|e| e.kind == "data folder" && e.name == "Promo Card")
        .expect("child data folder");
    let cards = client
        .requests()
        .into_iter()
        .find(|r| r.name == "cards")
        .expect("cards field");
    assert_eq!(cards.field("Source"), Some(child_folder.id.as_str()));
    assert!(log.warnings().is_empty(), "{:?}", log.warnings());
}

/// Children live under the parent's folders; data folders live under the
/// configured root.
#[test]
fn children_are_nested_under_parent_folders() {
    let client = Arc::new(RecordingClient::new());
    let log = Arc::new(RecordingLog::default());
    let provisioner = provisioner(&client, &log);
    provisioner.run(&definitions(PROMO_PAGE)).unwrap();

    let entries = provisioner.run_log().entries();
    let find = |kind: &str, name: &str| -> RunLogEntry {
        entries
            .iter()
            .find(|e| e.kind == kind && e.name == name)
            .cloned()
            .expect("created entry")
    };
    let template_folder = entries
        .iter()
        .find(|e| e.kind == "folder" && e.parent == TEMPLATES_ROOT)
        .expect("template folder");
    let rendering_folder = entries
        .iter()
        .find(|e| e.kind == "folder" && e.parent == RENDERINGS_ROOT)
        .expect("rendering folder");

    assert_eq!(find("template", "PromoCard").parent, template_folder.id);
    assert_eq!(find("template", "PromoGrid").parent, template_folder.id);
    assert_eq!(find("rendering", "PromoCard").parent, rendering_folder.id);
    assert_eq!(find("rendering", "PromoGrid").parent, rendering_folder.id);
    assert_eq!(find("data folder", "Promo Card").parent, DATA_FOLDERS_ROOT);
    assert_eq!(find("template", "Footer").parent, TEMPLATES_ROOT);
    assert_eq!(find("rendering", "Footer").parent, RENDERINGS_ROOT);
}

/// The parent template is created only after every child item.
#[test]
fn children_precede_parent_template() {
    let client = Arc::new(RecordingClient::new());
    let log = Arc::new(RecordingLog::default());
    let provisioner = provisioner(&client, &log);
    provisioner.run(&definitions(PROMO_PAGE)).unwrap();

    let entries = provisioner.run_log().entries();
    let parent_template = entries
        .iter()
        .position(|e| e.kind == "template" && e.name == "PromoGrid")
        .unwrap();
    let last_child_item = entries
        .iter()
        .rposition(|e| e.kind == "sample item" && e.name.starts_with("Card "))
        .unwrap();
    assert!(last_child_item < parent_template);
}

// ---------------------------------------------------------------------------
// Summaries and Page Data
// ---------------------------------------------------------------------------

#[test]
fn summaries_follow_definition_order() {
    let client = Arc::new(RecordingClient::new());
    let log = Arc::new(RecordingLog::default());
    let summaries = provisioner(&client, &log)
        .run(&definitions(PROMO_PAGE))
        .unwrap();

    assert_eq!(summaries.len(), 2);
    let grid = &summaries[0];
    assert_eq!(grid.component_name, "PromoGrid");
    assert_eq!(grid.child_summaries, vec![CreationSummary::named("PromoCard")]);
    let fields: Vec<&str> = grid.created_fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, ["heading", "cards"]);
    assert!(grid.data_source_item_id.is_some());

    let footer = &summaries[1];
    assert_eq!(footer.component_name, "Footer");
    assert!(footer.child_summaries.is_empty());
    assert_eq!(footer.data_source_item_id, None);
}

/// The last call writes one Page Data item listing every top-level component.
#[test]
fn page_data_is_written_last() {
    let client = Arc::new(RecordingClient::new());
    let log = Arc::new(RecordingLog::default());
    let summaries = provisioner(&client, &log)
        .run(&definitions(PROMO_PAGE))
        .unwrap();

    let requests = client.requests();
    let page_data = requests.last().expect("page data request");
    assert_eq!(page_data.name, "Page Data");
    assert_eq!(page_data.parent, PAGE_DATA_ROOT);
    assert_eq!(page_data.template_id, PAGE_DATA_TEMPLATE);
    assert_eq!(requests.iter().filter(|r| r.name == "Page Data").count(), 1);

    let records: Vec<PageDataRecord> =
        serde_json::from_str(page_data.field("Components").expect("components")).unwrap();
    let expected: Vec<PageDataRecord> = summaries.iter().map(PageDataRecord::from).collect();
    assert_eq!(records, expected);
}

#[test]
fn empty_definitions_only_write_page_data() {
    let client = Arc::new(RecordingClient::new());
    let log = Arc::new(RecordingLog::default());
    let summaries = provisioner(&client, &log).run(&[]).unwrap();

    assert!(summaries.is_empty());
    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].field("Components"), Some("[]"));
}

// ---------------------------------------------------------------------------
// Failure handling
// ---------------------------------------------------------------------------

/// A failure stops the run; later components are never attempted.
#[test]
fn failure_stops_the_run() {
    let client = Arc::new(RecordingClient::failing_on(5));
    let log = Arc::new(RecordingLog::default());
    let provisioner = provisioner(&client, &log);
    let err = provisioner.run(&definitions(PROMO_PAGE)).unwrap_err();

    assert_eq!(err.to_string(), "Failed to create field 'title': HTTP 500: boom");
    assert_eq!(client.requests().len(), 5);
    assert_eq!(provisioner.run_log().len(), 4);
    assert_eq!(
        log.tasks(),
        vec![
            ("PromoGrid".to_string(), TaskStatus::Failed),
            ("Footer".to_string(), TaskStatus::Skipped),
        ]
    );
}

/// The run log is written even when the run fails; the summary is not.
#[test]
fn execute_writes_run_log_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let opts = import_opts(dir.path());
    let log = Arc::new(RecordingLog::default());
    let dyn_log: Arc<dyn Log> = Arc::clone(&log) as Arc<dyn Log>;
    let result = commands::import::execute(
        &definitions(PROMO_PAGE),
        settings(),
        Arc::new(RecordingClient::failing_on(3)),
        &dyn_log,
        false,
        &opts,
    );

    assert!(result.is_err());
    let run_log: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("run-log.json")).unwrap())
            .unwrap();
    assert_eq!(run_log.as_array().map(Vec::len), Some(2));
    assert_eq!(run_log[0]["kind"], "folder");
    assert!(!dir.path().join("summary.json").exists());
    assert!(!log.errors().is_empty());
}

#[test]
fn execute_writes_summary_on_success() {
    let dir = tempfile::tempdir().unwrap();
    let opts = import_opts(dir.path());
    commands::import::execute(
        &definitions(PROMO_PAGE),
        settings(),
        Arc::new(RecordingClient::new()),
        &(Arc::new(RecordingLog::default()) as Arc<dyn Log>),
        false,
        &opts,
    )
    .unwrap();

    let summaries: Vec<CreationSummary> =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("summary.json")).unwrap())
            .unwrap();
    let names: Vec<&str> = summaries.iter().map(|s| s.component_name.as_str()).collect();
    assert_eq!(names, ["PromoGrid", "Footer"]);

    let run_log: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("run-log.json")).unwrap())
            .unwrap();
    assert_eq!(run_log.len(), 26);
    assert_eq!(run_log[25]["name"], "Page Data");
}

// ---------------------------------------------------------------------------
// Dry run and settings
// ---------------------------------------------------------------------------

#[test]
fn dry_run_records_dry_run_status() {
    let client = Arc::new(RecordingClient::new());
    let log = Arc::new(RecordingLog::default());
    provisioner(&client, &log)
        .with_dry_run(true)
        .run(&definitions(PROMO_PAGE))
        .unwrap();

    assert!(
        log.tasks()
            .iter()
            .all(|(_, status)| *status == TaskStatus::DryRun)
    );
}

/// A settings file alone is enough for a dry run.
#[test]
fn settings_file_drives_a_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("provision.toml");
    std::fs::write(
        &config,
        format!(
            r#"
[remote]
database = "master"

[parents]
templates = "{TEMPLATES_ROOT}"
renderings = "{RENDERINGS_ROOT}"
data_folders = "{DATA_FOLDERS_ROOT}"
page_data = "{PAGE_DATA_ROOT}"

[template_ids]
page_data = "55555555555555555555555555555555"
"#
        ),
    )
    .unwrap();

    let settings = Settings::resolve(Some(&config), &|_: &str| None, false).unwrap();
    assert_eq!(settings.template_ids.page_data, PAGE_DATA_TEMPLATE);
    assert!(settings.remote.endpoint.is_empty());

    let client = Arc::new(RecordingClient::new());
    let log = Arc::new(RecordingLog::default());
    let summaries = Provisioner::new(
        Arc::new(settings),
        Arc::clone(&client) as Arc<dyn ItemClient>,
        log as Arc<dyn Log>,
    )
    .with_dry_run(true)
    .run(&definitions(PROMO_PAGE))
    .unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(client.requests().len(), 26);
}
