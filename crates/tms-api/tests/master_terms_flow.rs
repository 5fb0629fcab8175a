//! End-to-end editor flows: load, edit, save, copy and settings.

use std::path::Path;
use std::sync::Arc;

use tms_api::{
    ApiError, TermsApi, WindowGeometry, load_file_async, load_master_terms_async, sample,
    save_file_async, save_master_terms_async,
};
use tms_host::{DesktopHost, MemoryHost, SettingsStore};
use tms_model::TermRow;

const MASTER_PATH: &str = "/data/terms.csv";

fn sample_api() -> TermsApi<MemoryHost> {
    let host = MemoryHost::new();
    host.insert_file(MASTER_PATH, sample::SAMPLE_MASTER_TERMS_CSV);
    TermsApi::new(host)
}

#[test]
fn load_edit_save_reload() {
    let api = sample_api();
    let path = Path::new(MASTER_PATH);

    let mut rows = api.load_master_terms(path).expect("load sample");
    assert_eq!(rows, sample::sample_rows());

    rows.push(TermRow::new("106", "post_tag", "retro", "retro", "0"));
    rows[0].name = "Breaking News".to_string();
    api.save_master_terms(path, &rows).expect("save edits");

    let reloaded = api.load_master_terms(path).expect("reload");
    assert_eq!(reloaded, rows);
    assert_eq!(reloaded[0].name, "Breaking News");
}

#[test]
fn failed_load_leaves_previous_state_usable() {
    let api = sample_api();
    let good = Path::new(MASTER_PATH);
    api.host().insert_file("/data/broken.csv", "no delimiter here");

    let rows = api.load_master_terms(good).expect("load sample");

    let err = api
        .load_master_terms(Path::new("/data/broken.csv"))
        .expect_err("broken file must not decode");
    assert!(matches!(err, ApiError::Parse(_)));
    assert!(!err.user_message().is_empty());

    // The earlier rows and the file itself are untouched.
    assert_eq!(rows, sample::sample_rows());
    assert_eq!(
        api.host().file(MASTER_PATH).unwrap(),
        sample::SAMPLE_MASTER_TERMS_CSV
    );
}

#[test]
fn save_to_a_new_path_is_rejected() {
    let api = sample_api();
    let err = api
        .save_master_terms(Path::new("/data/new.csv"), &sample::sample_rows())
        .expect_err("saves never create files");
    assert!(matches!(err, ApiError::Host(_)));
    assert_eq!(api.host().file("/data/new.csv"), None);
}

#[test]
fn clipboard_receives_the_encoded_table() {
    let api = sample_api();
    let rows = api.load_master_terms(Path::new(MASTER_PATH)).expect("load");

    api.copy_master_terms_to_clipboard(&rows).expect("copy");

    let copied = api.host().clipboard_text();
    assert!(copied.starts_with("id,taxonomy,name,slug,parent\r\n"));
    assert!(copied.contains("101,post_tag,howto,howto,0\r\n"));
    assert!(copied.ends_with("\r\n"));
}

#[test]
fn window_geometry_persists_and_clears() {
    let api = TermsApi::new(MemoryHost::new());

    assert_eq!(api.load_window_geometry().expect("load"), None);

    let geometry = WindowGeometry {
        width: 1440,
        height: 860,
        x: Some(120),
        y: Some(64),
    };
    api.save_window_geometry(&geometry).expect("save geometry");
    assert_eq!(api.load_window_geometry().expect("load"), Some(geometry));

    api.clear_stored_settings().expect("clear");
    assert_eq!(api.load_window_geometry().expect("load"), None);
}

#[test]
fn desktop_host_round_trips_files_and_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let master = dir.path().join("terms.csv");
    std::fs::write(&master, sample::SAMPLE_MASTER_TERMS_CSV).expect("seed master file");

    let host = DesktopHost::with_settings(SettingsStore::open_at(dir.path().join("settings.json")));
    let api = TermsApi::new(host);

    let rows = api.load_master_terms(&master).expect("load from disk");
    assert_eq!(rows, sample::sample_rows());

    api.save_master_terms(&master, &rows[..3])
        .expect("save truncated");
    assert_eq!(api.load_master_terms(&master).expect("reload").len(), 3);

    let geometry = WindowGeometry::default();
    api.save_window_geometry(&geometry).expect("save geometry");
    assert_eq!(api.load_window_geometry().expect("load"), Some(geometry));
}

#[tokio::test]
async fn async_operations_match_their_sync_counterparts() {
    let api = Arc::new(sample_api());
    let path = Path::new(MASTER_PATH).to_path_buf();

    let rows = load_master_terms_async(Arc::clone(&api), path.clone())
        .await
        .expect("async load");
    assert_eq!(rows, sample::sample_rows());

    let shorter = rows[..5].to_vec();
    save_master_terms_async(Arc::clone(&api), path.clone(), shorter.clone())
        .await
        .expect("async save");

    let reloaded = load_master_terms_async(api, path).await.expect("reload");
    assert_eq!(reloaded, shorter);
}

#[tokio::test]
async fn raw_text_round_trips_through_the_async_wrappers() {
    let api = Arc::new(sample_api());
    let path = Path::new(MASTER_PATH).to_path_buf();

    let raw = load_file_async(Arc::clone(&api), path.clone())
        .await
        .expect("async read");
    assert_eq!(raw, sample::SAMPLE_MASTER_TERMS_CSV);

    save_file_async(Arc::clone(&api), path.clone(), "id,x\r\n9,y\r\n".to_string())
        .await
        .expect("async write");
    let rewritten = load_file_async(api, path).await.expect("reread");
    assert_eq!(rewritten, "id,x\r\n9,y\r\n");
}

#[tokio::test]
async fn async_load_reports_missing_files() {
    let api = Arc::new(TermsApi::new(MemoryHost::new()));
    let err = load_master_terms_async(api, "/data/absent.csv".into())
        .await
        .expect_err("missing file");
    assert!(matches!(err, ApiError::Host(_)));
}
