//! Tests for YardService

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use railyard::application::services::YardService;
use railyard::application::ApplicationError;
use railyard::domain::LayoutError;
use railyard::infrastructure::traits::RealFileSystem;

/// Helper to create temp files for testing
fn create_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write file");
    path
}

fn service() -> YardService {
    YardService::new(Arc::new(RealFileSystem))
}

#[test]
fn given_layout_file_when_loading_then_builds_yard() {
    let temp = TempDir::new().unwrap();
    let path = create_file(&temp, "yard.txt", "--AB1T-\n  ----  \n---CC-\n");

    let yard = service().load(&path).unwrap();

    assert_eq!(yard.len(), 3);
    assert_eq!(yard.track(1).unwrap().capacity(), 5);
    assert_eq!(yard.track(2).unwrap().capacity(), 2);
    assert_eq!(yard.total_cars(), 6);
    assert_eq!(yard.locomotive_count(), 1);
    assert_eq!(yard.destination_count(), 4);
}

#[test]
fn given_missing_file_when_loading_then_layout_not_found() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.txt");

    let err = service().load(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::LayoutNotFound(p) if p == path));
}

#[test]
fn given_directory_when_loading_then_layout_not_found() {
    let temp = TempDir::new().unwrap();
    let err = service().load(temp.path()).unwrap_err();
    assert!(matches!(err, ApplicationError::LayoutNotFound(_)));
}

#[test]
fn given_malformed_layout_when_loading_then_reports_line() {
    let temp = TempDir::new().unwrap();
    let path = create_file(&temp, "bad.txt", "-AT-\nAT\n");

    let err = service().load(&path).unwrap_err();

    match err {
        ApplicationError::InvalidLayout { path: p, source } => {
            assert_eq!(p, path);
            assert!(matches!(source, LayoutError::MissingTrackEnds { line: 2, .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn given_empty_layout_when_loading_then_rejected() {
    let temp = TempDir::new().unwrap();
    let path = create_file(&temp, "empty.txt", "\n\n");
    let err = service().load(&path).unwrap_err();
    assert!(err.to_string().contains("layout contains no tracks"));
}

#[test]
fn given_script_when_reading_then_skips_blank_lines_and_comments() {
    let temp = TempDir::new().unwrap();
    let path = create_file(
        &temp,
        "moves.txt",
        "# opening\nmove 1 1 2\n\n  move 0 2 3  \nquit\n",
    );

    let commands = service().read_script(&path).unwrap();

    assert_eq!(commands, vec!["move 1 1 2", "move 0 2 3", "quit"]);
}

#[test]
fn given_missing_script_when_reading_then_operation_failed() {
    let temp = TempDir::new().unwrap();
    let err = service()
        .read_script(&temp.path().join("missing.txt"))
        .unwrap_err();
    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
}
