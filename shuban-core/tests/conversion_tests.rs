//! End-to-end conversion tests for shuban-core
//!
//! These tests build small directory trees in a temp dir, run the batch
//! driver over them and read the produced packages back with the inspector.

use shuban_core::batch::{self, output_path_for};
use shuban_core::config::{Settings, WriteMode};
use shuban_core::inspect::{inspect, PackageInfo};
use shuban_core::{ScriptConverter, ShubanError};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn read_package(path: &Path) -> PackageInfo {
    let file = File::open(path).expect("package should exist");
    inspect(&mut BufReader::new(file)).expect("package should be readable")
}

// =============================================================================
// End-to-end examples
// =============================================================================

#[test]
fn test_poem_end_to_end() {
    let temp = TempDir::new().unwrap();
    let sub = temp.path().join("sub");
    write(&sub, "poem.txt", "简体字测试".as_bytes());

    let report = batch::run(temp.path(), &Settings::default()).unwrap();
    assert_eq!(report.converted.len(), 1);

    let output = sub.join("poem.epub");
    assert_eq!(report.converted[0].output, output);

    let info = read_package(&output);
    assert_eq!(info.title, "poem");
    assert_eq!(info.page_direction.as_deref(), Some("rtl"));
    assert_eq!(info.spine.len(), 2);
    assert_eq!(info.language.as_deref(), Some("zh-TW"));
    assert_eq!(info.creators, vec!["公版".to_string()]);

    let expected = ScriptConverter::default().convert("简体字测试");
    assert_eq!(expected, "簡體字測試");
    assert_eq!(info.containers, vec![expected]);
}

#[test]
fn test_empty_file_gets_placeholder() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "empty.txt", b"");

    batch::run(temp.path(), &Settings::default()).unwrap();

    let info = read_package(&temp.path().join("empty.epub"));
    assert_eq!(info.containers, vec![Settings::default().placeholder]);
    assert!(!info.containers[0].is_empty());
}

#[test]
fn test_whitespace_file_gets_placeholder() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "blank.txt", " \n\t\n".as_bytes());

    let mut settings = Settings::default();
    settings.placeholder = "空".to_string();
    batch::run(temp.path(), &settings).unwrap();

    let info = read_package(&temp.path().join("blank.epub"));
    assert_eq!(info.containers, vec!["空".to_string()]);
}

#[test]
fn test_identifiers_differ_between_runs() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "poem.txt", "诗".as_bytes());

    let first = batch::run(temp.path(), &Settings::default()).unwrap();
    let second = batch::run(temp.path(), &Settings::default()).unwrap();
    assert_ne!(first.converted[0].identifier, second.converted[0].identifier);
}

// =============================================================================
// Output replacement
// =============================================================================

#[test]
fn test_existing_output_is_replaced() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "poem.txt", "简体".as_bytes());
    let stale = write(temp.path(), "poem.epub", &vec![b'x'; 1024 * 1024]);

    batch::run(temp.path(), &Settings::default()).unwrap();

    let size = fs::metadata(&stale).unwrap().len();
    assert!(size < 1024 * 1024, "stale bytes should be gone, got {} bytes", size);
    assert_eq!(read_package(&stale).containers, vec!["簡體".to_string()]);
}

#[test]
fn test_rerun_replaces_previous_content() {
    let temp = TempDir::new().unwrap();
    let input = write(temp.path(), "poem.txt", "长".repeat(5000).as_bytes());
    batch::run(temp.path(), &Settings::default()).unwrap();

    fs::write(&input, "短".as_bytes()).unwrap();
    batch::run(temp.path(), &Settings::default()).unwrap();

    let info = read_package(&output_path_for(&input));
    assert_eq!(info.containers, vec!["短".to_string()]);
}

#[test]
fn test_atomic_mode_replaces_without_leftovers() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "poem.txt", "简体".as_bytes());
    write(temp.path(), "poem.epub", b"old package");

    let mut settings = Settings::default();
    settings.write_mode = WriteMode::Atomic;
    batch::run(temp.path(), &settings).unwrap();

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 2, "unexpected files: {:?}", names);
    assert_eq!(
        read_package(&temp.path().join("poem.epub")).containers,
        vec!["簡體".to_string()]
    );
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn test_hidden_prefix_is_never_selected() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "._poem.txt", "简体".as_bytes());
    write(temp.path(), "poem.txt", "简体".as_bytes());

    let files = batch::discover(temp.path(), &Settings::default()).unwrap();
    assert_eq!(files, vec![temp.path().join("poem.txt")]);

    batch::run(temp.path(), &Settings::default()).unwrap();
    assert!(!temp.path().join("._poem.epub").exists());
    assert!(temp.path().join("poem.epub").exists());
}

#[test]
fn test_other_extensions_are_ignored() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "notes.md", b"# notes");
    write(temp.path(), "poem.TXT", b"upper");

    let report = batch::run(temp.path(), &Settings::default()).unwrap();
    assert_eq!(report.processed(), 0);
    assert!(!temp.path().join("notes.epub").exists());
}

#[test]
fn test_nested_directories_sorted_with_ordinals() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("b"), "two.txt", "二".as_bytes());
    write(&temp.path().join("a").join("deep"), "one.txt", "一".as_bytes());
    write(temp.path(), "c.txt", "三".as_bytes());

    let report = batch::run(temp.path(), &Settings::default()).unwrap();

    let inputs: Vec<_> = report.converted.iter().map(|c| c.input.clone()).collect();
    assert_eq!(
        inputs,
        vec![
            temp.path().join("a").join("deep").join("one.txt"),
            temp.path().join("b").join("two.txt"),
            temp.path().join("c.txt"),
        ]
    );
    let ordinals: Vec<_> = report.converted.iter().map(|c| c.ordinal).collect();
    assert_eq!(ordinals, vec![1, 2, 3]);

    for converted in &report.converted {
        assert_eq!(converted.output, output_path_for(&converted.input));
        assert!(converted.output.exists());
    }
}

#[test]
fn test_missing_root_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = batch::run(&temp.path().join("missing"), &Settings::default()).unwrap_err();
    assert!(matches!(err, ShubanError::RootNotFound(_)));
}

// =============================================================================
// Failure policy
// =============================================================================

#[test]
fn test_first_failure_halts_the_run() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a_bad.txt", &[0xff, 0xfe, 0x00, 0xc3]);
    write(temp.path(), "b_good.txt", "好".as_bytes());

    let err = batch::run(temp.path(), &Settings::default()).unwrap_err();
    assert!(matches!(err, ShubanError::Read { .. }));
    assert!(!temp.path().join("b_good.epub").exists());
}

#[test]
fn test_keep_going_records_failures() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a_bad.txt", &[0xff, 0xfe, 0x00, 0xc3]);
    write(temp.path(), "b_good.txt", "好".as_bytes());

    let mut settings = Settings::default();
    settings.keep_going = true;
    let report = batch::run(temp.path(), &settings).unwrap();

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].ordinal, 1);
    assert_eq!(report.failed[0].input, temp.path().join("a_bad.txt"));
    assert_eq!(report.converted.len(), 1);
    assert_eq!(report.converted[0].ordinal, 2);
    assert!(temp.path().join("b_good.epub").exists());
}
