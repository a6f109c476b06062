//! End-to-end tests for the FileManager pipeline against a real filesystem

use chrono::{NaiveDate, NaiveDateTime};
use filemod_core::{
    Error, FileManager, Limits, MAX_FILE_SIZE, NamingError, ReadError, TextEncoding,
    ValidationError, WriteError,
};
use filemod_test_utils::TestFileBuilder;
use std::fs;

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 58)
        .unwrap()
}

#[test]
fn test_missing_file_never_reaches_reader() {
    let builder = TestFileBuilder::new().unwrap();
    let manager = FileManager::new();
    let missing = builder.path("nope.txt");

    let error = manager.read(&missing).unwrap_err();
    assert!(matches!(
        error,
        Error::Validation(ValidationError::NotFound { .. })
    ));
    assert_eq!(
        error.to_string(),
        format!("File '{}' does not exist.", missing.display())
    );
}

#[test]
fn test_empty_file_is_rejected() {
    let mut builder = TestFileBuilder::new().unwrap();
    let path = builder.empty_file("empty.txt").unwrap();

    let error = FileManager::new().validate(&path).unwrap_err();
    assert!(matches!(error, ValidationError::Empty { .. }));
}

#[test]
fn test_oversized_file_reports_actual_size() {
    let mut builder = TestFileBuilder::new().unwrap();
    let size = MAX_FILE_SIZE + 1;
    let path = builder.sized_file("huge.txt", size).unwrap();

    match FileManager::new().validate(&path).unwrap_err() {
        ValidationError::TooLarge { size: reported, limit, .. } => {
            assert_eq!(reported, size);
            assert_eq!(limit, MAX_FILE_SIZE);
        }
        other => panic!("Expected TooLarge, got {other:?}"),
    }
}

#[test]
fn test_file_at_ceiling_is_valid() {
    let mut builder = TestFileBuilder::new().unwrap();
    let path = builder.sized_file("edge.txt", MAX_FILE_SIZE).unwrap();

    let validated = FileManager::new().validate(&path).unwrap();
    assert_eq!(validated.size(), MAX_FILE_SIZE);
}

#[test]
fn test_directory_is_rejected() {
    let mut builder = TestFileBuilder::new().unwrap();
    let dir = builder.directory("folder.txt").unwrap();

    let error = FileManager::new().read(&dir).unwrap_err();
    assert!(matches!(
        error,
        Error::Validation(ValidationError::NotAFile { .. })
    ));
}

#[test]
fn test_latin1_file_falls_back() {
    let mut builder = TestFileBuilder::new().unwrap();
    let path = builder
        .latin1_file("legacy.txt", "Größe: 5 µm\nÀ bientôt\n")
        .unwrap();

    let content = FileManager::new().read(&path).unwrap();
    assert_eq!(content.encoding(), TextEncoding::Latin1);
    assert_eq!(content.text(), "Größe: 5 µm\nÀ bientôt\n");
    assert!(content.summary().contains("latin-1"));
}

#[test]
fn test_windows_line_endings_count_like_unix() {
    let mut builder = TestFileBuilder::new().unwrap();
    let path = builder.bytes_file("dos.txt", b"a b\r\nc d e\r\n").unwrap();
    let manager = FileManager::new();

    let content = manager.read(&path).unwrap();
    let result = manager.transform(&content, fixed_now());
    assert_eq!(result.stats.char_count, 10);
    assert_eq!(result.stats.line_count, 3);
    assert!(result.modified_text.contains("# Original length: 10 characters"));
    assert!(!result.modified_text.contains('\r'));
}

#[test]
fn test_written_output_round_trips_as_utf8() {
    let mut builder = TestFileBuilder::new().unwrap();
    let source = builder.latin1_file("legacy.txt", "café crème\n").unwrap();
    let manager = FileManager::new();

    let content = manager.read(&source).unwrap();
    let transformed = manager.transform(&content, fixed_now());
    let output = manager.next_available_path(&source).unwrap();
    manager.write(&output, &transformed.modified_text).unwrap();

    let bytes = fs::read(&output).unwrap();
    assert_eq!(bytes, transformed.modified_text.as_bytes());

    let reread = manager.read(&output).unwrap();
    assert_eq!(reread.encoding(), TextEncoding::Utf8);
    assert_eq!(reread.text(), transformed.modified_text);
}

#[test]
fn test_header_names_source_as_given() {
    let mut builder = TestFileBuilder::new().unwrap();
    let source = builder.text_file("notes.md", "# Title\n").unwrap();
    let manager = FileManager::new();

    let content = manager.read(&source).unwrap();
    let transformed = manager.transform(&content, fixed_now());

    let first_line = transformed.modified_text.lines().next().unwrap();
    assert_eq!(
        first_line,
        format!("# Modified version of: {}", source.display())
    );
    assert!(
        transformed
            .modified_text
            .contains("# Modification timestamp: 2024-12-31 23:59:58")
    );
}

#[test]
fn test_next_available_path_never_returns_existing() {
    let mut builder = TestFileBuilder::new().unwrap();
    let source = builder.text_file("data.csv", "a,b\n").unwrap();
    builder.text_file("data_modified.csv", "taken").unwrap();
    builder.text_file("data_modified_1.csv", "taken").unwrap();
    let manager = FileManager::new();

    let output = manager.next_available_path(&source).unwrap();
    assert!(!output.exists());
    assert_eq!(output, builder.path("data_modified_2.csv"));
    assert_eq!(manager.next_available_path(&source).unwrap(), output);
}

#[test]
fn test_naming_ceiling() {
    let mut builder = TestFileBuilder::new().unwrap();
    let source = builder.text_file("n.txt", "x").unwrap();
    builder.text_file("n_modified.txt", "x").unwrap();
    for n in 1..=3 {
        builder.text_file(&format!("n_modified_{n}.txt"), "x").unwrap();
    }

    let manager = FileManager::with_limits(Limits::test());
    let error = manager.process(&source, fixed_now()).unwrap_err();
    assert!(matches!(
        error,
        Error::Naming(NamingError::NamingExhausted { attempts: 3, .. })
    ));
}

#[test]
fn test_write_does_not_clobber() {
    let mut builder = TestFileBuilder::new().unwrap();
    let existing = builder.text_file("keep.txt", "original").unwrap();

    let error = FileManager::new().write(&existing, "new").unwrap_err();
    assert!(matches!(error, WriteError::Io { .. }));
    assert_eq!(fs::read_to_string(existing).unwrap(), "original");
}

#[test]
fn test_process_report() {
    let mut builder = TestFileBuilder::new().unwrap();
    let source = builder.text_file("sample_text.txt", "a b\nc d e\n").unwrap();

    let report = FileManager::new().process(&source, fixed_now()).unwrap();
    assert_eq!(report.output, builder.path("sample_text_modified.txt"));
    assert_eq!(report.stats.line_count, 3);
    assert_eq!(report.stats.word_count, 5);
    assert_eq!(report.stats.average_display(), "1.7");
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_rejected_before_read() {
    use std::os::unix::fs::PermissionsExt;

    if unsafe { libc::geteuid() } == 0 {
        return;
    }

    let mut builder = TestFileBuilder::new().unwrap();
    let path = builder.text_file("private.txt", "secret").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o200)).unwrap();

    let error = FileManager::new().read(&path).unwrap_err();
    assert!(matches!(
        error,
        Error::Validation(ValidationError::PermissionDenied { .. })
    ));
    assert!(!matches!(error, Error::Read(ReadError::PermissionDenied { .. })));

    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
}
