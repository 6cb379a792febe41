use super::*;
use crate::error::ErrorKind;
use crate::excel::UnavailableWriter;
use crate::types::Workbook;
use std::cell::RefCell;
use tempfile::TempDir;

/// Records what it was asked to write instead of touching the disk
#[derive(Default)]
struct RecordingWriter {
    written: RefCell<Vec<(PathBuf, Vec<String>)>>,
}

impl WorkbookWriter for RecordingWriter {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn write(&self, workbook: &Workbook, path: &Path) -> SheetsResult<()> {
        self.written
            .borrow_mut()
            .push((path.to_path_buf(), workbook.sheet_names()));
        Ok(())
    }
}

fn settings(dir: &Path) -> Settings {
    Settings {
        output_dir: dir.to_path_buf(),
        date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        json: false,
    }
}

// =========================================================================
// parse_date / output_path Tests
// =========================================================================

#[test]
fn test_parse_date_valid() {
    assert_eq!(
        parse_date("2025-01-31").unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    );
    assert!(parse_date(" 2024-02-29 ").is_ok());
}

#[test]
fn test_parse_date_invalid() {
    for bad in ["2025/01/31", "2025-02-30", "", "tomorrow"] {
        let err = parse_date(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}

#[test]
fn test_output_path_defaults_to_file_name() {
    let path = output_path(Path::new("out"), None, "book.xlsx");
    assert_eq!(path, PathBuf::from("out").join("book.xlsx"));
}

#[test]
fn test_output_path_relative_override() {
    let path = output_path(Path::new("out"), Some(Path::new("x.xlsx")), "book.xlsx");
    assert_eq!(path, PathBuf::from("out").join("x.xlsx"));
}

#[test]
fn test_output_path_absolute_override() {
    let temp_dir = TempDir::new().unwrap();
    let absolute = temp_dir.path().join("abs.xlsx");
    let path = output_path(Path::new("out"), Some(&absolute), "book.xlsx");
    assert_eq!(path, absolute);
}

// =========================================================================
// generate Tests
// =========================================================================

#[test]
fn test_generate_with_unavailable_writer_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("status.xlsx");
    let template = StatusTemplate::new(today());

    let err = generate(&template, &UnavailableWriter::new("xlsx"), &path, today()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DependencyMissing);
    assert_eq!(err.exit_code(), 3);
    assert!(err.user_message().contains("インストール方法"));
    assert!(!path.exists());
}

#[test]
fn test_generate_reports_sheets() {
    let writer = RecordingWriter::default();
    let path = PathBuf::from("manual.xlsx");

    let report = generate(&Manual::new(), &writer, &path, today()).unwrap();

    assert_eq!(report.sheets, vec!["データ登録手順"]);
    assert_eq!(report.path, path);
    assert!(report.progress.is_none());
    assert_eq!(writer.written.borrow().len(), 1);
}

#[test]
fn test_status_template_with_recording_writer() {
    let temp_dir = TempDir::new().unwrap();
    let writer = RecordingWriter::default();

    let report = status_template_with(&settings(temp_dir.path()), None, &writer).unwrap();

    assert_eq!(report.sheets.len(), 3);
    assert_eq!(report.file, "DX化対応状況管理テンプレート.xlsx");
    assert_eq!(report.progress.as_ref().unwrap().total, 5);
    let written = writer.written.borrow();
    assert_eq!(written[0].0, temp_dir.path().join(&report.file));
}

#[test]
fn test_manual_with_unavailable_writer() {
    let temp_dir = TempDir::new().unwrap();
    let err = manual_with(
        &settings(temp_dir.path()),
        None,
        &UnavailableWriter::new("xlsx"),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DependencyMissing);
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_report_serializes_to_json() {
    let writer = RecordingWriter::default();
    let temp_dir = TempDir::new().unwrap();
    let report = status_template_with(&settings(temp_dir.path()), None, &writer).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["updated"], "2025-03-01");
    assert_eq!(json["progress"]["by_status"][0]["status"], "completed");
    assert_eq!(json["sheets"][1], "進捗ダッシュボード");
}

// =========================================================================
// File output Tests (xlsx backend)
// =========================================================================

#[cfg(feature = "xlsx")]
#[test]
fn test_status_template_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let report = status_template(&settings(temp_dir.path()), None).unwrap();
    assert!(report.path.exists());
}

#[cfg(feature = "xlsx")]
#[test]
fn test_manual_custom_output_name() {
    let temp_dir = TempDir::new().unwrap();
    let report = manual(
        &settings(temp_dir.path()),
        Some(PathBuf::from("custom.xlsx")),
    )
    .unwrap();
    assert_eq!(report.path, temp_dir.path().join("custom.xlsx"));
    assert!(report.path.exists());
}

#[cfg(feature = "xlsx")]
#[test]
fn test_all_writes_both_files() {
    let temp_dir = TempDir::new().unwrap();
    let reports = all(&settings(temp_dir.path())).unwrap();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.path.exists()));
}

#[cfg(feature = "xlsx")]
#[test]
fn test_missing_output_dir_is_write_failure() {
    let temp_dir = TempDir::new().unwrap();
    let err = status_template(&settings(&temp_dir.path().join("nope")), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WriteFailure);
    assert_eq!(err.exit_code(), 1);
}
