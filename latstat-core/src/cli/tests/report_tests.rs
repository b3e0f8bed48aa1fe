use crate::cli::{NO_LOGS_MESSAGE, ReportArgs, ReportFormat, run_report};
use crate::error::LatencyError;
use crate::latency::{ChoiceProvider, EventLabel, FixedChoice};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

//-----------------------------------------------------------------------------
// Test helpers
//-----------------------------------------------------------------------------

/// Fails the test if the pipeline asks for a selection.
struct NeverAsked;

impl ChoiceProvider for NeverAsked {
    fn read_choice(&mut self) -> Result<String, LatencyError> {
        panic!("selection must not be requested");
    }
}

fn args_for(dir: &Path) -> ReportArgs {
    ReportArgs {
        dir: dir.to_path_buf(),
        ..ReportArgs::default()
    }
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------

#[test]
fn report_selects_file_and_prints_statistics() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "boot\n").unwrap();
    fs::write(
        dir.path().join("b.txt"),
        "FFT time: 120 us\nFFT time: 140 us\n",
    )
    .unwrap();
    let mut out = Vec::new();
    let mut prompt = Vec::new();

    // Act
    let report = run_report(
        &args_for(dir.path()),
        &mut FixedChoice::new("1"),
        &mut out,
        &mut prompt,
    )
    .unwrap()
    .unwrap();

    // Assert
    let summary = report.get(EventLabel::Fft).unwrap().summary.unwrap();
    assert_eq!(summary.count, 2);

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Select a file:\n0: a.txt\n1: b.txt\n"));
    assert!(out.contains("FFT time:\n  Number of samples: 2\n  Average: 130.00 us\n"));
    assert!(prompt.is_empty());
}

#[test]
fn report_on_empty_directory_does_not_prompt() {
    // Arrange
    let dir = tempdir().unwrap();
    let mut out = Vec::new();
    let mut prompt = Vec::new();

    // Act
    let report = run_report(&args_for(dir.path()), &mut NeverAsked, &mut out, &mut prompt).unwrap();

    // Assert
    assert!(report.is_none());
    assert_eq!(String::from_utf8(out).unwrap(), format!("{NO_LOGS_MESSAGE}\n"));
}

#[test]
fn report_out_of_range_prints_no_statistics() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "FFT time: 1 us").unwrap();
    let mut out = Vec::new();
    let mut prompt = Vec::new();

    // Act
    let err = run_report(
        &args_for(dir.path()),
        &mut FixedChoice::from(1),
        &mut out,
        &mut prompt,
    )
    .unwrap_err();

    // Assert
    assert!(matches!(
        err.downcast_ref::<LatencyError>(),
        Some(LatencyError::SelectionOutOfRange { index: 1, len: 1 })
    ));
    assert!(!String::from_utf8(out).unwrap().contains("Statistics:"));
}

fn json_args(dir: &Path) -> ReportArgs {
    ReportArgs {
        format: ReportFormat::Json,
        ..args_for(dir)
    }
}

#[test]
fn report_json_stdout_is_only_json() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "Https req time: 10 us").unwrap();
    let mut out = Vec::new();
    let mut prompt = Vec::new();

    // Act
    run_report(
        &json_args(dir.path()),
        &mut FixedChoice::from(0),
        &mut out,
        &mut prompt,
    )
    .unwrap();

    // Assert
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json[4]["count"], 1);
    assert_eq!(
        String::from_utf8(prompt).unwrap(),
        "Select a file:\n0: a.txt\nEnter the index of the selected file: "
    );
}

#[test]
fn report_json_on_empty_directory_keeps_stdout_empty() {
    // Arrange
    let dir = tempdir().unwrap();
    let mut out = Vec::new();
    let mut prompt = Vec::new();

    // Act
    let report = run_report(&json_args(dir.path()), &mut NeverAsked, &mut out, &mut prompt).unwrap();

    // Assert
    assert!(report.is_none());
    assert!(out.is_empty());
    assert_eq!(String::from_utf8(prompt).unwrap(), format!("{NO_LOGS_MESSAGE}\n"));
}
