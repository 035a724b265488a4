// oopsleuth - tests/e2e_scan.rs
//
// End-to-end tests for the scan pipeline.
//
// These tests exercise the real filesystem and the full path from a raw
// kernel log on disk to structured frames, comparator-ordered dedup, and
// exported output — no mocks, no stubs.

use oopsleuth::app::scan::{dedup_frames, scan_file, scan_text};
use oopsleuth::core::export::{export_csv, export_json};
use oopsleuth::core::filter::{apply_filters, FilterState};
use oopsleuth::util::error::OopsleuthError;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

// =============================================================================
// Scan E2E
// =============================================================================

/// Scanning the sample oops extracts exactly the backtrace frame lines and
/// skips headers, register dumps, and the code dump.
#[test]
fn e2e_scan_extracts_frames_from_real_oops() {
    let report = scan_file(&fixture("oops_sample.log")).unwrap();

    assert_eq!(report.frames.len(), 8, "eight backtrace frame lines");
    assert_eq!(report.lines_scanned, 18);
    assert_eq!(report.overflow_lines, 0);
    assert_eq!(
        report.lines_skipped,
        report.lines_scanned - report.frames.len() as u64
    );

    let first = &report.frames[0];
    assert_eq!(first.address, 0xffffffff8103f314);
    assert!(!first.reliable);
    assert_eq!(first.function_name.as_deref(), Some("default_idle"));
    assert_eq!(first.module_name.as_deref(), Some("kernel"));
}

/// Dedup collapses the repeated default_idle and panic frames.
#[test]
fn e2e_dedup_collapses_repeated_frames() {
    let mut report = scan_file(&fixture("oops_sample.log")).unwrap();
    let removed = dedup_frames(&mut report.frames);

    assert_eq!(removed, 2);
    assert_eq!(report.frames.len(), 6);
    for pair in report.frames.windows(2) {
        assert!(pair[0] < pair[1], "dedup output is strictly ordered");
    }
}

/// Filtering the scanned frames by module keeps only the ext4 frame.
#[test]
fn e2e_module_filter_on_scanned_frames() {
    let report = scan_file(&fixture("oops_sample.log")).unwrap();
    let filter = FilterState {
        modules: HashSet::from(["ext4".to_string()]),
        ..Default::default()
    };

    let kept = apply_filters(&report.frames, &filter);
    assert_eq!(kept.len(), 1);
    assert_eq!(
        report.frames[kept[0]].function_name.as_deref(),
        Some("ext4_readdir")
    );
}

/// Formatting a scanned frame reproduces the source line text.
#[test]
fn e2e_canonical_form_matches_source_line() {
    let report = scan_file(&fixture("oops_sample.log")).unwrap();
    assert_eq!(
        report.frames[0].to_string(),
        "[0xffffffff8103f314] ? default_idle+0x24/0x40 [kernel]"
    );
}

/// JSON and CSV export of a full scan succeed and carry every frame.
#[test]
fn e2e_export_scanned_frames() {
    let mut report = scan_file(&fixture("oops_sample.log")).unwrap();
    dedup_frames(&mut report.frames);

    let mut json = Vec::new();
    assert_eq!(export_json(&report.frames, &mut json).unwrap(), 6);
    let json = String::from_utf8(json).unwrap();
    assert!(json.contains("\"function_name\": \"ext4_readdir\""));

    let mut csv = Vec::new();
    assert_eq!(export_csv(&report.frames, &mut csv).unwrap(), 6);
    let csv = String::from_utf8(csv).unwrap();
    assert_eq!(csv.lines().count(), 7, "header plus one row per frame");
}

/// Scanning a nonexistent path reports an I/O error with path context.
#[test]
fn e2e_scan_nonexistent_file_returns_io_error() {
    let result = scan_file(&fixture("does-not-exist.log"));
    match result {
        Err(OopsleuthError::Io { path, operation, .. }) => {
            assert!(path.ends_with("does-not-exist.log"));
            assert_eq!(operation, "read");
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

/// A freshly written log in a scratch directory scans the same as the
/// static fixture, and text scanned directly agrees with the file path.
#[test]
fn e2e_scratch_file_and_text_scan_agree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dmesg.log");
    let content = "Call Trace:\n [0x00000000deadbeef] ? worker_thread+0x1/0x2\n";
    fs::write(&path, content).unwrap();

    let from_file = scan_file(&path).unwrap();
    let from_text = scan_text(content);

    assert_eq!(from_file.frames, from_text.frames);
    assert_eq!(from_file.frames.len(), 1);
    assert_eq!(from_file.frames[0].address, 0xdeadbeef);
}
