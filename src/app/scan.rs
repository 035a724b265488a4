// oopsleuth - app/scan.rs
//
// Line-by-line oops log scanning. Offers every line to the frame parser
// and discards failures: headers, register dumps, and other non-frame
// noise are skipped by the parser's no-match path, not classified here.
//
// All per-line failures are non-fatal; the scan continues to the next line.

use crate::core::model::KernelOopsFrame;
use crate::core::parser::parse_frame;
use crate::util::constants::DEBUG_MAX_LINE_PREVIEW;
use crate::util::error::{OopsleuthError, ParseError, Result};
use std::fs;
use std::path::Path;

/// Result of scanning one body of log text.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Frames recognised, in input order.
    pub frames: Vec<KernelOopsFrame>,

    /// Total lines offered to the parser.
    pub lines_scanned: u64,

    /// Lines that matched no frame production (ordinary log noise).
    pub lines_skipped: u64,

    /// Lines rejected because a hex numeral exceeded 64 bits. Counted
    /// separately from skips: they indicate malformed frame-like input
    /// rather than a different line kind.
    pub overflow_lines: u64,
}

/// Scan raw log text, collecting every line that parses as a frame.
///
/// Lines are trimmed before being offered to the parser, since oops lines
/// arrive indented under their "Call Trace:" header in real logs.
pub fn scan_text(content: &str) -> ScanReport {
    let mut report = ScanReport::default();

    for line in content.lines() {
        report.lines_scanned += 1;
        let candidate = line.trim();
        if candidate.is_empty() {
            report.lines_skipped += 1;
            continue;
        }

        match parse_frame(candidate) {
            Ok(frame) => report.frames.push(frame),
            Err(ParseError::NotAFrame) => {
                report.lines_skipped += 1;
            }
            Err(ParseError::HexOverflow { digits }) => {
                report.overflow_lines += 1;
                tracing::debug!(
                    digits,
                    line = preview(candidate),
                    "Hex numeral too wide for 64 bits; line rejected"
                );
            }
        }
    }

    tracing::debug!(
        frames = report.frames.len(),
        scanned = report.lines_scanned,
        skipped = report.lines_skipped,
        overflow = report.overflow_lines,
        "Scan complete"
    );

    report
}

/// Read a log file and scan it.
pub fn scan_file(path: &Path) -> Result<ScanReport> {
    let content = fs::read_to_string(path).map_err(|e| OopsleuthError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source: e,
    })?;
    tracing::debug!(file = %path.display(), bytes = content.len(), "Scanning file");
    Ok(scan_text(&content))
}

/// Sort frames into comparator order and drop exact duplicates.
///
/// Returns the number of duplicates removed. Sorting first means
/// symbol-identical frames land adjacent, which is what makes the linear
/// dedup pass sufficient.
pub fn dedup_frames(frames: &mut Vec<KernelOopsFrame>) -> usize {
    let before = frames.len();
    frames.sort();
    frames.dedup();
    before - frames.len()
}

/// Truncated line text for debug logging.
fn preview(line: &str) -> &str {
    match line.char_indices().nth(DEBUG_MAX_LINE_PREVIEW) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
