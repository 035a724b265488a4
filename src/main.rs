// oopsleuth - main.rs
//
// CLI entry point. Handles:
// 1. Argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Scan -> filter -> dedup/sort -> output pipeline

use clap::{Parser, ValueEnum};
use oopsleuth::app::scan;
use oopsleuth::core::export;
use oopsleuth::core::filter::{self, FilterState};
use oopsleuth::util;
use oopsleuth::util::error::OopsleuthError;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Output rendering for the scanned frames.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    /// One canonical frame per line.
    Text,
    /// JSON array of frame objects.
    Json,
    /// CSV with one row per frame.
    Csv,
}

/// oopsleuth - kernel-oops backtrace frame parser and duplicate-crash comparator.
///
/// Point oopsleuth at a kernel log (or pipe one in) to extract backtrace
/// frames, filter them, and collapse duplicates for crash clustering.
#[derive(Parser, Debug)]
#[command(name = "oopsleuth", version, about)]
struct Cli {
    /// Oops log file to scan (reads stdin when omitted).
    path: Option<PathBuf>,

    /// Drop frames the unwinder marked uncertain with `?`.
    #[arg(long = "reliable-only")]
    reliable_only: bool,

    /// Keep only frames from these kernel modules (repeatable).
    #[arg(short = 'm', long = "module")]
    modules: Vec<String>,

    /// Case-insensitive substring match on the function name.
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Regex applied to each frame's canonical form.
    #[arg(short = 'g', long = "grep")]
    grep: Option<String>,

    /// Sort frames into comparator order.
    #[arg(long)]
    sort: bool,

    /// Sort and drop exact duplicate frames (implies --sort).
    #[arg(long)]
    dedup: bool,

    /// Output format.
    #[arg(short = 'o', long = "output", value_enum, default_value = "text")]
    output: OutputFormat,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "oopsleuth starting"
    );

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "Scan failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> util::error::Result<()> {
    let report = match &cli.path {
        Some(path) => scan::scan_file(path)?,
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| OopsleuthError::Io {
                    path: PathBuf::from("<stdin>"),
                    operation: "read",
                    source: e,
                })?;
            scan::scan_text(&content)
        }
    };

    tracing::info!(
        frames = report.frames.len(),
        scanned = report.lines_scanned,
        skipped = report.lines_skipped,
        overflow = report.overflow_lines,
        "Scan finished"
    );

    let mut frames = report.frames;

    let mut filter_state = FilterState {
        reliable_only: cli.reliable_only,
        modules: cli.modules.iter().cloned().collect(),
        name_search: cli.name.clone().unwrap_or_default(),
        regex_search: None,
    };
    if let Some(pattern) = &cli.grep {
        filter_state.set_regex(pattern)?;
    }

    if !filter_state.is_empty() {
        let keep = filter::apply_filters(&frames, &filter_state);
        let selected: Vec<_> = keep.iter().map(|&idx| frames[idx].clone()).collect();
        tracing::debug!(
            kept = selected.len(),
            dropped = frames.len() - selected.len(),
            "Filters applied"
        );
        frames = selected;
    }

    if cli.dedup {
        let removed = scan::dedup_frames(&mut frames);
        tracing::info!(removed, remaining = frames.len(), "Duplicate frames removed");
    } else if cli.sort {
        frames.sort();
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.output {
        OutputFormat::Text => {
            for frame in &frames {
                writeln!(out, "{frame}").map_err(|e| OopsleuthError::Io {
                    path: PathBuf::from("<stdout>"),
                    operation: "write",
                    source: e,
                })?;
            }
        }
        OutputFormat::Json => {
            export::export_json(&frames, &mut out)?;
            let _ = writeln!(out);
        }
        OutputFormat::Csv => {
            export::export_csv(&frames, &mut out)?;
        }
    }

    Ok(())
}
