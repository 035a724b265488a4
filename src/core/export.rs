// oopsleuth - core/export.rs
//
// CSV and JSON export of parsed frames.
// Core layer: writes to any Write trait object.

use crate::core::model::KernelOopsFrame;
use crate::util::error::ExportError;
use std::io::Write;

/// Export frames to CSV.
///
/// Columns: reliable, address, function_name, function_offset,
/// function_length, module_name, the mirrored from_* group, and the
/// canonical rendering. Numeric fields are written in hex with absent
/// (zero) values left blank, matching the canonical form's conventions.
pub fn export_csv<W: Write>(frames: &[KernelOopsFrame], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "reliable",
            "address",
            "function_name",
            "function_offset",
            "function_length",
            "module_name",
            "from_address",
            "from_function_name",
            "from_function_offset",
            "from_function_length",
            "from_module_name",
            "canonical",
        ])
        .map_err(|e| ExportError::Csv { source: e })?;

    let hex = |value: u64| {
        if value == 0 {
            String::new()
        } else {
            format!("0x{value:x}")
        }
    };

    let mut count = 0;
    for frame in frames {
        csv_writer
            .write_record([
                if frame.reliable { "true" } else { "false" },
                &hex(frame.address),
                frame.function_name.as_deref().unwrap_or(""),
                &hex(frame.function_offset),
                &hex(frame.function_length),
                frame.module_name.as_deref().unwrap_or(""),
                &hex(frame.from_address),
                frame.from_function_name.as_deref().unwrap_or(""),
                &hex(frame.from_function_offset),
                &hex(frame.from_function_length),
                frame.from_module_name.as_deref().unwrap_or(""),
                &frame.canonical_string(),
            ])
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}

/// Export frames to JSON (array of objects, one per frame).
pub fn export_json<W: Write>(frames: &[KernelOopsFrame], writer: W) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, frames).map_err(|e| ExportError::Json { source: e })?;
    Ok(frames.len())
}
