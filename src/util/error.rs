// oopsleuth - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal chain
// for diagnostic logging.
//
// Parse failures are ordinary, locally handled outcomes: the line scanner
// offers every line to the parser and a NotAFrame result simply means the
// line belongs to some other line kind (header, register dump, noise).
// Allocation failure is not modelled here at all — string construction
// aborts the process through the global allocator, matching the frame
// model's documented out-of-memory policy.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all oopsleuth operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum OopsleuthError {
    /// Frame parsing failed.
    Parse(ParseError),

    /// Filter operation failed.
    Filter(FilterError),

    /// Export operation failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for OopsleuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Filter(e) => write!(f, "Filter error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for OopsleuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Filter(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Errors from the frame parser.
#[derive(Debug)]
pub enum ParseError {
    /// The text does not match any frame production. Non-fatal: the caller
    /// retries the line with a different classifier or skips it. The
    /// caller's input is left untouched.
    NotAFrame,

    /// A hexadecimal numeral exceeds 64 bits of precision. Rejects the
    /// whole frame; values are never truncated or wrapped.
    HexOverflow { digits: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAFrame => write!(f, "line does not match any frame production"),
            Self::HexOverflow { digits } => write!(
                f,
                "hex numeral of {digits} digits exceeds 64-bit precision"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for OopsleuthError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Errors related to filter operations.
#[derive(Debug)]
pub enum FilterError {
    /// User-provided regex is invalid.
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },

    /// User-provided regex pattern exceeds the maximum allowed length.
    PatternTooLong { length: usize, max_length: usize },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegex { pattern, source } => {
                write!(f, "Invalid filter regex '{pattern}': {source}")
            }
            Self::PatternTooLong { length, max_length } => write!(
                f,
                "Filter regex is {length} chars, exceeds maximum of {max_length}"
            ),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRegex { source, .. } => Some(source),
            Self::PatternTooLong { .. } => None,
        }
    }
}

impl From<FilterError> for OopsleuthError {
    fn from(e: FilterError) -> Self {
        Self::Filter(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export output.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "Export I/O error: {source}"),
            Self::Csv { source } => write!(f, "CSV export error: {source}"),
            Self::Json { source } => write!(f, "JSON export error: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<ExportError> for OopsleuthError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for oopsleuth results.
pub type Result<T> = std::result::Result<T, OopsleuthError>;
