// oopsleuth - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "oopsleuth";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Parsing limits
// =============================================================================

/// Maximum number of hex digits in an address, offset, or length numeral.
/// 16 digits is exactly 64 bits; longer numerals cannot be represented and
/// reject the whole frame rather than being truncated.
pub const MAX_ADDRESS_HEX_DIGITS: usize = 16;

/// Maximum length of a scanned line included in debug log output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Filter limits
// =============================================================================

/// Maximum user-supplied regex pattern length to prevent ReDoS.
pub const MAX_REGEX_PATTERN_LENGTH: usize = 4_096;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
