// oopsleuth - core/format.rs
//
// Canonical textual rendering of a frame, mirroring the parser grammar
// field for field. Core layer: pure formatting, no I/O.

use crate::core::model::KernelOopsFrame;
use std::fmt;

/// Renders the canonical display form of the frame.
///
/// Fields at their default/absent value are omitted: an address of 0 is not
/// printed, zero offset/length are not printed, absent strings are not
/// printed, and the ` from ` clause appears only when some `from_*` field
/// is non-default. Addresses render zero-padded to 16 digits with the
/// closing bracket before the separating space: `[0xXXXXXXXXXXXXXXXX] `.
///
/// Re-parsing the canonical form yields an equal frame as long as the
/// string fields contain no grammar-reserved text (the token `from`,
/// brackets, `+`, `/`); frames mutated to contain such strings render but
/// do not round-trip.
impl fmt::Display for KernelOopsFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.address != 0 {
            write!(f, "[0x{:016x}] ", self.address)?;
        }
        if !self.reliable {
            f.write_str("? ")?;
        }
        if let Some(name) = &self.function_name {
            f.write_str(name)?;
        }
        if self.function_offset != 0 {
            write!(f, "+0x{:x}", self.function_offset)?;
        }
        if self.function_length != 0 {
            write!(f, "/0x{:x}", self.function_length)?;
        }
        if let Some(module) = &self.module_name {
            write!(f, " [{module}]")?;
        }

        if self.has_from_part() {
            f.write_str(" from ")?;
        }
        if self.from_address != 0 {
            write!(f, "[0x{:016x}] ", self.from_address)?;
        }
        if let Some(name) = &self.from_function_name {
            f.write_str(name)?;
        }
        if self.from_function_offset != 0 {
            write!(f, "+0x{:x}", self.from_function_offset)?;
        }
        if self.from_function_length != 0 {
            write!(f, "/0x{:x}", self.from_function_length)?;
        }
        if let Some(module) = &self.from_module_name {
            write!(f, " [{module}]")?;
        }

        Ok(())
    }
}

impl KernelOopsFrame {
    /// The canonical form as an owned string. Equivalent to `to_string()`;
    /// named for discoverability next to `parse_frame`.
    pub fn canonical_string(&self) -> String {
        self.to_string()
    }
}
