// oopsleuth - core/model.rs
//
// Core data model: the kernel-oops frame value type.
// Pure data definition with no I/O, no CLI, no platform dependencies.
//
// This is the shared vocabulary across parsing, comparison, filtering,
// and export.

use serde::Serialize;

// =============================================================================
// Kernel oops frame (normalised output of parsing)
// =============================================================================

/// A single stack frame from a kernel-oops backtrace.
///
/// One frame corresponds to one backtrace line, naming the function active
/// at that stack position and, when the line encodes "X from Y", the
/// function that called into it via the mirrored `from_*` field group.
///
/// All fields are public: the frame is a plain value object with no
/// validation on mutation. It deliberately accepts semantically inconsistent
/// states (an offset without a name, for instance) so partially-specified
/// frames can be built up incrementally.
///
/// Absence conventions:
/// - numeric fields use `0` as the "not present in the line" sentinel
///   (a mapped address of zero does not occur in practice),
/// - string fields use `None`; present strings are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KernelOopsFrame {
    /// False when the kernel's stack unwinder marked the line with `?`,
    /// meaning the entry may be a stale value on the stack rather than a
    /// genuine return address.
    pub reliable: bool,

    /// Instruction address, 64-bit. `0` means the line carried no address.
    pub address: u64,

    /// Resolved symbol name, if the line carried one.
    pub function_name: Option<String>,

    /// Byte offset of the address within the function (`+0x..`). `0` = absent.
    pub function_offset: u64,

    /// Total length of the function (`/0x..`). `0` = absent.
    pub function_length: u64,

    /// Kernel module the symbol belongs to (`[module]`).
    pub module_name: Option<String>,

    /// Caller address from a `from` clause. `0` = absent.
    pub from_address: u64,

    /// Caller symbol name from a `from` clause.
    pub from_function_name: Option<String>,

    /// Caller function offset. `0` = absent.
    pub from_function_offset: u64,

    /// Caller function length. `0` = absent.
    pub from_function_length: u64,

    /// Caller module name.
    pub from_module_name: Option<String>,
}

impl Default for KernelOopsFrame {
    fn default() -> Self {
        Self {
            reliable: true,
            address: 0,
            function_name: None,
            function_offset: 0,
            function_length: 0,
            module_name: None,
            from_address: 0,
            from_function_name: None,
            from_function_offset: 0,
            from_function_length: 0,
            from_module_name: None,
        }
    }
}

impl KernelOopsFrame {
    /// Creates an empty frame: `reliable = true`, every other field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every field is at its default/absent value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true if any `from_*` field is non-default.
    ///
    /// Used by the formatter to decide whether a ` from ` clause is emitted.
    pub fn has_from_part(&self) -> bool {
        self.from_address != 0
            || self.from_function_name.is_some()
            || self.from_function_offset != 0
            || self.from_function_length != 0
            || self.from_module_name.is_some()
    }

    /// Produces an independent deep copy of the frame.
    ///
    /// Every owned string is copied, so mutating the duplicate never affects
    /// the original and vice versa.
    ///
    /// `link_siblings` is reserved for a higher-level backtrace aggregator
    /// that maintains next-frame links between frames; a standalone frame
    /// has no such links, so the flag currently has no observable effect.
    pub fn duplicate(&self, link_siblings: bool) -> Self {
        let _ = link_siblings;
        self.clone()
    }
}
