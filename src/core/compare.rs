// oopsleuth - core/compare.rs
//
// Total-order comparison between frames, the basis for duplicate-report
// clustering and stable sorting across large frame collections.
// Core layer: pure logic.

use crate::core::model::KernelOopsFrame;
use std::cmp::Ordering;

/// Three-way comparison between two frames.
///
/// Field precedence, most to least significant, applied to the primary
/// group and then (only on a full tie) to the mirrored `from_*` group:
///
///   1. `reliable`        — unreliable orders before reliable
///   2. `function_name`   — absent before present, then lexicographic
///   3. `address`         — numeric
///   4. `function_offset`, `function_length` — numeric
///   5. `module_name`     — absent before present, then lexicographic
///
/// Name-first ordering groups frames that agree on symbol name but differ
/// in raw address — usually the same crash location across different kernel
/// builds — while address remains a tiebreaker for frames with no symbol
/// resolution at all.
///
/// The comparison examines every field, so `Ordering::Equal` coincides with
/// structural equality (`==`).
pub fn compare(a: &KernelOopsFrame, b: &KernelOopsFrame) -> Ordering {
    a.reliable
        .cmp(&b.reliable)
        .then_with(|| a.function_name.cmp(&b.function_name))
        .then_with(|| a.address.cmp(&b.address))
        .then_with(|| a.function_offset.cmp(&b.function_offset))
        .then_with(|| a.function_length.cmp(&b.function_length))
        .then_with(|| a.module_name.cmp(&b.module_name))
        .then_with(|| a.from_function_name.cmp(&b.from_function_name))
        .then_with(|| a.from_address.cmp(&b.from_address))
        .then_with(|| a.from_function_offset.cmp(&b.from_function_offset))
        .then_with(|| a.from_function_length.cmp(&b.from_function_length))
        .then_with(|| a.from_module_name.cmp(&b.from_module_name))
}

impl Ord for KernelOopsFrame {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for KernelOopsFrame {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
