// oopsleuth - core/filter.rs
//
// Composable filter engine for parsed frames.
// All active filters are AND-combined.
// Core layer: pure logic, no I/O or CLI dependencies.

use crate::core::model::KernelOopsFrame;
use crate::util::constants::MAX_REGEX_PATTERN_LENGTH;
use crate::util::error::FilterError;
use regex::Regex;
use std::collections::HashSet;

/// Complete filter state. All fields are AND-combined when applied.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Keep only frames the unwinder considered reliable (no `?` marker).
    pub reliable_only: bool,

    /// Module names to include (empty = all). Frames with no module never
    /// match a non-empty set.
    pub modules: HashSet<String>,

    /// Substring search on the function name (case-insensitive).
    /// Empty = no filter.
    pub name_search: String,

    /// Compiled regex applied to the canonical form. None = no regex filter.
    pub regex_search: Option<Regex>,
}

impl FilterState {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        !self.reliable_only
            && self.modules.is_empty()
            && self.name_search.is_empty()
            && self.regex_search.is_none()
    }

    /// Set the regex search pattern, compiling it.
    /// Returns an error if the pattern is invalid or implausibly long.
    pub fn set_regex(&mut self, pattern: &str) -> Result<(), FilterError> {
        if pattern.is_empty() {
            self.regex_search = None;
            return Ok(());
        }
        if pattern.len() > MAX_REGEX_PATTERN_LENGTH {
            return Err(FilterError::PatternTooLong {
                length: pattern.len(),
                max_length: MAX_REGEX_PATTERN_LENGTH,
            });
        }
        let regex = Regex::new(pattern).map_err(|e| FilterError::InvalidRegex {
            pattern: pattern.to_string(),
            source: e,
        })?;
        self.regex_search = Some(regex);
        Ok(())
    }

    /// Quick-filter keeping only reliable frames.
    pub fn reliable_frames() -> Self {
        Self {
            reliable_only: true,
            ..Default::default()
        }
    }
}

/// Apply filters to a slice of frames, returning indices of matching frames.
///
/// Returns indices into the original slice rather than copies, so callers
/// can present a filtered view without duplicating frame data.
pub fn apply_filters(frames: &[KernelOopsFrame], filter: &FilterState) -> Vec<usize> {
    if filter.is_empty() {
        return (0..frames.len()).collect();
    }

    let name_lower = filter.name_search.to_lowercase();

    frames
        .iter()
        .enumerate()
        .filter(|(_, frame)| matches_all(frame, filter, &name_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check if a single frame matches all active filters.
fn matches_all(frame: &KernelOopsFrame, filter: &FilterState, name_lower: &str) -> bool {
    if filter.reliable_only && !frame.reliable {
        return false;
    }

    if !filter.modules.is_empty() {
        match &frame.module_name {
            Some(module) if filter.modules.contains(module) => {}
            _ => return false,
        }
    }

    if !name_lower.is_empty() {
        match &frame.function_name {
            Some(name) if name.to_lowercase().contains(name_lower) => {}
            _ => return false,
        }
    }

    if let Some(regex) = &filter.regex_search {
        if !regex.is_match(&frame.canonical_string()) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_frame;

    fn make_frames() -> Vec<KernelOopsFrame> {
        [
            "[0xffffffff8103f314] ? default_idle+0x24/0x40 [kernel]",
            "panic+0xe9/0x1e0",
            "ext4_readdir+0x1b0/0x4b0 [ext4]",
            "nfs_lookup+0x60/0x200 [nfs]",
        ]
        .iter()
        .map(|line| parse_frame(line).unwrap())
        .collect()
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let frames = make_frames();
        let result = apply_filters(&frames, &FilterState::default());
        assert_eq!(result, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_reliable_only_drops_marked_frames() {
        let frames = make_frames();
        let result = apply_filters(&frames, &FilterState::reliable_frames());
        assert_eq!(result, vec![1, 2, 3]); // frame 0 carries the ? marker
    }

    #[test]
    fn test_module_filter() {
        let frames = make_frames();
        let filter = FilterState {
            modules: HashSet::from(["ext4".to_string(), "nfs".to_string()]),
            ..Default::default()
        };
        let result = apply_filters(&frames, &filter);
        assert_eq!(result, vec![2, 3]);
    }

    #[test]
    fn test_name_search_case_insensitive() {
        let frames = make_frames();
        let filter = FilterState {
            name_search: "PANIC".to_string(),
            ..Default::default()
        };
        let result = apply_filters(&frames, &filter);
        assert_eq!(result, vec![1]);
    }

    #[test]
    fn test_regex_filter_on_canonical_form() {
        let frames = make_frames();
        let mut filter = FilterState::default();
        filter.set_regex(r"\+0x1b0/").unwrap();
        let result = apply_filters(&frames, &filter);
        assert_eq!(result, vec![2]);
    }

    #[test]
    fn test_combined_filters() {
        let frames = make_frames();
        let mut filter = FilterState {
            reliable_only: true,
            ..Default::default()
        };
        filter.set_regex(r"\[(ext4|kernel)\]$").unwrap();
        let result = apply_filters(&frames, &filter);
        assert_eq!(result, vec![2]); // kernel-module frame is unreliable
    }

    #[test]
    fn test_invalid_regex() {
        let mut filter = FilterState::default();
        assert!(filter.set_regex("[invalid").is_err());
    }

    #[test]
    fn test_oversized_pattern_rejected() {
        let mut filter = FilterState::default();
        let pattern = "a".repeat(MAX_REGEX_PATTERN_LENGTH + 1);
        assert!(matches!(
            filter.set_regex(&pattern),
            Err(FilterError::PatternTooLong { .. })
        ));
    }

    #[test]
    fn test_empty_pattern_clears_regex() {
        let mut filter = FilterState::default();
        filter.set_regex("panic").unwrap();
        filter.set_regex("").unwrap();
        assert!(filter.regex_search.is_none());
    }
}
