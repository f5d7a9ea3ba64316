// SPDX-License-Identifier: MPL-2.0
//! Sequence navigation for managing the lightbox navigation context.
//!
//! This module provides a shared `SequenceNavigator` that maintains a single
//! source of truth for the active category, its ordered image sequence, and
//! the current position within it.

use crate::portfolio::ImageSource;

/// Manages navigation through the image sequence of the active category.
///
/// Navigation wraps around at both ends. All operations are no-ops on an
/// empty sequence, so callers never need to guard the empty case themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceNavigator {
    /// Ordered images of the active category.
    sequence: Vec<ImageSource>,
    /// Name of the active category, if any.
    category: Option<String>,
    /// Index of the current image. `None` until a sequence is seeded.
    current_index: Option<usize>,
}

impl SequenceNavigator {
    /// Creates a new empty navigator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the navigation context with a category sequence, starting at
    /// `index`. An out-of-range index is clamped onto the sequence; seeding
    /// an empty sequence leaves the navigator without a current image.
    pub fn seed(&mut self, category: &str, sequence: Vec<ImageSource>, index: usize) {
        self.current_index = if sequence.is_empty() {
            None
        } else {
            Some(index.min(sequence.len() - 1))
        };
        self.sequence = sequence;
        self.category = Some(category.to_string());
    }

    /// Clears the navigation context entirely.
    pub fn clear(&mut self) {
        self.sequence.clear();
        self.category = None;
        self.current_index = None;
    }

    /// Returns the currently selected image, if any.
    #[must_use]
    pub fn current(&self) -> Option<&ImageSource> {
        self.sequence.get(self.current_index?)
    }

    /// Advances to the next image and returns it.
    ///
    /// Returns `None` if the sequence is empty. Wraps around to the first
    /// image when at the last one.
    pub fn navigate_next(&mut self) -> Option<&ImageSource> {
        let len = self.sequence.len();
        if len == 0 {
            return None;
        }
        let next = (self.current_index.unwrap_or(0) + 1) % len;
        self.current_index = Some(next);
        self.sequence.get(next)
    }

    /// Retreats to the previous image and returns it.
    ///
    /// Returns `None` if the sequence is empty. Wraps around to the last
    /// image when at the first one.
    pub fn navigate_previous(&mut self) -> Option<&ImageSource> {
        let len = self.sequence.len();
        if len == 0 {
            return None;
        }
        let prev = (self.current_index.unwrap_or(0) + len - 1) % len;
        self.current_index = Some(prev);
        self.sequence.get(prev)
    }

    /// Returns the image after the current one without moving, for prefetch.
    #[must_use]
    pub fn peek_next(&self) -> Option<&ImageSource> {
        let len = self.sequence.len();
        if len == 0 {
            return None;
        }
        self.sequence.get((self.current_index? + 1) % len)
    }

    /// Returns the image before the current one without moving, for prefetch.
    #[must_use]
    pub fn peek_previous(&self) -> Option<&ImageSource> {
        let len = self.sequence.len();
        if len == 0 {
            return None;
        }
        self.sequence.get((self.current_index? + len - 1) % len)
    }

    /// Name of the active category, if one is seeded.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the current index, if set.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// One-based position and total, for the "i / N" indicator.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        Some((self.current_index? + 1, self.sequence.len()))
    }

    /// Returns the total number of images in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Checks if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(names: &[&str]) -> Vec<ImageSource> {
        names
            .iter()
            .map(|n| ImageSource {
                src: (*n).to_string(),
            })
            .collect()
    }

    #[test]
    fn new_navigator_is_empty() {
        let nav = SequenceNavigator::new();
        assert!(nav.is_empty());
        assert_eq!(nav.len(), 0);
        assert_eq!(nav.current(), None);
        assert_eq!(nav.category(), None);
    }

    #[test]
    fn seed_selects_requested_index() {
        let mut nav = SequenceNavigator::new();
        nav.seed("ritratti", sources(&["a", "b", "c"]), 1);

        assert_eq!(nav.category(), Some("ritratti"));
        assert_eq!(nav.current_index(), Some(1));
        assert_eq!(nav.current().map(|s| s.src.as_str()), Some("b"));
    }

    #[test]
    fn seed_clamps_out_of_range_index() {
        let mut nav = SequenceNavigator::new();
        nav.seed("ritratti", sources(&["a", "b"]), 9);
        assert_eq!(nav.current_index(), Some(1));
    }

    #[test]
    fn navigate_next_advances_and_wraps() {
        let mut nav = SequenceNavigator::new();
        nav.seed("ritratti", sources(&["a", "b", "c"]), 0);

        assert_eq!(nav.navigate_next().map(|s| s.src.as_str()), Some("b"));
        assert_eq!(nav.navigate_next().map(|s| s.src.as_str()), Some("c"));
        assert_eq!(nav.navigate_next().map(|s| s.src.as_str()), Some("a")); // wraps
    }

    #[test]
    fn navigate_previous_wraps_to_last() {
        let mut nav = SequenceNavigator::new();
        nav.seed("paesaggio", sources(&["a", "b", "c"]), 0);

        assert_eq!(nav.navigate_previous().map(|s| s.src.as_str()), Some("c"));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut nav = SequenceNavigator::new();
        nav.seed("paesaggio", sources(&["a", "b", "c", "d"]), 2);

        for _ in 0..4 {
            nav.navigate_next();
        }
        assert_eq!(nav.current_index(), Some(2));
    }

    #[test]
    fn empty_sequence_navigation_is_noop() {
        let mut nav = SequenceNavigator::new();
        nav.seed("flora", Vec::new(), 0);

        assert_eq!(nav.navigate_next(), None);
        assert_eq!(nav.navigate_previous(), None);
        assert_eq!(nav.current(), None);
        assert_eq!(nav.position(), None);
    }

    #[test]
    fn peek_does_not_move_current() {
        let mut nav = SequenceNavigator::new();
        nav.seed("ritratti", sources(&["a", "b", "c"]), 0);

        assert_eq!(nav.peek_next().map(|s| s.src.as_str()), Some("b"));
        assert_eq!(nav.peek_previous().map(|s| s.src.as_str()), Some("c"));
        assert_eq!(nav.current_index(), Some(0));
    }

    #[test]
    fn position_is_one_based() {
        let mut nav = SequenceNavigator::new();
        nav.seed("ritratti", sources(&["a", "b", "c"]), 2);
        assert_eq!(nav.position(), Some((3, 3)));
    }

    #[test]
    fn clear_resets_context() {
        let mut nav = SequenceNavigator::new();
        nav.seed("ritratti", sources(&["a"]), 0);
        nav.clear();

        assert!(nav.is_empty());
        assert_eq!(nav.category(), None);
        assert_eq!(nav.current(), None);
    }
}
