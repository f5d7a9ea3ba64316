// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state management
//!
//! Tracks horizontal single-finger swipes over the lightbox. Any multi-touch
//! contact during a gesture marks the whole sequence as a pinch/zoom, which
//! suppresses swipe interpretation until the next fresh single-touch start.

use crate::config::SWIPE_THRESHOLD_PX;

/// Navigation direction resolved from a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: advance to the next image.
    Next,
    /// Finger moved right: go back to the previous image.
    Previous,
}

/// Manages per-gesture touch state.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    /// Horizontal position where the gesture started.
    start_x: Option<f32>,

    /// Set when more than one finger has touched during this sequence.
    multi_touch: bool,

    /// Number of fingers currently down.
    active_fingers: usize,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finger touching down at horizontal position `x`.
    pub fn finger_pressed(&mut self, x: f32) {
        self.active_fingers += 1;

        if self.active_fingers > 1 {
            self.multi_touch = true;
            return;
        }

        // Fresh single touch resets the suppression flag
        self.multi_touch = false;
        self.start_x = Some(x);
    }

    /// Records a finger lifting at horizontal position `x` and resolves the
    /// gesture.
    ///
    /// Returns a direction only for a single-finger gesture whose horizontal
    /// displacement exceeds [`SWIPE_THRESHOLD_PX`]. A sequence that was ever
    /// multi-touch resolves to `None`, regardless of displacement.
    pub fn finger_lifted(&mut self, x: f32) -> Option<SwipeDirection> {
        self.active_fingers = self.active_fingers.saturating_sub(1);

        if self.multi_touch {
            if self.active_fingers == 0 {
                self.start_x = None;
            }
            return None;
        }

        let start = self.start_x.take()?;
        let diff = x - start;

        if diff.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }

        if diff < 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }

    /// Records a finger being lost (e.g. the system canceled the touch).
    /// Never resolves to a swipe.
    pub fn finger_canceled(&mut self) {
        self.active_fingers = self.active_fingers.saturating_sub(1);
        if self.active_fingers == 0 {
            self.start_x = None;
        }
    }

    /// Whether the current sequence has been marked multi-touch.
    #[must_use]
    pub fn is_multi_touch(&self) -> bool {
        self.multi_touch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_swipe_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.finger_pressed(100.0);
        assert_eq!(tracker.finger_lifted(130.0), None);
    }

    #[test]
    fn left_swipe_past_threshold_is_next() {
        let mut tracker = SwipeTracker::new();
        tracker.finger_pressed(300.0);
        assert_eq!(tracker.finger_lifted(200.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn right_swipe_past_threshold_is_previous() {
        let mut tracker = SwipeTracker::new();
        tracker.finger_pressed(100.0);
        assert_eq!(tracker.finger_lifted(220.0), Some(SwipeDirection::Previous));
    }

    #[test]
    fn displacement_equal_to_threshold_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.finger_pressed(0.0);
        assert_eq!(tracker.finger_lifted(SWIPE_THRESHOLD_PX), None);
    }

    #[test]
    fn multi_touch_suppresses_swipe() {
        let mut tracker = SwipeTracker::new();
        tracker.finger_pressed(300.0);
        tracker.finger_pressed(320.0); // second finger: now a pinch

        // Both lifts stay suppressed, even past the threshold
        assert_eq!(tracker.finger_lifted(100.0), None);
        assert_eq!(tracker.finger_lifted(120.0), None);
    }

    #[test]
    fn suppression_ends_on_fresh_single_touch() {
        let mut tracker = SwipeTracker::new();
        tracker.finger_pressed(300.0);
        tracker.finger_pressed(320.0);
        tracker.finger_lifted(100.0);
        tracker.finger_lifted(120.0);
        assert!(tracker.is_multi_touch());

        // A new single-finger sequence works again
        tracker.finger_pressed(300.0);
        assert!(!tracker.is_multi_touch());
        assert_eq!(tracker.finger_lifted(180.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn canceled_finger_never_swipes() {
        let mut tracker = SwipeTracker::new();
        tracker.finger_pressed(300.0);
        tracker.finger_canceled();

        // Next sequence starts clean
        tracker.finger_pressed(300.0);
        assert_eq!(tracker.finger_lifted(180.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn lift_without_press_is_noop() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.finger_lifted(500.0), None);
    }
}
