// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Grid**: Thumbnail decode priorities and the reveal timeout
//! - **Lightbox**: Overlay transition delays
//! - **Gestures**: Swipe recognition thresholds
//! - **Header**: Scroll-velocity show/hide thresholds

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Number of leading thumbnails decoded eagerly before the grid reveal.
pub const EAGER_LOAD_COUNT: usize = 6;

/// Maximum time to wait for the eager thumbnails before revealing the grid
/// anyway (milliseconds).
pub const GRID_REVEAL_TIMEOUT_MS: u64 = 500;

/// Number of columns the thumbnail grid flows into.
pub const GRID_COLUMNS: usize = 3;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Delay between clearing the overlay image and setting the new source when
/// the lightbox opens (milliseconds). Prevents a stale frame from showing.
pub const LIGHTBOX_OPEN_CLEAR_DELAY_MS: u64 = 10;

/// Duration of the fade-out half of a navigation transition (milliseconds).
/// The source swap is scheduled after this delay.
pub const LIGHTBOX_FADE_MS: u64 = 300;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum horizontal displacement (logical pixels) for a touch sequence to
/// count as a swipe.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

// ==========================================================================
// Header Defaults
// ==========================================================================

/// Minimum per-frame scroll delta (logical pixels) before the header reacts.
pub const HEADER_SCROLL_DELTA_PX: f32 = 2.0;

/// Minimum absolute scroll offset (logical pixels) before downward motion is
/// allowed to hide the header.
pub const HEADER_MIN_SCROLL_OFFSET_PX: f32 = 30.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Grid validation
    assert!(EAGER_LOAD_COUNT > 0);
    assert!(GRID_REVEAL_TIMEOUT_MS > 0);
    assert!(GRID_COLUMNS > 0);

    // Lightbox validation
    assert!(LIGHTBOX_OPEN_CLEAR_DELAY_MS < LIGHTBOX_FADE_MS);

    // Gesture validation
    assert!(SWIPE_THRESHOLD_PX > 0.0);

    // Header validation
    assert!(HEADER_SCROLL_DELTA_PX > 0.0);
    assert!(HEADER_MIN_SCROLL_OFFSET_PX > HEADER_SCROLL_DELTA_PX);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_defaults_are_valid() {
        assert_eq!(EAGER_LOAD_COUNT, 6);
        assert_eq!(GRID_REVEAL_TIMEOUT_MS, 500);
    }

    #[test]
    fn lightbox_defaults_are_valid() {
        assert_eq!(LIGHTBOX_OPEN_CLEAR_DELAY_MS, 10);
        assert_eq!(LIGHTBOX_FADE_MS, 300);
        assert!(LIGHTBOX_OPEN_CLEAR_DELAY_MS < LIGHTBOX_FADE_MS);
    }

    #[test]
    fn swipe_threshold_is_valid() {
        assert_eq!(SWIPE_THRESHOLD_PX, 50.0);
    }

    #[test]
    fn header_defaults_are_valid() {
        assert_eq!(HEADER_SCROLL_DELTA_PX, 2.0);
        assert_eq!(HEADER_MIN_SCROLL_OFFSET_PX, 30.0);
        assert!(HEADER_MIN_SCROLL_OFFSET_PX > HEADER_SCROLL_DELTA_PX);
    }
}
