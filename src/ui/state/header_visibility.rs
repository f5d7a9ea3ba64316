// SPDX-License-Identifier: MPL-2.0
//! Header show/hide state driven by scroll velocity.
//!
//! Scroll events only record the latest offset and raise a pending flag;
//! the actual visibility decision runs at most once per animation frame,
//! however many scroll events arrived in between.

use crate::config::{HEADER_MIN_SCROLL_OFFSET_PX, HEADER_SCROLL_DELTA_PX};

/// Manages header visibility against the page scroll position.
#[derive(Debug, Clone, Default)]
pub struct HeaderVisibility {
    /// Offset the last visibility decision was based on.
    last_scroll_y: f32,

    /// Most recently reported offset, not yet processed.
    latest_scroll_y: f32,

    /// Whether the header is currently hidden.
    hidden: bool,

    /// Set between a scroll report and the next frame tick.
    frame_pending: bool,
}

impl HeaderVisibility {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scroll offset report. Cheap; the decision is deferred to
    /// [`Self::on_frame`].
    pub fn record_scroll(&mut self, scroll_y: f32) {
        self.latest_scroll_y = scroll_y;
        self.frame_pending = true;
    }

    /// Recomputes visibility from the latest recorded offset.
    ///
    /// Downward motion past the minimum offset hides the header; any upward
    /// motion beyond the small delta re-shows it. Does nothing when no scroll
    /// was recorded since the last frame.
    pub fn on_frame(&mut self) {
        if !self.frame_pending {
            return;
        }

        let delta = self.latest_scroll_y - self.last_scroll_y;

        if delta > HEADER_SCROLL_DELTA_PX && self.latest_scroll_y > HEADER_MIN_SCROLL_OFFSET_PX {
            self.hidden = true;
        } else if delta < -HEADER_SCROLL_DELTA_PX {
            self.hidden = false;
        }

        self.last_scroll_y = self.latest_scroll_y;
        self.frame_pending = false;
    }

    /// Whether a frame tick is needed to process a recorded scroll.
    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Resets to the initial visible state, e.g. on screen change.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
