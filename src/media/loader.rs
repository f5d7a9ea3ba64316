// SPDX-License-Identifier: MPL-2.0
//! Decode scheduling for the thumbnail grid.
//!
//! The grid decodes a small leading subset of thumbnails before it becomes
//! visible and defers the rest until after the reveal. A fixed timeout bounds
//! how long the reveal can wait on slow or broken files: an image that fails
//! to decode still counts as settled and never blocks the grid.

use crate::config::{EAGER_LOAD_COUNT, GRID_REVEAL_TIMEOUT_MS};
use crate::error::Result;
use crate::media::image::{load_image, ImageData};
use std::time::Duration;

/// Decode priority assigned to a thumbnail based on its grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPriority {
    /// Decoded before the grid reveal.
    Eager,
    /// Decoded in a deferred pass after the reveal.
    Lazy,
}

impl LoadPriority {
    /// Priority for the thumbnail at `index`: the first
    /// [`EAGER_LOAD_COUNT`] positions are eager, the rest lazy.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        if index < EAGER_LOAD_COUNT {
            Self::Eager
        } else {
            Self::Lazy
        }
    }

    #[must_use]
    pub fn is_eager(self) -> bool {
        matches!(self, Self::Eager)
    }
}

/// Decodes one image source off the UI thread.
///
/// The result is always delivered, success or failure; the caller marks the
/// slot settled either way.
pub async fn load_source(src: String) -> Result<ImageData> {
    let handle = tokio::task::spawn_blocking(move || load_image(&src));
    match handle.await {
        Ok(result) => result,
        Err(join_error) => Err(crate::error::Error::Io(join_error.to_string())),
    }
}

/// Sleeps for the grid reveal timeout.
///
/// Raced against the eager decode batch: whichever finishes first reveals
/// the grid.
pub async fn reveal_timeout() {
    tokio::time::sleep(Duration::from_millis(GRID_REVEAL_TIMEOUT_MS)).await;
}
