// SPDX-License-Identifier: MPL-2.0
//! Image loading, decode scheduling, and caching for the grid and lightbox.

pub mod image;
pub mod loader;
pub mod prefetch;

// Re-export commonly used types
pub use image::{load_image, ImageData};
pub use loader::LoadPriority;
pub use prefetch::{ImagePrefetchCache, PrefetchConfig};
