// SPDX-License-Identifier: MPL-2.0
//! Image prefetch cache for faster lightbox navigation.
//!
//! This module provides background preloading of the images adjacent to the
//! current lightbox position, reducing perceived latency when navigating.
//! A cache hit also lets the fade transition skip the load wait entirely,
//! the equivalent of swapping to an already-decoded frame.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used images are evicted first
//! - **Memory-bounded**: Total cache size limited by configurable byte limit
//! - **Source-keyed**: Images indexed by their `src` string

use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Default prefetch cache size in bytes (32 MB).
/// Allows ~4 full HD images (8 MB each) or ~16 smaller images.
pub const DEFAULT_PREFETCH_CACHE_BYTES: usize = 32 * 1024 * 1024;

/// Minimum prefetch cache size in bytes (8 MB).
pub const MIN_PREFETCH_CACHE_BYTES: usize = 8 * 1024 * 1024;

/// Maximum prefetch cache size in bytes (128 MB).
pub const MAX_PREFETCH_CACHE_BYTES: usize = 128 * 1024 * 1024;

/// Default maximum number of images to cache.
pub const DEFAULT_MAX_IMAGES: usize = 16;

/// Minimum images to cache.
pub const MIN_MAX_IMAGES: usize = 4;

/// Maximum images to cache.
pub const MAX_MAX_IMAGES: usize = 32;

/// Configuration for the prefetch cache.
#[derive(Debug, Clone, Copy)]
pub struct PrefetchConfig {
    /// Maximum cache size in bytes.
    pub max_bytes: usize,

    /// Maximum number of images to cache.
    pub max_images: usize,

    /// Whether prefetching is enabled.
    pub enabled: bool,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_PREFETCH_CACHE_BYTES,
            max_images: DEFAULT_MAX_IMAGES,
            enabled: true,
        }
    }
}

impl PrefetchConfig {
    /// Creates a new prefetch configuration with specified limits.
    #[must_use]
    pub fn new(max_bytes: usize, max_images: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(MIN_PREFETCH_CACHE_BYTES, MAX_PREFETCH_CACHE_BYTES),
            max_images: max_images.clamp(MIN_MAX_IMAGES, MAX_MAX_IMAGES),
            enabled: true,
        }
    }

    /// Creates a disabled prefetch configuration.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

/// Cached image entry with metadata.
#[derive(Debug, Clone)]
struct CacheEntry {
    /// The loaded image data.
    image: Arc<ImageData>,

    /// Size of this entry in bytes (width * height * 4 for RGBA).
    size_bytes: usize,
}

impl CacheEntry {
    fn new(image: ImageData) -> Self {
        let size_bytes = image.size_bytes();
        Self {
            image: Arc::new(image),
            size_bytes,
        }
    }
}

/// LRU cache for prefetched images.
///
/// Provides memory-bounded caching with LRU eviction policy.
/// Optimized for navigation between adjacent images in a sequence.
pub struct ImagePrefetchCache {
    /// LRU cache mapping image sources to entries.
    cache: LruCache<String, CacheEntry>,

    /// Cache configuration.
    config: PrefetchConfig,

    /// Current total size in bytes.
    current_bytes: usize,
}

impl ImagePrefetchCache {
    /// Creates a new prefetch cache with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if `DEFAULT_MAX_IMAGES` is zero, which would indicate a build
    /// configuration error.
    #[must_use]
    pub fn new(config: PrefetchConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(
            NonZeroUsize::new(DEFAULT_MAX_IMAGES).expect("DEFAULT_MAX_IMAGES must be non-zero"),
        );

        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
        }
    }

    /// Creates a new prefetch cache with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PrefetchConfig::default())
    }

    /// Returns whether prefetching is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Inserts an image into the cache.
    ///
    /// Returns `true` if the image was inserted, `false` if caching is
    /// disabled or the image is too large.
    pub fn insert(&mut self, src: String, image: ImageData) -> bool {
        if !self.config.enabled {
            return false;
        }

        let entry = CacheEntry::new(image);
        let image_size = entry.size_bytes;

        // Don't cache images larger than half the cache size
        if image_size > self.config.max_bytes / 2 {
            return false;
        }

        // Evict images until we have room
        while self.current_bytes + image_size > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
            }
        }

        // Check if we already have this source (update if so)
        if let Some(existing) = self.cache.pop(&src) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        self.current_bytes += entry.size_bytes;
        self.cache.put(src, entry);

        true
    }

    /// Gets an image from the cache by source.
    ///
    /// Updates LRU order on access. Returns a clone of the `ImageData` (the
    /// handle is reference-counted internally).
    pub fn get(&mut self, src: &str) -> Option<ImageData> {
        if !self.config.enabled {
            return None;
        }

        self.cache.get(src).map(|entry| (*entry.image).clone())
    }

    /// Checks if an image is cached without updating LRU order.
    #[must_use]
    pub fn contains(&self, src: &str) -> bool {
        if !self.config.enabled {
            return false;
        }
        self.cache.contains(src)
    }

    /// Returns the sources among `candidates` that still need prefetching.
    #[must_use]
    pub fn sources_to_prefetch(&self, candidates: &[String]) -> Vec<String> {
        if !self.config.enabled {
            return Vec::new();
        }

        candidates
            .iter()
            .filter(|src| !self.cache.contains(src.as_str()))
            .cloned()
            .collect()
    }

    /// Clears all cached images.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
    }

    /// Returns the current number of cached images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the current memory usage in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}
