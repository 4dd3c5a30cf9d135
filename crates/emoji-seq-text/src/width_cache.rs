#![forbid(unsafe_code)]

//! LRU cache for emoji width estimates.
//!
//! Chat and reaction surfaces re-measure the same few hundred emoji over
//! and over. [`WidthCache`] remembers [`count_width`] results per code point
//! sequence so repeated lookups skip the scan.
//!
//! # Example
//! ```
//! use emoji_seq_text::WidthCache;
//!
//! let mut cache = WidthCache::new(256);
//! let thumbs = [0x1F44D, 0x1F3FD];
//!
//! assert_eq!(cache.get_or_compute(&thumbs), 1);
//! assert_eq!(cache.get_or_compute(&thumbs), 1);
//!
//! let stats = cache.stats();
//! assert_eq!(stats.hits, 1);
//! assert_eq!(stats.misses, 1);
//! ```

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxHasher;

use crate::width::count_width;

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum capacity.
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate in `0.0..=1.0`; zero before any lookup.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of width estimates keyed by code point sequence.
///
/// Keys are 64-bit FxHash digests of the sequence, not the sequence itself;
/// a collision returns the other sequence's width.
///
/// Not thread-safe. Wrap in a mutex or keep one per thread.
#[derive(Debug)]
pub struct WidthCache {
    cache: LruCache<u64, usize>,
    hits: u64,
    misses: u64,
}

impl WidthCache {
    /// Create a cache holding up to `capacity` entries (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(non_zero(capacity)),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a cache with [`DEFAULT_CACHE_CAPACITY`].
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    /// Cached width of `points`, estimating and storing it on a miss.
    #[inline]
    pub fn get_or_compute(&mut self, points: &[u32]) -> usize {
        self.get_or_compute_with(points, count_width)
    }

    /// Like [`get_or_compute`](Self::get_or_compute) with a caller-supplied
    /// estimator.
    pub fn get_or_compute_with<F>(&mut self, points: &[u32], compute: F) -> usize
    where
        F: FnOnce(&[u32]) -> usize,
    {
        let key = hash_points(points);

        if let Some(&width) = self.cache.get(&key) {
            self.hits += 1;
            return width;
        }

        self.misses += 1;
        let width = compute(points);
        emoji_seq_core::trace!(points = points.len(), width, "width cache miss");
        self.cache.put(key, width);
        width
    }

    /// Whether `points` has a cached width. Does not touch LRU order.
    #[must_use]
    pub fn contains(&self, points: &[u32]) -> bool {
        self.cache.contains(&hash_points(points))
    }

    /// Cached width without computing; refreshes LRU order.
    #[must_use]
    pub fn get(&mut self, points: &[u32]) -> Option<usize> {
        self.cache.get(&hash_points(points)).copied()
    }

    /// Cached width without computing or touching LRU order.
    #[must_use]
    pub fn peek(&self, points: &[u32]) -> Option<usize> {
        self.cache.peek(&hash_points(points)).copied()
    }

    /// Drop every entry. Statistics are kept.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Zero the hit and miss counters.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Change the capacity, evicting least recently used entries if needed.
    pub fn resize(&mut self, capacity: usize) {
        self.cache.resize(non_zero(capacity));
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

fn non_zero(capacity: usize) -> NonZeroUsize {
    NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)
}

#[inline]
fn hash_points(points: &[u32]) -> u64 {
    let mut hasher = FxHasher::default();
    points.hash(&mut hasher);
    hasher.finish()
}
