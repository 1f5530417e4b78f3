#![forbid(unsafe_code)]

//! Text measurement capability and memoization.
//!
//! Wrapping needs exactly one thing from its host: the rendered width of a
//! string under a font style, in the same linear unit as the wrap budget.
//! [`FontMetrics`] is that capability. Implementations typically hold a
//! rasterizer or canvas surface; the wrapping pipeline never owns one, it
//! only calls `measure` and checks `is_available` once per top-level call.
//!
//! [`FixedAdvance`] is the deterministic reference backend (uniform advance
//! per grapheme cluster). [`MetricsCache`] memoizes any backend behind an
//! LRU map, which pays off because the packer re-measures the whole current
//! line on every token.

use lru::LruCache;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use unicode_segmentation::UnicodeSegmentation;

/// Abstract text measurement backend.
///
/// `font` is an opaque style descriptor (e.g. `"12pt monospace"`); it is
/// passed through verbatim and never interpreted here. The trait is
/// object-safe so callers can switch backends at runtime.
pub trait FontMetrics {
    /// Rendered width of `text` under `font`.
    ///
    /// The returned width and the wrap budget must share one linear unit
    /// (typically pixels). Widths are non-negative.
    fn measure(&mut self, text: &str, font: &str) -> f64;

    /// Whether a usable measurement surface exists for this call.
    ///
    /// When this returns `false`, wrapping degrades to returning inputs
    /// unmodified and reports a diagnostic instead of failing.
    fn is_available(&self) -> bool {
        true
    }
}

/// Uniform-advance reference backend.
///
/// Every grapheme cluster advances by the same amount regardless of font.
/// Multi-codepoint clusters (ZWJ emoji, combining marks) count as a single
/// glyph. Suitable for monospace layouts and deterministic tests; real
/// hosts substitute a rasterizer-backed implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance {
    advance: f64,
}

impl FixedAdvance {
    /// Create a backend advancing `advance` units per grapheme cluster.
    #[must_use]
    pub const fn new(advance: f64) -> Self {
        Self { advance }
    }
}

impl FontMetrics for FixedAdvance {
    fn measure(&mut self, text: &str, _font: &str) -> f64 {
        self.advance * text.graphemes(true).count() as f64
    }
}

/// Cache key for one `(text, font)` measurement.
///
/// The strings are hashed rather than stored; the text length is kept as a
/// cheap extra discriminant against hash collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MeasureKey {
    text_hash: u64,
    text_len: u32,
    font_hash: u64,
}

impl MeasureKey {
    fn new(text: &str, font: &str) -> Self {
        let mut hasher = FxHasher::default();
        text.hash(&mut hasher);
        let text_hash = hasher.finish();

        let mut hasher = FxHasher::default();
        font.hash(&mut hasher);
        let font_hash = hasher.finish();

        Self {
            text_hash,
            text_len: text.len() as u32,
            font_hash,
        }
    }
}

/// Statistics for a [`MetricsCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsCacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses (backend measurements).
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum capacity.
    pub capacity: usize,
}

impl MetricsCacheStats {
    /// Hit rate as a fraction (0.0 to 1.0).
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

/// LRU memoization wrapper around any [`FontMetrics`] backend.
///
/// The packer measures the accumulated line once per token, so the same
/// `(text, font)` pairs recur both within a call and across calls that wrap
/// similar content. The cache is not `Sync`; concurrent wrap calls should
/// each own their instance.
pub struct MetricsCache<M: FontMetrics> {
    backend: M,
    cache: LruCache<MeasureKey, f64>,
    stats: MetricsCacheStats,
}

impl<M: FontMetrics> MetricsCache<M> {
    /// Create a cache over `backend` holding at most `capacity` entries.
    ///
    /// A capacity of 0 is clamped to 1.
    pub fn new(backend: M, capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).expect("capacity must be > 0");
        Self {
            backend,
            cache: LruCache::new(cap),
            stats: MetricsCacheStats {
                capacity: cap.get(),
                ..Default::default()
            },
        }
    }

    /// Current cache statistics.
    #[must_use]
    pub fn stats(&self) -> MetricsCacheStats {
        self.stats
    }

    /// Consume the cache, returning the backend.
    pub fn into_inner(self) -> M {
        self.backend
    }
}

impl<M: FontMetrics> FontMetrics for MetricsCache<M> {
    fn measure(&mut self, text: &str, font: &str) -> f64 {
        let key = MeasureKey::new(text, font);

        if let Some(&width) = self.cache.get(&key) {
            self.stats.hits += 1;
            return width;
        }

        self.stats.misses += 1;
        let width = self.backend.measure(text, font);
        self.cache.put(key, width);
        self.stats.size = self.cache.len();
        width
    }

    fn is_available(&self) -> bool {
        self.backend.is_available()
    }
}
