#![forbid(unsafe_code)]

//! Emoji cluster segmentation.
//!
//! A cluster is a contiguous run of code points that renders as one emoji:
//! a flag, a keycap, a skin-toned glyph, a ZWJ-joined family, a tag
//! sequence. [`clusters`] splits a code point slice into such runs in a
//! single forward pass, lazily, yielding sub-slices of the input.
//!
//! The scan keeps one accumulator tagged with a [`ClusterMode`]. A cluster
//! boundary is only known once the first point of the next cluster is seen,
//! so the previous run is yielded at that moment.
//!
//! # Example
//! ```
//! use emoji_seq_text::cluster::clusters;
//!
//! // 👩‍❤‍👨 followed by 🗣
//! let points = [0x1F469, 0x200D, 0x2764, 0x200D, 0x1F468, 0x1F5E3];
//! let runs: Vec<&[u32]> = clusters(&points).collect();
//! assert_eq!(runs, vec![&points[..5], &points[5..]]);
//! ```

use std::iter::FusedIterator;

use emoji_seq_core::classify::{self, PointKind};

/// Accumulation mode of the cluster being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClusterMode {
    /// Collecting regional indicator letters.
    Flag,
    /// Collecting everything else.
    #[default]
    Default,
}

/// Lazy iterator over the emoji clusters of a code point slice.
///
/// Created by [`clusters`]. Clusters are never empty and, concatenated in
/// order, reproduce the input exactly.
#[derive(Debug, Clone)]
pub struct Clusters<'a> {
    points: &'a [u32],
    /// Start of the accumulator being built.
    start: usize,
    /// Next point to scan.
    pos: usize,
    mode: ClusterMode,
}

impl<'a> Clusters<'a> {
    /// Start a scan over `points`.
    #[must_use]
    pub const fn new(points: &'a [u32]) -> Self {
        Self {
            points,
            start: 0,
            pos: 0,
            mode: ClusterMode::Default,
        }
    }

    /// Mode of the accumulator currently being built.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> ClusterMode {
        self.mode
    }

    /// Points not yet returned in a cluster.
    #[inline]
    #[must_use]
    pub fn remainder(&self) -> &'a [u32] {
        &self.points[self.start..]
    }

    /// Feed `points[index]` to the accumulator. Returns `true` if the point
    /// opens a new accumulator, closing the current one.
    fn opens_cluster(&mut self, index: usize) -> bool {
        match classify::point_kind(self.points, index) {
            PointKind::Flag => self.switch_mode(ClusterMode::Flag),
            PointKind::Modifier | PointKind::Joiner => self.switch_mode(ClusterMode::Default),
            PointKind::Ordinary => {
                // An ordinary point joins the current run only right after a
                // ZWJ, or when the run is still empty.
                if index == self.start || classify::is_zwj(self.points[index - 1]) {
                    false
                } else {
                    self.mode = ClusterMode::Default;
                    true
                }
            }
        }
    }

    fn switch_mode(&mut self, mode: ClusterMode) -> bool {
        if self.mode == mode {
            false
        } else {
            self.mode = mode;
            true
        }
    }
}

impl<'a> Iterator for Clusters<'a> {
    type Item = &'a [u32];

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.points.len() {
            let index = self.pos;
            self.pos += 1;
            if self.opens_cluster(index) {
                let closed = &self.points[self.start..index];
                self.start = index;
                // A mode switch on the very first point closes an empty run.
                if !closed.is_empty() {
                    return Some(closed);
                }
            }
        }

        if self.start < self.points.len() {
            let tail = &self.points[self.start..];
            self.start = self.points.len();
            return Some(tail);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.points.len() - self.start;
        (usize::from(left > 0), Some(left))
    }
}

impl FusedIterator for Clusters<'_> {}

/// Iterate over the emoji clusters of `points`.
///
/// The iterator borrows `points` and holds no other state, so calling this
/// again on the same input yields the same clusters.
#[inline]
#[must_use]
pub const fn clusters(points: &[u32]) -> Clusters<'_> {
    Clusters::new(points)
}

/// Collect the emoji clusters of `points` into owned vectors.
#[must_use]
pub fn segment(points: &[u32]) -> Vec<Vec<u32>> {
    clusters(points).map(<[u32]>::to_vec).collect()
}

/// Split a run of regional indicators into two-letter flags.
///
/// The segmenter keeps any number of consecutive flag letters together;
/// this pairs them up left to right, leaving a trailing odd letter on its
/// own. A cluster that is not made only of regional indicators is returned
/// whole.
///
/// ```
/// use emoji_seq_text::cluster::flag_pairs;
///
/// let run = [0x1F1E6, 0x1F1FA, 0x1F1FA];
/// let pairs: Vec<&[u32]> = flag_pairs(&run).collect();
/// assert_eq!(pairs, vec![&run[..2], &run[2..]]);
/// ```
#[must_use]
pub fn flag_pairs(cluster: &[u32]) -> std::slice::Chunks<'_, u32> {
    let size = if cluster.iter().all(|&p| classify::is_flag_point(p)) {
        2
    } else {
        cluster.len().max(1)
    };
    cluster.chunks(size)
}
