#![forbid(unsafe_code)]

//! Rendered width estimation for emoji sequences.
//!
//! The estimate counts half-cells in one pass: a typical glyph is two
//! halves, a flag letter one, modifiers nothing, and a ZWJ takes back the
//! two halves of the glyph it fuses into its neighbour. No clusters are
//! materialized.
//!
//! # Example
//! ```
//! use emoji_seq_text::width::count_width;
//!
//! assert_eq!(count_width(&[]), 0);
//! assert_eq!(count_width(&[0x1F602]), 1);
//! assert_eq!(count_width(&[0x1F602, 0x1F602, 0x1F602]), 3);
//! // 👩‍❤‍👨 renders as one glyph.
//! assert_eq!(count_width(&[0x1F469, 0x200D, 0x2764, 0x200D, 0x1F468]), 1);
//! ```

use emoji_seq_core::classify;

use crate::cluster::{Clusters, clusters};

/// Sum the half-cell contributions of `points`.
///
/// Signed: a run of joiners can drive the total below zero.
#[must_use]
pub fn half_units(points: &[u32]) -> i64 {
    (0..points.len())
        .map(|index| classify::point_kind(points, index).half_units())
        .sum()
}

/// Estimate how many cells `points` occupy when rendered.
///
/// Empty input is zero wide; any other input is at least one cell.
#[must_use]
pub fn count_width(points: &[u32]) -> usize {
    if points.is_empty() {
        return 0;
    }
    let half = half_units(points);
    if half <= 2 {
        1
    } else {
        // Positive here, so the cast is lossless; round half-cells up.
        ((half + 1) >> 1) as usize
    }
}

/// Iterator pairing each cluster with its own width estimate.
///
/// Created by [`cluster_widths`].
#[derive(Debug, Clone)]
pub struct ClusterWidths<'a> {
    inner: Clusters<'a>,
}

impl<'a> Iterator for ClusterWidths<'a> {
    type Item = (&'a [u32], usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|cluster| (cluster, count_width(cluster)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl std::iter::FusedIterator for ClusterWidths<'_> {}

/// Segment `points` and estimate each cluster's width independently.
#[must_use]
pub fn cluster_widths(points: &[u32]) -> ClusterWidths<'_> {
    ClusterWidths {
        inner: clusters(points),
    }
}
