#![forbid(unsafe_code)]

//! Conversions between `str` and code point sequences, plus string-facing
//! shorthands for the segmenter, the width estimator and labels.
//!
//! ```
//! use emoji_seq_text::points::{clusters_str, count_width_str, decode, encode};
//!
//! let points = decode("\u{1F1E6}\u{1F1FA}\u{1F602}");
//! assert_eq!(points.as_slice(), &[0x1F1E6, 0x1F1FA, 0x1F602]);
//! assert_eq!(encode(&points).as_deref(), Some("\u{1F1E6}\u{1F1FA}\u{1F602}"));
//!
//! assert_eq!(count_width_str("\u{1F1E6}\u{1F1FA}\u{1F602}"), 2);
//! assert_eq!(clusters_str("\u{1F1E6}\u{1F1FA}\u{1F602}").count(), 2);
//! ```

use smallvec::SmallVec;

use crate::cluster::clusters;
use crate::stringify::{StringifyOptions, stringify};
use crate::width::count_width;

/// Decoded code points. Most emoji fit inline.
pub type Points = SmallVec<[u32; 8]>;

/// Decode `text` into its Unicode scalar values.
#[must_use]
pub fn decode(text: &str) -> Points {
    text.chars().map(u32::from).collect()
}

/// Encode code points back into a `String`.
///
/// Returns `None` if any value is not a Unicode scalar value (a surrogate
/// or above `0x10FFFF`).
#[must_use]
pub fn encode(points: &[u32]) -> Option<String> {
    points.iter().map(|&p| char::from_u32(p)).collect()
}

/// Width estimate of `text`.
#[must_use]
pub fn count_width_str(text: &str) -> usize {
    count_width(&decode(text))
}

/// Label of `text` under `opts`.
#[must_use]
pub fn stringify_str(text: &str, opts: &StringifyOptions) -> String {
    stringify(&decode(text), opts)
}

/// Owning iterator over the emoji clusters of a decoded string.
///
/// Created by [`clusters_str`].
#[derive(Debug, Clone)]
pub struct StrClusters {
    points: Points,
    ends: std::vec::IntoIter<usize>,
    start: usize,
}

impl Iterator for StrClusters {
    type Item = Points;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.ends.next()?;
        let cluster = Points::from_slice(&self.points[self.start..end]);
        self.start = end;
        Some(cluster)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ends.size_hint()
    }
}

impl ExactSizeIterator for StrClusters {}

/// Decode `text` and iterate over its emoji clusters as owned point runs.
#[must_use]
pub fn clusters_str(text: &str) -> StrClusters {
    let points = decode(text);
    let mut end = 0;
    let ends = clusters(&points)
        .map(|cluster| {
            end += cluster.len();
            end
        })
        .collect::<Vec<_>>()
        .into_iter();
    StrClusters {
        points,
        ends,
        start: 0,
    }
}
