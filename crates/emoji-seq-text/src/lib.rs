#![forbid(unsafe_code)]

//! Emoji sequence handling for emoji-seq.
//!
//! This crate works on code point slices (`&[u32]`):
//! - [`clusters`] - lazy split into independent emoji clusters
//! - [`count_width`] - rendered width estimate in cells
//! - [`stringify`] - hexadecimal labels such as `1f469_2764_1f468`
//! - [`WidthCache`] - LRU cache for width estimates
//! - [`points`] - `str` conversions and string shorthands
//!
//! # Example
//! ```
//! use emoji_seq_text::{clusters, count_width, stringify_default};
//!
//! // 👩‍💻 🇯🇵 1️⃣
//! let points = [0x1F469, 0x200D, 0x1F4BB, 0x1F1EF, 0x1F1F5, 0x31, 0xFE0F, 0x20E3];
//!
//! let labels: Vec<String> = clusters(&points).map(stringify_default).collect();
//! assert_eq!(labels, ["1f469_200d_1f4bb", "1f1ef_1f1f5", "31_20e3"]);
//! assert_eq!(count_width(&points), 3);
//! ```

pub mod cluster;
pub mod points;
pub mod stringify;
pub mod width;
pub mod width_cache;

pub use cluster::{ClusterMode, Clusters, clusters, flag_pairs, segment};
pub use points::{Points, StrClusters, clusters_str, count_width_str, decode, encode, stringify_str};
pub use stringify::{DEFAULT_SEPARATOR, StringifyOptions, stringify, stringify_default};
pub use width::{ClusterWidths, cluster_widths, count_width, half_units};
pub use width_cache::{CacheStats, DEFAULT_CACHE_CAPACITY, WidthCache};
