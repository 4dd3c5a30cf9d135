#![forbid(unsafe_code)]

//! emoji-seq public facade crate.
//!
//! Re-exports the classifier, segmenter, width estimator, labels and
//! version prober from the internal crates, plus a prelude for everyday use.
//!
//! ```
//! use emoji_seq::prelude::*;
//!
//! let points = decode("\u{1F44D}\u{1F3FD}\u{1F1EF}\u{1F1F5}");
//! let labels: Vec<String> = clusters(&points).map(stringify_default).collect();
//! assert_eq!(labels, ["1f44d_1f3fd", "1f1ef_1f1f5"]);
//! assert_eq!(count_width(&points), 2);
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use emoji_seq_core::{Classification, PointKind, classify, point_kind};

#[cfg(feature = "tracing-json")]
pub use emoji_seq_core::logging::{ENV_LOG_FILTER, init_json_logging};

// --- Text re-exports -------------------------------------------------------

pub use emoji_seq_text::{
    CacheStats, ClusterMode, ClusterWidths, Clusters, Points, StringifyOptions, WidthCache,
    cluster_widths, clusters, clusters_str, count_width, count_width_str, decode, encode,
    flag_pairs, segment, stringify, stringify_default, stringify_str,
};

// --- Probe re-exports ------------------------------------------------------

pub use emoji_seq_probe::{
    DEFAULT_BATTERY, EmojiVersion, MeasureText, ProbeConfig, ProbeError, ProbeTier, Prober,
    detect_version, probe_version, validate_battery,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for emoji-seq.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed probe battery.
    Probe(ProbeError),
    /// A value that is not a Unicode scalar value, with its index.
    InvalidCodePoint { index: usize, value: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Probe(err) => write!(f, "{err}"),
            Self::InvalidCodePoint { index, value } => {
                write!(f, "invalid code point {value:#x} at index {index}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Probe(err) => Some(err),
            Self::InvalidCodePoint { .. } => None,
        }
    }
}

impl From<ProbeError> for Error {
    fn from(err: ProbeError) -> Self {
        Self::Probe(err)
    }
}

/// Standard result type for emoji-seq APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Encode code points into a `String`, naming the first invalid value.
pub fn try_encode(points: &[u32]) -> Result<String> {
    points
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            char::from_u32(value).ok_or(Error::InvalidCodePoint { index, value })
        })
        .collect()
}

/// Detect the emoji version using environment overrides and `measure`.
///
/// Shorthand for [`ProbeConfig::from_env`] followed by [`detect_version`].
pub fn detect_version_from_env<M: MeasureText + ?Sized>(
    measure: Option<&M>,
) -> Result<EmojiVersion> {
    Ok(detect_version(&ProbeConfig::from_env(), measure)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Clusters, EmojiVersion, Error, MeasureText, Prober, Result, StringifyOptions, WidthCache,
        clusters, count_width, decode, detect_version_from_env, encode, stringify,
        stringify_default, try_encode,
    };

    pub use crate::{core, probe, text};
}

pub use emoji_seq_core as core;
pub use emoji_seq_probe as probe;
pub use emoji_seq_text as text;
