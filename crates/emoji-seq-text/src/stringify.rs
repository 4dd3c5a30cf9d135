#![forbid(unsafe_code)]

//! Hexadecimal labels for code point sequences.
//!
//! Labels such as `1f469_2764_1f468` are stable keys for logs, asset file
//! names and deduplication. By default VS16 is dropped so that fully- and
//! un-qualified spellings of the same emoji share a label.
//!
//! # Example
//! ```
//! use emoji_seq_text::stringify::{StringifyOptions, stringify, stringify_default};
//!
//! assert_eq!(stringify_default(&[0x1F469, 0x2764, 0x1F468]), "1f469_2764_1f468");
//!
//! let opts = StringifyOptions::default().sep("-").pad(4).lower(false);
//! assert_eq!(stringify(&[0x23, 0xFE0F, 0x20E3], &opts), "0023-20E3");
//! ```

use std::borrow::Cow;
use std::iter;

use emoji_seq_core::classify::VS16;

/// Default separator between hex groups.
pub const DEFAULT_SEPARATOR: &str = "_";

/// Formatting options for [`stringify`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StringifyOptions {
    /// Separator placed between groups.
    pub sep: Cow<'static, str>,
    /// Minimum digits per group, zero-padded on the left.
    pub pad: usize,
    /// Lowercase hex digits.
    pub lower: bool,
    /// Drop every VS16 before formatting.
    pub unqualify: bool,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            sep: Cow::Borrowed(DEFAULT_SEPARATOR),
            pad: 0,
            lower: true,
            unqualify: true,
        }
    }
}

impl StringifyOptions {
    /// Set the separator.
    #[must_use]
    pub fn sep(mut self, sep: impl Into<Cow<'static, str>>) -> Self {
        self.sep = sep.into();
        self
    }

    /// Set the minimum digit count per group.
    #[must_use]
    pub fn pad(mut self, pad: usize) -> Self {
        self.pad = pad;
        self
    }

    /// Choose lowercase (`true`) or uppercase hex digits.
    #[must_use]
    pub fn lower(mut self, lower: bool) -> Self {
        self.lower = lower;
        self
    }

    /// Choose whether VS16 points are dropped.
    #[must_use]
    pub fn unqualify(mut self, unqualify: bool) -> Self {
        self.unqualify = unqualify;
        self
    }
}

/// Format `points` as a hex label according to `opts`.
#[must_use]
pub fn stringify(points: &[u32], opts: &StringifyOptions) -> String {
    let mut out = String::with_capacity(points.len().saturating_mul(6));
    let kept = points
        .iter()
        .copied()
        .filter(|&p| !(opts.unqualify && p == VS16));

    for (i, point) in kept.enumerate() {
        if i > 0 {
            out.push_str(&opts.sep);
        }
        let digits = if opts.lower {
            format!("{point:x}")
        } else {
            format!("{point:X}")
        };
        out.extend(iter::repeat_n('0', opts.pad.saturating_sub(digits.len())));
        out.push_str(&digits);
    }
    out
}

/// Format `points` with the default options (`_`, no padding, lowercase,
/// VS16 dropped).
#[must_use]
pub fn stringify_default(points: &[u32]) -> String {
    stringify(points, &StringifyOptions::default())
}
