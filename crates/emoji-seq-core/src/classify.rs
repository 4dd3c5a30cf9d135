#![forbid(unsafe_code)]

//! Code point classification for emoji sequences.
//!
//! Every predicate is a `const fn` over a single `u32`, total over its input:
//! values outside every known range (including values that are not Unicode
//! scalar values at all) return `false`.
//!
//! # Example
//! ```
//! use emoji_seq_core::classify::{self, PointKind};
//!
//! assert!(classify::is_flag_point(0x1F1E6));
//! assert!(classify::is_skin_tone(0x1F3FD));
//! assert!(classify::is_before_cap(u32::from('#')));
//!
//! // A regional indicator followed by VS16 is styled text, not a flag letter.
//! let points = [0x1F1E6, 0xFE0F];
//! assert_eq!(classify::point_kind(&points, 0), PointKind::Ordinary);
//! ```

/// Zero-width joiner.
pub const ZWJ: u32 = 0x200D;
/// Combining enclosing keycap.
pub const KEYCAP: u32 = 0x20E3;
/// Variation selector 16 (emoji presentation).
pub const VS16: u32 = 0xFE0F;
/// Cancel tag, terminating a tag sequence.
pub const TAG_CANCEL: u32 = 0xE007F;
/// Waving black flag, the base of subdivision tag sequences.
pub const BLACK_FLAG: u32 = 0x1F3F4;

/// Points that never start a cluster and never contribute width.
pub const SKIPPABLE: [u32; 3] = [VS16, KEYCAP, TAG_CANCEL];

const SKIN_TONE_FIRST: u32 = 0x1F3FB;
const SKIN_TONE_LAST: u32 = 0x1F3FF;
const REGIONAL_FIRST: u32 = 0x1F1E6;
const REGIONAL_LAST: u32 = 0x1F1FF;
const TAG_FIRST: u32 = 0xE0020;

/// Whether `p` is one of the five diversity (skin tone) modifiers.
#[inline]
#[must_use]
pub const fn is_skin_tone(p: u32) -> bool {
    p >= SKIN_TONE_FIRST && p <= SKIN_TONE_LAST
}

/// Whether `p` is a regional indicator letter (A-Z, paired into flags).
#[inline]
#[must_use]
pub const fn is_flag_point(p: u32) -> bool {
    p >= REGIONAL_FIRST && p <= REGIONAL_LAST
}

/// Whether `p` is a tag character. The cancel tag is excluded.
#[inline]
#[must_use]
pub const fn is_tag(p: u32) -> bool {
    p >= TAG_FIRST && p < TAG_CANCEL
}

/// Whether `p` may precede a keycap: `#`, `*` or an ASCII digit.
#[inline]
#[must_use]
pub const fn is_before_cap(p: u32) -> bool {
    matches!(p, 0x23 | 0x2A | 0x30..=0x39)
}

/// Whether `p` is in [`SKIPPABLE`].
#[inline]
#[must_use]
pub const fn is_skippable(p: u32) -> bool {
    matches!(p, VS16 | KEYCAP | TAG_CANCEL)
}

/// Whether `p` is the zero-width joiner.
#[inline]
#[must_use]
pub const fn is_zwj(p: u32) -> bool {
    p == ZWJ
}

/// Whether `p` attaches to the preceding glyph instead of starting one:
/// skippable points, tags, skin tones and the joiner.
#[inline]
#[must_use]
pub const fn is_modifier_like(p: u32) -> bool {
    is_skippable(p) || is_tag(p) || is_skin_tone(p) || is_zwj(p)
}

/// Whether `points[index]` acts as a flag letter: a regional indicator not
/// followed by VS16.
///
/// Out-of-bounds indices return `false`.
#[inline]
#[must_use]
pub fn is_flag_letter_at(points: &[u32], index: usize) -> bool {
    match points.get(index) {
        Some(&p) => is_flag_point(p) && points.get(index + 1) != Some(&VS16),
        None => false,
    }
}

/// Range predicates for a single code point, bundled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub skin_tone: bool,
    pub flag_point: bool,
    pub tag: bool,
    pub before_cap: bool,
}

impl Classification {
    /// Whether no range predicate matched.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        !(self.skin_tone || self.flag_point || self.tag || self.before_cap)
    }
}

/// Evaluate every range predicate for `p`.
#[must_use]
pub const fn classify(p: u32) -> Classification {
    Classification {
        skin_tone: is_skin_tone(p),
        flag_point: is_flag_point(p),
        tag: is_tag(p),
        before_cap: is_before_cap(p),
    }
}

/// Scan-level category of a point, taking the VS16 lookahead into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// Regional indicator acting as a flag letter. Half a cell.
    Flag,
    /// Skippable point, tag or skin tone. No width of its own.
    Modifier,
    /// Zero-width joiner. Fuses its neighbours into one glyph.
    Joiner,
    /// Anything else: a glyph that starts a new cluster unless joined.
    Ordinary,
}

impl PointKind {
    /// Half-cell contribution of this kind to a width estimate.
    #[inline]
    #[must_use]
    pub const fn half_units(self) -> i64 {
        match self {
            Self::Flag => 1,
            Self::Modifier => 0,
            Self::Joiner => -2,
            Self::Ordinary => 2,
        }
    }
}

/// Classify `points[index]` for scanning.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
#[inline]
#[must_use]
pub fn point_kind(points: &[u32], index: usize) -> PointKind {
    let p = points[index];
    if is_zwj(p) {
        PointKind::Joiner
    } else if is_skippable(p) || is_tag(p) || is_skin_tone(p) {
        PointKind::Modifier
    } else if is_flag_letter_at(points, index) {
        PointKind::Flag
    } else {
        PointKind::Ordinary
    }
}
