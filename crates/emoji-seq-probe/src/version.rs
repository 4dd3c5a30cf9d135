#![forbid(unsafe_code)]

//! Emoji standard release tags.

use std::fmt;

/// An emoji standard release, as reported by the prober.
///
/// Only the major release is tracked (`13` for E13.0 and E13.1). The zero
/// value [`EmojiVersion::UNKNOWN`] means "no probe passed" or "no
/// measurement available", and orders below every known release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EmojiVersion(u32);

impl EmojiVersion {
    /// Unsupported or undetermined.
    pub const UNKNOWN: Self = Self(0);

    #[must_use]
    pub const fn new(major: u32) -> Self {
        Self(major)
    }

    /// The raw release number, `0` when unknown.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        self.0 != 0
    }
}

impl From<u32> for EmojiVersion {
    fn from(major: u32) -> Self {
        Self(major)
    }
}

impl From<EmojiVersion> for u32 {
    fn from(version: EmojiVersion) -> Self {
        version.0
    }
}

impl fmt::Display for EmojiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "E{}", self.0)
        } else {
            f.write_str("unknown")
        }
    }
}
