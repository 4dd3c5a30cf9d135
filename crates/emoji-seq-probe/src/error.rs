#![forbid(unsafe_code)]

use crate::version::EmojiVersion;

/// A malformed probe battery.
///
/// These are programming errors in the probe table, not runtime conditions:
/// they are reported once and never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The probe string does not split into at least two joinable parts.
    ///
    /// Probes split at ZWJ. A probe without a ZWJ splits before each skin
    /// tone modifier, so `"\u{1F9B5}\u{1F3FF}"` (leg: dark skin tone) is
    /// accepted while a lone glyph such as `"\u{1F602}"` is not. See
    /// [`joinable_parts`](crate::joinable_parts).
    NotJoinable(String),
    /// A tier is not strictly older than the tier checked before it.
    UnorderedTiers {
        previous: EmojiVersion,
        next: EmojiVersion,
    },
    /// A tier's pass threshold is zero or larger than its probe count.
    InvalidThreshold {
        version: EmojiVersion,
        min_pass: usize,
        probes: usize,
    },
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotJoinable(probe) => write!(f, "not a joinable sequence: {probe:?}"),
            Self::UnorderedTiers { previous, next } => {
                write!(f, "tier {next} checked after {previous}; tiers must be newest first")
            }
            Self::InvalidThreshold {
                version,
                min_pass,
                probes,
            } => write!(
                f,
                "tier {version} needs {min_pass} passes but has {probes} probes"
            ),
        }
    }
}

impl std::error::Error for ProbeError {}
