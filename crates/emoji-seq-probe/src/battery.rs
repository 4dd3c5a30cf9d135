#![forbid(unsafe_code)]

//! The probe battery: emoji sequences tied to the release that introduced
//! them, checked newest first.

use emoji_seq_core::is_skin_tone;

use crate::error::ProbeError;
use crate::version::EmojiVersion;

const ZWJ: char = '\u{200D}';

/// One release and the sequences that indicate support for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeTier {
    pub version: EmojiVersion,
    pub probes: &'static [&'static str],
    /// Passing probes needed before the tier counts as supported.
    pub min_pass: usize,
}

impl ProbeTier {
    #[must_use]
    pub const fn new(version: u32, probes: &'static [&'static str], min_pass: usize) -> Self {
        Self {
            version: EmojiVersion::new(version),
            probes,
            min_pass,
        }
    }

    /// A tier where every probe must pass.
    #[must_use]
    pub const fn all(version: u32, probes: &'static [&'static str]) -> Self {
        Self::new(version, probes, probes.len())
    }
}

/// The built-in battery, newest release first.
///
/// Some platforms ship E13 without the polar bear or transgender flag, so
/// that tier only needs two of its five probes.
pub const DEFAULT_BATTERY: &[ProbeTier] = &[
    ProbeTier::new(
        13,
        &[
            // man with veil
            "\u{1F470}\u{200D}\u{2642}\u{FE0F}",
            // mx claus
            "\u{1F9D1}\u{200D}\u{1F384}",
            // polar bear
            "\u{1F43B}\u{200D}\u{2744}\u{FE0F}",
            // transgender flag
            "\u{1F3F3}\u{FE0F}\u{200D}\u{26A7}\u{FE0F}",
            // person feeding baby: dark skin tone
            "\u{1F9D1}\u{1F3FF}\u{200D}\u{1F37C}",
        ],
        2,
    ),
    ProbeTier::all(
        12,
        &[
            // service dog
            "\u{1F415}\u{200D}\u{1F9BA}",
            // judge
            "\u{1F9D1}\u{200D}\u{2696}\u{FE0F}",
        ],
    ),
    ProbeTier::all(
        11,
        &[
            // woman: curly hair
            "\u{1F469}\u{200D}\u{1F9B1}",
            // leg: dark skin tone
            "\u{1F9B5}\u{1F3FF}",
        ],
    ),
    ProbeTier::all(
        5,
        // woman in lotus position: medium skin tone
        &["\u{1F9D8}\u{1F3FD}\u{200D}\u{2640}\u{FE0F}"],
    ),
    ProbeTier::all(
        4,
        // rainbow flag
        &["\u{1F3F3}\u{200D}\u{1F308}"],
    ),
];

/// Split a probe into the parts a non-fusing renderer draws separately.
///
/// Splits at every ZWJ. A probe without a ZWJ is split before each skin
/// tone modifier instead. Fewer than two parts means the probe cannot
/// tell fused from unfused rendering.
#[must_use]
pub fn joinable_parts(probe: &str) -> Vec<&str> {
    if probe.contains(ZWJ) {
        return probe.split(ZWJ).collect();
    }

    let mut parts = Vec::new();
    let mut start = 0;
    for (index, ch) in probe.char_indices() {
        if index > start && is_skin_tone(u32::from(ch)) {
            parts.push(&probe[start..index]);
            start = index;
        }
    }
    parts.push(&probe[start..]);
    parts
}

/// Check a battery without measuring anything.
///
/// Every probe must be joinable, every threshold reachable and non-zero,
/// and versions strictly descending.
pub fn validate_battery(tiers: &[ProbeTier]) -> Result<(), ProbeError> {
    let mut previous: Option<EmojiVersion> = None;
    for tier in tiers {
        if let Some(previous) = previous
            && tier.version >= previous
        {
            return Err(ProbeError::UnorderedTiers {
                previous,
                next: tier.version,
            });
        }
        if tier.min_pass == 0 || tier.min_pass > tier.probes.len() {
            return Err(ProbeError::InvalidThreshold {
                version: tier.version,
                min_pass: tier.min_pass,
                probes: tier.probes.len(),
            });
        }
        if let Some(probe) = tier.probes.iter().find(|p| joinable_parts(p).len() < 2) {
            return Err(ProbeError::NotJoinable((*probe).to_owned()));
        }
        previous = Some(tier.version);
    }
    Ok(())
}
