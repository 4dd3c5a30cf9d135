#![forbid(unsafe_code)]

//! Emoji version detection by width comparison.
//!
//! A renderer that supports a joined sequence draws it as one glyph, so the
//! whole sequence measures narrower than its parts drawn one by one. The
//! [`Prober`] runs a battery of such sequences, newest release first, and
//! reports the first release whose tier passes.
//!
//! This is a heuristic. Fonts with unusual advance widths can fool it, and
//! without a measurement primitive the answer is [`EmojiVersion::UNKNOWN`].
//!
//! # Example
//! ```
//! use emoji_seq_probe::{EmojiVersion, Prober};
//!
//! // A renderer that never fuses: every scalar is 16px wide.
//! let unfused = |text: &str| 16.0 * text.chars().count() as f64;
//! assert_eq!(Prober::new(&unfused).run(), Ok(EmojiVersion::UNKNOWN));
//! ```

use emoji_seq_core::{debug, debug_span, error, trace};

use crate::battery::{DEFAULT_BATTERY, ProbeTier, joinable_parts};
use crate::error::ProbeError;
use crate::version::EmojiVersion;

/// A text measurement primitive, typically the rendered pixel width.
pub trait MeasureText {
    fn measure(&self, text: &str) -> f64;
}

impl<F> MeasureText for F
where
    F: Fn(&str) -> f64,
{
    fn measure(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Runs a probe battery against one measurement primitive.
pub struct Prober<'a, M: ?Sized> {
    measure: &'a M,
    battery: &'a [ProbeTier],
}

impl<'a, M: MeasureText + ?Sized> Prober<'a, M> {
    /// Prober over [`DEFAULT_BATTERY`].
    #[must_use]
    pub fn new(measure: &'a M) -> Self {
        Self::with_battery(measure, DEFAULT_BATTERY)
    }

    /// Prober over a custom battery.
    ///
    /// The battery is not validated here; see
    /// [`validate_battery`](crate::validate_battery).
    #[must_use]
    pub fn with_battery(measure: &'a M, battery: &'a [ProbeTier]) -> Self {
        Self { measure, battery }
    }

    #[must_use]
    pub fn battery(&self) -> &'a [ProbeTier] {
        self.battery
    }

    /// Check tiers newest first and return the first one that passes.
    ///
    /// Every probe of a tier is measured, even once the threshold is met, so
    /// a malformed probe is reported regardless of measurement results.
    pub fn run(&self) -> Result<EmojiVersion, ProbeError> {
        let span = debug_span!("emoji_version_probe", tiers = self.battery.len());
        let _guard = span.enter();

        for tier in self.battery {
            let mut passed = 0usize;
            for &probe in tier.probes {
                let fused = self.fuses(probe)?;
                trace!(version = tier.version.get(), probe, fused, "probe measured");
                if fused {
                    passed += 1;
                }
            }
            if passed >= tier.min_pass {
                debug!(
                    version = tier.version.get(),
                    passed,
                    min_pass = tier.min_pass,
                    "emoji tier supported"
                );
                return Ok(tier.version);
            }
        }

        debug!("no emoji tier supported");
        Ok(EmojiVersion::UNKNOWN)
    }

    /// Whether `probe` measures narrower than the sum of its parts.
    pub fn fuses(&self, probe: &str) -> Result<bool, ProbeError> {
        let parts = joinable_parts(probe);
        if parts.len() < 2 {
            error!(probe, "probe has no joinable parts");
            return Err(ProbeError::NotJoinable(probe.to_owned()));
        }
        let sum: f64 = parts.iter().map(|part| self.measure.measure(part)).sum();
        let whole = self.measure.measure(probe);
        Ok(whole < sum)
    }
}

/// Detect the supported emoji version over [`DEFAULT_BATTERY`].
///
/// `None` means no measurement primitive is available, which reports
/// [`EmojiVersion::UNKNOWN`] without error.
pub fn probe_version<M: MeasureText + ?Sized>(
    measure: Option<&M>,
) -> Result<EmojiVersion, ProbeError> {
    match measure {
        Some(measure) => Prober::new(measure).run(),
        None => Ok(EmojiVersion::UNKNOWN),
    }
}
