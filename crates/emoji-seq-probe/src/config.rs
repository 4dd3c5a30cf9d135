#![forbid(unsafe_code)]

//! Environment overrides for version detection.
//!
//! # Environment Variables
//!
//! | Variable | Values | Effect |
//! |----------|--------|--------|
//! | `EMOJI_SEQ_VERSION` | release number, e.g. `12` | Report this version, skip measuring |
//! | `EMOJI_SEQ_NO_PROBE` | `1/true/yes/on` | Skip measuring, report unknown |
//!
//! A forced version wins over a disabled probe.

use emoji_seq_core::{info, warn};

use crate::error::ProbeError;
use crate::prober::{MeasureText, probe_version};
use crate::version::EmojiVersion;

/// Environment variable forcing the reported version.
pub const ENV_VERSION: &str = "EMOJI_SEQ_VERSION";
/// Environment variable disabling measurement.
pub const ENV_NO_PROBE: &str = "EMOJI_SEQ_NO_PROBE";

/// How [`detect_version`] should answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProbeConfig {
    /// Reported as-is without measuring.
    pub forced_version: Option<EmojiVersion>,
    /// Skip measuring and report [`EmojiVersion::UNKNOWN`].
    pub probe_disabled: bool,
}

impl ProbeConfig {
    /// Read overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read overrides using a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let forced_version = get_env(ENV_VERSION).and_then(|value| {
            let parsed = value.trim().parse::<u32>().ok().map(EmojiVersion::new);
            if parsed.is_none() {
                warn!(value = value.as_str(), "ignoring unparsable {}", ENV_VERSION);
            }
            parsed
        });
        let probe_disabled = get_env(ENV_NO_PROBE)
            .and_then(|value| parse_bool(&value))
            .unwrap_or(false);

        Self {
            forced_version,
            probe_disabled,
        }
    }

    #[must_use]
    pub const fn forced(version: EmojiVersion) -> Self {
        Self {
            forced_version: Some(version),
            probe_disabled: false,
        }
    }

    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            forced_version: None,
            probe_disabled: true,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply `config`, then probe with `measure` if still needed.
pub fn detect_version<M: MeasureText + ?Sized>(
    config: &ProbeConfig,
    measure: Option<&M>,
) -> Result<EmojiVersion, ProbeError> {
    if let Some(version) = config.forced_version {
        info!(version = version.get(), "emoji version forced by environment");
        return Ok(version);
    }
    if config.probe_disabled {
        info!("emoji version probe disabled by environment");
        return Ok(EmojiVersion::UNKNOWN);
    }
    probe_version(measure)
}
