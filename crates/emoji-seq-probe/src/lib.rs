#![forbid(unsafe_code)]

//! Heuristic detection of the emoji release a renderer supports.
//!
//! The caller supplies a [`MeasureText`] primitive (a canvas or font
//! measurement, usually in pixels). [`Prober`] compares joined sequences
//! against their parts to find the newest release the renderer fuses.
//! [`detect_version`] applies [`ProbeConfig`] environment overrides first.

pub mod battery;
pub mod config;
pub mod error;
pub mod prober;
pub mod version;

pub use battery::{DEFAULT_BATTERY, ProbeTier, joinable_parts, validate_battery};
pub use config::{ENV_NO_PROBE, ENV_VERSION, ProbeConfig, detect_version};
pub use error::ProbeError;
pub use prober::{MeasureText, Prober, probe_version};
pub use version::EmojiVersion;
