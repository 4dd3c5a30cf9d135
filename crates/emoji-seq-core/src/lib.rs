#![forbid(unsafe_code)]

//! Core: code point classification for emoji sequences, and the logging shim
//! shared by the other emoji-seq crates.

pub mod classify;
pub mod logging;

pub use classify::{
    BLACK_FLAG, Classification, KEYCAP, PointKind, SKIPPABLE, TAG_CANCEL, VS16, ZWJ, classify,
    is_before_cap, is_flag_letter_at, is_flag_point, is_modifier_like, is_skin_tone,
    is_skippable, is_tag, is_zwj, point_kind,
};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
