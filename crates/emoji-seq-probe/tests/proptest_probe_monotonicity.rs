//! Property-based tests for the version prober.
//!
//! 1. A renderer that fuses a superset of sequences never reports an older
//!    release.
//! 2. The reported version is unknown or one of the battery's tiers.
//! 3. Probing is deterministic for a fixed renderer.

use emoji_seq_probe::{DEFAULT_BATTERY, EmojiVersion, Prober};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn all_probes() -> Vec<&'static str> {
    DEFAULT_BATTERY
        .iter()
        .flat_map(|tier| tier.probes.iter().copied())
        .collect()
}

/// Which battery probes a renderer fuses, one flag per probe.
fn support_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), all_probes().len())
}

/// Fuses the selected probes; draws everything else glyph by glyph.
fn renderer(supported: Vec<&'static str>) -> impl Fn(&str) -> f64 {
    move |text: &str| {
        if supported.iter().any(|&s| s == text) {
            16.0
        } else {
            16.0 * text
                .chars()
                .filter(|&c| c != '\u{200D}' && c != '\u{FE0F}')
                .count() as f64
        }
    }
}

fn select(mask: &[bool]) -> Vec<&'static str> {
    all_probes()
        .into_iter()
        .zip(mask)
        .filter_map(|(probe, &on)| on.then_some(probe))
        .collect()
}

fn detect(mask: &[bool]) -> EmojiVersion {
    let measure = renderer(select(mask));
    Prober::new(&measure).run().unwrap()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn more_capable_renderer_never_reports_older(
        base in support_strategy(),
        extra in support_strategy(),
    ) {
        let wider: Vec<bool> = base.iter().zip(&extra).map(|(&a, &b)| a || b).collect();
        let less = detect(&base);
        let more = detect(&wider);
        prop_assert!(more >= less, "{} < {} for {:?} -> {:?}", more, less, base, wider);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn version_is_a_battery_tier(mask in support_strategy()) {
        let version = detect(&mask);
        prop_assert!(
            !version.is_known() || DEFAULT_BATTERY.iter().any(|tier| tier.version == version),
            "unexpected {}", version
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn probing_twice_is_identical(mask in support_strategy()) {
        prop_assert_eq!(detect(&mask), detect(&mask));
    }
}
