//! Emoji cluster corpus.
//!
//! Table-driven cases per category, each with the expected clusters and
//! width estimate:
//! - Single glyphs and presentation selectors
//! - Skin tone modifiers
//! - Keycaps
//! - Country flags (regional indicator runs)
//! - ZWJ sequences
//! - Tag sequences (subdivision flags)
//! - Mixed runs and non-emoji text
//!
//! Well-formed single emoji are also cross-checked against extended
//! grapheme clusters from `unicode-segmentation`.

use emoji_seq_text::{clusters, count_width, decode, segment};
use unicode_segmentation::UnicodeSegmentation;

// =============================================================================
// Corpus Data Structures
// =============================================================================

#[derive(Debug, Clone)]
struct ClusterCase {
    input: &'static str,
    description: &'static str,
    /// Number of points in each expected cluster, in order.
    cluster_lens: &'static [usize],
    expected_width: usize,
}

impl ClusterCase {
    const fn new(
        input: &'static str,
        description: &'static str,
        cluster_lens: &'static [usize],
        expected_width: usize,
    ) -> Self {
        Self {
            input,
            description,
            cluster_lens,
            expected_width,
        }
    }
}

fn check(cases: &[ClusterCase], category: &str) {
    for case in cases {
        let points = decode(case.input);
        let lens: Vec<usize> = clusters(&points).map(<[u32]>::len).collect();
        assert_eq!(
            lens, case.cluster_lens,
            "{category} '{}' ({}) - cluster lengths",
            case.input, case.description
        );
        let width = count_width(&points);
        assert_eq!(
            width, case.expected_width,
            "{category} '{}' ({}) - expected width {}, got {}",
            case.input, case.description, case.expected_width, width
        );
        let rejoined: Vec<u32> = segment(&points).concat();
        assert_eq!(rejoined.as_slice(), points.as_slice(), "{category} partition");
    }
}

// =============================================================================
// Category 1: Single glyphs
// =============================================================================

const SINGLE_TESTS: &[ClusterCase] = &[
    ClusterCase::new("\u{1F602}", "face with tears of joy", &[1], 1),
    ClusterCase::new("\u{1F5E3}\u{FE0F}", "speaking head with VS16", &[2], 1),
    ClusterCase::new("\u{2764}\u{FE0F}", "red heart with VS16", &[2], 1),
    ClusterCase::new("\u{1F3F3}", "white flag (unqualified)", &[1], 1),
    ClusterCase::new("\u{1F602}\u{1F602}", "two faces", &[1, 1], 2),
    ClusterCase::new("\u{1F994}\u{1F9B7}\u{1F90D}", "three glyphs", &[1, 1, 1], 3),
];

#[test]
fn single_glyph_tests() {
    check(SINGLE_TESTS, "single");
}

// =============================================================================
// Category 2: Skin tones
// =============================================================================

const TONE_TESTS: &[ClusterCase] = &[
    ClusterCase::new("\u{1F44D}\u{1F3FB}", "thumbs up light", &[2], 1),
    ClusterCase::new("\u{1F44D}\u{1F3FF}", "thumbs up dark", &[2], 1),
    ClusterCase::new("\u{261D}\u{1F3FF}", "index pointing up dark", &[2], 1),
    ClusterCase::new(
        "\u{1F475}\u{1F3FB}\u{1F44D}\u{1F3FD}",
        "two toned glyphs",
        &[2, 2],
        2,
    ),
    ClusterCase::new("\u{1F3FD}", "lone modifier", &[1], 1),
];

#[test]
fn skin_tone_tests() {
    check(TONE_TESTS, "tone");
}

// =============================================================================
// Category 3: Keycaps
// =============================================================================

const KEYCAP_TESTS: &[ClusterCase] = &[
    ClusterCase::new("#\u{FE0F}\u{20E3}", "keycap #", &[3], 1),
    ClusterCase::new("*\u{FE0F}\u{20E3}", "keycap *", &[3], 1),
    ClusterCase::new("1\u{20E3}", "keycap 1 unqualified", &[2], 1),
    ClusterCase::new(
        "#\u{FE0F}\u{20E3}\u{1F602}",
        "keycap then unrelated emoji",
        &[3, 1],
        2,
    ),
    ClusterCase::new(
        "1\u{FE0F}\u{20E3}2\u{FE0F}\u{20E3}",
        "two keycaps",
        &[3, 3],
        2,
    ),
];

#[test]
fn keycap_tests() {
    check(KEYCAP_TESTS, "keycap");
}

// =============================================================================
// Category 4: Country flags
// =============================================================================

const FLAG_TESTS: &[ClusterCase] = &[
    ClusterCase::new("\u{1F1E6}\u{1F1FA}", "AU", &[2], 1),
    ClusterCase::new("\u{1F1EF}\u{1F1F5}", "JP", &[2], 1),
    ClusterCase::new("\u{1F1E6}\u{1F1FA}\u{1F1FA}", "AU + U stays one run", &[3], 2),
    ClusterCase::new("\u{1F1E6}\u{1F1E6}\u{1F1FA}", "AAU stays one run", &[3], 2),
    ClusterCase::new(
        "\u{1F1E8}\u{1F1EC}\u{1F1E8}\u{1F1EC}",
        "CG CG is one run",
        &[4],
        2,
    ),
    ClusterCase::new(
        "\u{1F1E8}\u{1F1EC}abc\u{1F1E8}\u{1F1EC}",
        "flags around text",
        &[2, 1, 1, 1, 2],
        5,
    ),
    ClusterCase::new("\u{1F1E6}", "lone letter", &[1], 1),
    ClusterCase::new(
        "\u{1F1E6}\u{FE0F}",
        "letter with VS16 is a glyph",
        &[2],
        1,
    ),
];

#[test]
fn flag_tests() {
    check(FLAG_TESTS, "flag");
}

// =============================================================================
// Category 5: ZWJ sequences
// =============================================================================

const ZWJ_TESTS: &[ClusterCase] = &[
    ClusterCase::new(
        "\u{1F469}\u{200D}\u{2764}\u{200D}\u{1F468}",
        "couple with heart",
        &[5],
        1,
    ),
    ClusterCase::new(
        "\u{1F469}\u{200D}\u{1F469}\u{200D}\u{1F466}\u{200D}\u{1F466}",
        "family WWBB",
        &[7],
        1,
    ),
    ClusterCase::new(
        "\u{1F469}\u{200D}\u{2764}\u{200D}\u{1F468}\u{1F5E3}\u{FE0F}",
        "couple then speaking head",
        &[5, 2],
        2,
    ),
    ClusterCase::new(
        "\u{1F43B}\u{200D}\u{2744}\u{FE0F}",
        "polar bear",
        &[4],
        1,
    ),
    ClusterCase::new(
        "\u{1F3F3}\u{FE0F}\u{200D}\u{26A7}\u{FE0F}\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}",
        "transgender flag then rainbow flag",
        &[5, 4],
        2,
    ),
    ClusterCase::new(
        "\u{1F469}\u{1F3FE}\u{200D}\u{1F91D}\u{200D}\u{1F468}\u{1F3FB}",
        "toned couple holding hands",
        &[7],
        1,
    ),
    ClusterCase::new(
        "\u{1F6BD}\u{200D}\u{1F6BD}",
        "not a real sequence, still joined",
        &[3],
        1,
    ),
    ClusterCase::new("\u{1F469}\u{200D}", "trailing joiner", &[2], 1),
];

#[test]
fn zwj_tests() {
    check(ZWJ_TESTS, "zwj");
}

// =============================================================================
// Category 6: Tag sequences
// =============================================================================

const TAG_TESTS: &[ClusterCase] = &[
    ClusterCase::new(
        "\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}",
        "scotland",
        &[7],
        1,
    ),
    ClusterCase::new(
        "\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}\u{1F233}",
        "scotland then unrelated emoji",
        &[7, 1],
        2,
    ),
    ClusterCase::new(
        "a\u{1F3F4}\u{E0067}\u{E0062}\u{E0077}\u{E006C}\u{E0073}\u{E007F}q",
        "wales between letters",
        &[1, 7, 1],
        3,
    ),
];

#[test]
fn tag_sequence_tests() {
    check(TAG_TESTS, "tag");
}

// =============================================================================
// Category 7: Non-emoji text
// =============================================================================

const TEXT_TESTS: &[ClusterCase] = &[
    ClusterCase::new("abc", "ascii letters", &[1, 1, 1], 3),
    ClusterCase::new("\u{AF3F9}", "unassigned astral point", &[1], 1),
    ClusterCase::new("", "empty", &[], 0),
];

#[test]
fn text_tests() {
    check(TEXT_TESTS, "text");
}

// =============================================================================
// Grapheme cross-check
// =============================================================================

/// Fully-formed emoji are exactly one extended grapheme cluster, and the
/// segmenter must agree.
const WELL_FORMED: &[&str] = &[
    "\u{1F602}",
    "\u{2764}\u{FE0F}",
    "\u{1F44D}\u{1F3FD}",
    "#\u{FE0F}\u{20E3}",
    "\u{1F1E6}\u{1F1FA}",
    "\u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F468}",
    "\u{1F9D1}\u{200D}\u{1F384}",
    "\u{1F43B}\u{200D}\u{2744}\u{FE0F}",
    "\u{1F9D1}\u{1F3FF}\u{200D}\u{1F37C}",
    "\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}",
];

#[test]
fn well_formed_emoji_match_graphemes() {
    for input in WELL_FORMED {
        assert_eq!(input.graphemes(true).count(), 1, "grapheme count of {input:?}");
        let points = decode(input);
        assert_eq!(clusters(&points).count(), 1, "cluster count of {input:?}");
    }

    let joined: String = WELL_FORMED.concat();
    let points = decode(&joined);
    let ours: Vec<usize> = clusters(&points).map(<[u32]>::len).collect();
    let theirs: Vec<usize> = joined
        .graphemes(true)
        .map(|g| g.chars().count())
        .collect();
    assert_eq!(ours, theirs);
}
