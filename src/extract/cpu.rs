//! CPU model classification.

use regex::Regex;
use std::sync::LazyLock;

/// Neutral score when the CPU text is missing or unrecognized.
const NEUTRAL_CPU_SCORE: f64 = 5.0;

/// Generation-tagged model-family table, priority ordered: more specific
/// (newer-generation) keys come before coarser ones, first match wins.
const CPU_MODEL_SCORES: [(&str, f64); 25] = [
    ("i9-14", 9.5),
    ("i7-14", 8.5),
    ("i5-14", 7.0),
    ("i3-14", 5.0),
    ("i9-13", 9.0),
    ("i7-13", 8.0),
    ("i5-13", 6.5),
    ("i3-13", 4.5),
    ("i9-12", 8.5),
    ("i7-12", 7.5),
    ("i5-12", 6.0),
    ("i3-12", 4.0),
    ("ryzen 9 7", 9.2),
    ("ryzen 7 7", 8.2),
    ("ryzen 5 7", 6.8),
    ("ryzen 9 8", 9.5),
    ("ryzen 7 8", 8.5),
    ("ryzen 5 8", 7.0),
    ("ultra 9", 9.0),
    ("ultra 7", 8.0),
    ("ultra 5", 7.0),
    ("m4", 9.5),
    ("m3", 9.0),
    ("m2", 8.5),
    ("m1", 8.0),
];

/// `U`-suffixed model code, e.g. "1355u" in "i7-1355u".
static U_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+u\b").expect("static regex"));
/// `P`-suffixed model code, e.g. "1340p".
static P_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+p\b").expect("static regex"));
/// Standalone Lunar Lake `2xxV` model code (e.g. "258v").
static LUNAR_LAKE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b2\d{2}v\b").expect("static regex"));

/// Score a raw CPU model string into [0, 10].
///
/// Exact family hits take a suffix adjustment: +0.5 for the high-power HX
/// parts (capped at 10), -1.0 for low-power U parts (floored at 1), -0.3
/// for P parts. Without a family hit, a coarse i9/i7/i5/i3 (Ryzen 9/7/5/3)
/// tier guess applies; anything else gets the neutral 5.0.
#[must_use]
pub fn cpu_score(text: &str) -> f64 {
    let s = text.trim().to_lowercase();
    if s.is_empty() {
        return NEUTRAL_CPU_SCORE;
    }

    for (key, score) in CPU_MODEL_SCORES {
        if s.contains(key) {
            if s.contains("hx") {
                return (score + 0.5).min(10.0);
            }
            if U_SUFFIX.is_match(&s) {
                return (score - 1.0).max(1.0);
            }
            if P_SUFFIX.is_match(&s) {
                return score - 0.3;
            }
            return score;
        }
    }

    if s.contains("i9") || s.contains("ryzen 9") {
        return 9.0;
    }
    if s.contains("i7") || s.contains("ryzen 7") {
        return 7.5;
    }
    if s.contains("i5") || s.contains("ryzen 5") {
        return 6.0;
    }
    if s.contains("i3") || s.contains("ryzen 3") {
        return 4.0;
    }

    NEUTRAL_CPU_SCORE
}

/// CPU power-class suffix, as used by the dev-fit bias tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuSuffix {
    /// Desktop-replacement HX parts.
    Hx,
    /// High-performance H parts.
    H,
    /// Balanced P parts.
    P,
    /// Low-power U parts.
    U,
    /// No recognizable suffix.
    None,
}

/// Whether `s` contains an `h` that is not part of an `hx` pair.
///
/// Stands in for a look-around pattern: an `h` counts only when it is not
/// preceded by another `h` and not followed by an `x`.
fn contains_plain_h(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'h'
            && (i == 0 || bytes[i - 1] != b'h')
            && (i + 1 >= bytes.len() || bytes[i + 1] != b'x')
    })
}

/// Classify the power-class suffix of a raw CPU string.
///
/// Check order matters: HX before plain H, then P, then U. Intel's
/// Lunar Lake "2xxV" Ultra parts are treated as P-class.
#[must_use]
pub fn cpu_suffix(text: &str) -> CpuSuffix {
    let s = text.to_lowercase();
    if s.contains("hx") {
        return CpuSuffix::Hx;
    }
    if contains_plain_h(&s) {
        return CpuSuffix::H;
    }
    if P_SUFFIX.is_match(&s) {
        return CpuSuffix::P;
    }
    if U_SUFFIX.is_match(&s) {
        return CpuSuffix::U;
    }
    if s.contains("ultra") && LUNAR_LAKE_CODE.is_match(&s) {
        return CpuSuffix::P;
    }
    CpuSuffix::None
}
