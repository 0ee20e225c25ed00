//! Screen-size parsing.

use regex::Regex;
use std::sync::LazyLock;

/// Accepted screen diagonal range in inches.
const SCREEN_MIN: f64 = 10.0;
const SCREEN_MAX: f64 = 19.9;

/// Reassembles decimals that scrapers split with whitespace ("15 . 6").
static SPLIT_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2})\s*\.\s*(\d)").expect("static regex"));
/// Two-digit candidate with an optional single decimal.
static SIZE_CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2}(?:\.\d)?)").expect("static regex"));

/// Extract a screen diagonal in inches from free text.
///
/// Accepts only candidates inside [10.0, 19.9]; every other candidate is
/// rejected. Returns `None` when nothing plausible is found; the caller
/// supplies the dataset default (15.6), never this function.
#[must_use]
pub fn parse_screen_size(text: &str) -> Option<f64> {
    let normalized = text.to_lowercase().replace(',', ".");
    let normalized = SPLIT_DECIMAL.replace_all(&normalized, "$1.$2");

    for caps in SIZE_CANDIDATE.captures_iter(&normalized) {
        if let Ok(size) = caps[1].parse::<f64>() {
            if (SCREEN_MIN..=SCREEN_MAX).contains(&size) {
                return Some(size);
            }
        }
    }
    None
}
