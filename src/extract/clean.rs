//! Ingestion-boundary cleaners.
//!
//! These sit between the scraping collaborators and the engine: tolerant
//! parsers for the price/RAM/SSD/OS columns that resolve messy source text
//! to the documented defaults instead of failing the batch.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{Brand, Os};

/// Plausible marketed RAM sizes in GB.
const RAM_SIZES: [u32; 9] = [4, 8, 12, 16, 24, 32, 48, 64, 128];
/// Plausible marketed SSD sizes in GB.
const SSD_SIZES: [u32; 5] = [128, 256, 512, 1024, 2048];

static GB_IN_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\s*GB\)").expect("static regex"));
static GB_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*GB").expect("static regex"));
static TB_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*TB").expect("static regex"));
static BARE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("static regex"));

/// Normalize price text to an integer TL value.
///
/// Strips every non-digit (thousands separators, currency marks) and
/// accepts only the plausible 1000..=500000 band; anything else is noise.
#[must_use]
pub fn clean_price(text: &str) -> Option<u32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    let price: u32 = digits.parse().ok()?;
    if (1000..=500_000).contains(&price) {
        Some(price)
    } else {
        None
    }
}

/// Extract the RAM size in GB; defaults to 8 when nothing parses.
///
/// Preference order: a parenthesised "(16 GB)" capacity, the largest
/// "NN GB" token, then a bare leading number if it is a plausible RAM size.
#[must_use]
pub fn clean_ram(text: &str) -> u32 {
    let upper = text.to_uppercase();

    if let Some(caps) = GB_IN_PARENS.captures(&upper) {
        if let Ok(v) = caps[1].parse() {
            return v;
        }
    }

    let max_gb = GB_VALUE
        .captures_iter(&upper)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max();
    if let Some(v) = max_gb {
        return v;
    }

    if let Some(m) = BARE_NUMBER.find(&upper) {
        if let Ok(v) = m.as_str().parse::<u32>() {
            if RAM_SIZES.contains(&v) {
                return v;
            }
        }
    }

    8
}

/// Extract the SSD size in GB; defaults to 256 when nothing parses.
///
/// TB values convert to GB; marketing sizes 1000/500 GB are corrected to
/// the 1024/512 powers the rest of the pipeline uses.
#[must_use]
pub fn clean_ssd(text: &str) -> u32 {
    let upper = text.to_uppercase();

    if let Some(caps) = TB_VALUE.captures(&upper) {
        if let Ok(v) = caps[1].parse::<u32>() {
            return v * 1024;
        }
    }

    if let Some(caps) = GB_VALUE.captures(&upper) {
        if let Ok(v) = caps[1].parse::<u32>() {
            if SSD_SIZES.contains(&v) {
                return v;
            }
            if v == 1000 {
                return 1024;
            }
            if v == 500 {
                return 512;
            }
        }
    }

    if let Some(m) = BARE_NUMBER.find(&upper) {
        if let Ok(v) = m.as_str().parse::<u32>() {
            if SSD_SIZES.contains(&v) {
                return v;
            }
            if v == 1 {
                return 1024;
            }
        }
    }

    256
}

/// Infer the operating system from the explicit OS column, the product
/// title, or the brand, in that order. Apple hardware defaults to macOS;
/// everything else without a signal ships FreeDOS.
#[must_use]
pub fn detect_os(os_field: Option<&str>, name: &str, brand: Brand) -> Os {
    if let Some(field) = os_field {
        let os_text = field.to_lowercase();
        if ["windows", "win11", "win10", "w11", "w10"]
            .iter()
            .any(|x| os_text.contains(x))
        {
            return Os::Windows;
        }
        if ["mac", "macos", "os x"].iter().any(|x| os_text.contains(x)) {
            return Os::MacOs;
        }
        if ["ubuntu", "linux", "debian"]
            .iter()
            .any(|x| os_text.contains(x))
        {
            return Os::Linux;
        }
        if ["dos", "free", "yok", "none"]
            .iter()
            .any(|x| os_text.contains(x))
        {
            return Os::FreeDos;
        }
    }

    let name_text = name.to_lowercase();
    if ["windows 11", "win11", "w11", "windows 10", "win10"]
        .iter()
        .any(|x| name_text.contains(x))
    {
        return Os::Windows;
    }
    if name_text.contains("macbook") || name_text.contains("mac ") {
        return Os::MacOs;
    }
    if ["freedos", "free dos", "fdos", "dos", "/dos"]
        .iter()
        .any(|x| name_text.contains(x))
    {
        return Os::FreeDos;
    }

    if brand == Brand::Apple {
        return Os::MacOs;
    }
    Os::FreeDos
}
