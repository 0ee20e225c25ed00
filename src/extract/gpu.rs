//! GPU model classification and label normalization.
//!
//! Both the scorer and the normalizer walk the same family-detection
//! priority order: integrated keyword set, Intel Arc, NVIDIA RTX/GTX,
//! NVIDIA MX, AMD RX, Apple M-series, then generic discrete markers.
//! Matching is case-insensitive and tolerant of spacing variants
//! ("RTX4060" and "rtx 4060" classify identically).
//!
//! "Radeon 660M" is in the integrated keyword set so it takes the 3.0
//! iGPU band instead of falling through to the generic-discrete 4.0; it
//! is an integrated part like its 680M/760M/780M siblings.

use regex::Regex;
use std::sync::LazyLock;

/// Score when the GPU text is missing or nothing matches.
const DEFAULT_GPU_SCORE: f64 = 2.0;

/// Keywords that mark integrated graphics (first classification stage).
const IGPU_KEYWORDS: [&str; 16] = [
    "iris xe",
    "iris plus",
    "uhd graphics",
    "hd graphics",
    "radeon graphics",
    "radeon 780m",
    "radeon 760m",
    "radeon 680m",
    "radeon 660m",
    "vega 8",
    "vega 7",
    "vega 6",
    "vega 3",
    "integrated",
    "igpu",
    "apu graphics",
];

/// Exact RTX model scores; unknown codes fall back by decade.
const RTX_MODEL_SCORES: [(&str, f64); 16] = [
    ("5090", 10.0),
    ("5080", 9.5),
    ("5070", 9.0),
    ("5060", 8.5),
    ("5050", 8.0),
    ("4090", 9.8),
    ("4080", 9.3),
    ("4070", 8.8),
    ("4060", 8.0),
    ("4050", 7.2),
    ("3090", 8.9),
    ("3080", 8.5),
    ("3070", 7.8),
    ("3060", 7.0),
    ("3050", 6.0),
    ("3500", 8.0),
];

const GTX_MODEL_SCORES: [(&str, f64); 3] = [("1660", 5.5), ("1650", 5.0), ("1050", 4.2)];

const MX_MODEL_SCORES: [(&str, f64); 5] = [
    ("570", 4.2),
    ("550", 4.0),
    ("450", 3.6),
    ("350", 3.2),
    ("330", 3.0),
];

const RX_MODEL_SCORES: [(&str, f64); 8] = [
    ("7900", 8.8),
    ("7800", 8.3),
    ("7700", 7.8),
    ("7600", 7.2),
    ("7600M", 7.0),
    ("6800", 7.5),
    ("6700", 7.0),
    ("6600", 6.6),
];

static ARC_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\barc\s*([a-z]?\d{3,4}m?)\b").expect("static regex"));
static RTX_SPACED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rtx\s*([345]\d{3,4})").expect("static regex"));
static RTX_GLUED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rtx(\d{4})").expect("static regex"));
static GTX_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"gtx\s*(\d{3,4})").expect("static regex"));
static MX_SPACED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bmx\s*(\d{2,3})\b").expect("static regex"));
static MX_GLUED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"mx(\d{2,3})").expect("static regex"));
static RX_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\brx(\d{3,4}m?)\b").expect("static regex"));
static APPLE_M: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bm([1-4])\b").expect("static regex"));

/// Score a raw GPU model string into [0, 10].
#[must_use]
pub fn gpu_score(text: &str) -> f64 {
    let s = text.trim().to_lowercase();
    if s.is_empty() {
        return DEFAULT_GPU_SCORE;
    }

    // Stage 1: integrated graphics keyword set, with sub-variant bands.
    if IGPU_KEYWORDS.iter().any(|kw| s.contains(kw)) {
        if s.contains("780m") || s.contains("680m") {
            return 3.5;
        }
        if s.contains("760m") || s.contains("660m") {
            return 3.0;
        }
        return 2.5;
    }

    // Stage 2: Intel Arc discrete codes.
    if let Some(caps) = ARC_CODE.captures(&s) {
        let code = caps[1].to_uppercase();
        if ["A770", "A750"].iter().any(|x| code.contains(x)) {
            return 7.5;
        }
        if ["A570", "A550"].iter().any(|x| code.contains(x)) {
            return 6.5;
        }
        if ["A370", "A350"].iter().any(|x| code.contains(x)) {
            return 5.5;
        }
        return 3.0;
    }

    // Stage 3: NVIDIA RTX with decade-based fallback.
    if let Some(caps) = RTX_SPACED.captures(&s).or_else(|| RTX_GLUED.captures(&s)) {
        let code = &caps[1];
        if let Some(&(_, score)) = RTX_MODEL_SCORES.iter().find(|(k, _)| k == &code) {
            return score;
        }
        if code.starts_with("50") {
            return 8.3;
        }
        if code.starts_with("40") {
            return 8.0;
        }
        if code.starts_with("30") {
            return 7.0;
        }
        return 6.5;
    }

    // Stage 4: NVIDIA GTX.
    if let Some(caps) = GTX_CODE.captures(&s) {
        let code = &caps[1];
        return GTX_MODEL_SCORES
            .iter()
            .find(|(k, _)| k == &code)
            .map_or(4.5, |&(_, score)| score);
    }

    // Stage 5: NVIDIA MX low-power discrete tier.
    if let Some(caps) = MX_SPACED.captures(&s).or_else(|| MX_GLUED.captures(&s)) {
        let code = &caps[1];
        return MX_MODEL_SCORES
            .iter()
            .find(|(k, _)| k == &code)
            .map_or(3.5, |&(_, score)| score);
    }

    // Stage 6: AMD RX, matched on the spacing-collapsed text.
    let collapsed = s.replace(' ', "");
    if let Some(caps) = RX_CODE.captures(&collapsed) {
        let code = caps[1].to_uppercase();
        let base = code.trim_end_matches('M');
        if let Some(&(_, score)) = RX_MODEL_SCORES.iter().find(|(k, _)| *k == code) {
            return score;
        }
        if let Some(&(_, score)) = RX_MODEL_SCORES.iter().find(|(k, _)| *k == base) {
            return score;
        }
        return match &base[..2.min(base.len())] {
            "79" => 8.6,
            "78" => 8.2,
            "77" => 7.7,
            "76" => 7.1,
            "67" => 6.9,
            "66" => 6.5,
            _ => 5.5,
        };
    }

    // Stage 7: Apple silicon GPU tiers.
    if let Some(caps) = APPLE_M.captures(&s) {
        return match &caps[1] {
            "4" => 8.5,
            "3" => 8.0,
            "2" => 7.5,
            _ => 7.0,
        };
    }

    // Stage 8: a discrete GPU is mentioned but no model is recognizable.
    if ["geforce", "nvidia", "radeon", "discrete"]
        .iter()
        .any(|x| s.contains(x))
    {
        return 4.0;
    }

    DEFAULT_GPU_SCORE
}

static NORM_RTX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\brtx[\s-]?(\d{3,4})(?:\s*(?:ti|super|max-q|laptop))?\b").expect("static regex")
});
static NORM_GTX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bgtx[\s-]?(\d{3,4})(?:\s*(ti|super))?\b").expect("static regex"));
static NORM_MX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bmx[\s-]?(\d{2,3})\b").expect("static regex"));
static NORM_RX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\brx-?(\d{3,4})(?:([ms]|xt|xtx))?\b").expect("static regex"));
static NORM_RADEON_IGPU: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"radeon\s*(\d{3})m\b").expect("static regex"));
static NORM_VEGA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bvega\s*(8|7|6|3)\b").expect("static regex"));
static NORM_UHD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\buhd\b").expect("static regex"));

/// Canonicalize a raw GPU string into a display label.
///
/// Total over all input: blank text maps to "Integrated (generic)",
/// recognizable families to their canonical name, anything else to
/// "GPU (Unlabeled)". Never returns an empty string.
#[must_use]
pub fn normalize_gpu_model(text: &str) -> String {
    let s = text.trim().to_lowercase();
    if s.is_empty() {
        return "Integrated (generic)".to_string();
    }

    if let Some(caps) = NORM_RTX.captures(&s) {
        return format!("GeForce RTX {}", &caps[1]);
    }

    if let Some(caps) = NORM_GTX.captures(&s) {
        return match caps.get(2) {
            Some(suf) => format!("GeForce GTX {} {}", &caps[1], suf.as_str().to_uppercase()),
            None => format!("GeForce GTX {}", &caps[1]),
        };
    }

    if let Some(caps) = NORM_MX.captures(&s) {
        return format!("NVIDIA MX {}", &caps[1]);
    }

    let collapsed = s.replace(' ', "");
    if let Some(caps) = NORM_RX.captures(&collapsed) {
        return match caps.get(2) {
            Some(suf) => format!("Radeon RX {}{}", &caps[1], suf.as_str().to_uppercase()),
            None => format!("Radeon RX {}", &caps[1]),
        };
    }

    if let Some(caps) = ARC_CODE.captures(&s) {
        return format!("Intel Arc {}", caps[1].to_uppercase());
    }

    if let Some(caps) = APPLE_M.captures(&s) {
        return format!("Apple M{} GPU", &caps[1]);
    }

    if s.contains("iris xe") {
        return "Intel Iris Xe (iGPU)".to_string();
    }
    if s.contains("iris plus") {
        return "Intel Iris Plus (iGPU)".to_string();
    }
    if s.contains("uhd graphics") || s.contains("hd graphics") || NORM_UHD.is_match(&s) {
        return "Intel UHD (iGPU)".to_string();
    }

    if let Some(caps) = NORM_RADEON_IGPU.captures(&s) {
        return format!("Radeon {}M (iGPU)", &caps[1]);
    }
    if let Some(caps) = NORM_VEGA.captures(&s) {
        return format!("Radeon Vega {} (iGPU)", &caps[1]);
    }

    if s.contains("integrated") || s.contains("igpu") || s.contains("apu graphics") {
        return "Integrated (generic)".to_string();
    }

    if s.contains("geforce") || s.contains("nvidia") || s.contains("radeon") {
        return "Discrete GPU (Unknown)".to_string();
    }

    "GPU (Unlabeled)".to_string()
}

/// Whether a normalized label denotes a discrete GPU.
#[must_use]
pub fn has_discrete_gpu(gpu_norm: &str) -> bool {
    let s = gpu_norm.to_lowercase();
    !["(igpu)", "integrated", "intel uhd", "iris"]
        .iter()
        .any(|k| s.contains(k))
}

/// Whether a normalized label denotes a CUDA-capable NVIDIA part.
#[must_use]
pub fn is_cuda_capable(gpu_norm: &str) -> bool {
    let s = gpu_norm.to_lowercase();
    s.contains("rtx") || s.contains("geforce")
}

static RTX_TIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rtx\s*(\d{4})").expect("static regex"));

/// RTX model number from a normalized label (e.g. 4060), or 0 when absent.
#[must_use]
pub fn rtx_tier(gpu_norm: &str) -> u32 {
    RTX_TIER
        .captures(&gpu_norm.to_lowercase())
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}
