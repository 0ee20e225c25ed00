//! The weighted multi-dimension fitness score.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{EngineError, Result};
use crate::model::{Listing, Preferences, ScoreBreakdown, DIMENSIONS};
use crate::profile::{brand_affinity, brand_desirability, UsageProfile};
use crate::scoring::compute_dev_fit;

static I_SERIES_U: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"i[3579]-\d+u").expect("static regex"));
static I_SERIES_P: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"i[3579]-\d+p").expect("static regex"));
static I_SERIES_H: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"i[3579]-\d+h").expect("static regex"));

/// Score a listing against the buyer's preferences.
///
/// Returns the overall 0-100 score together with the per-dimension
/// breakdown of weighted contributions, in [`DIMENSIONS`] order. Listings
/// that fail [`Listing::is_scoreable`] are rejected rather than scored.
pub fn calculate_score(listing: &Listing, prefs: &Preferences) -> Result<(f64, ScoreBreakdown)> {
    if !listing.is_scoreable() {
        return Err(EngineError::unscoreable(&listing.name));
    }

    let usage = prefs.usage;
    let weights = usage.weights().normalized().as_array();

    let parts = [
        price_score(listing.price, prefs.min_budget, prefs.max_budget),
        performance_score(listing, prefs),
        ram_score(listing.ram_gb),
        storage_score(listing.ssd_gb),
        brand_desirability(listing.brand) * 10.0,
        brand_affinity(listing.brand, usage),
        battery_score(listing),
        portability_score(listing),
    ];

    let mut breakdown = ScoreBreakdown::new();
    let mut total = 0.0;
    for ((name, part), weight) in DIMENSIONS.iter().copied().zip(parts).zip(weights) {
        let contribution = part * weight / 100.0;
        breakdown.push(name, contribution);
        total += contribution;
    }

    total = (total * usage.os_multiplier(listing.os)).clamp(0.0, 100.0);

    if usage == UsageProfile::Dev {
        let fit = compute_dev_fit(listing, prefs.effective_dev_profile());
        total = (0.7 * total + 0.3 * fit).clamp(0.0, 100.0);
    }

    Ok((total, breakdown))
}

/// Price dimension: linear preference for cheaper in-budget machines with
/// a small bonus near the budget midpoint; out-of-budget prices decay from
/// a 50-point ceiling with the relative overshoot.
fn price_score(price: u32, min_budget: u32, max_budget: u32) -> f64 {
    let price = f64::from(price);
    let min_b = f64::from(min_budget);
    let max_b = f64::from(max_budget);

    if price >= min_b && price <= max_b {
        let range = max_b - min_b;
        if range <= 0.0 {
            return 100.0;
        }
        let base = 100.0 * (1.0 - (price - min_b) / range);
        let mid = (min_b + max_b) / 2.0;
        let dist = (price - mid).abs() / (range / 2.0);
        let mid_bonus = ((1.0 - dist) * 4.0).max(0.0);
        (base * 0.95 + mid_bonus).min(100.0)
    } else {
        let penalty = if price < min_b {
            (min_b - price) / min_b.max(1.0)
        } else {
            (price - max_b) / max_b.max(1.0)
        };
        (50.0 * (1.0 - penalty)).max(0.0)
    }
}

/// Performance dimension: the usage-specific CPU/GPU blend, scaled to 100.
fn performance_score(listing: &Listing, prefs: &Preferences) -> f64 {
    let (cpu_w, gpu_w) = prefs
        .usage
        .performance_split(prefs.effective_productivity_profile());
    (listing.cpu_score * cpu_w + listing.gpu_score * gpu_w) * 10.0
}

fn ram_score(ram_gb: u32) -> f64 {
    match ram_gb {
        64.. => 100.0,
        32.. => 90.0,
        24.. => 80.0,
        16.. => 70.0,
        12.. => 55.0,
        8.. => 40.0,
        _ => 20.0,
    }
}

fn storage_score(ssd_gb: u32) -> f64 {
    match ssd_gb {
        2048.. => 100.0,
        1024.. => 85.0,
        512.. => 70.0,
        256.. => 50.0,
        _ => 30.0,
    }
}

/// Battery dimension: a CPU power-class heuristic around a base of 50,
/// then a GPU draw adjustment. Apple silicon dominates; low-power U parts
/// help; HX parts and big GPUs hurt.
fn battery_score(listing: &Listing) -> f64 {
    let cpu = listing.cpu.as_deref().unwrap_or("").to_lowercase();
    let mut score: f64 = 50.0;

    let apple_silicon = ["m1", "m2", "m3", "m4"].iter().any(|m| cpu.contains(m));
    if apple_silicon {
        score += 30.0;
    } else if I_SERIES_U.is_match(&cpu) || cpu.ends_with("-u") {
        score += 20.0;
    } else if I_SERIES_P.is_match(&cpu) || cpu.contains("-p") {
        score += 10.0;
    } else if cpu.contains("hx") {
        score -= 20.0;
    } else if I_SERIES_H.is_match(&cpu) || cpu.ends_with("-h") || cpu.contains(" h ") {
        score -= 10.0;
    } else if cpu.contains("ryzen") && (cpu.contains(" u") || cpu.ends_with('u')) {
        score += 20.0;
    } else if cpu.contains("ryzen") && cpu.contains("hs") {
        score += 5.0;
    } else if cpu.contains("ryzen")
        && ((cpu.contains(" h") || cpu.ends_with('h')) && !cpu.contains("hs"))
    {
        score -= 15.0;
    } else if cpu.contains("ultra") {
        score += 15.0;
    }

    if listing.gpu_score < 3.0 {
        score += 15.0;
    } else if listing.gpu_score > 7.0 {
        score -= 20.0;
    } else if listing.gpu_score > 5.0 {
        score -= 10.0;
    }

    score.clamp(0.0, 100.0)
}

/// Portability dimension: screen diagonal bands around a base of 50, with
/// a GPU weight-class adjustment.
fn portability_score(listing: &Listing) -> f64 {
    let mut score: f64 = 50.0;

    let s = listing.screen_size;
    if s <= 13.0 {
        score += 40.0;
    } else if s <= 14.0 {
        score += 30.0;
    } else if s <= 15.0 {
        score += 10.0;
    } else if s >= 17.0 {
        score -= 30.0;
    } else {
        score -= 10.0;
    }

    if listing.gpu_score < 3.0 {
        score += 10.0;
    } else if listing.gpu_score > 7.0 {
        score -= 15.0;
    }

    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Brand, Os};
    use crate::profile::DevProfile;

    fn gaming_rig() -> Listing {
        Listing {
            name: "ASUS ROG Strix G16".into(),
            price: 55_000,
            ram_gb: 32,
            ssd_gb: 1024,
            screen_size: 16.0,
            brand: Brand::Asus,
            os: Os::Windows,
            cpu: Some("Intel Core i9-13980HX".into()),
            gpu: Some("NVIDIA GeForce RTX 4070".into()),
            ..Listing::default()
        }
        .enriched()
    }

    fn ultrabook() -> Listing {
        Listing {
            name: "Lenovo Yoga Slim 7".into(),
            price: 42_000,
            ram_gb: 16,
            ssd_gb: 512,
            screen_size: 14.0,
            brand: Brand::Lenovo,
            os: Os::Windows,
            cpu: Some("Intel Core i7-1355U".into()),
            gpu: Some("Intel Iris Xe Graphics".into()),
            ..Listing::default()
        }
        .enriched()
    }

    fn prefs(usage: UsageProfile) -> Preferences {
        Preferences::new(usage, 30_000, 70_000)
    }

    #[test]
    fn test_unscoreable_rejected() {
        let mut bad = gaming_rig();
        bad.price = 1000;
        assert!(calculate_score(&bad, &prefs(UsageProfile::Gaming)).is_err());
    }

    #[test]
    fn test_score_in_range_with_full_breakdown() {
        let (score, breakdown) =
            calculate_score(&gaming_rig(), &prefs(UsageProfile::Gaming)).unwrap();
        assert!((0.0..=100.0).contains(&score));
        assert_eq!(breakdown.len(), DIMENSIONS.len());
        assert!((breakdown.sum() - score).abs() < 5.0);
    }

    #[test]
    fn test_gaming_prefers_the_rig() {
        let p = prefs(UsageProfile::Gaming);
        let (rig, _) = calculate_score(&gaming_rig(), &p).unwrap();
        let (slim, _) = calculate_score(&ultrabook(), &p).unwrap();
        assert!(rig > slim, "rig {rig} vs ultrabook {slim}");
    }

    #[test]
    fn test_portability_prefers_the_ultrabook() {
        let p = prefs(UsageProfile::Portability);
        let (rig, _) = calculate_score(&gaming_rig(), &p).unwrap();
        let (slim, _) = calculate_score(&ultrabook(), &p).unwrap();
        assert!(slim > rig, "ultrabook {slim} vs rig {rig}");
    }

    #[test]
    fn test_dev_blends_dev_fit() {
        let p = prefs(UsageProfile::Dev).with_dev_profile(DevProfile::Ml);
        let (rig, _) = calculate_score(&gaming_rig(), &p).unwrap();
        // The ultrabook has no CUDA GPU, so 30% of its score collapses.
        let (slim, _) = calculate_score(&ultrabook(), &p).unwrap();
        assert!(rig > slim);
    }

    #[test]
    fn test_price_score_shapes() {
        // Cheaper in-budget beats pricier in-budget
        assert!(price_score(31_000, 30_000, 70_000) > price_score(65_000, 30_000, 70_000));
        // Out-of-budget decays from a 50-point ceiling
        let over = price_score(75_000, 30_000, 70_000);
        assert!(over < 50.0);
        assert!(price_score(31_000, 30_000, 70_000) > over);
        // The linear in-window decay runs below the overshoot ceiling near
        // the top of the window, so a slight overshoot can outscore it
        assert!(price_score(69_000, 30_000, 70_000) < over);
        // Degenerate single-point window
        assert!((price_score(40_000, 40_000, 40_000) - 100.0).abs() < 1e-9);
        // Far over budget bottoms out at zero
        assert!((price_score(200_000, 30_000, 70_000)).abs() < 1e-9);
    }

    #[test]
    fn test_ram_and_storage_bands() {
        assert!((ram_score(64) - 100.0).abs() < 1e-9);
        assert!((ram_score(16) - 70.0).abs() < 1e-9);
        assert!((ram_score(4) - 20.0).abs() < 1e-9);
        assert!((storage_score(2048) - 100.0).abs() < 1e-9);
        assert!((storage_score(256) - 50.0).abs() < 1e-9);
        assert!((storage_score(128) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_battery_heuristic_ordering() {
        let mac = Listing {
            cpu: Some("Apple M3".into()),
            gpu: Some("Apple M3".into()),
            ..ultrabook()
        }
        .enriched();
        let u_part = ultrabook();
        let hx_rig = gaming_rig();
        // The M3's +30 CPU bonus is partly eaten by its strong GPU's -20
        assert!(battery_score(&u_part) > battery_score(&mac));
        assert!(battery_score(&mac) > battery_score(&hx_rig));
    }

    #[test]
    fn test_breakdown_display_format() {
        let (_, breakdown) = calculate_score(&ultrabook(), &prefs(UsageProfile::Gaming)).unwrap();
        let text = breakdown.to_string();
        assert!(text.starts_with("price:"));
        assert!(text.contains(" | performance:"));
    }
}
