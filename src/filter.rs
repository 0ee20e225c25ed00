//! Usage-specific pre-filter with a relaxation fallback.

use tracing::debug;

use crate::config::EngineConfig;
use crate::extract::{has_discrete_gpu, is_cuda_capable};
use crate::model::{Listing, Preferences};
use crate::profile::{UsageProfile, GAMING_GPU_FLOOR};

/// Cut listings that cannot serve the selected usage, before scoring.
///
/// Each usage has its own hard floors. When the strict pass leaves fewer
/// than `config.min_viable_results` machines out of a pool that had more,
/// a relaxed usage-specific pass re-runs over the original pool so the
/// caller still gets a ranking to show.
#[must_use]
pub fn filter_by_usage(
    listings: &[Listing],
    prefs: &Preferences,
    config: &EngineConfig,
) -> Vec<Listing> {
    let filtered = strict_pass(listings, prefs, config);

    if filtered.len() >= config.min_viable_results || listings.len() <= config.min_viable_results {
        return filtered;
    }

    debug!(
        usage = prefs.usage.key(),
        strict = filtered.len(),
        pool = listings.len(),
        "strict pre-filter too aggressive, relaxing"
    );

    match prefs.usage {
        UsageProfile::Gaming => listings
            .iter()
            .filter(|l| l.gpu_score >= config.relaxed_gaming_gpu)
            .cloned()
            .collect(),
        UsageProfile::Portability => listings
            .iter()
            .filter(|l| l.screen_size <= config.relaxed_portability_screen)
            .cloned()
            .collect(),
        UsageProfile::Design | UsageProfile::Dev => listings
            .iter()
            .filter(|l| l.ram_gb >= config.relaxed_min_ram)
            .cloned()
            .collect(),
        UsageProfile::Productivity => listings.to_vec(),
    }
}

/// Strict pass. The per-listing floors apply first; for portability the
/// GPU cap then keys on how many machines survived the screen gate, so a
/// handful of compact gaming rigs in a crowded market is not cut just
/// because the raw pool was large.
fn strict_pass(listings: &[Listing], prefs: &Preferences, config: &EngineConfig) -> Vec<Listing> {
    let mut filtered: Vec<Listing> = listings
        .iter()
        .filter(|l| passes_strict(l, prefs))
        .cloned()
        .collect();
    if prefs.usage == UsageProfile::Portability {
        if filtered.len() > config.large_pool_threshold {
            filtered.retain(|l| l.gpu_score <= config.large_pool_gpu_cap);
        } else if filtered.len() > config.medium_pool_threshold {
            filtered.retain(|l| l.gpu_score <= config.medium_pool_gpu_cap);
        }
    }
    filtered
}

fn passes_strict(listing: &Listing, prefs: &Preferences) -> bool {
    match prefs.usage {
        UsageProfile::Gaming => listing.gpu_score >= GAMING_GPU_FLOOR && listing.ram_gb >= 8,
        UsageProfile::Portability => listing.screen_size <= 14.5,
        UsageProfile::Productivity => listing.ram_gb >= 8 && listing.cpu_score >= 5.0,
        UsageProfile::Design => {
            listing.ram_gb >= 16 && listing.gpu_score >= 4.0 && listing.screen_size >= 14.0
        }
        UsageProfile::Dev => {
            let preset = prefs.effective_dev_profile();
            if listing.ram_gb < 16 || listing.cpu_score < 6.0 || listing.ssd_gb < 256 {
                return false;
            }
            if listing.ram_gb < preset.min_ram_gb()
                || listing.ssd_gb < preset.min_ssd_gb()
                || listing.screen_size > preset.screen_max()
            {
                return false;
            }
            if preset.needs_discrete_gpu() && !has_discrete_gpu(&listing.gpu_norm) {
                return false;
            }
            if preset.needs_cuda() && !is_cuda_capable(&listing.gpu_norm) {
                return false;
            }
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Brand, Os};
    use crate::profile::DevProfile;

    fn listing(name: &str, ram: u32, ssd: u32, cpu: &str, gpu: &str, screen: f64) -> Listing {
        Listing {
            name: name.into(),
            price: 45_000,
            ram_gb: ram,
            ssd_gb: ssd,
            screen_size: screen,
            brand: Brand::Other,
            os: Os::Windows,
            cpu: Some(cpu.to_string()),
            gpu: Some(gpu.to_string()),
            ..Listing::default()
        }
        .enriched()
    }

    fn rig(name: &str) -> Listing {
        listing(name, 32, 1024, "i9-13980HX", "RTX 4070", 16.0)
    }

    fn slim(name: &str) -> Listing {
        listing(name, 16, 512, "i7-1355U", "Intel Iris Xe", 14.0)
    }

    fn prefs(usage: UsageProfile) -> Preferences {
        Preferences::new(usage, 30_000, 70_000)
    }

    #[test]
    fn test_gaming_floors() {
        let pool = vec![rig("a"), slim("b")];
        let out = filter_by_usage(&pool, &prefs(UsageProfile::Gaming), &EngineConfig::builtin());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "a");
    }

    #[test]
    fn test_portability_screen_ceiling() {
        let pool = vec![rig("a"), slim("b")];
        let out = filter_by_usage(
            &pool,
            &prefs(UsageProfile::Portability),
            &EngineConfig::builtin(),
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "b");
    }

    #[test]
    fn test_portability_pool_size_gpu_caps() {
        // 31 compact machines with strong GPUs: the medium-pool cap bites.
        let pool: Vec<Listing> = (0..31)
            .map(|i| listing(&format!("g{i}"), 16, 512, "i7-13700H", "RTX 4080", 14.0))
            .collect();
        let out = filter_by_usage(
            &pool,
            &prefs(UsageProfile::Portability),
            &EngineConfig::builtin(),
        );
        // Strict pass empties, relaxation brings back everything <= 15.6"
        assert_eq!(out.len(), 31);
    }

    #[test]
    fn test_portability_cap_keys_on_screen_survivors() {
        // A big pool of 16" machines must not trip the GPU cap for the
        // few compact rigs that actually pass the screen gate.
        let mut pool: Vec<Listing> = (0..50)
            .map(|i| listing(&format!("big{i}"), 16, 512, "i7-13700H", "RTX 4060", 16.0))
            .collect();
        pool.extend(
            (0..10).map(|i| listing(&format!("c{i}"), 16, 512, "i7-13700H", "RTX 4060", 14.0)),
        );
        pool.extend(
            (0..6).map(|i| listing(&format!("mid{i}"), 16, 512, "i5-1340P", "Iris Xe", 15.0)),
        );
        let out = filter_by_usage(
            &pool,
            &prefs(UsageProfile::Portability),
            &EngineConfig::builtin(),
        );
        assert_eq!(out.len(), 10);
        assert!(out.iter().all(|l| l.screen_size <= 14.5));
    }

    #[test]
    fn test_dev_preset_gates() {
        let pool = vec![rig("cuda"), slim("igpu")];
        let p = prefs(UsageProfile::Dev).with_dev_profile(DevProfile::Ml);
        let out = filter_by_usage(&pool, &p, &EngineConfig::builtin());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "cuda");
    }

    #[test]
    fn test_relaxation_needs_a_big_enough_pool() {
        // Pool of 2: too small to trigger relaxation, strict result stands.
        let pool = vec![slim("a"), slim("b")];
        let out = filter_by_usage(&pool, &prefs(UsageProfile::Gaming), &EngineConfig::builtin());
        assert!(out.is_empty());
    }

    #[test]
    fn test_gaming_relaxation_lowers_gpu_floor() {
        // Six mid-GPU machines: strict (>= 6.0) empties, relaxed (>= 5.0) keeps.
        let pool: Vec<Listing> = (0..6)
            .map(|i| listing(&format!("m{i}"), 16, 512, "i5-13420H", "GTX 1650", 15.6))
            .collect();
        assert!(pool[0].gpu_score < 6.0 && pool[0].gpu_score >= 5.0);
        let out = filter_by_usage(&pool, &prefs(UsageProfile::Gaming), &EngineConfig::builtin());
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_productivity_relaxation_returns_pool() {
        let pool: Vec<Listing> = (0..6)
            .map(|i| listing(&format!("w{i}"), 4, 256, "celeron", "uhd", 15.6))
            .collect();
        let out = filter_by_usage(
            &pool,
            &prefs(UsageProfile::Productivity),
            &EngineConfig::builtin(),
        );
        assert_eq!(out.len(), 6);
    }
}
