//! Top-N recommendation pipeline.
//!
//! Glues the stages together: preference validation, allow-list cuts,
//! the budget window, the usage pre-filter, deduplication, scoring,
//! ranking and the brand-diversity walk.

use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::filter::filter_by_usage;
use crate::model::{Listing, Preferences, ScoreBreakdown};
use crate::profile::{gaming_gpu_requirement, UsageProfile};
use crate::scoring::calculate_score;

/// A scored listing in the final ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RankedListing {
    #[serde(flatten)]
    pub listing: Listing,
    /// Overall fitness score, 0-100.
    pub score: f64,
    /// Weighted per-dimension contributions.
    pub breakdown: ScoreBreakdown,
}

/// Aggregate statistics over the returned ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultMeta {
    pub usage_label: &'static str,
    pub avg_score: f64,
    /// Cheapest and priciest recommended machine.
    pub price_range: (u32, u32),
}

/// The ranked recommendations plus aggregate metadata. `meta` is absent
/// when the pipeline produced no survivors.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub entries: Vec<RankedListing>,
    pub meta: Option<ResultMeta>,
}

impl Recommendations {
    fn empty() -> Self {
        Recommendations {
            entries: Vec::new(),
            meta: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The recommendation engine.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: EngineConfig,
}

impl Recommender {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Recommender { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline and return the diversified top-N ranking.
    ///
    /// Rows are enriched on the way in, so callers may pass raw cleaned
    /// listings without derived CPU/GPU scores. Unscoreable rows are
    /// dropped, not fatal. An empty budget window or an over-strict
    /// gaming requirement yields an empty result rather than an error.
    pub fn recommend(
        &self,
        listings: &[Listing],
        prefs: &Preferences,
    ) -> Result<Recommendations> {
        prefs.validate()?;

        let mut pool: Vec<Listing> = listings
            .iter()
            .filter(|l| l.is_scoreable())
            .map(|l| l.clone().enriched())
            .collect();
        let dropped = listings.len() - pool.len();
        if dropped > 0 {
            debug!(dropped, "dropped unscoreable rows");
        }

        self.apply_allow_lists(&mut pool, prefs);

        pool.retain(|l| l.price >= prefs.min_budget && l.price <= prefs.max_budget);
        if pool.is_empty() {
            info!(
                usage = prefs.usage.key(),
                min = prefs.min_budget,
                max = prefs.max_budget,
                "no listings inside the budget window"
            );
            return Ok(Recommendations::empty());
        }

        let mut pool = filter_by_usage(&pool, prefs, &self.config);

        if prefs.usage == UsageProfile::Gaming {
            let required = gaming_gpu_requirement(&prefs.gaming_titles);
            pool.retain(|l| l.gpu_score >= required);
            if pool.is_empty() {
                info!(required, "no listings meet the gaming GPU requirement");
                return Ok(Recommendations::empty());
            }
        }

        dedupe(&mut pool);

        let mut ranked = Vec::with_capacity(pool.len());
        for listing in pool {
            let (score, breakdown) = calculate_score(&listing, prefs)?;
            ranked.push(RankedListing {
                listing,
                score,
                breakdown,
            });
        }

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.listing.price.cmp(&b.listing.price))
        });

        let entries = diversify(ranked, prefs.top_n);
        let meta = build_meta(prefs.usage, &entries);
        info!(
            usage = prefs.usage.key(),
            returned = entries.len(),
            "recommendation pipeline finished"
        );
        Ok(Recommendations { entries, meta })
    }

    fn apply_allow_lists(&self, pool: &mut Vec<Listing>, prefs: &Preferences) {
        if let Some(brands) = &prefs.allowed_brands {
            pool.retain(|l| brands.contains(&l.brand));
        }
        if let Some(oses) = &prefs.allowed_oses {
            pool.retain(|l| oses.contains(&l.os));
        }
        if let Some(min_ram) = prefs.min_ram {
            pool.retain(|l| l.ram_gb >= min_ram);
        }
        if let Some(min_ssd) = prefs.min_ssd {
            pool.retain(|l| l.ssd_gb >= min_ssd);
        }
        if prefs.usage == UsageProfile::Gaming && prefs.exclude_apple_for_gaming {
            pool.retain(|l| l.brand != crate::model::Brand::Apple);
        }
    }
}

/// Drop duplicate offers: same URL, then same (name, price), keeping the
/// first (best-ranked source order) occurrence.
fn dedupe(pool: &mut Vec<Listing>) {
    let mut seen_urls: HashSet<String> = HashSet::new();
    let mut seen_rows: HashSet<(String, u32)> = HashSet::new();
    pool.retain(|l| {
        if let Some(url) = &l.url {
            if !seen_urls.insert(url.clone()) {
                return false;
            }
        }
        seen_rows.insert((l.name.clone(), l.price))
    });
}

/// Brand-diversity walk over the score-ordered candidates.
///
/// The first two slots go purely by rank. The third slot pulls forward the
/// best-ranked candidate whose brand is not yet represented; when every
/// remaining candidate shares the seen brands, rank order stands. From the
/// fourth slot on, the remaining candidates follow in rank order. The walk
/// order is the output order.
fn diversify(mut ranked: Vec<RankedListing>, top_n: usize) -> Vec<RankedListing> {
    let mut picked: Vec<RankedListing> = Vec::with_capacity(top_n.min(ranked.len()));
    while picked.len() < top_n && !ranked.is_empty() {
        let idx = if picked.len() == 2 {
            let seen: HashSet<_> = picked.iter().map(|e| e.listing.brand).collect();
            ranked
                .iter()
                .position(|c| !seen.contains(&c.listing.brand))
                .unwrap_or(0)
        } else {
            0
        };
        picked.push(ranked.remove(idx));
    }
    picked
}

fn build_meta(usage: UsageProfile, entries: &[RankedListing]) -> Option<ResultMeta> {
    if entries.is_empty() {
        return None;
    }
    let avg_score = entries.iter().map(|e| e.score).sum::<f64>() / entries.len() as f64;
    let min_price = entries.iter().map(|e| e.listing.price).min()?;
    let max_price = entries.iter().map(|e| e.listing.price).max()?;
    Some(ResultMeta {
        usage_label: usage.label(),
        avg_score,
        price_range: (min_price, max_price),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Brand, Os};

    fn listing(name: &str, brand: Brand, price: u32, gpu: &str) -> Listing {
        Listing {
            name: name.into(),
            url: Some(format!("https://shop.example/{}", name.replace(' ', "-"))),
            price,
            ram_gb: 32,
            ssd_gb: 1024,
            screen_size: 16.0,
            brand,
            os: Os::Windows,
            cpu: Some("Intel Core i7-13700H".into()),
            gpu: Some(gpu.to_string()),
            ..Listing::default()
        }
        .enriched()
    }

    fn gaming_pool() -> Vec<Listing> {
        vec![
            listing("ROG Strix G16", Brand::Asus, 58_000, "RTX 4070"),
            listing("Legion Pro 5", Brand::Lenovo, 56_000, "RTX 4070"),
            listing("Katana 15", Brand::Msi, 48_000, "RTX 4060"),
            listing("TUF Gaming A15", Brand::Asus, 44_000, "RTX 4060"),
            listing("Nitro 16", Brand::Acer, 41_000, "RTX 4050"),
            listing("Victus 16", Brand::Hp, 39_000, "RTX 4050"),
        ]
    }

    fn prefs() -> Preferences {
        Preferences::new(UsageProfile::Gaming, 30_000, 70_000)
    }

    #[test]
    fn test_happy_path_returns_top_n() {
        let out = Recommender::default().recommend(&gaming_pool(), &prefs()).unwrap();
        assert_eq!(out.len(), 5);
        let meta = out.meta.unwrap();
        assert_eq!(meta.usage_label, "Gaming");
        assert!(meta.price_range.0 <= meta.price_range.1);
        assert!((0.0..=100.0).contains(&meta.avg_score));
        // Slots one and two go purely by rank; after the diversity slot,
        // rank order resumes.
        assert!(out.entries[0].score >= out.entries[1].score);
        for pair in out.entries[3..].windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_empty_budget_window() {
        let p = Preferences::new(UsageProfile::Gaming, 100_000, 120_000);
        let out = Recommender::default().recommend(&gaming_pool(), &p).unwrap();
        assert!(out.is_empty());
        assert!(out.meta.is_none());
    }

    #[test]
    fn test_invalid_preferences_rejected() {
        let p = Preferences::new(UsageProfile::Gaming, 70_000, 30_000);
        assert!(Recommender::default().recommend(&gaming_pool(), &p).is_err());
    }

    #[test]
    fn test_gaming_title_requirement_cut() {
        // Starfield needs 7.5; the RTX 4050 machines drop out.
        let p = prefs().with_gaming_titles(vec!["Starfield".to_string()]);
        let out = Recommender::default().recommend(&gaming_pool(), &p).unwrap();
        assert_eq!(out.len(), 4);
        assert!(out
            .entries
            .iter()
            .all(|e| e.listing.gpu_score >= 7.5));
    }

    #[test]
    fn test_url_dedupe_keeps_first() {
        let mut pool = gaming_pool();
        let mut dup = pool[0].clone();
        dup.name = "ROG Strix G16 (relisted)".into();
        pool.push(dup);
        let out = Recommender::default().recommend(&pool, &prefs()).unwrap();
        assert!(!out
            .entries
            .iter()
            .any(|e| e.listing.name.contains("relisted")));
    }

    #[test]
    fn test_name_price_dedupe() {
        let mut pool = gaming_pool();
        let mut dup = pool[0].clone();
        dup.url = None;
        let mut original_no_url = pool[0].clone();
        original_no_url.url = None;
        pool.push(original_no_url);
        pool.push(dup);
        let out = Recommender::default().recommend(&pool, &prefs()).unwrap();
        let count = out
            .entries
            .iter()
            .filter(|e| e.listing.name == "ROG Strix G16")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_brand_diversity_third_slot() {
        // Three same-brand machines on top; the third slot should go to a
        // different brand even though a same-brand machine outranks it.
        let pool = vec![
            listing("Strix A", Brand::Asus, 58_000, "RTX 4090"),
            listing("Strix B", Brand::Asus, 57_000, "RTX 4090"),
            listing("Strix C", Brand::Asus, 56_000, "RTX 4090"),
            listing("Legion D", Brand::Lenovo, 60_000, "RTX 4070"),
        ];
        let p = Preferences::new(UsageProfile::Gaming, 30_000, 70_000).with_top_n(3);
        let out = Recommender::default().recommend(&pool, &p).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out.entries[2].listing.brand, Brand::Lenovo);
    }

    #[test]
    fn test_diversity_pick_stays_in_third_slot() {
        // The passed-over same-brand machine must not outrank the
        // diversity pick in the final order; it follows from slot four on.
        let pool = vec![
            listing("Strix A", Brand::Asus, 58_000, "RTX 4090"),
            listing("Strix B", Brand::Asus, 57_000, "RTX 4090"),
            listing("Strix C", Brand::Asus, 56_000, "RTX 4090"),
            listing("Legion D", Brand::Lenovo, 60_000, "RTX 4070"),
            listing("Katana E", Brand::Msi, 59_000, "RTX 4070"),
        ];
        let p = Preferences::new(UsageProfile::Gaming, 30_000, 70_000).with_top_n(5);
        let out = Recommender::default().recommend(&pool, &p).unwrap();
        assert_eq!(out.len(), 5);
        let brands: Vec<Brand> = out.entries.iter().map(|e| e.listing.brand).collect();
        assert_eq!(brands[0], Brand::Asus);
        assert_eq!(brands[1], Brand::Asus);
        assert_ne!(brands[2], Brand::Asus);
        // The passed-over Asus machine resumes in slot four.
        assert_eq!(brands[3], Brand::Asus);
    }

    #[test]
    fn test_diversity_backfills_when_single_brand() {
        let pool = vec![
            listing("Strix A", Brand::Asus, 58_000, "RTX 4090"),
            listing("Strix B", Brand::Asus, 57_000, "RTX 4090"),
            listing("Strix C", Brand::Asus, 56_000, "RTX 4090"),
        ];
        let p = Preferences::new(UsageProfile::Gaming, 30_000, 70_000).with_top_n(3);
        let out = Recommender::default().recommend(&pool, &p).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_allow_lists() {
        let p = prefs().with_allowed_brands(vec![Brand::Msi]);
        let out = Recommender::default().recommend(&gaming_pool(), &p).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.entries[0].listing.brand, Brand::Msi);
    }

    #[test]
    fn test_exclude_apple_for_gaming() {
        let mut pool = gaming_pool();
        pool.push(Listing {
            name: "MacBook Pro 16 M3 Max".into(),
            price: 69_000,
            ram_gb: 36,
            ssd_gb: 1024,
            screen_size: 16.2,
            brand: Brand::Apple,
            os: Os::MacOs,
            cpu: Some("Apple M3 Max".into()),
            gpu: Some("Apple M3 Max".into()),
            ..Listing::default()
        }
        .enriched());
        let p = prefs().with_exclude_apple_for_gaming(true);
        let out = Recommender::default().recommend(&pool, &p).unwrap();
        assert!(out.entries.iter().all(|e| e.listing.brand != Brand::Apple));
    }
}
