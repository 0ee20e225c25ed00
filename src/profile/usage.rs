//! Usage profiles and their static scoring tables.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Brand, Os, ProductivityProfile};
use crate::profile::Weights;

/// Minimum GPU requirement applied to gaming candidates when no title is
/// selected, and the floor under title-derived requirements.
pub const GAMING_GPU_FLOOR: f64 = 6.0;

/// GPU score each supported title needs for a comfortable experience.
/// A selection's requirement is the max over its titles, floored at
/// [`GAMING_GPU_FLOOR`].
pub const GAMING_TITLE_REQUIREMENTS: [(&str, f64); 10] = [
    ("Starfield", 7.5),
    ("Call of Duty: Black Ops 6", 7.0),
    ("Forza Horizon 5", 6.5),
    ("Baldur's Gate 3", 6.6),
    ("Helldivers 2", 6.5),
    ("Cyberpunk 2077 (2.0)", 6.8),
    ("Assassin's Creed Mirage", 5.5),
    ("Forza Motorsport (2023)", 7.5),
    ("Lies of P", 5.5),
    ("Apex/Fortnite (yüksek ayar)", 5.0),
];

/// The five supported usage profiles. Each carries its own weight table,
/// CPU/GPU performance split and OS multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UsageProfile {
    Gaming,
    Portability,
    Productivity,
    Design,
    Dev,
}

impl UsageProfile {
    /// All profiles, in catalog order.
    pub const ALL: [UsageProfile; 5] = [
        UsageProfile::Gaming,
        UsageProfile::Portability,
        UsageProfile::Productivity,
        UsageProfile::Design,
        UsageProfile::Dev,
    ];

    /// Stable machine key, matching the serde form.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            UsageProfile::Gaming => "gaming",
            UsageProfile::Portability => "portability",
            UsageProfile::Productivity => "productivity",
            UsageProfile::Design => "design",
            UsageProfile::Dev => "dev",
        }
    }

    /// Human-readable label, used in result metadata.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            UsageProfile::Gaming => "Gaming",
            UsageProfile::Portability => "Portability",
            UsageProfile::Productivity => "Productivity",
            UsageProfile::Design => "Design & Content",
            UsageProfile::Dev => "Software Development",
        }
    }

    /// Look up a profile by its machine key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<UsageProfile> {
        UsageProfile::ALL.into_iter().find(|u| u.key() == key)
    }

    /// The profile's weight table. Tables are authored to sum to 100;
    /// callers renormalize anyway to guard edited configs.
    #[must_use]
    pub fn weights(&self) -> Weights {
        match self {
            UsageProfile::Gaming => Weights {
                price: 15.0,
                performance: 40.0,
                ram: 15.0,
                storage: 10.0,
                brand: 7.0,
                brand_purpose: 8.0,
                battery: 3.0,
                portability: 2.0,
            },
            UsageProfile::Portability => Weights {
                price: 15.0,
                performance: 10.0,
                ram: 10.0,
                storage: 8.0,
                brand: 6.0,
                brand_purpose: 6.0,
                battery: 20.0,
                portability: 25.0,
            },
            UsageProfile::Productivity => Weights {
                price: 15.0,
                performance: 25.0,
                ram: 20.0,
                storage: 12.0,
                brand: 6.0,
                brand_purpose: 6.0,
                battery: 8.0,
                portability: 8.0,
            },
            UsageProfile::Design => Weights {
                price: 12.0,
                performance: 22.0,
                ram: 18.0,
                storage: 15.0,
                brand: 7.0,
                brand_purpose: 6.0,
                battery: 10.0,
                portability: 10.0,
            },
            UsageProfile::Dev => Weights {
                price: 12.0,
                performance: 28.0,
                ram: 22.0,
                storage: 15.0,
                brand: 4.0,
                brand_purpose: 4.0,
                battery: 8.0,
                portability: 7.0,
            },
        }
    }

    /// CPU/GPU blend for the performance dimension, as `(cpu_w, gpu_w)`.
    /// Multitask productivity leans even harder on the CPU.
    #[must_use]
    pub fn performance_split(&self, productivity: ProductivityProfile) -> (f64, f64) {
        match self {
            UsageProfile::Gaming => (0.3, 0.7),
            UsageProfile::Design => (0.5, 0.5),
            UsageProfile::Portability => (0.8, 0.2),
            UsageProfile::Productivity if productivity == ProductivityProfile::Multitask => {
                (0.85, 0.15)
            }
            _ => (0.7, 0.3),
        }
    }

    /// OS suitability multiplier applied to the final score.
    #[must_use]
    pub fn os_multiplier(&self, os: Os) -> f64 {
        match self {
            UsageProfile::Gaming | UsageProfile::Portability => 1.0,
            UsageProfile::Design | UsageProfile::Dev => match os {
                Os::MacOs => 1.05,
                Os::Windows => 1.03,
                Os::Linux => 1.02,
                Os::FreeDos => 0.95,
            },
            UsageProfile::Productivity => match os {
                Os::Windows | Os::MacOs => 1.02,
                Os::Linux => 1.0,
                Os::FreeDos => 0.97,
            },
        }
    }
}

/// General brand desirability on a 0-10 scale.
#[must_use]
pub fn brand_desirability(brand: Brand) -> f64 {
    match brand {
        Brand::Apple => 9.5,
        Brand::Lenovo => 9.0,
        Brand::Dell => 8.8,
        Brand::Asus | Brand::Microsoft => 8.5,
        Brand::Hp => 8.3,
        Brand::Huawei | Brand::Samsung | Brand::Msi => 8.0,
        Brand::Acer => 7.5,
        Brand::Monster => 7.0,
        Brand::Casper => 6.8,
        Brand::Other => 5.0,
    }
}

/// Brand-for-purpose affinity on a 0-100 scale; unknown pairs score the
/// neutral 70.
#[must_use]
pub fn brand_affinity(brand: Brand, usage: UsageProfile) -> f64 {
    use UsageProfile::{Design, Dev, Gaming, Portability, Productivity};
    match (brand, usage) {
        (Brand::Apple, Gaming) => 65.0,
        (Brand::Apple, Portability) => 95.0,
        (Brand::Apple, Productivity) => 90.0,
        (Brand::Apple, Design) => 98.0,
        (Brand::Apple, Dev) => 92.0,

        (Brand::Lenovo, Gaming) => 85.0,
        (Brand::Lenovo, Portability) => 82.0,
        (Brand::Lenovo, Productivity) => 95.0,
        (Brand::Lenovo, Design) => 85.0,
        (Brand::Lenovo, Dev) => 93.0,

        (Brand::Asus, Gaming) => 92.0,
        (Brand::Asus, Portability) => 75.0,
        (Brand::Asus, Productivity) => 85.0,
        (Brand::Asus, Design) => 88.0,
        (Brand::Asus, Dev) => 85.0,

        (Brand::Dell, Gaming) => 80.0,
        (Brand::Dell, Portability) => 83.0,
        (Brand::Dell, Productivity) => 92.0,
        (Brand::Dell, Design) => 87.0,
        (Brand::Dell, Dev) => 90.0,

        (Brand::Hp, Gaming) => 78.0,
        (Brand::Hp, Portability) => 82.0,
        (Brand::Hp, Productivity) => 88.0,
        (Brand::Hp, Design) => 90.0,
        (Brand::Hp, Dev) => 84.0,

        (Brand::Huawei, Gaming) => 60.0,
        (Brand::Huawei, Portability) => 90.0,
        (Brand::Huawei, Productivity) => 82.0,
        (Brand::Huawei, Design) => 92.0,
        (Brand::Huawei, Dev) => 80.0,

        (Brand::Samsung, Gaming) => 65.0,
        (Brand::Samsung, Portability) => 92.0,
        (Brand::Samsung, Productivity) => 80.0,
        (Brand::Samsung, Design) => 91.0,
        (Brand::Samsung, Dev) => 78.0,

        (Brand::Msi, Gaming) => 95.0,
        (Brand::Msi, Portability) => 60.0,
        (Brand::Msi, Productivity) => 75.0,
        (Brand::Msi, Design) => 78.0,
        (Brand::Msi, Dev) => 80.0,

        (Brand::Acer, Gaming) => 80.0,
        (Brand::Acer, Portability) => 78.0,
        (Brand::Acer, Productivity) => 78.0,
        (Brand::Acer, Design) => 75.0,
        (Brand::Acer, Dev) => 78.0,

        (Brand::Microsoft, Gaming) => 55.0,
        (Brand::Microsoft, Portability) => 88.0,
        (Brand::Microsoft, Productivity) => 86.0,
        (Brand::Microsoft, Design) => 90.0,
        (Brand::Microsoft, Dev) => 85.0,

        (Brand::Monster, Gaming) => 90.0,
        (Brand::Monster, Portability) => 55.0,
        (Brand::Monster, Productivity) => 70.0,
        (Brand::Monster, Design) => 70.0,
        (Brand::Monster, Dev) => 75.0,

        (Brand::Casper, Gaming) => 75.0,
        (Brand::Casper, Portability) => 70.0,
        (Brand::Casper, Productivity) => 72.0,
        (Brand::Casper, Design) => 70.0,
        (Brand::Casper, Dev) => 73.0,

        (Brand::Other, _) => 70.0,
    }
}

/// Resolve the minimum GPU score a gaming selection requires: the max
/// requirement across selected titles, never below [`GAMING_GPU_FLOOR`].
/// Unknown titles contribute nothing.
#[must_use]
pub fn gaming_gpu_requirement(titles: &[String]) -> f64 {
    let needed = titles
        .iter()
        .filter_map(|t| {
            GAMING_TITLE_REQUIREMENTS
                .iter()
                .find(|(name, _)| name == t)
                .map(|(_, req)| *req)
        })
        .fold(0.0_f64, f64::max);
    needed.max(GAMING_GPU_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_weight_tables_sum_to_100() {
        for usage in UsageProfile::ALL {
            let total = usage.weights().total();
            assert!((total - 100.0).abs() < 1e-9, "{}: {total}", usage.key());
        }
    }

    #[test]
    fn test_key_round_trip() {
        for usage in UsageProfile::ALL {
            assert_eq!(UsageProfile::from_key(usage.key()), Some(usage));
        }
        assert_eq!(UsageProfile::from_key("office"), None);
    }

    #[test]
    fn test_performance_split() {
        let office = ProductivityProfile::Office;
        assert_eq!(UsageProfile::Gaming.performance_split(office), (0.3, 0.7));
        assert_eq!(UsageProfile::Design.performance_split(office), (0.5, 0.5));
        assert_eq!(
            UsageProfile::Portability.performance_split(office),
            (0.8, 0.2)
        );
        assert_eq!(
            UsageProfile::Productivity.performance_split(office),
            (0.7, 0.3)
        );
        assert_eq!(
            UsageProfile::Productivity.performance_split(ProductivityProfile::Multitask),
            (0.85, 0.15)
        );
        assert_eq!(UsageProfile::Dev.performance_split(office), (0.7, 0.3));
    }

    #[test]
    fn test_os_multiplier() {
        assert!((UsageProfile::Gaming.os_multiplier(Os::FreeDos) - 1.0).abs() < 1e-9);
        assert!((UsageProfile::Dev.os_multiplier(Os::MacOs) - 1.05).abs() < 1e-9);
        assert!((UsageProfile::Design.os_multiplier(Os::FreeDos) - 0.95).abs() < 1e-9);
        assert!((UsageProfile::Productivity.os_multiplier(Os::Windows) - 1.02).abs() < 1e-9);
        assert!((UsageProfile::Productivity.os_multiplier(Os::Linux) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_brand_tables() {
        assert!((brand_desirability(Brand::Apple) - 9.5).abs() < 1e-9);
        assert!((brand_desirability(Brand::Other) - 5.0).abs() < 1e-9);
        assert!((brand_affinity(Brand::Msi, UsageProfile::Gaming) - 95.0).abs() < 1e-9);
        assert!((brand_affinity(Brand::Apple, UsageProfile::Design) - 98.0).abs() < 1e-9);
        assert!((brand_affinity(Brand::Other, UsageProfile::Dev) - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_gaming_gpu_requirement() {
        // No titles: the floor applies
        assert!((gaming_gpu_requirement(&[]) - 6.0).abs() < 1e-9);
        // Light titles stay floored
        assert!(
            (gaming_gpu_requirement(&["Lies of P".into()]) - 6.0).abs() < 1e-9
        );
        // Heaviest selected title wins
        let titles = vec!["Starfield".into(), "Helldivers 2".into()];
        assert!((gaming_gpu_requirement(&titles) - 7.5).abs() < 1e-9);
        // Unknown titles contribute nothing
        assert!((gaming_gpu_requirement(&["Minesweeper".into()]) - 6.0).abs() < 1e-9);
    }
}
