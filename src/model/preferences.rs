//! Per-request user preferences.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::profile::{DevProfile, UsageProfile};

use super::listing::{Brand, Os};

/// Default number of recommendations to return.
pub const DEFAULT_TOP_N: usize = 5;

/// Productivity sub-profile. `Multitask` shifts the performance blend
/// heavily toward the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductivityProfile {
    Office,
    Data,
    LightDev,
    Multitask,
}

impl Default for ProductivityProfile {
    fn default() -> Self {
        Self::Office
    }
}

/// Design sub-profile. Informational to the engine: the caller derives
/// RAM/GPU hints from the selection and passes them through the allow-list
/// fields, mirroring the original front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DesignProfile {
    Graphic,
    Video,
    #[serde(rename = "3d")]
    ThreeD,
    Cad,
}

/// User-supplied preferences for one recommendation request.
///
/// Constructed fresh per request and never mutated by the engine. Budget
/// bounds and the usage profile are required; everything else is optional
/// refinement. [`Preferences::validate`] fails fast on malformed input
/// rather than silently defaulting.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Preferences {
    /// Selected usage profile.
    pub usage: UsageProfile,
    /// Lower budget bound in TL (inclusive).
    pub min_budget: u32,
    /// Upper budget bound in TL (inclusive).
    pub max_budget: u32,
    /// Development domain, meaningful only when `usage` is `Dev`.
    #[serde(default)]
    pub dev_profile: Option<DevProfile>,
    /// Productivity sub-profile, meaningful only when `usage` is `Productivity`.
    #[serde(default)]
    pub productivity_profile: Option<ProductivityProfile>,
    /// Selected design domains, meaningful only when `usage` is `Design`.
    #[serde(default)]
    pub design_profiles: Vec<DesignProfile>,
    /// Game titles the user wants to run; drives the minimum-GPU cut for
    /// the gaming profile. Titles not in the catalog are ignored.
    #[serde(default)]
    pub gaming_titles: Vec<String>,
    /// Restrict results to these brands when present.
    #[serde(default)]
    pub allowed_brands: Option<Vec<Brand>>,
    /// Restrict results to these operating systems when present.
    #[serde(default)]
    pub allowed_oses: Option<Vec<Os>>,
    /// Minimum RAM in GB, applied before scoring when present.
    #[serde(default)]
    pub min_ram: Option<u32>,
    /// Minimum SSD in GB, applied before scoring when present.
    #[serde(default)]
    pub min_ssd: Option<u32>,
    /// Drop Apple machines when ranking for gaming.
    #[serde(default)]
    pub exclude_apple_for_gaming: bool,
    /// Number of recommendations to return.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Preferences {
    /// Create preferences with the required fields; everything else takes
    /// its default.
    #[must_use]
    pub fn new(usage: UsageProfile, min_budget: u32, max_budget: u32) -> Self {
        Self {
            usage,
            min_budget,
            max_budget,
            dev_profile: None,
            productivity_profile: None,
            design_profiles: Vec::new(),
            gaming_titles: Vec::new(),
            allowed_brands: None,
            allowed_oses: None,
            min_ram: None,
            min_ssd: None,
            exclude_apple_for_gaming: false,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Set the development domain.
    #[must_use]
    pub fn with_dev_profile(mut self, profile: DevProfile) -> Self {
        self.dev_profile = Some(profile);
        self
    }

    /// Set the productivity sub-profile.
    #[must_use]
    pub fn with_productivity_profile(mut self, profile: ProductivityProfile) -> Self {
        self.productivity_profile = Some(profile);
        self
    }

    /// Set the game titles driving the minimum-GPU requirement.
    #[must_use]
    pub fn with_gaming_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gaming_titles = titles.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict results to the given brands.
    #[must_use]
    pub fn with_allowed_brands(mut self, brands: Vec<Brand>) -> Self {
        self.allowed_brands = Some(brands);
        self
    }

    /// Restrict results to the given operating systems.
    #[must_use]
    pub fn with_allowed_oses(mut self, oses: Vec<Os>) -> Self {
        self.allowed_oses = Some(oses);
        self
    }

    /// Set the minimum RAM gate.
    #[must_use]
    pub const fn with_min_ram(mut self, gb: u32) -> Self {
        self.min_ram = Some(gb);
        self
    }

    /// Set the minimum SSD gate.
    #[must_use]
    pub const fn with_min_ssd(mut self, gb: u32) -> Self {
        self.min_ssd = Some(gb);
        self
    }

    /// Drop Apple machines from gaming rankings.
    #[must_use]
    pub const fn with_exclude_apple_for_gaming(mut self, exclude: bool) -> Self {
        self.exclude_apple_for_gaming = exclude;
        self
    }

    /// Set the result count.
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Fail fast on malformed preferences.
    ///
    /// The budget window must be non-degenerate: a zero upper bound or an
    /// inverted interval cannot produce a meaningful ranking.
    pub fn validate(&self) -> Result<()> {
        if self.max_budget == 0 {
            return Err(EngineError::preferences("max_budget must be positive"));
        }
        if self.min_budget > self.max_budget {
            return Err(EngineError::preferences(format!(
                "min_budget ({}) exceeds max_budget ({})",
                self.min_budget, self.max_budget
            )));
        }
        if self.top_n == 0 {
            return Err(EngineError::preferences("top_n must be at least 1"));
        }
        Ok(())
    }

    /// Effective dev profile; `General` when unset.
    #[must_use]
    pub fn effective_dev_profile(&self) -> DevProfile {
        self.dev_profile.unwrap_or(DevProfile::General)
    }

    /// Effective productivity sub-profile; `Office` when unset.
    #[must_use]
    pub fn effective_productivity_profile(&self) -> ProductivityProfile {
        self.productivity_profile.unwrap_or_default()
    }
}
