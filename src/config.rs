//! Engine configuration.
//!
//! The pre-filter thresholds are tunable so the engine can be retuned as
//! the scraped market shifts, without a code change. The builtin defaults
//! match the values the engine shipped with; a YAML file can override any
//! subset of them.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EngineError, Result};

fn default_min_viable_results() -> usize {
    5
}
fn default_large_pool_threshold() -> usize {
    50
}
fn default_medium_pool_threshold() -> usize {
    30
}
fn default_large_pool_gpu_cap() -> f64 {
    5.0
}
fn default_medium_pool_gpu_cap() -> f64 {
    6.0
}
fn default_relaxed_gaming_gpu() -> f64 {
    5.0
}
fn default_relaxed_portability_screen() -> f64 {
    15.6
}
fn default_relaxed_min_ram() -> u32 {
    12
}

/// Tunable thresholds for the pre-filter and its relaxation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Below this many survivors the relaxation pass kicks in (provided
    /// the unfiltered pool was itself larger than this).
    #[serde(default = "default_min_viable_results")]
    pub min_viable_results: usize,

    /// Pool size above which portability filtering caps GPU score hard.
    #[serde(default = "default_large_pool_threshold")]
    pub large_pool_threshold: usize,

    /// Pool size above which portability filtering caps GPU score softly.
    #[serde(default = "default_medium_pool_threshold")]
    pub medium_pool_threshold: usize,

    /// GPU-score ceiling for portability when the pool is large.
    #[serde(default = "default_large_pool_gpu_cap")]
    pub large_pool_gpu_cap: f64,

    /// GPU-score ceiling for portability when the pool is medium.
    #[serde(default = "default_medium_pool_gpu_cap")]
    pub medium_pool_gpu_cap: f64,

    /// Gaming GPU floor used when the strict pass leaves too few machines.
    #[serde(default = "default_relaxed_gaming_gpu")]
    pub relaxed_gaming_gpu: f64,

    /// Portability screen ceiling used by the relaxation pass.
    #[serde(default = "default_relaxed_portability_screen")]
    pub relaxed_portability_screen: f64,

    /// RAM floor (GB) used by the relaxation pass for design and dev.
    #[serde(default = "default_relaxed_min_ram")]
    pub relaxed_min_ram: u32,
}

impl EngineConfig {
    /// The builtin defaults.
    #[must_use]
    pub fn builtin() -> Self {
        EngineConfig {
            min_viable_results: default_min_viable_results(),
            large_pool_threshold: default_large_pool_threshold(),
            medium_pool_threshold: default_medium_pool_threshold(),
            large_pool_gpu_cap: default_large_pool_gpu_cap(),
            medium_pool_gpu_cap: default_medium_pool_gpu_cap(),
            relaxed_gaming_gpu: default_relaxed_gaming_gpu(),
            relaxed_portability_screen: default_relaxed_portability_screen(),
            relaxed_min_ram: default_relaxed_min_ram(),
        }
    }

    /// Parse a config from YAML text. Missing fields fall back to the
    /// builtin defaults; unknown fields are rejected.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: EngineConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from JSON text, with the same default and
    /// validation behavior as [`EngineConfig::from_yaml`].
    pub fn from_json(text: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            EngineError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&text)
    }

    /// Reject configurations the filter cannot sensibly run with.
    pub fn validate(&self) -> Result<()> {
        if self.min_viable_results == 0 {
            return Err(EngineError::config("min_viable_results must be at least 1"));
        }
        if self.medium_pool_threshold > self.large_pool_threshold {
            return Err(EngineError::config(
                "medium_pool_threshold cannot exceed large_pool_threshold",
            ));
        }
        for (name, value) in [
            ("large_pool_gpu_cap", self.large_pool_gpu_cap),
            ("medium_pool_gpu_cap", self.medium_pool_gpu_cap),
            ("relaxed_gaming_gpu", self.relaxed_gaming_gpu),
        ] {
            if !(0.0..=10.0).contains(&value) {
                return Err(EngineError::config(format!(
                    "{name} must be within 0..=10, got {value}"
                )));
            }
        }
        if !(10.0..=20.0).contains(&self.relaxed_portability_screen) {
            return Err(EngineError::config(format!(
                "relaxed_portability_screen must be a plausible diagonal, got {}",
                self.relaxed_portability_screen
            )));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
