//! Developer-workload presets used by the dev usage profile.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::extract::CpuSuffix;
use crate::model::Os;

/// Developer workload preset. Each preset carries hardware floors, OS
/// multipliers, CPU power-class biases and a screen-size bias curve for
/// the dev-fit score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DevProfile {
    Web,
    Ml,
    Mobile,
    Gamedev,
    #[default]
    General,
}

impl DevProfile {
    pub const ALL: [DevProfile; 5] = [
        DevProfile::Web,
        DevProfile::Ml,
        DevProfile::Mobile,
        DevProfile::Gamedev,
        DevProfile::General,
    ];

    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            DevProfile::Web => "web",
            DevProfile::Ml => "ml",
            DevProfile::Mobile => "mobile",
            DevProfile::Gamedev => "gamedev",
            DevProfile::General => "general",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<DevProfile> {
        DevProfile::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Minimum workable RAM for the preset, in GB.
    #[must_use]
    pub fn min_ram_gb(&self) -> u32 {
        match self {
            DevProfile::Ml | DevProfile::Gamedev => 32,
            _ => 16,
        }
    }

    /// Minimum workable SSD for the preset, in GB.
    #[must_use]
    pub fn min_ssd_gb(&self) -> u32 {
        match self {
            DevProfile::Ml | DevProfile::Gamedev => 1024,
            _ => 512,
        }
    }

    /// Largest screen diagonal that still counts as fully comfortable.
    #[must_use]
    pub fn screen_max(&self) -> f64 {
        match self {
            DevProfile::Ml | DevProfile::Gamedev => 16.0,
            DevProfile::Mobile => 14.5,
            DevProfile::Web | DevProfile::General => 15.6,
        }
    }

    /// ML and game-dev workloads require a discrete GPU.
    #[must_use]
    pub fn needs_discrete_gpu(&self) -> bool {
        matches!(self, DevProfile::Ml | DevProfile::Gamedev)
    }

    /// ML and game-dev workloads require a CUDA-capable (NVIDIA) GPU.
    #[must_use]
    pub fn needs_cuda(&self) -> bool {
        matches!(self, DevProfile::Ml | DevProfile::Gamedev)
    }

    /// OS suitability multiplier for the dev-fit score. FreeDOS counts as
    /// an unlisted OS for every preset.
    #[must_use]
    pub fn os_multiplier(&self, os: Os) -> f64 {
        match (self, os) {
            (DevProfile::Web, Os::Linux) => 1.05,
            (DevProfile::Web, Os::Windows | Os::MacOs) => 1.0,

            (DevProfile::Ml, Os::Windows) => 1.04,
            (DevProfile::Ml, Os::Linux) => 1.03,
            (DevProfile::Ml, Os::MacOs) => 0.98,

            (DevProfile::Mobile, Os::MacOs) => 1.06,
            (DevProfile::Mobile, Os::Windows) => 1.0,
            (DevProfile::Mobile, Os::Linux) => 0.98,

            (DevProfile::Gamedev, Os::Windows) => 1.04,
            (DevProfile::Gamedev, Os::Linux) => 1.0,
            (DevProfile::Gamedev, Os::MacOs) => 0.97,

            (DevProfile::General, Os::Windows | Os::MacOs | Os::Linux) => 1.02,

            (_, Os::FreeDos) => 0.98,
        }
    }

    /// Bias for the CPU power-class suffix: positive favors the class,
    /// negative penalizes it. Unsuffixed parts are neutral.
    #[must_use]
    pub fn cpu_bias(&self, suffix: CpuSuffix) -> f64 {
        match (self, suffix) {
            (DevProfile::Web, CpuSuffix::Hx) => 1.0,
            (DevProfile::Web, CpuSuffix::H) => 0.5,
            (DevProfile::Web, CpuSuffix::U) => -0.2,
            (DevProfile::Web, CpuSuffix::P) => 0.2,

            (DevProfile::Ml, CpuSuffix::Hx) => 0.8,
            (DevProfile::Ml, CpuSuffix::H) => 0.5,
            (DevProfile::Ml, CpuSuffix::U) => -0.6,
            (DevProfile::Ml, CpuSuffix::P) => -0.2,

            (DevProfile::Mobile, CpuSuffix::U) => 0.6,
            (DevProfile::Mobile, CpuSuffix::P) => 0.3,
            (DevProfile::Mobile, CpuSuffix::H) => -0.2,
            (DevProfile::Mobile, CpuSuffix::Hx) => -0.5,

            (DevProfile::Gamedev, CpuSuffix::Hx) => 1.0,
            (DevProfile::Gamedev, CpuSuffix::H) => 0.6,
            (DevProfile::Gamedev, CpuSuffix::U) => -0.8,
            (DevProfile::Gamedev, CpuSuffix::P) => -0.3,

            (DevProfile::General, CpuSuffix::H) => 0.3,
            (DevProfile::General, CpuSuffix::P) => 0.2,
            (DevProfile::General, CpuSuffix::Hx) => -0.1,
            (DevProfile::General, CpuSuffix::U) => 0.0,

            (_, CpuSuffix::None) => 0.0,
        }
    }

    /// Screen-diagonal bias for the preset, in score points before the
    /// dev-fit scaling. Bands: compact (≤13.6), small (≤14.5), standard
    /// (≤15.6), large (15.6–16], oversize (>16).
    #[must_use]
    pub fn port_bias(&self, screen_size: f64) -> f64 {
        let band = if screen_size <= 13.6 {
            0
        } else if screen_size <= 14.5 {
            1
        } else if screen_size <= 15.6 {
            2
        } else if screen_size > 16.0 {
            4
        } else {
            3
        };
        match self {
            DevProfile::Web => [0.0, 0.3, 0.2, 0.0, -0.4][band],
            DevProfile::Ml => [0.0, -0.2, 0.2, 0.0, -0.1][band],
            DevProfile::Mobile => [0.8, 0.5, 0.0, -0.2, -0.2][band],
            DevProfile::Gamedev => [0.0, -0.2, 0.2, 0.0, 0.1][band],
            DevProfile::General => [0.0, 0.3, 0.2, 0.0, -0.2][band],
        }
    }
}
