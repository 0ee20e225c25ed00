//! Listing row type and its categorical fields.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::extract;

/// Prices at or below this value (in TL) are considered scraping noise,
/// not merely out of budget.
pub const MIN_VALID_PRICE: u32 = 5000;

/// Known laptop brands. Everything else maps to [`Brand::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    Apple,
    Lenovo,
    Asus,
    Dell,
    Hp,
    Msi,
    Acer,
    Microsoft,
    Huawei,
    Samsung,
    Monster,
    Casper,
    Other,
}

impl Brand {
    /// All known brands, excluding [`Brand::Other`].
    pub const KNOWN: [Self; 12] = [
        Self::Apple,
        Self::Lenovo,
        Self::Asus,
        Self::Dell,
        Self::Hp,
        Self::Msi,
        Self::Acer,
        Self::Microsoft,
        Self::Huawei,
        Self::Samsung,
        Self::Monster,
        Self::Casper,
    ];

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Lenovo => "lenovo",
            Self::Asus => "asus",
            Self::Dell => "dell",
            Self::Hp => "hp",
            Self::Msi => "msi",
            Self::Acer => "acer",
            Self::Microsoft => "microsoft",
            Self::Huawei => "huawei",
            Self::Samsung => "samsung",
            Self::Monster => "monster",
            Self::Casper => "casper",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating system shipped with a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Windows,
    #[serde(rename = "macos")]
    MacOs,
    Linux,
    #[serde(rename = "freedos")]
    FreeDos,
}

impl Default for Os {
    /// Listings without any OS signal ship bare.
    fn default() -> Self {
        Self::FreeDos
    }
}

impl Os {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::FreeDos => "freedos",
        }
    }
}

impl std::fmt::Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the external dataset.
///
/// Raw `cpu`/`gpu` text is carried alongside the derived
/// `cpu_score`/`gpu_score`/`gpu_norm` features; [`Listing::enrich`] fills
/// the derived fields from the raw text. Serde defaults match the ingestion
/// contract: missing hardware fields get the documented fallbacks rather
/// than failing the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Listing {
    /// Source URL; may be absent for some scrapers.
    pub url: Option<String>,
    /// Product title. Required non-empty for scoring.
    pub name: String,
    /// Price in TL. Required and range-validated for scoring.
    pub price: u32,
    /// Installed RAM in GB.
    pub ram_gb: u32,
    /// SSD capacity in GB.
    pub ssd_gb: u32,
    /// Screen diagonal in inches, valid range [10.0, 19.9].
    pub screen_size: f64,
    /// Brand category.
    pub brand: Brand,
    /// Shipped operating system.
    pub os: Os,
    /// Raw CPU model text as scraped.
    pub cpu: Option<String>,
    /// Raw GPU model text as scraped.
    pub gpu: Option<String>,
    /// Derived CPU capability score in [0, 10].
    pub cpu_score: f64,
    /// Canonical GPU display label derived from `gpu`.
    pub gpu_norm: String,
    /// Derived GPU capability score in [0, 10].
    pub gpu_score: f64,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            url: None,
            name: String::new(),
            price: 0,
            ram_gb: 8,
            ssd_gb: 256,
            screen_size: 15.6,
            brand: Brand::Other,
            os: Os::FreeDos,
            cpu: None,
            gpu: None,
            cpu_score: 5.0,
            gpu_norm: String::new(),
            gpu_score: 3.0,
        }
    }
}

impl Listing {
    /// Whether this listing satisfies the scoring contract: a non-empty
    /// cleaned name and a price above the noise floor.
    #[must_use]
    pub fn is_scoreable(&self) -> bool {
        !self.name.trim().is_empty() && self.price > MIN_VALID_PRICE
    }

    /// Fill the derived feature columns from the raw text fields.
    ///
    /// Each feature is recomputed only when its raw text is present, so
    /// rows that arrive pre-normalized (derived columns set, raw text
    /// absent) keep the caller's values. The brand is inferred from the
    /// product title only when the ingestion side did not classify it
    /// already.
    pub fn enrich(&mut self) {
        if let Some(cpu) = self.cpu.as_deref() {
            self.cpu_score = extract::cpu_score(cpu);
        }
        if let Some(gpu) = self.gpu.as_deref() {
            self.gpu_score = extract::gpu_score(gpu);
            self.gpu_norm = extract::normalize_gpu_model(gpu);
        } else if self.gpu_norm.is_empty() {
            self.gpu_norm = extract::normalize_gpu_model("");
        }
        if self.brand == Brand::Other {
            self.brand = extract::extract_brand(&self.name);
        }
    }

    /// Consuming variant of [`Listing::enrich`], handy for iterator chains.
    #[must_use]
    pub fn enriched(mut self) -> Self {
        self.enrich();
        self
    }
}
