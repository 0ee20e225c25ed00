//! Scoring dimension weights.

use serde::{Deserialize, Serialize};

/// Per-dimension weights for the fitness score, expressed as percentages.
///
/// A table is well-formed when its entries sum to 100; [`Weights::normalized`]
/// repairs tables that drift after user-side edits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub price: f64,
    pub performance: f64,
    pub ram: f64,
    pub storage: f64,
    pub brand: f64,
    pub brand_purpose: f64,
    pub battery: f64,
    pub portability: f64,
}

impl Weights {
    /// Neutral table used when no usage profile applies.
    pub const BASE: Weights = Weights {
        price: 25.0,
        performance: 20.0,
        ram: 15.0,
        storage: 10.0,
        brand: 10.0,
        brand_purpose: 10.0,
        battery: 5.0,
        portability: 5.0,
    };

    /// Entries in [`DIMENSIONS`] order.
    #[must_use]
    pub fn as_array(&self) -> [f64; 8] {
        [
            self.price,
            self.performance,
            self.ram,
            self.storage,
            self.brand,
            self.brand_purpose,
            self.battery,
            self.portability,
        ]
    }

    /// Sum of all entries.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Rescale the table so entries sum to exactly 100. A degenerate
    /// all-zero table is returned unchanged.
    #[must_use]
    pub fn normalized(&self) -> Weights {
        let total = self.total();
        if total <= 0.0 || (total - 100.0).abs() < 1e-9 {
            return *self;
        }
        let scale = 100.0 / total;
        Weights {
            price: self.price * scale,
            performance: self.performance * scale,
            ram: self.ram * scale,
            storage: self.storage * scale,
            brand: self.brand * scale,
            brand_purpose: self.brand_purpose * scale,
            battery: self.battery * scale,
            portability: self.portability * scale,
        }
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::BASE
    }
}

/// The effective weight table for a usage profile: the profile's full
/// replacement map, renormalized so the entries sum to exactly 100.
#[must_use]
pub fn dynamic_weights(usage: crate::profile::UsageProfile) -> Weights {
    usage.weights().normalized()
}
