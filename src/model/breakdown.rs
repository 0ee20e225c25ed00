//! Per-dimension score breakdown.

use indexmap::IndexMap;
use serde::Serialize;

/// Fixed rendering order of the eight scoring dimensions.
pub const DIMENSIONS: [&str; 8] = [
    "price",
    "performance",
    "ram",
    "storage",
    "brand",
    "brand_purpose",
    "battery",
    "portability",
];

/// Mapping from dimension name to its weighted contribution to the total.
///
/// Produced alongside every fitness score, purely derived, and regenerated
/// each pass and never persisted as a source of truth. Insertion order is the
/// fixed dimension order, so rendering is deterministic.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ScoreBreakdown {
    parts: IndexMap<&'static str, f64>,
}

impl ScoreBreakdown {
    /// Create an empty breakdown.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parts: IndexMap::with_capacity(DIMENSIONS.len()),
        }
    }

    /// Record a dimension's weighted contribution.
    pub fn push(&mut self, dimension: &'static str, contribution: f64) {
        self.parts.insert(dimension, contribution);
    }

    /// Look up one dimension's contribution.
    #[must_use]
    pub fn get(&self, dimension: &str) -> Option<f64> {
        self.parts.get(dimension).copied()
    }

    /// Iterate contributions in insertion (dimension) order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.parts.iter().map(|(k, v)| (*k, *v))
    }

    /// Sum of all recorded contributions (the pre-multiplier total).
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.parts.values().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl std::fmt::Display for ScoreBreakdown {
    /// Renders `price:12.3 | performance:20.1 | ...` with one decimal place,
    /// in insertion order.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (dim, value) in &self.parts {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{dim}:{value:.1}")?;
            first = false;
        }
        Ok(())
    }
}
