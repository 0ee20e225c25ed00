//! Core data model for the recommendation engine.
//!
//! [`Listing`] is one row of the externally-produced dataset, immutable per
//! scoring pass. [`Preferences`] is the per-request user input, and
//! [`ScoreBreakdown`] the per-dimension explanation produced alongside every
//! fitness score.

mod breakdown;
mod listing;
mod preferences;

pub use breakdown::{ScoreBreakdown, DIMENSIONS};
pub use listing::{Brand, Listing, Os, MIN_VALID_PRICE};
pub use preferences::{DesignProfile, Preferences, ProductivityProfile, DEFAULT_TOP_N};
