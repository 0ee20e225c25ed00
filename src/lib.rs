//! **A scoring and recommendation engine for noisy laptop listings.**
//!
//! `laptop-rank` turns scraped e-commerce rows into ranked purchase
//! recommendations. It extracts structured features from messy free text
//! (CPU and GPU model strings, screen diagonals, brand names, RAM/SSD
//! capacities), scores every machine against a usage profile and a budget
//! window, and returns a brand-diversified top-N with a per-dimension
//! score breakdown.
//!
//! ## Key Features
//!
//! - **Tolerant Feature Extraction**: Priority-ordered keyword and regex
//!   tables resolve CPU families ("i7-13", "ryzen 9 7", "ultra 7"), GPU
//!   tiers (RTX/GTX/MX/RX/Arc/Apple silicon/iGPU) and screen sizes out of
//!   marketing text, with sane defaults when nothing parses.
//! - **Usage Profiles**: Five built-in profiles (gaming, portability,
//!   productivity, design and development), each with its own weight
//!   table, CPU/GPU performance blend and OS multipliers.
//! - **Developer Presets**: The dev profile blends in a dedicated dev-fit
//!   sub-score driven by workload presets (web, ML, mobile, game dev,
//!   general) with hard GPU/CUDA gates and hardware floors.
//! - **Pre-Filter with Relaxation**: Usage-specific hard floors cut
//!   hopeless machines before scoring; when the strict pass leaves too few
//!   survivors, a relaxed pass re-runs so the caller still gets a ranking.
//! - **Diversified Ranking**: Results sort by score with a cheaper-first
//!   tie-break, deduplicate by URL and by (name, price), and reserve the
//!   third slot for a brand not yet represented.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The central data types: [`Listing`], [`Preferences`]
//!   and [`ScoreBreakdown`]. A `Listing` carries both the raw scraped text
//!   and the derived feature columns; [`Listing::enriched`] fills the
//!   latter from the former.
//! - **[`extract`]**: The feature extractors and ingestion cleaners.
//! - **[`profile`]**: The usage-profile catalog: weight tables, brand
//!   desirability and brand-for-purpose affinities, game-title GPU
//!   requirements and the [`DevProfile`] presets.
//! - **[`scoring`]**: [`calculate_score`] produces the 0-100 fitness score
//!   and its weighted breakdown; [`compute_dev_fit`] scores developer
//!   workload fit.
//! - **[`filter`]** and **[`recommend`]**: The pre-filter and the
//!   [`Recommender`] pipeline that glues everything together.
//!
//! ## Getting Started
//!
//! ```
//! use laptop_rank::{Listing, Preferences, Recommender, UsageProfile};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let listings = vec![
//!         Listing {
//!             name: "ASUS ROG Strix G16 i7-13650HX RTX 4060 16GB 1TB".into(),
//!             price: 52_000,
//!             ram_gb: 16,
//!             ssd_gb: 1024,
//!             screen_size: 16.0,
//!             cpu: Some("i7-13650HX".into()),
//!             gpu: Some("RTX 4060".into()),
//!             ..Listing::default()
//!         },
//!         Listing {
//!             name: "Lenovo Legion 5 i5-13500H RTX 4050 16GB 512GB".into(),
//!             price: 43_000,
//!             ram_gb: 16,
//!             ssd_gb: 512,
//!             screen_size: 16.0,
//!             cpu: Some("i5-13500H".into()),
//!             gpu: Some("RTX 4050".into()),
//!             ..Listing::default()
//!         },
//!     ];
//!
//!     let prefs = Preferences::new(UsageProfile::Gaming, 30_000, 60_000);
//!     let result = Recommender::default().recommend(&listings, &prefs)?;
//!
//!     for entry in &result.entries {
//!         println!("{:5.1}  {}  ({})", entry.score, entry.listing.name, entry.breakdown);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Tuning
//!
//! The pre-filter thresholds live in [`EngineConfig`], loadable from YAML
//! via [`EngineConfig::from_file`] so the engine can be retuned as the
//! scraped market shifts:
//!
//! ```
//! use laptop_rank::{EngineConfig, Recommender};
//!
//! let config = EngineConfig::from_yaml("min_viable_results: 3\n").unwrap();
//! let engine = Recommender::new(config);
//! # let _ = engine;
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: u32→f64 capacity/price casts are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Scoring tables read best as one long function per dimension
    clippy::too_many_lines,
    // Variable names like `min`/`mid` are clear in context
    clippy::similar_names
)]

pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
pub mod model;
pub mod profile;
pub mod recommend;
pub mod scoring;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use extract::{
    clean_price, clean_ram, clean_ssd, cpu_score, cpu_suffix, detect_os, extract_brand,
    gpu_score, normalize_gpu_model, parse_screen_size, CpuSuffix,
};
pub use filter::filter_by_usage;
pub use model::{
    Brand, DesignProfile, Listing, Os, Preferences, ProductivityProfile, ScoreBreakdown,
    DEFAULT_TOP_N, DIMENSIONS,
};
pub use profile::{
    brand_affinity, brand_desirability, dynamic_weights, gaming_gpu_requirement, DevProfile,
    UsageProfile, Weights,
};
pub use recommend::{RankedListing, Recommendations, Recommender, ResultMeta};
pub use scoring::{calculate_score, compute_dev_fit};
