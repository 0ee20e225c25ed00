//! Usage-profile catalog: weight tables, brand affinities, OS multipliers
//! and developer-workload presets.

mod dev;
mod usage;
mod weights;

pub use dev::DevProfile;
pub use usage::{
    brand_affinity, brand_desirability, gaming_gpu_requirement, UsageProfile, GAMING_GPU_FLOOR,
    GAMING_TITLE_REQUIREMENTS,
};
pub use weights::{dynamic_weights, Weights};
