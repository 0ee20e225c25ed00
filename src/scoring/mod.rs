//! Fitness scoring: the weighted multi-dimension score and the dev-fit
//! sub-score it blends in for developer workloads.

mod dev_fit;
mod fitness;

pub use dev_fit::compute_dev_fit;
pub use fitness::calculate_score;
