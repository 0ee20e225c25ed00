//! Feature extractors: pure functions from raw scraped text to normalized
//! numeric/categorical features.
//!
//! All extractors are total over arbitrary input: unrecognized text resolves
//! to a documented default, never an error. Classification is driven by
//! priority-ordered keyword/pattern tables evaluated first-match-wins; the
//! ordering is part of the contract and is tested per branch.

mod brand;
mod clean;
mod cpu;
mod gpu;
mod screen;

pub use brand::extract_brand;
pub use clean::{clean_price, clean_ram, clean_ssd, detect_os};
pub use cpu::{cpu_score, cpu_suffix, CpuSuffix};
pub use gpu::{gpu_score, has_discrete_gpu, is_cuda_capable, normalize_gpu_model, rtx_tier};
pub use screen::parse_screen_size;
