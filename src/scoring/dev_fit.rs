//! Developer-workload fitness sub-score.

use crate::extract::{cpu_suffix, has_discrete_gpu, is_cuda_capable, rtx_tier};
use crate::model::Listing;
use crate::profile::DevProfile;

/// Maximum attainable raw parts before OS scaling.
const MAX_PARTS: f64 = 84.0;

/// Score how well a listing fits a developer workload, on a 0-100 scale.
///
/// Hard requirements come first: a preset that needs a discrete or
/// CUDA-capable GPU zeroes out listings without one. The remaining parts
/// accumulate RAM and SSD headroom against the preset floors, CPU
/// power-class fit, GPU capability with per-preset tier bonuses, screen
/// comfort and the preset's screen-size bias, then scale by the OS
/// multiplier with a flat bonus for Apple-silicon machines on presets
/// where they excel.
#[must_use]
pub fn compute_dev_fit(listing: &Listing, preset: DevProfile) -> f64 {
    let gpu_norm = listing.gpu_norm.as_str();
    let has_dgpu = has_discrete_gpu(gpu_norm);
    if preset.needs_discrete_gpu() && !has_dgpu {
        return 0.0;
    }
    if preset.needs_cuda() && !is_cuda_capable(gpu_norm) {
        return 0.0;
    }

    let mut score = 0.0;

    // RAM and SSD headroom against the preset floors (20 + 15 pts).
    score += (listing.ram_gb as f64 / preset.min_ram_gb() as f64).min(1.0) * 20.0;
    score += (listing.ssd_gb as f64 / preset.min_ssd_gb() as f64).min(1.0) * 15.0;

    // CPU power-class fit (up to 4 pts; negative biases do not subtract).
    let suffix = cpu_suffix(listing.cpu.as_deref().unwrap_or(""));
    score += preset.cpu_bias(suffix).max(0.0) * 4.0;

    // GPU capability with per-preset tier bonuses, capped at 25 pts.
    let mut gpu_pts = (listing.gpu_score / 8.0).min(1.0) * 20.0;
    let tier = rtx_tier(gpu_norm);
    match preset {
        DevProfile::Ml => {
            if tier >= 4060 {
                gpu_pts += 5.0;
            } else if tier >= 4050 {
                gpu_pts += 3.0;
            } else if has_dgpu {
                gpu_pts += 1.0;
            }
        }
        DevProfile::Gamedev => {
            if tier >= 4070 {
                gpu_pts += 6.0;
            } else if tier >= 4060 {
                gpu_pts += 4.0;
            } else if tier >= 4050 {
                gpu_pts += 2.0;
            }
        }
        DevProfile::Web | DevProfile::General => {
            if has_dgpu {
                gpu_pts -= 1.5;
            }
        }
        DevProfile::Mobile => {
            if has_dgpu {
                gpu_pts -= 2.5;
            }
        }
    }
    score += gpu_pts.clamp(0.0, 25.0);

    // Screen comfort (10 pts full, 7 when over the preset max).
    let screen_factor = if listing.screen_size <= preset.screen_max() {
        1.0
    } else {
        0.7
    };
    score += screen_factor * 10.0;

    // Screen-size bias (10 pts per bias unit, signed).
    score += preset.port_bias(listing.screen_size) * 10.0;

    score *= preset.os_multiplier(listing.os);

    // Apple silicon runs the mobile/general/web toolchains unusually well.
    let norm_lower = gpu_norm.to_lowercase();
    let apple_silicon = (1..=4).any(|g| norm_lower.contains(&format!("apple m{g}")));
    if apple_silicon
        && matches!(
            preset,
            DevProfile::Mobile | DevProfile::General | DevProfile::Web
        )
    {
        score += 3.0;
    }

    (score / MAX_PARTS * 100.0).clamp(0.0, 100.0)
}
