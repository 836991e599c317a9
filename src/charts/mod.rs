//! PNG charts rendered from the successful subset of a run.
mod histogram;
mod scatter;


use tracing::info;

use crate::domain::run::ArtifactPaths;
use crate::error::AppResult;
use crate::metrics::SuccessfulSubset;

pub use histogram::{HISTOGRAM_BINS, HistogramBins, bin_response_times, plot_histogram};
pub use scatter::plot_scatter;

/// Chart canvas size in pixels.
pub(crate) const CHART_SIZE: (u32, u32) = (1800, 900);

/// Renders the histogram and scatter charts for `subset`.
///
/// Returns `Ok(false)` without touching the filesystem when no request
/// succeeded.
///
/// # Errors
///
/// Returns an error when either chart cannot be drawn or written.
pub fn plot_run(subset: &SuccessfulSubset, paths: &ArtifactPaths) -> AppResult<bool> {
    if subset.is_empty() {
        return Ok(false);
    }

    info!("Plotting response time histogram...");
    let bins = bin_response_times(&subset.sorted_response_times(), HISTOGRAM_BINS);
    plot_histogram(&bins, &paths.histogram)?;

    info!("Plotting response times over requests...");
    plot_scatter(subset, &paths.scatter)?;

    Ok(true)
}
