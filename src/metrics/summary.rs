use super::subset::SuccessfulSubset;
use super::types::Observation;

/// Percentile thresholds reported in the summary.
const PERCENTILE_MEDIAN: f64 = 50.0;
const PERCENTILE_P95: f64 = 95.0;
const PERCENTILE_P99: f64 = 99.0;
const PERCENT_DIVISOR: f64 = 100.0;

/// Response-time statistics over the successful subset, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyStats {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub max_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    /// `None` when no request succeeded.
    pub latency: Option<LatencyStats>,
}

#[must_use]
pub fn summarize(observations: &[Observation], subset: &SuccessfulSubset) -> RunSummary {
    let total_requests = u64::try_from(observations.len()).unwrap_or(u64::MAX);
    let successful_requests = u64::try_from(subset.len()).unwrap_or(u64::MAX);

    RunSummary {
        total_requests,
        successful_requests,
        failed_requests: total_requests.saturating_sub(successful_requests),
        latency: latency_stats(&subset.sorted_response_times()),
    }
}

fn latency_stats(sorted: &[f64]) -> Option<LatencyStats> {
    let max_ms = *sorted.last()?;
    let count = sorted.len() as f64;
    let mean_ms = sorted.iter().sum::<f64>() / count;

    Some(LatencyStats {
        mean_ms,
        median_ms: percentile(sorted, PERCENTILE_MEDIAN)?,
        p95_ms: percentile(sorted, PERCENTILE_P95)?,
        p99_ms: percentile(sorted, PERCENTILE_P99)?,
        max_ms,
    })
}

/// Linear-interpolation percentile over ascending `sorted` values.
///
/// The rank is `pct / 100 * (n - 1)`; the result interpolates between the two
/// closest ranks. This matches NumPy's default `linear` method, so the median
/// is the mean of the two middle values for even-length input.
#[must_use]
pub fn percentile(sorted: &[f64], pct: f64) -> Option<f64> {
    let last_index = sorted.len().checked_sub(1)?;
    let fraction = (pct / PERCENT_DIVISOR).clamp(0.0, 1.0);
    let rank = fraction * last_index as f64;

    let lower_index = rank.floor() as usize;
    let upper_index = rank.ceil() as usize;
    let lower = *sorted.get(lower_index)?;
    let upper = *sorted.get(upper_index)?;
    let weight = rank - lower_index as f64;

    Some(lower + (upper - lower) * weight)
}
