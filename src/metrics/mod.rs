//! Observation data model and run statistics.
mod subset;
mod summary;
mod types;


pub use subset::{SuccessPoint, SuccessfulSubset};
pub use summary::{LatencyStats, RunSummary, percentile, summarize};
pub use types::{Observation, ProbeOutcome, ProbeResult, RunRecord};
