use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::metrics::{Observation, RunRecord};

use super::probe::{Transport, probe};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverSettings {
    pub duration: Duration,
    pub sleep: Duration,
}

/// Probes `url` sequentially until `settings.duration` has elapsed.
///
/// The deadline is checked only before starting an iteration, so a request in
/// flight (plus its trailing sleep) may carry the run past the deadline.
pub async fn run_loop<T>(transport: &T, url: &str, settings: &DriverSettings) -> RunRecord
where
    T: Transport + ?Sized,
{
    println!("Target URL: {}", url);
    println!(
        "Starting load test for {} seconds...",
        settings.duration.as_secs()
    );

    let start = Instant::now();
    let deadline = start.checked_add(settings.duration);
    let mut observations = Vec::new();
    let mut sequence_number: u64 = 0;

    while deadline.is_none_or(|deadline| Instant::now() < deadline) {
        sequence_number = sequence_number.saturating_add(1);
        let result = probe(transport, url, sequence_number).await;
        observations.push(Observation {
            sequence_number,
            elapsed_since_start: result.completed_at.saturating_duration_since(start),
            response_time: result.response_time,
            outcome: result.outcome,
        });

        if !settings.sleep.is_zero() {
            sleep(settings.sleep).await;
        }
    }

    let wall_time = start.elapsed();
    debug!(
        "Loop finished after {} requests in {:?}",
        observations.len(),
        wall_time
    );
    RunRecord::new(observations, wall_time)
}
