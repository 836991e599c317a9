use async_trait::async_trait;
use tokio::time::Instant;

use crate::metrics::{ProbeOutcome, ProbeResult};

/// Sends one GET to the target and reports how it ended.
///
/// Implementations never surface errors: every transport problem collapses
/// into [`ProbeOutcome::Failure`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> ProbeOutcome;
}

/// Issues one GET, times it, and prints the per-request progress line.
pub async fn probe<T>(transport: &T, url: &str, sequence_number: u64) -> ProbeResult
where
    T: Transport + ?Sized,
{
    let started = Instant::now();
    let outcome = transport.get(url).await;
    let completed_at = Instant::now();
    let result = ProbeResult {
        response_time: completed_at.saturating_duration_since(started),
        outcome,
        completed_at,
    };
    println!("{}", progress_line(sequence_number, &result));
    result
}

#[must_use]
pub fn progress_line(sequence_number: u64, result: &ProbeResult) -> String {
    let response_ms = result.response_time.as_secs_f64() * 1000.0;
    match result.outcome {
        ProbeOutcome::Success { status_code: 200 } => {
            format!("Request {}: {:.2} ms (200)", sequence_number, response_ms)
        }
        ProbeOutcome::Success { status_code } => format!(
            "Request {}: {:.2} ms (status={})",
            sequence_number, response_ms, status_code
        ),
        ProbeOutcome::Failure => {
            format!("Request {}: {:.2} ms (FAILED)", sequence_number, response_ms)
        }
    }
}
