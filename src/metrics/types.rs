use std::time::Duration;

use tokio::time::Instant;

/// Milliseconds per second, for float conversions.
const MS_PER_SEC: f64 = 1000.0;

/// Outcome of a single GET attempt.
///
/// Any received response is a `Success`, whatever its status code. Transport
/// failures (refused connection, DNS, timeout, broken body) are `Failure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success { status_code: u16 },
    Failure,
}

impl ProbeOutcome {
    #[must_use]
    pub const fn succeeded(self) -> bool {
        matches!(self, ProbeOutcome::Success { .. })
    }

    #[must_use]
    pub const fn status_code(self) -> Option<u16> {
        match self {
            ProbeOutcome::Success { status_code } => Some(status_code),
            ProbeOutcome::Failure => None,
        }
    }
}

/// Timing and outcome of one probe, before the driver assigns its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    pub response_time: Duration,
    pub outcome: ProbeOutcome,
    /// When the attempt finished, taken before any progress output.
    pub completed_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub sequence_number: u64,
    pub elapsed_since_start: Duration,
    pub response_time: Duration,
    pub outcome: ProbeOutcome,
}

impl Observation {
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.outcome.succeeded()
    }

    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        self.outcome.status_code()
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_since_start.as_secs_f64()
    }

    #[must_use]
    pub fn response_time_ms(&self) -> f64 {
        self.response_time.as_secs_f64() * MS_PER_SEC
    }
}

/// Ordered observations of one finished run.
#[derive(Debug, Clone, Default)]
pub struct RunRecord {
    observations: Vec<Observation>,
    wall_time: Duration,
}

impl RunRecord {
    #[must_use]
    pub const fn new(observations: Vec<Observation>, wall_time: Duration) -> Self {
        Self {
            observations,
            wall_time,
        }
    }

    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Time from loop start until the last iteration finished.
    #[must_use]
    pub const fn wall_time(&self) -> Duration {
        self.wall_time
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
