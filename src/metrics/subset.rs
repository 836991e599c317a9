use super::types::Observation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuccessPoint {
    pub sequence_number: u64,
    pub response_time_ms: f64,
}

/// Successful observations in issue order.
///
/// Both the statistics block and the charts are derived from this one view so
/// they always agree on what counts as a success.
#[derive(Debug, Clone, Default)]
pub struct SuccessfulSubset {
    points: Vec<SuccessPoint>,
}

impl SuccessfulSubset {
    #[must_use]
    pub fn from_observations(observations: &[Observation]) -> Self {
        let points = observations
            .iter()
            .filter(|observation| observation.succeeded())
            .map(|observation| SuccessPoint {
                sequence_number: observation.sequence_number,
                response_time_ms: observation.response_time_ms(),
            })
            .collect();
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[SuccessPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Response times in ascending order.
    #[must_use]
    pub fn sorted_response_times(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self
            .points
            .iter()
            .map(|point| point.response_time_ms)
            .collect();
        values.sort_unstable_by(f64::total_cmp);
        values
    }
}
