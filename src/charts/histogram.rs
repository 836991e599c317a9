use std::path::Path;

use plotters::prelude::*;

use crate::error::AppResult;

use super::CHART_SIZE;

pub const HISTOGRAM_BINS: usize = 50;

/// Half-width of the range used when every value is identical.
const FLAT_RANGE_PAD: f64 = 0.5;

/// Equal-width frequency bins over a set of response times.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBins {
    pub lower_ms: f64,
    pub width_ms: f64,
    pub counts: Vec<u32>,
}

impl HistogramBins {
    #[must_use]
    pub fn upper_ms(&self) -> f64 {
        self.lower_ms + self.width_ms * self.counts.len() as f64
    }
}

/// Splits the `[min, max]` range into `bins` equal-width bins.
///
/// The last bin is closed so the maximum lands in it. When all values are
/// equal the range is widened to `value ± 0.5`.
#[must_use]
pub fn bin_response_times(values: &[f64], bins: usize) -> HistogramBins {
    let bins = bins.max(1);
    let mut counts = vec![0u32; bins];
    let (Some(min), Some(max)) = (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) else {
        return HistogramBins {
            lower_ms: 0.0,
            width_ms: 1.0,
            counts,
        };
    };

    let (lower_ms, upper_ms) = if max > min {
        (min, max)
    } else {
        (min - FLAT_RANGE_PAD, max + FLAT_RANGE_PAD)
    };
    let width_ms = (upper_ms - lower_ms) / bins as f64;
    let last_bin = bins.saturating_sub(1);

    for value in values {
        let index = (((value - lower_ms) / width_ms).floor() as usize).min(last_bin);
        if let Some(slot) = counts.get_mut(index) {
            *slot = slot.saturating_add(1);
        }
    }

    HistogramBins {
        lower_ms,
        width_ms,
        counts,
    }
}

/// Draws `bins` as a bar histogram.
///
/// # Errors
///
/// Returns an error when the chart cannot be drawn or written.
pub fn plot_histogram(bins: &HistogramBins, path: &Path) -> AppResult<()> {
    let y_max = bins.counts.iter().copied().max().unwrap_or(1);
    let x_range = bins.lower_ms..bins.upper_ms();
    let y_range = 0u32..y_max.saturating_add(1);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Distribution of Response Times (Successful Requests)",
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Response Time (ms)")
        .y_desc("Frequency")
        .draw()?;

    let bar_style = BLUE.mix(0.7).filled();
    chart.draw_series(bins.counts.iter().enumerate().map(|(index, &count)| {
        let left = bins.lower_ms + bins.width_ms * index as f64;
        let right = left + bins.width_ms;
        Rectangle::new([(left, 0u32), (right, count)], bar_style)
    }))?;

    root.present()?;
    Ok(())
}
