use std::path::Path;

use plotters::prelude::*;

use crate::error::AppResult;
use crate::metrics::SuccessfulSubset;

use super::CHART_SIZE;

/// Headroom above the slowest response on the y axis.
const Y_HEADROOM: f64 = 1.05;

/// Draws response time against request number, in issue order.
///
/// # Errors
///
/// Returns an error when the chart cannot be drawn or written.
pub fn plot_scatter(subset: &SuccessfulSubset, path: &Path) -> AppResult<()> {
    let points = subset.points();
    let x_max = points
        .last()
        .map_or(1, |point| point.sequence_number)
        .saturating_add(1);
    let y_max = points
        .iter()
        .map(|point| point.response_time_ms)
        .fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * Y_HEADROOM } else { 1.0 };

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Response Times Over Requests (Successful Requests)",
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0u64..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Request Number")
        .y_desc("Response Time (ms)")
        .draw()?;

    let point_style = BLUE.mix(0.6).filled();
    chart.draw_series(points.iter().map(|point| {
        Circle::new(
            (point.sequence_number, point.response_time_ms),
            3,
            point_style,
        )
    }))?;

    root.present()?;
    Ok(())
}
