use crate::metrics::RunSummary;

pub(crate) const NO_SUMMARY_NOTE: &str = "No successful responses to summarize.";
pub(crate) const NO_PLOT_NOTE: &str = "No successful responses to plot.";

pub(crate) fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![
        "Statistics:".to_owned(),
        format!("Total requests attempted: {}", summary.total_requests),
        format!("Successful responses:     {}", summary.successful_requests),
        format!("Failed requests:          {}", summary.failed_requests),
    ];

    match summary.latency {
        Some(stats) => {
            lines.push(format!("Average response time:    {:.2} ms", stats.mean_ms));
            lines.push(format!("Median response time:     {:.2} ms", stats.median_ms));
            lines.push(format!("95th percentile:          {:.2} ms", stats.p95_ms));
            lines.push(format!("99th percentile:          {:.2} ms", stats.p99_ms));
            lines.push(format!("Max response time:        {:.2} ms", stats.max_ms));
        }
        None => lines.push(NO_SUMMARY_NOTE.to_owned()),
    }

    lines
}

pub(crate) fn print_summary(summary: &RunSummary) {
    println!();
    for line in summary_lines(summary) {
        println!("{}", line);
    }
}
