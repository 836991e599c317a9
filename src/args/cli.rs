use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_HOST, DEFAULT_OUTPUT_DIR, DEFAULT_PATH, DEFAULT_PORT};
use super::parsers::{parse_host, parse_positive_u64};
use super::types::PositiveU64;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Sequential HTTP latency prober - fixed-duration GET loop, per-request CSV capture, summary percentiles, and histogram/scatter chart exports."
)]
pub struct ProbeArgs {
    /// Target host (IP address or hostname)
    #[arg(long = "ip", alias = "host", default_value = DEFAULT_HOST, value_parser = parse_host)]
    pub host: String,

    /// Target port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Request path
    #[arg(long, default_value = DEFAULT_PATH)]
    pub path: String,

    /// Duration of test (seconds)
    #[arg(
        long = "duration",
        short = 't',
        default_value = "30",
        value_parser = parse_positive_u64
    )]
    pub target_duration: PositiveU64,

    /// Per-request timeout (seconds)
    #[arg(long = "timeout", default_value = "10", value_parser = parse_positive_u64)]
    pub request_timeout: PositiveU64,

    /// Sleep between requests (milliseconds)
    #[arg(long = "sleep-ms", default_value_t = 0)]
    pub sleep_ms: u64,

    /// Directory to write the CSV and chart files to
    #[arg(long = "output-dir", short = 'o', default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Also export summary and records to JSON
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Disable chart generation
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Open a fresh connection for every request instead of pooling
    #[arg(long = "disable-keepalive")]
    pub disable_keepalive: bool,

    /// Path to config file (TOML/JSON). Defaults to ./seqprobe.toml or ./seqprobe.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by SEQPROBE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl ProbeArgs {
    #[must_use]
    pub const fn sleep(&self) -> Duration {
        Duration::from_millis(self.sleep_ms)
    }
}
