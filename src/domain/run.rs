use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime, Timelike};

const RUN_ID_PREFIX: &str = "loadtest";
const HISTOGRAM_SUFFIX: &str = "_hist.png";
const SCATTER_SUFFIX: &str = "_scatter.png";
const CSV_SUFFIX: &str = ".csv";

/// Identifier shared by every artifact of one run.
///
/// Formatted as `loadtest_<host>_<YYYYmmdd_HHMMSS>` where dots and any other
/// character unsafe in file names are replaced by `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunId(String);

impl RunId {
    #[must_use]
    pub fn new(host: &str, started_at: NaiveDateTime) -> Self {
        let stamp = format!(
            "{:04}{:02}{:02}_{:02}{:02}{:02}",
            started_at.year(),
            started_at.month(),
            started_at.day(),
            started_at.hour(),
            started_at.minute(),
            started_at.second()
        );
        Self(format!(
            "{}_{}_{}",
            RUN_ID_PREFIX,
            sanitize_host(host),
            stamp
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn sanitize_host(host: &str) -> String {
    let sanitized: String = host
        .trim()
        .chars()
        .map(|ch| match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => ch,
            _ => '-',
        })
        .collect();
    if sanitized.is_empty() {
        "unknown-host".to_owned()
    } else {
        sanitized
    }
}

/// Output file locations derived from a [`RunId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub csv: PathBuf,
    pub histogram: PathBuf,
    pub scatter: PathBuf,
}

impl ArtifactPaths {
    #[must_use]
    pub fn new(output_dir: &Path, run_id: &RunId) -> Self {
        let file = |suffix: &str| output_dir.join(format!("{}{}", run_id, suffix));
        Self {
            csv: file(CSV_SUFFIX),
            histogram: file(HISTOGRAM_SUFFIX),
            scatter: file(SCATTER_SUFFIX),
        }
    }
}
