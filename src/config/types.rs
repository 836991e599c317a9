use serde::Deserialize;

/// Options accepted from `seqprobe.toml` / `seqprobe.json`.
///
/// Every field is optional; values given explicitly on the command line win.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(alias = "host")]
    pub ip: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub duration: Option<u64>,
    pub timeout: Option<u64>,
    pub sleep_ms: Option<u64>,
    pub output_dir: Option<String>,
    pub export_json: Option<String>,
    pub no_charts: Option<bool>,
    pub disable_keepalive: Option<bool>,
    pub no_color: Option<bool>,
}
