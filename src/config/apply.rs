use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveU64, ProbeArgs};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut ProbeArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "host")
        && let Some(host) = config.ip.as_deref()
    {
        let host = host.trim();
        if host.is_empty() {
            return Err(AppError::validation(ValidationError::HostEmpty));
        }
        host.clone_into(&mut args.host);
    }

    if !is_cli(matches, "port")
        && let Some(port) = config.port
    {
        args.port = port;
    }

    if !is_cli(matches, "path")
        && let Some(path) = config.path.clone()
    {
        args.path = path;
    }

    if !is_cli(matches, "target_duration")
        && let Some(duration) = config.duration
    {
        args.target_duration = ensure_positive_u64(duration, "duration")?;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout
    {
        args.request_timeout = ensure_positive_u64(timeout, "timeout")?;
    }

    if !is_cli(matches, "sleep_ms")
        && let Some(sleep_ms) = config.sleep_ms
    {
        args.sleep_ms = sleep_ms;
    }

    if !is_cli(matches, "output_dir")
        && let Some(output_dir) = config.output_dir.clone()
    {
        args.output_dir = output_dir;
    }

    if !is_cli(matches, "export_json")
        && let Some(export_json) = config.export_json.clone()
    {
        args.export_json = Some(export_json);
    }

    if !is_cli(matches, "no_charts")
        && let Some(no_charts) = config.no_charts
    {
        args.no_charts = no_charts;
    }

    if !is_cli(matches, "disable_keepalive")
        && let Some(disable_keepalive) = config.disable_keepalive
    {
        args.disable_keepalive = disable_keepalive;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}
