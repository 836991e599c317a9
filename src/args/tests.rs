use std::time::Duration;

use super::test_support::parse_test_args;
use super::*;
use crate::error::{AppError, AppResult};

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["seqprobe"])?;

    let checks = [
        (args.host == "127.0.0.1", "Unexpected host"),
        (args.port == 8080, "Unexpected port"),
        (args.path == "/albums", "Unexpected path"),
        (
            args.target_duration.get() == 30,
            "Unexpected target_duration",
        ),
        (
            args.request_timeout.get() == 10,
            "Unexpected request_timeout",
        ),
        (args.sleep_ms == 0, "Unexpected sleep_ms"),
        (args.sleep() == Duration::ZERO, "Unexpected sleep duration"),
        (args.output_dir == ".", "Unexpected output_dir"),
        (args.export_json.is_none(), "Expected export_json to be None"),
        (!args.no_charts, "Expected no_charts to be false"),
        (
            !args.disable_keepalive,
            "Expected disable_keepalive to be false",
        ),
        (args.config.is_none(), "Expected config to be None"),
        (!args.verbose, "Expected verbose to be false"),
        (!args.no_color, "Expected no_color to be false"),
    ];

    for (ok, msg) in checks {
        if !ok {
            return Err(AppError::validation(msg));
        }
    }

    Ok(())
}

#[test]
fn parse_args_overrides() -> AppResult<()> {
    let args = parse_test_args([
        "seqprobe",
        "--ip",
        "10.0.0.5",
        "--port",
        "9000",
        "--path",
        "/health",
        "-t",
        "5",
        "--timeout",
        "2",
        "--sleep-ms",
        "250",
        "-o",
        "out",
        "--no-charts",
    ])?;

    let checks = [
        (args.host == "10.0.0.5", "Unexpected host"),
        (args.port == 9000, "Unexpected port"),
        (args.path == "/health", "Unexpected path"),
        (args.target_duration.get() == 5, "Unexpected target_duration"),
        (
            args.request_timeout.as_secs() == Duration::from_secs(2),
            "Unexpected request_timeout",
        ),
        (
            args.sleep() == Duration::from_millis(250),
            "Unexpected sleep duration",
        ),
        (args.output_dir == "out", "Unexpected output_dir"),
        (args.no_charts, "Expected no_charts to be true"),
    ];

    for (ok, msg) in checks {
        if !ok {
            return Err(AppError::validation(msg));
        }
    }

    Ok(())
}

#[test]
fn parse_args_host_alias() -> AppResult<()> {
    let args = parse_test_args(["seqprobe", "--host", "example.com"])?;
    if args.host != "example.com" {
        return Err(AppError::validation(format!(
            "Unexpected host: {}",
            args.host
        )));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_duration() -> AppResult<()> {
    if parse_test_args(["seqprobe", "--duration", "0"]).is_ok() {
        return Err(AppError::validation("Expected zero duration to be rejected"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_timeout() -> AppResult<()> {
    if parse_test_args(["seqprobe", "--timeout", "0"]).is_ok() {
        return Err(AppError::validation("Expected zero timeout to be rejected"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_blank_host() -> AppResult<()> {
    if parse_test_args(["seqprobe", "--ip", "  "]).is_ok() {
        return Err(AppError::validation("Expected blank host to be rejected"));
    }
    Ok(())
}

#[test]
fn positive_u64_parses_and_rejects() -> AppResult<()> {
    let value: PositiveU64 = "7".parse()?;
    if value.get() != 7 {
        return Err(AppError::validation("Unexpected parsed value"));
    }
    if "0".parse::<PositiveU64>().is_ok() {
        return Err(AppError::validation("Expected 0 to be rejected"));
    }
    if "abc".parse::<PositiveU64>().is_ok() {
        return Err(AppError::validation("Expected non-numeric to be rejected"));
    }
    Ok(())
}
