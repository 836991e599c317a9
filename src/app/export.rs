use std::path::Path;

use tokio::io::{AsyncWriteExt, BufWriter};

use crate::domain::run::RunId;
use crate::error::{AppError, AppResult, SinkError};
use crate::metrics::{Observation, RunSummary};

const CSV_HEADER: &[u8] = b"request_num,elapsed_s,response_time_ms,ok,status_code\n";

/// Writes one CSV row per observation, replacing any existing file.
pub(crate) async fn export_csv(path: &Path, observations: &[Observation]) -> AppResult<()> {
    write_csv(path, observations).await.map_err(|err| {
        AppError::sink(SinkError::WriteCsv {
            path: path.to_path_buf(),
            source: err,
        })
    })
}

async fn write_csv(path: &Path, observations: &[Observation]) -> Result<(), std::io::Error> {
    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(CSV_HEADER).await?;
    for observation in observations {
        writer.write_all(csv_row(observation).as_bytes()).await?;
    }
    writer.flush().await?;
    Ok(())
}

pub(crate) fn csv_row(observation: &Observation) -> String {
    let status = observation
        .status_code()
        .map_or_else(String::new, |code| code.to_string());
    format!(
        "{},{},{},{},{}\n",
        observation.sequence_number,
        observation.elapsed_secs(),
        observation.response_time_ms(),
        observation.succeeded(),
        status
    )
}

pub(crate) struct JsonExport<'run> {
    pub(crate) run_id: &'run RunId,
    pub(crate) url: &'run str,
    pub(crate) summary: &'run RunSummary,
    pub(crate) observations: &'run [Observation],
}

pub(crate) async fn export_json(path: &Path, export: &JsonExport<'_>) -> AppResult<()> {
    let payload = json_payload(export);
    let json = serde_json::to_vec_pretty(&payload)
        .map_err(|err| AppError::sink(SinkError::SerializeJson { source: err }))?;
    write_bytes(path, &json).await.map_err(|err| {
        AppError::sink(SinkError::WriteJson {
            path: path.to_path_buf(),
            source: err,
        })
    })
}

pub(crate) fn json_payload(export: &JsonExport<'_>) -> serde_json::Value {
    let summary = export.summary;
    let latency = summary.latency.map(|stats| {
        serde_json::json!({
            "mean_ms": stats.mean_ms,
            "median_ms": stats.median_ms,
            "p95_ms": stats.p95_ms,
            "p99_ms": stats.p99_ms,
            "max_ms": stats.max_ms
        })
    });
    let records: Vec<serde_json::Value> = export
        .observations
        .iter()
        .map(|observation| {
            serde_json::json!({
                "request_num": observation.sequence_number,
                "elapsed_s": observation.elapsed_secs(),
                "response_time_ms": observation.response_time_ms(),
                "ok": observation.succeeded(),
                "status_code": observation.status_code()
            })
        })
        .collect();

    serde_json::json!({
        "run_id": export.run_id.as_str(),
        "url": export.url,
        "summary": {
            "total_requests": summary.total_requests,
            "successful_requests": summary.successful_requests,
            "failed_requests": summary.failed_requests,
            "latency": latency
        },
        "records": records
    })
}

async fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), std::io::Error> {
    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes).await?;
    writer.flush().await?;
    Ok(())
}
