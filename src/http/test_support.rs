use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::metrics::ProbeOutcome;

use super::probe::Transport;

/// Replays a fixed list of outcomes in a cycle, each taking `latency`.
pub(crate) struct ScriptedTransport {
    outcomes: Vec<ProbeOutcome>,
    latency: Duration,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub(crate) const fn new(outcomes: Vec<ProbeOutcome>, latency: Duration) -> Self {
        Self {
            outcomes,
            latency,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, _url: &str) -> ProbeOutcome {
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        call.checked_rem(self.outcomes.len())
            .and_then(|index| self.outcomes.get(index).copied())
            .unwrap_or(ProbeOutcome::Failure)
    }
}

pub(crate) fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

/// Like [`run_async_test`], but with tokio's clock paused so sleeps resolve
/// instantly and deterministically.
pub(crate) fn run_paused_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .start_paused(true)
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

/// Spawns a local HTTP/1.1 server answering every request with `status_line`.
///
/// Must be called from within a tokio runtime.
pub(crate) async fn spawn_status_server(status_line: &'static str) -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut buffer = [0u8; 1024];
            if stream.read(&mut buffer).await.is_err() {
                continue;
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
                status_line
            );
            if stream.write_all(response.as_bytes()).await.is_err() {
                continue;
            }
            drop(stream.shutdown().await);
        }
    });

    Ok(format!("http://{}", addr))
}

/// Returns a loopback URL with nothing listening on it.
pub(crate) fn unreachable_url() -> Result<String, String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind probe port failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("probe addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}
