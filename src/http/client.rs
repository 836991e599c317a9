use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::args::{DEFAULT_USER_AGENT, ProbeArgs};
use crate::error::{AppError, AppResult, HttpError};
use crate::metrics::ProbeOutcome;

use super::probe::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSettings {
    pub request_timeout: Duration,
    pub disable_keepalive: bool,
}

impl From<&ProbeArgs> for ClientSettings {
    fn from(args: &ProbeArgs) -> Self {
        Self {
            request_timeout: args.request_timeout.as_secs(),
            disable_keepalive: args.disable_keepalive,
        }
    }
}

/// Builds the HTTP client used for every probe of a run.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub fn build_client(settings: &ClientSettings) -> AppResult<Client> {
    let mut builder = Client::builder()
        .timeout(settings.request_timeout)
        .connect_timeout(settings.request_timeout)
        .user_agent(DEFAULT_USER_AGENT);
    if settings.disable_keepalive {
        builder = builder.pool_max_idle_per_host(0);
    }
    builder
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> ProbeOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                debug!("GET {} failed: {}", url, err);
                return ProbeOutcome::Failure;
            }
        };
        let status_code = response.status().as_u16();

        // The body is part of the measured request.
        match response.bytes().await {
            Ok(_) => ProbeOutcome::Success { status_code },
            Err(err) => {
                debug!("Reading body from {} failed: {}", url, err);
                ProbeOutcome::Failure
            }
        }
    }
}
