//! Standalone HTTP context.
//!
//! Drives the scenario actions with a plain `reqwest` client, outside the
//! engine. Used for the pre-flight reachability probe and end-to-end tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use thiserror::Error;
use tracing::debug;

use crate::context::UserContext;

/// Connect deadline for the reachability probe.
pub const PROBE_CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
/// Whole-request deadline for the reachability probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Backend not reachable at {0}")]
    BackendNotReachable(String),
}

/// A user context backed by its own `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a client for the given host, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client whose requests give up after `connect_timeout` to
    /// connect and `timeout` overall.
    pub fn with_timeouts(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let base_url: String = base_url.into();
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client used for the pre-flight reachability check.
    pub fn for_probe(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeouts(base_url, PROBE_CONNECT_TIMEOUT, PROBE_TIMEOUT)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks that something is listening on the host.
    ///
    /// Any HTTP answer counts, including error statuses; only transport
    /// failures are reported.
    pub async fn check_reachable(&self) -> Result<(), ClientError> {
        let url = self.url_for("/");
        match self.client.get(&url).send().await {
            Ok(resp) => {
                debug!("Probe of {} returned {}", url, resp.status());
                Ok(())
            }
            Err(e) => Err(ClientError::BackendNotReachable(format!(
                "{}: {}",
                self.base_url, e
            ))),
        }
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl UserContext for HttpClient {
    type Response = Response;
    type Error = ClientError;

    async fn get(&mut self, path: &str) -> Result<Response, ClientError> {
        let url = self.url_for(path);
        debug!("GET {}", url);
        Ok(self.client.get(&url).send().await?)
    }
}
