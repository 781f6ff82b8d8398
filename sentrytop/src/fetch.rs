//! HTTP client helpers: one GET per data source, parsed into typed snapshots.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::types::{
    ConnectionRecord, ConnectionsResponse, HostRecord, HostsResponse, MetricSample,
    MetricsResponse, SystemInfo,
};

pub const METRICS_PATH: &str = "api/metrics";
pub const CONNECTIONS_PATH: &str = "api/network/connections";
pub const HOSTS_PATH: &str = "api/network/hosts";
pub const SYSTEM_INFO_PATH: &str = "api/system/info";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered {status}")]
    Status { url: String, status: StatusCode },
    #[error("malformed body from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    base: Url,
    limit: usize,
}

impl Fetcher {
    /// Without a `timeout` a slow response is awaited until it lands.
    pub fn new(base: Url, limit: usize, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self {
            client,
            base: with_trailing_slash(base),
            limit,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn endpoint(&self, path: &str, limit: Option<usize>) -> Result<Url, FetchError> {
        let mut url = self.base.join(path)?;
        if let Some(n) = limit {
            url.query_pairs_mut().append_pair("limit", &n.to_string());
        }
        Ok(url)
    }

    pub async fn fetch_metrics(&self) -> Result<Vec<MetricSample>, FetchError> {
        let url = self.endpoint(METRICS_PATH, None)?;
        let r: MetricsResponse = self.get_json(url).await?;
        Ok(r.metrics)
    }

    pub async fn fetch_connections(&self) -> Result<Vec<ConnectionRecord>, FetchError> {
        let url = self.endpoint(CONNECTIONS_PATH, Some(self.limit))?;
        let r: ConnectionsResponse = self.get_json(url).await?;
        Ok(r.connections)
    }

    pub async fn fetch_hosts(&self) -> Result<Vec<HostRecord>, FetchError> {
        let url = self.endpoint(HOSTS_PATH, Some(self.limit))?;
        let r: HostsResponse = self.get_json(url).await?;
        Ok(r.hosts)
    }

    pub async fn fetch_system_info(&self) -> Result<SystemInfo, FetchError> {
        let url = self.endpoint(SYSTEM_INFO_PATH, None)?;
        self.get_json(url).await
    }

    // Transport and status failures come from reqwest; parse failures from serde_json,
    // so the body is read as text first to keep the two apart.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };
        let resp = self.client.get(url.clone()).send().await.map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        let body = resp.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|source| FetchError::Parse {
            url: url.to_string(),
            source,
        })
    }
}

// `join` on a base without a trailing slash would drop its last path segment
fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}
