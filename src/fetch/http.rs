// logwindow - fetch/http.rs
//
// HTTP implementation of the LogFetcher contract against the dashboard's
// backend API: GET {base_url}/logs with the query serialised as URL
// parameters.

use async_trait::async_trait;
use std::time::Duration;

use crate::core::query::LogQuery;
use crate::fetch::{LogFetcher, LogPage};
use crate::platform::config::AppConfig;
use crate::util::constants;
use crate::util::error::FetchError;

/// Fetches log pages over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLogFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLogFetcher {
    /// Build a fetcher for `base_url` with the given request timeout.
    ///
    /// A trailing slash on the base URL is tolerated.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Transport { source })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a fetcher from the validated application configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.fetch_timeout_secs),
        )
    }

    fn logs_url(&self) -> String {
        format!("{}{}", self.base_url, constants::LOGS_ENDPOINT)
    }
}

#[async_trait]
impl LogFetcher for HttpLogFetcher {
    async fn fetch(&self, query: &LogQuery) -> Result<LogPage, FetchError> {
        let response = self
            .client
            .get(self.logs_url())
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Transport { source })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(code = status.as_u16(), "Backend rejected log query");
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { source })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { source })
    }
}
