// GitHub API HTTP client.
// Unauthenticated requests, rate limit tracking, and status-to-error mapping.

use std::sync::Mutex;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::{debug, warn};

use crate::error::{FolioError, Result};

use super::types::RateLimit;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Anonymous GitHub REST client.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    rate_limit: Mutex<RateLimit>,
}

impl GitHubClient {
    /// Create a client against the public API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// Create a client against another API root (a mock server in tests).
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("folio"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(FolioError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limit: Mutex::new(RateLimit::default()),
        })
    }

    /// Snapshot of the most recent rate limit headers.
    pub fn rate_limit(&self) -> RateLimit {
        self.rate_limit
            .lock()
            .map(|limit| limit.clone())
            .unwrap_or_default()
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(FolioError::Api)?;

        self.update_rate_limit(&response);
        self.check_response(response)
    }

    /// Make a GET request.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        self.get_with_params(endpoint, &[] as &[(&str, &str)]).await
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&self, response: &Response) {
        let headers = response.headers();
        let Ok(mut rate_limit) = self.rate_limit.lock() else {
            return;
        };
        if let Some(limit) = header_u64(headers, "x-ratelimit-limit") {
            rate_limit.limit = limit;
        }
        if let Some(remaining) = header_u64(headers, "x-ratelimit-remaining") {
            rate_limit.remaining = remaining;
        }
        if let Some(reset) = header_u64(headers, "x-ratelimit-reset") {
            rate_limit.reset = reset;
        }
        debug!(
            limit = rate_limit.limit,
            remaining = rate_limit.remaining,
            "rate limit"
        );
    }

    /// Check response status and convert errors.
    fn check_response(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        warn!(%status, %url, "GitHub request failed");
        // Judge this response alone; the shared limit may belong to a concurrent request
        let headers = response.headers();
        let exhausted = header_u64(headers, "x-ratelimit-remaining") == Some(0);
        match status {
            StatusCode::NOT_FOUND => Err(FolioError::NotFound(url)),
            StatusCode::FORBIDDEN if exhausted => {
                let reset_at = header_u64(headers, "x-ratelimit-reset")
                    .and_then(|reset| i64::try_from(reset).ok())
                    .and_then(|reset| chrono::DateTime::from_timestamp(reset, 0))
                    .map(|dt| dt.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(FolioError::RateLimited { reset_at })
            }
            status => Err(FolioError::Status { status, url }),
        }
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}
