// Backend HTTP implementation of the lookup traits

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use sharemeta_types::{Project, Thread};
use std::time::Duration;
use url::Url;

use crate::error::{Result, UpstreamError};
use crate::traits::{ProjectLookup, ThreadLookup};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the backend's thread and project endpoints
///
/// Issues `GET {base_url}/threads/{id}` and `GET {base_url}/projects/{id}`.
/// A 404 (or a `null` body) is reported as a missing record.
#[derive(Debug, Clone)]
pub struct HttpUpstreamClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl HttpUpstreamClient {
    /// Create a client with default timeout and no auth token
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::builder().base_url(base_url.as_ref()).build()
    }

    pub fn builder() -> HttpUpstreamClientBuilder {
        HttpUpstreamClientBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base_url}/{collection}/{id}` with `id` escaped as a single path segment
    fn endpoint(&self, collection: &str, id: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(collection)
            .push(id);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>> {
        let response = self.http_client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(url = %url, "Upstream record not found");
            return Ok(None);
        }

        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Upstream request failed");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<Option<T>>(&body).map_err(|source| UpstreamError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ThreadLookup for HttpUpstreamClient {
    async fn get_thread(&self, thread_id: &str) -> Result<Option<Thread>> {
        let url = self.endpoint("threads", thread_id)?;
        self.fetch(url).await
    }
}

#[async_trait]
impl ProjectLookup for HttpUpstreamClient {
    async fn get_project(&self, project_id: &str) -> Result<Option<Project>> {
        let url = self.endpoint("projects", project_id)?;
        self.fetch(url).await
    }
}

pub struct HttpUpstreamClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    api_token: Option<String>,
}

impl HttpUpstreamClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            api_token: None,
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-request timeout covering connect and body read
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sent as `Authorization: Bearer <token>`; blank tokens are ignored
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.api_token = if token.trim().is_empty() { None } else { Some(token) };
        self
    }

    pub fn build(self) -> Result<HttpUpstreamClient> {
        let raw = self
            .base_url
            .ok_or_else(|| UpstreamError::InvalidUrl("base_url is required".to_string()))?;
        let base_url =
            Url::parse(&raw).map_err(|e| UpstreamError::InvalidUrl(format!("{}: {}", raw, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(raw));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = self.api_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| UpstreamError::Internal("Invalid API token format".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()?;

        Ok(HttpUpstreamClient {
            http_client,
            base_url,
        })
    }
}

impl Default for HttpUpstreamClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
