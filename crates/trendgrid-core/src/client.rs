//! HTTP gateway to the trending-video backend
//!
//! One request per call: no retries, no timeout, no caching. A 401 is
//! reported as "no data" because authentication is disabled on the
//! backend.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::error::{Result, TrendgridError};
use crate::types::{
    ErrorEnvelope, RefreshEnvelope, ScrapeEnvelope, SearchEnvelope, SearchReply, VideoRecord,
};
use crate::url::{REFRESH_PATH, TRENDING_PATH, resolve_base_url, scrape_path, search_path};

/// Configuration for the HTTP gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base address, without a trailing slash
    pub base_url: String,
}

impl ClientConfig {
    /// Create a configuration pointing at an explicit base address
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create the configuration for a page served from `host`
    ///
    /// Local hosts talk to the development backend, everything else to
    /// production.
    pub fn for_host(host: &str) -> Self {
        Self::new(resolve_base_url(host))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_host("")
    }
}

/// Successful response body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body declared a JSON content type
    Json(Value),
    /// Any other body, verbatim
    Text(String),
}

/// HTTP client wrapper for the backend endpoints
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new gateway with the default (local) configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new gateway with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(TrendgridError::Network)?;

        info!(base_url = %config.base_url, "Using API base URL");

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request to a backend endpoint
    ///
    /// # Arguments
    /// * `endpoint` - Path relative to the base address (e.g. "/api/videos")
    /// * `method` - HTTP method
    /// * `body` - Optional JSON body, sent with `Content-Type: application/json`
    ///
    /// # Returns
    /// - `None` for 401 and 204 responses
    /// - `Payload::Json` when the response declares a JSON content type
    /// - `Payload::Text` otherwise
    ///
    /// # Errors
    /// - `Network` if no response was received
    /// - `Api` for any other non-2xx status
    /// - `Decode` if a JSON-typed body fails to parse
    pub async fn request(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Option<Payload>> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%method, %url, "Sending request");

        let mut builder = self.client.request(method, &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!(endpoint, error = %e, "Error during API request");
            TrendgridError::Network(e)
        })?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!(endpoint, "Unauthorized access, ignoring since login is disabled");
            return Ok(None);
        }

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown error");
            let text = response.text().await.unwrap_or_default();
            let message = error_message(&text).unwrap_or_else(|| reason.to_string());
            error!(endpoint, status = status.as_u16(), %message, "API error");
            return Err(TrendgridError::Api {
                status: status.as_u16(),
                message,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);

        let text = response.text().await.map_err(TrendgridError::Network)?;

        if is_json {
            let value = serde_json::from_str(&text)?;
            Ok(Some(Payload::Json(value)))
        } else {
            Ok(Some(Payload::Text(text)))
        }
    }

    /// Fetch the trending collection
    ///
    /// Returns `None` when the backend sent anything other than a JSON array
    /// (including a 401).
    pub async fn fetch_trending(&self) -> Result<Option<Vec<VideoRecord>>> {
        match self.request(TRENDING_PATH, Method::GET, None).await? {
            Some(Payload::Json(value @ Value::Array(_))) => {
                Ok(Some(serde_json::from_value(value)?))
            }
            other => {
                warn!(response = ?other, "{} did not return an array", TRENDING_PATH);
                Ok(None)
            }
        }
    }

    /// Search the backend's own dataset
    ///
    /// A response without a JSON object (401, plain text) is treated as a
    /// search that produced no results array.
    ///
    /// # Errors
    /// - `InvalidQuery` if query is empty or whitespace only
    pub async fn search(&self, query: &str) -> Result<SearchReply> {
        let query = validate_query(query)?;
        let value = match self.request(&search_path(query), Method::GET, None).await? {
            Some(Payload::Json(value @ Value::Object(_))) => value,
            _ => return Ok(SearchReply::Found(None)),
        };

        let envelope: SearchEnvelope = serde_json::from_value(value)?;
        if envelope.not_found {
            return Ok(SearchReply::NotFound {
                query: envelope.query.unwrap_or_else(|| query.to_string()),
            });
        }

        Ok(SearchReply::Found(envelope.results))
    }

    /// Ask the backend to scrape YouTube for a query
    ///
    /// Returns an empty list when the backend sent no results.
    pub async fn scrape(&self, query: &str) -> Result<Vec<VideoRecord>> {
        let query = validate_query(query)?;
        match self.request(&scrape_path(query), Method::GET, None).await? {
            Some(Payload::Json(value @ Value::Object(_))) => {
                let envelope: ScrapeEnvelope = serde_json::from_value(value)?;
                Ok(envelope.results.unwrap_or_default())
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Tell the backend to rebuild its trending dataset
    ///
    /// Returns the server's message, if it sent one.
    pub async fn refresh(&self) -> Result<Option<String>> {
        match self.request(REFRESH_PATH, Method::POST, None).await? {
            Some(Payload::Json(value @ Value::Object(_))) => {
                let envelope: RefreshEnvelope = serde_json::from_value(value)?;
                Ok(envelope.message.filter(|m| !m.is_empty()))
            }
            _ => Ok(None),
        }
    }
}

fn validate_query(query: &str) -> Result<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(TrendgridError::InvalidQuery(
            "Search query cannot be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Picks the best message out of an error body
///
/// `error` wins over `message`; empty strings count as absent.
fn error_message(body: &str) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    envelope
        .error
        .filter(|s| !s.is_empty())
        .or(envelope.message.filter(|s| !s.is_empty()))
}
