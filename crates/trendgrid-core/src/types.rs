//! Core data types for the trendgrid client
//!
//! Records come from an external backend and no field is guaranteed to be
//! present, so every field is optional and leniently decoded.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single video as returned by the backend
///
/// Field names follow the backend's JSON (`videoId`, `channelTitle`).
/// Strings, numbers and booleans are all accepted and kept as text; any
/// other JSON value is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Channel name under the key used by scraped results
    #[serde(
        rename = "channelTitle",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub channel_title: Option<String>,

    /// View count, usually preformatted text (e.g. "1.2M")
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub views: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,

    #[serde(
        rename = "videoId",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Treats empty strings like missing values
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// The last successfully fetched trending collection
///
/// Replaced wholesale on every successful fetch; never merged,
/// deduplicated or partially updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoCollection {
    videos: Vec<VideoRecord>,
}

impl VideoCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection
    pub fn replace(&mut self, videos: Vec<VideoRecord>) {
        self.videos = videos;
    }

    pub fn clear(&mut self) {
        self.videos.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn as_slice(&self) -> &[VideoRecord] {
        &self.videos
    }
}

/// Outcome of a server-side search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchReply {
    /// Backend searched its own dataset; `None` when it sent no results array
    Found(Option<Vec<VideoRecord>>),
    /// Backend found nothing and echoed the query back
    NotFound { query: String },
}

/// Wire shape of `GET /search`
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(default)]
    pub not_found: bool,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<VideoRecord>>,
}

/// Wire shape of `GET /scrape_youtube`
#[derive(Debug, Deserialize)]
pub(crate) struct ScrapeEnvelope {
    #[serde(default)]
    pub results: Option<Vec<VideoRecord>>,
}

/// Wire shape of `POST /refresh`
#[derive(Debug, Deserialize)]
pub(crate) struct RefreshEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

/// Wire shape of a non-2xx body
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
