//! Error types for the trendgrid client
//!
//! A 401 from the backend is not represented here: the gateway reports it
//! as "no data" (`Ok(None)`). Records without a playable URL are skipped
//! by the renderer and never surface as errors either.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all trendgrid client operations
///
/// Implements Display for the inline messages shown in containers and
/// Serialize for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum TrendgridError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status other than 401
    #[error("API Error: {status} - {message}")]
    Api { status: u16, message: String },

    /// A 2xx body did not have the shape the endpoint promises
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Query was empty or whitespace only
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl TrendgridError {
    /// HTTP status carried by an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            TrendgridError::Api { status, .. } => Some(*status),
            TrendgridError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TrendgridError {
    fn from(e: serde_json::Error) -> Self {
        TrendgridError::Decode(e.to_string())
    }
}

impl Serialize for TrendgridError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for trendgrid operations
pub type Result<T> = std::result::Result<T, TrendgridError>;
