//! Trendgrid Core Library
//!
//! Network-backed list view for trending YouTube videos.
//!
//! # Overview
//!
//! This crate provides the whole client side of the trendgrid backend:
//! - HTTP gateway with the backend's 401-as-empty and error-envelope rules
//! - Card rendering with URL, video ID and thumbnail fallbacks
//! - Live filtering of the loaded collection
//! - Server search with a YouTube scrape fallback, and a refresh command
//!
//! Containers and dialogs are injected, so the same client drives a
//! webview, a terminal or a test double.
//!
//! # Example
//!
//! ```no_run
//! use trendgrid_core::{Surface, VideoListClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = VideoListClient::for_host("localhost", Surface::new(), Surface::new())?;
//!
//!     // Load and display trending videos
//!     client.load_trending().await;
//!     for card in client.view().grid().cards() {
//!         println!("{}: {}", card.title, card.url);
//!     }
//!
//!     // Narrow the grid without touching the network
//!     client.filter("music");
//!
//!     // Ask the backend
//!     client.search("lofi hip hop").await;
//!     println!("{}", client.view().results().to_html());
//!
//!     Ok(())
//! }
//! ```

pub mod card;
mod client;
mod error;
pub mod filter;
pub mod render;
mod types;
pub mod url;
pub mod video_list;
pub mod view;

// Re-export gateway types
pub use client::{ApiClient, ClientConfig, Payload};

// Re-export error types
pub use error::{Result, TrendgridError};

// Re-export data types
pub use types::{SearchReply, VideoCollection, VideoRecord};

// Re-export rendering
pub use card::Variant;
pub use render::render;
pub use view::{Card, CardStats, Container, Node, Surface, Tone};

// Re-export main client API
pub use video_list::{Dialogs, ListView, VideoListClient};

// Re-export HTTP method for `ApiClient::request`
pub use reqwest::Method;
