//! Network-backed video list
//!
//! [`VideoListClient`] owns the loaded collection and two container
//! handles: the trending grid and the search results area. Every user
//! action is one method call; failures become inline messages (or dialog
//! notifications for refresh) and never escape to the caller.
//!
//! The collection and containers sit behind a short-lived lock that is
//! never held across a network call. Placeholders are therefore visible
//! while a request is in flight, and [`VideoListClient::filter`] never
//! waits on the backend. Overlapping network actions are not serialized
//! here; hosts that want that hold their own lock around them.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{error, info, warn};

use crate::card::Variant;
use crate::client::{ApiClient, ClientConfig};
use crate::error::Result;
use crate::filter::filter_records;
use crate::render::render;
use crate::types::{SearchReply, VideoCollection, VideoRecord};
use crate::view::{Container, Node};

pub const TRENDING_UNAVAILABLE: &str = "No trending videos found or error loading data.";
pub const EMPTY_QUERY_PROMPT: &str = "Please enter a search term in the box above.";
pub const SEARCHING_SERVER: &str = "Searching on server...";
pub const SEARCHING_YOUTUBE: &str = "Searching on YouTube...";
pub const REFRESH_CONFIRM: &str =
    "Are you sure you want to refresh trending videos from the server? This can take a moment.";
pub const REFRESH_STARTED: &str = "Refreshing trending data... The page will update once done.";
pub const REFRESH_DEFAULT_ACK: &str = "Refresh request sent. Data will be updated shortly.";

/// Confirmation and notification capability used by the refresh flow
pub trait Dialogs {
    /// Asks the user a yes/no question
    fn confirm(&mut self, message: &str) -> bool;

    /// Shows the user an acknowledgement
    fn notify(&mut self, message: &str);
}

/// Display-side state: the loaded collection and both containers
pub struct ListView<G, R> {
    videos: VideoCollection,
    grid: G,
    results: R,
}

impl<G, R> ListView<G, R> {
    /// The last successfully loaded trending collection
    pub fn videos(&self) -> &[VideoRecord] {
        self.videos.as_slice()
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    pub fn results(&self) -> &R {
        &self.results
    }

    pub fn results_mut(&mut self) -> &mut R {
        &mut self.results
    }
}

/// Trending video list backed by the HTTP gateway
///
/// # Example
///
/// ```no_run
/// # async fn example() -> trendgrid_core::Result<()> {
/// use trendgrid_core::{Surface, VideoListClient};
///
/// let client = VideoListClient::for_host("localhost", Surface::new(), Surface::new())?;
/// client.load_trending().await;
/// client.filter("music");
/// println!("{}", client.view().grid().to_html());
/// # Ok(())
/// # }
/// ```
pub struct VideoListClient<G, R> {
    api: ApiClient,
    view: Mutex<ListView<G, R>>,
}

impl<G: Container, R: Container> VideoListClient<G, R> {
    /// Create a client for a page served from `host`
    pub fn for_host(host: &str, grid: G, results: R) -> Result<Self> {
        Self::with_config(ClientConfig::for_host(host), grid, results)
    }

    /// Create a client with custom gateway configuration
    pub fn with_config(config: ClientConfig, grid: G, results: R) -> Result<Self> {
        Ok(Self::with_api(ApiClient::with_config(config)?, grid, results))
    }

    /// Create a client around an existing gateway
    pub fn with_api(api: ApiClient, grid: G, results: R) -> Self {
        Self {
            api,
            view: Mutex::new(ListView {
                videos: VideoCollection::new(),
                grid,
                results,
            }),
        }
    }

    /// Locks the display-side state
    ///
    /// Do not hold the guard across a call into this client.
    pub fn view(&self) -> MutexGuard<'_, ListView<G, R>> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Fetch trending videos and render them into the grid
    ///
    /// On failure or a non-array response the collection is cleared and the
    /// grid shows a placeholder.
    pub async fn load_trending(&self) {
        let outcome = self.api.fetch_trending().await;

        let mut guard = self.view();
        let view = &mut *guard;
        match outcome {
            Ok(Some(videos)) => {
                info!(count = videos.len(), "Loaded trending videos");
                view.videos.replace(videos);
                render(Some(view.videos.as_slice()), &mut view.grid, Variant::Standard);
            }
            Ok(None) => {
                warn!("Trending endpoint returned no usable collection");
                view.videos.clear();
                view.grid.show(Node::info(TRENDING_UNAVAILABLE));
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch or render trending videos");
                view.videos.clear();
                view.grid
                    .show(Node::error(format!("Error loading trending videos: {}.", e)));
            }
        }
    }

    /// Re-render the grid with loaded videos matching `query`
    ///
    /// Does nothing while the collection is empty, so the current grid
    /// contents stay on screen.
    pub fn filter(&self, query: &str) {
        let mut guard = self.view();
        let view = &mut *guard;
        if view.videos.is_empty() {
            return;
        }

        let filtered = filter_records(view.videos.as_slice(), query);
        render(Some(filtered.as_slice()), &mut view.grid, Variant::Standard);
    }

    /// Search the backend and render the outcome into the results area
    ///
    /// When the backend has nothing, the results area offers a scrape
    /// prompt; the host calls [`Self::scrape`] when it is activated.
    pub async fn search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.view().results.show(Node::info(EMPTY_QUERY_PROMPT));
            return;
        }

        self.view().results.show(Node::info(SEARCHING_SERVER));
        let outcome = self.api.search(query).await;

        let mut view = self.view();
        match outcome {
            Ok(SearchReply::NotFound { query }) => {
                info!(%query, "Server search found nothing, offering scrape");
                view.results.show(Node::info(format!(
                    "No results found in our trending data for \"{}\".",
                    query
                )));
                view.results.append(Node::ScrapePrompt { query });
            }
            Ok(SearchReply::Found(records)) => {
                render(records.as_deref(), &mut view.results, Variant::Standard);
            }
            Err(e) => {
                error!(error = %e, "Server search failed");
                view.results
                    .show(Node::error(format!("Server search failed: {}", e)));
            }
        }
    }

    /// Ask the backend to scrape YouTube and render the results
    pub async fn scrape(&self, query: &str) {
        self.view().results.show(Node::info(SEARCHING_YOUTUBE));
        let outcome = self.api.scrape(query).await;

        let mut view = self.view();
        match outcome {
            Ok(records) if !records.is_empty() => {
                render(Some(records.as_slice()), &mut view.results, Variant::Search);
            }
            Ok(_) => {
                view.results.show(Node::info(format!(
                    "No videos found on YouTube for \"{}\".",
                    query
                )));
            }
            Err(e) => {
                error!(error = %e, "YouTube scrape failed");
                view.results
                    .show(Node::error(format!("Error scraping YouTube: {}", e)));
            }
        }
    }

    /// Ask the backend to rebuild its trending data, then reload the grid
    ///
    /// # Returns
    /// `false` if the user declined and nothing was sent
    pub async fn refresh<D>(&self, dialogs: &mut D) -> bool
    where
        D: Dialogs + ?Sized,
    {
        if !dialogs.confirm(REFRESH_CONFIRM) {
            return false;
        }

        dialogs.notify(REFRESH_STARTED);

        match self.api.refresh().await {
            Ok(message) => {
                dialogs.notify(message.as_deref().unwrap_or(REFRESH_DEFAULT_ACK));
                self.load_trending().await;
            }
            Err(e) => {
                error!(error = %e, "Refresh failed");
                dialogs.notify(&format!("Failed to refresh: {}", e));
            }
        }

        true
    }
}
