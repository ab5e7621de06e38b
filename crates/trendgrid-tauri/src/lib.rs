//! Trendgrid Tauri Integration
//!
//! Provides a Tauri plugin that hosts the trendgrid video list client for
//! a webview frontend.
//!
//! # Usage
//!
//! Register the plugin with the host the page is served from:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(trendgrid_tauri::init("localhost"))
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Container writes and notifications arrive as `trendgrid:update` events
//! while commands run:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//! import { listen } from '@tauri-apps/api/event';
//!
//! await listen('trendgrid:update', ({ payload }) => {
//!   if (payload.kind === 'notify') return alert(payload.message);
//!   const el = document.getElementById(payload.target);
//!   if (payload.kind === 'clear') el.innerHTML = '';
//!   else el.insertAdjacentHTML('beforeend', payload.html);
//! });
//!
//! await invoke('plugin:trendgrid|initialize', { path: window.location.pathname });
//!
//! searchInput.addEventListener('input', e =>
//!   invoke('plugin:trendgrid|filter_videos', { query: e.target.value }));
//!
//! const confirmed = confirm('Are you sure you want to refresh trending videos from the server?');
//! await invoke('plugin:trendgrid|refresh_trending', { confirmed });
//! ```

use std::sync::Arc;

use tauri::{
    Emitter, Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};
use tokio::sync::Mutex;
use tracing::warn;
use trendgrid_core::{ClientConfig, VideoListClient, url::should_load_trending};

mod commands;
mod webview;

pub use webview::{
    EVENT, Emit, GRID_TARGET, RESULTS_TARGET, WebviewDialogs, WebviewEvent, WebviewSurface,
};

/// The client with the trending grid and search results mirrored to the webview
pub type WebviewClient = VideoListClient<WebviewSurface, WebviewSurface>;

/// Plugin state shared by all commands
///
/// Backend commands run one after another so overlapping clicks cannot
/// race to overwrite the same container. Filtering skips that queue and
/// only touches the view, so typing stays responsive during a slow request.
pub struct ClientState {
    client: WebviewClient,
    network: Mutex<()>,
    emit: Emit,
}

impl ClientState {
    /// Create a new ClientState for a page served from `host`
    ///
    /// # Errors
    /// Returns error string if the HTTP client cannot be initialized
    pub fn new(host: &str, emit: Emit) -> Result<Self, String> {
        Self::with_config(ClientConfig::for_host(host), emit)
    }

    /// Create a new ClientState with an explicit backend configuration
    pub fn with_config(config: ClientConfig, emit: Emit) -> Result<Self, String> {
        let client = VideoListClient::with_config(
            config,
            WebviewSurface::new(GRID_TARGET, Arc::clone(&emit)),
            WebviewSurface::new(RESULTS_TARGET, Arc::clone(&emit)),
        )
        .map_err(|e| e.to_string())?;

        Ok(Self {
            client,
            network: Mutex::new(()),
            emit,
        })
    }

    pub fn client(&self) -> &WebviewClient {
        &self.client
    }

    /// Load trending videos if `path` is the main page
    ///
    /// # Returns
    /// `false` on any other page
    pub async fn initialize(&self, path: &str) -> bool {
        if !should_load_trending(path) {
            return false;
        }

        self.load_trending().await;
        true
    }

    pub async fn load_trending(&self) {
        let _network = self.network.lock().await;
        self.client.load_trending().await;
    }

    /// Filter the loaded videos without waiting on backend commands
    ///
    /// # Returns
    /// `false` when nothing is loaded and the grid is unchanged
    pub fn filter(&self, query: &str) -> bool {
        if self.client.view().videos().is_empty() {
            return false;
        }

        self.client.filter(query);
        true
    }

    pub async fn search(&self, query: &str) {
        let _network = self.network.lock().await;
        self.client.search(query).await;
    }

    pub async fn scrape(&self, query: &str) {
        let _network = self.network.lock().await;
        self.client.scrape(query).await;
    }

    /// Refresh trending data on the backend
    ///
    /// # Arguments
    /// * `confirmed` - The user's answer to the refresh confirmation
    ///
    /// # Returns
    /// `false` if the user declined
    pub async fn refresh(&self, confirmed: bool) -> bool {
        let _network = self.network.lock().await;
        let mut dialogs = WebviewDialogs::new(confirmed, Arc::clone(&self.emit));
        self.client.refresh(&mut dialogs).await
    }
}

/// Initialize the trendgrid plugin
///
/// # Arguments
/// * `page_host` - Host the frontend is served from; picks the backend
///
/// # Example
/// ```ignore
/// tauri::Builder::default()
///     .plugin(trendgrid_tauri::init("localhost"))
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
pub fn init<R: Runtime>(page_host: impl Into<String>) -> TauriPlugin<R> {
    let page_host = page_host.into();
    Builder::new("trendgrid")
        .invoke_handler(tauri::generate_handler![
            commands::initialize,
            commands::load_trending,
            commands::filter_videos,
            commands::search_videos,
            commands::scrape_youtube,
            commands::refresh_trending
        ])
        .setup(move |app, _api| {
            let handle = app.clone();
            let emit: Emit = Arc::new(move |event: WebviewEvent| {
                if let Err(e) = handle.emit(EVENT, event) {
                    warn!(error = %e, "Failed to push update to webview");
                }
            });

            let state =
                ClientState::new(&page_host, emit).map_err(Box::<dyn std::error::Error>::from)?;
            tracing::info!(host = %page_host, "trendgrid plugin ready");
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use trendgrid_core::VideoRecord as Video;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webview::tests::{Recorded, recorder};
    use serde_json::json;
    use std::time::{Duration, Instant};
    use trendgrid_core::video_list::{REFRESH_STARTED, SEARCHING_SERVER};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state_for(server: &MockServer) -> (Arc<ClientState>, Recorded) {
        let (emit, events) = recorder();
        let state = ClientState::with_config(ClientConfig::new(server.uri()), emit)
            .expect("state should build");
        (Arc::new(state), events)
    }

    async fn mount_trending(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"title": "Cat compilation", "videoId": "1"},
                {"title": "Weather", "videoId": "2"}
            ])))
            .mount(server)
            .await;
    }

    async fn mount_slow_search(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"results": [{"title": "Late", "videoId": "l"}]}))
                    .set_delay(Duration::from_millis(1500)),
            )
            .mount(server)
            .await;
    }

    fn appended_to<'a>(events: &'a [WebviewEvent], target: &str) -> Vec<&'a str> {
        events
            .iter()
            .filter_map(|event| match event {
                WebviewEvent::Append { target: t, html } if t == target => Some(html.as_str()),
                _ => None,
            })
            .collect()
    }

    async fn wait_for(events: &Recorded, done: impl Fn(&[WebviewEvent]) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(1);
        loop {
            if done(&events.lock().unwrap()) {
                return;
            }
            assert!(Instant::now() < deadline, "expected event never arrived");
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    fn searching(events: &[WebviewEvent]) -> usize {
        appended_to(events, RESULTS_TARGET)
            .iter()
            .filter(|html| html.contains(SEARCHING_SERVER))
            .count()
    }

    #[test]
    fn test_client_state_creation() {
        let (emit, _) = recorder();
        assert!(ClientState::new("localhost", emit).is_ok());
    }

    #[test]
    fn test_client_state_picks_backend_for_host() {
        let (emit, _) = recorder();
        let state = ClientState::new("videos.example.com", emit).expect("state should build");
        assert_eq!(
            state.client().api().base_url(),
            "https://backend-6-lnvt.onrender.com"
        );
    }

    #[tokio::test]
    async fn test_initialize_skips_other_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (state, events) = state_for(&server);
        assert!(!state.initialize("/about.html").await);
        assert!(events.lock().unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_search_placeholder_reaches_webview_before_response() {
        let server = MockServer::start().await;
        mount_slow_search(&server).await;

        let (state, events) = state_for(&server);
        let task = tokio::spawn({
            let state = Arc::clone(&state);
            async move { state.search("late").await }
        });

        wait_for(&events, |events| searching(events) == 1).await;
        assert!(!task.is_finished());
        assert_eq!(
            events.lock().unwrap()[0],
            WebviewEvent::Clear {
                target: RESULTS_TARGET.to_string()
            }
        );

        task.await.expect("search task should not panic");
        let events = events.lock().unwrap();
        let appended = appended_to(&events, RESULTS_TARGET);
        assert_eq!(appended.len(), 2);
        assert!(appended[1].contains("video-card"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_filter_not_blocked_by_search() {
        let server = MockServer::start().await;
        mount_trending(&server).await;
        mount_slow_search(&server).await;

        let (state, events) = state_for(&server);
        assert!(state.initialize("/").await);

        let task = tokio::spawn({
            let state = Arc::clone(&state);
            async move { state.search("late").await }
        });
        wait_for(&events, |events| searching(events) == 1).await;

        let before = events.lock().unwrap().len();
        let started = Instant::now();
        assert!(state.filter("cat"));
        assert!(started.elapsed() < Duration::from_millis(500));
        assert!(!task.is_finished());

        {
            let events = events.lock().unwrap();
            let grid_writes = appended_to(&events[before..], GRID_TARGET);
            assert_eq!(grid_writes.len(), 1);
            assert!(grid_writes[0].contains("Cat compilation"));
        }

        task.await.expect("search task should not panic");
    }

    #[tokio::test]
    async fn test_filter_before_load_leaves_grid() {
        let server = MockServer::start().await;
        let (state, events) = state_for(&server);

        assert!(!state.filter("cat"));
        assert!(events.lock().unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_backend_commands_run_one_at_a_time() {
        let server = MockServer::start().await;
        mount_slow_search(&server).await;

        let (state, events) = state_for(&server);
        let first = tokio::spawn({
            let state = Arc::clone(&state);
            async move { state.search("one").await }
        });
        wait_for(&events, |events| searching(events) == 1).await;

        let second = tokio::spawn({
            let state = Arc::clone(&state);
            async move { state.search("two").await }
        });
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(searching(&events.lock().unwrap()), 1);

        first.await.expect("first search should not panic");
        second.await.expect("second search should not panic");
        assert_eq!(searching(&events.lock().unwrap()), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_refresh_notifies_before_backend_answers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/refresh"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Refreshed 50 videos"}))
                    .set_delay(Duration::from_millis(1500)),
            )
            .mount(&server)
            .await;
        mount_trending(&server).await;

        let (state, events) = state_for(&server);
        let task = tokio::spawn({
            let state = Arc::clone(&state);
            async move { state.refresh(true).await }
        });

        let started = WebviewEvent::Notify {
            message: REFRESH_STARTED.to_string(),
        };
        wait_for(&events, |events| events.contains(&started)).await;
        assert!(!task.is_finished());

        assert!(task.await.expect("refresh task should not panic"));
        let events = events.lock().unwrap();
        let notes: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                WebviewEvent::Notify { message } => Some(message.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(notes, vec![REFRESH_STARTED, "Refreshed 50 videos"]);
        assert_eq!(appended_to(&events, GRID_TARGET).len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_declined_emits_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (state, events) = state_for(&server);
        assert!(!state.refresh(false).await);
        assert!(events.lock().unwrap().is_empty());
    }
}
