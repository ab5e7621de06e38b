//! URL helper functions
//!
//! Backend address selection, endpoint paths and the YouTube URL templates
//! used to derive missing record fields.

use std::sync::LazyLock;

use regex::Regex;

/// Backend address used when the page is served locally
pub const LOCAL_API_URL: &str = "http://127.0.0.1:5000";

/// Backend address used everywhere else
pub const PRODUCTION_API_URL: &str = "https://backend-6-lnvt.onrender.com";

/// Static asset shown when no thumbnail can be derived or loaded
pub const PLACEHOLDER_THUMBNAIL: &str = "placeholder_thumbnail.jpg";

pub const TRENDING_PATH: &str = "/api/videos";
pub const REFRESH_PATH: &str = "/refresh";

/// Absolute URL on a youtube.com host whose query starts with `v=`
static WATCH_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s?#]*youtube\.com/watch\?v=([^&#\s]*)")
        .expect("watch URL pattern is valid")
});

/// Returns true when `host` names the local machine
///
/// An empty host (page opened from disk), `localhost` and the loop-back
/// literal all count as local.
pub fn is_local_host(host: &str) -> bool {
    matches!(host, "" | "localhost" | "127.0.0.1")
}

/// Picks the backend base address for a page host
///
/// # Example
/// ```
/// use trendgrid_core::url::resolve_base_url;
/// assert_eq!(resolve_base_url("localhost"), "http://127.0.0.1:5000");
/// assert_eq!(resolve_base_url("trending.example.com"), "https://backend-6-lnvt.onrender.com");
/// ```
pub fn resolve_base_url(host: &str) -> &'static str {
    if is_local_host(host) {
        LOCAL_API_URL
    } else {
        PRODUCTION_API_URL
    }
}

/// Returns true when the initial trending load should run for a page path
///
/// Only the main page (`/`, any path ending in `/`, or `index.html`) shows
/// the trending grid.
pub fn should_load_trending(path: &str) -> bool {
    path == "/" || path.ends_with('/') || path.ends_with("index.html")
}

/// Builds the backend search path for a query
///
/// # Example
/// ```
/// use trendgrid_core::url::search_path;
/// assert_eq!(search_path("lo-fi beats"), "/search?query=lo-fi%20beats");
/// ```
pub fn search_path(query: &str) -> String {
    format!("/search?query={}", urlencoding::encode(query))
}

/// Builds the backend scrape path for a query
pub fn scrape_path(query: &str) -> String {
    format!("/scrape_youtube?query={}", urlencoding::encode(query))
}

/// Builds the watch URL for a YouTube video ID
///
/// # Example
/// ```
/// use trendgrid_core::url::watch_url;
/// assert_eq!(watch_url("abc"), "https://www.youtube.com/watch?v=abc");
/// ```
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Builds the high-quality thumbnail URL for a YouTube video ID
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/hqdefault.jpg", video_id)
}

/// Extracts the `v` query parameter from a YouTube watch URL
///
/// Only absolute URLs containing `youtube.com/watch?v=` are considered.
/// Anything that fails to parse yields `None`.
///
/// # Example
/// ```
/// use trendgrid_core::url::extract_video_id;
/// assert_eq!(
///     extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"),
///     Some("dQw4w9WgXcQ".to_string())
/// );
/// assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), None);
/// ```
pub fn extract_video_id(url: &str) -> Option<String> {
    if !url.contains("youtube.com/watch?v=") {
        return None;
    }

    let raw = WATCH_URL_RE.captures(url)?.get(1)?.as_str();
    let replaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&replaced).ok()?;
    if decoded.is_empty() {
        return None;
    }

    Some(decoded.into_owned())
}
