//! Tauri commands for the trendgrid client
//!
//! Commands return once their flow is finished. What they display reaches
//! the frontend earlier, as `trendgrid:update` events.

use tauri::State;

use crate::ClientState;

/// Load trending videos if `path` is the main page
///
/// # Returns
/// `false` on any other page
#[tauri::command]
pub async fn initialize(state: State<'_, ClientState>, path: String) -> Result<bool, String> {
    Ok(state.initialize(&path).await)
}

/// Fetch trending videos into the grid
#[tauri::command]
pub async fn load_trending(state: State<'_, ClientState>) -> Result<(), String> {
    state.load_trending().await;
    Ok(())
}

/// Filter the loaded videos
///
/// # Returns
/// `false` when nothing is loaded and the grid is unchanged
#[tauri::command]
pub fn filter_videos(state: State<'_, ClientState>, query: String) -> bool {
    state.filter(&query)
}

/// Search the backend into the results area
#[tauri::command]
pub async fn search_videos(state: State<'_, ClientState>, query: String) -> Result<(), String> {
    state.search(&query).await;
    Ok(())
}

/// Scrape YouTube for a query into the results area
///
/// Called when the frontend's scrape button is clicked; the query comes
/// from the button's `data-query` attribute.
#[tauri::command]
pub async fn scrape_youtube(state: State<'_, ClientState>, query: String) -> Result<(), String> {
    state.scrape(&query).await;
    Ok(())
}

/// Refresh trending data on the backend
///
/// # Arguments
/// * `confirmed` - The user's answer to the refresh confirmation
///
/// # Returns
/// `false` if the user declined
#[tauri::command]
pub async fn refresh_trending(
    state: State<'_, ClientState>,
    confirmed: bool,
) -> Result<bool, String> {
    Ok(state.refresh(confirmed).await)
}
