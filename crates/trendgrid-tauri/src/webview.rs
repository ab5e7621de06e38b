//! Containers and dialogs that push every write to the webview
//!
//! The frontend listens for [`EVENT`] and applies each [`WebviewEvent`] to
//! the element whose id is `target`, so placeholders and notifications show
//! up while a command is still waiting on the backend.

use std::sync::Arc;

use serde::Serialize;
use trendgrid_core::{Container, Dialogs, Node, Surface};

/// Event name the plugin emits updates on
pub const EVENT: &str = "trendgrid:update";

/// Element id of the trending grid
pub const GRID_TARGET: &str = "video-grid";

/// Element id of the search results area
pub const RESULTS_TARGET: &str = "results";

/// One update for the frontend to apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WebviewEvent {
    /// Empty the element
    Clear { target: String },
    /// Append markup to the element
    Append { target: String, html: String },
    /// Show an acknowledgement to the user
    Notify { message: String },
}

/// Sink for webview events
pub type Emit = Arc<dyn Fn(WebviewEvent) + Send + Sync>;

/// Container mirrored to one webview element
pub struct WebviewSurface {
    target: &'static str,
    surface: Surface,
    emit: Emit,
}

impl WebviewSurface {
    pub fn new(target: &'static str, emit: Emit) -> Self {
        Self {
            target,
            surface: Surface::new(),
            emit,
        }
    }

    /// Current contents, as last pushed to the webview
    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}

impl Container for WebviewSurface {
    fn clear(&mut self) {
        self.surface.clear();
        (self.emit)(WebviewEvent::Clear {
            target: self.target.to_string(),
        });
    }

    fn append(&mut self, node: Node) {
        let html = node.to_html();
        self.surface.append(node);
        (self.emit)(WebviewEvent::Append {
            target: self.target.to_string(),
            html,
        });
    }
}

/// Dialogs for one refresh command
///
/// A command cannot block on a browser `confirm()`, so the frontend asks
/// first and passes the answer in. Notifications are emitted as they happen.
pub struct WebviewDialogs {
    confirmed: bool,
    emit: Emit,
}

impl WebviewDialogs {
    pub fn new(confirmed: bool, emit: Emit) -> Self {
        Self { confirmed, emit }
    }
}

impl Dialogs for WebviewDialogs {
    fn confirm(&mut self, _message: &str) -> bool {
        self.confirmed
    }

    fn notify(&mut self, message: &str) {
        (self.emit)(WebviewEvent::Notify {
            message: message.to_string(),
        });
    }
}
