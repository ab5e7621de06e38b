//! Derived-field resolution for video cards
//!
//! Each derived field has its own helper so the fallback chain can be
//! checked in isolation. Derived values only live on the [`Card`]; the
//! source record is never modified.

use crate::types::{VideoRecord, present};
use crate::url::{PLACEHOLDER_THUMBNAIL, extract_video_id, thumbnail_url, watch_url};
use crate::view::{Card, CardStats};

/// Text shown for any missing display field
pub const MISSING: &str = "N/A";

/// Card layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Trending layout, shows views and publish date
    #[default]
    Standard,
    /// Search/scrape layout, omits views and publish date
    Search,
}

/// Resolves the playable URL of a record
///
/// `url` wins, then `link`, then a watch URL built from `videoId`.
/// Returns `None` when the record has none of them.
pub fn resolve_url(record: &VideoRecord) -> Option<String> {
    present(&record.url)
        .or_else(|| present(&record.link))
        .map(str::to_string)
        .or_else(|| present(&record.video_id).map(watch_url))
}

/// Resolves the YouTube video ID of a record
///
/// Falls back to the `v` parameter of `url` when the record carries no ID.
pub fn resolve_video_id(record: &VideoRecord, url: &str) -> Option<String> {
    present(&record.video_id)
        .map(str::to_string)
        .or_else(|| extract_video_id(url))
}

/// Resolves the thumbnail to display
///
/// Explicit thumbnail, then the YouTube thumbnail for `video_id`, then the
/// static placeholder asset.
pub fn resolve_thumbnail(record: &VideoRecord, video_id: Option<&str>) -> String {
    present(&record.thumbnail)
        .map(str::to_string)
        .or_else(|| video_id.map(thumbnail_url))
        .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string())
}

/// Title to display
pub fn display_title(record: &VideoRecord) -> &str {
    present(&record.title).unwrap_or(MISSING)
}

/// Channel to display, preferring `channel` over `channelTitle`
pub fn display_channel(record: &VideoRecord) -> &str {
    present(&record.channel)
        .or_else(|| present(&record.channel_title))
        .unwrap_or(MISSING)
}

impl Card {
    /// Builds a card for a record, or `None` if it has no playable URL
    pub fn from_record(record: &VideoRecord, variant: Variant) -> Option<Self> {
        let url = resolve_url(record)?;
        let video_id = resolve_video_id(record, &url);
        let thumbnail = resolve_thumbnail(record, video_id.as_deref());

        let stats = match variant {
            Variant::Standard => Some(CardStats {
                views: present(&record.views).unwrap_or(MISSING).to_string(),
                published: present(&record.published).unwrap_or(MISSING).to_string(),
            }),
            Variant::Search => None,
        };

        Some(Card {
            title: display_title(record).to_string(),
            channel: display_channel(record).to_string(),
            url,
            video_id,
            thumbnail,
            stats,
        })
    }
}
