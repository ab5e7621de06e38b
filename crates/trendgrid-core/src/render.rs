//! Card renderer
//!
//! Turns a record sequence into cards inside a container.

use tracing::warn;

use crate::card::Variant;
use crate::types::VideoRecord;
use crate::view::{Card, Container, Node};

/// Placeholder shown when there is nothing to render
pub const EMPTY_MESSAGE: &str = "No videos to display for this query.";

/// Renders records as cards into `container`
///
/// The container is always cleared first. An empty or missing sequence
/// yields a single placeholder message. Records keep their input order;
/// records without a derivable URL are skipped with a warning.
///
/// # Returns
/// Number of cards rendered
pub fn render<C>(records: Option<&[VideoRecord]>, container: &mut C, variant: Variant) -> usize
where
    C: Container + ?Sized,
{
    container.clear();

    let records = match records {
        Some(records) if !records.is_empty() => records,
        _ => {
            container.append(Node::info(EMPTY_MESSAGE));
            return 0;
        }
    };

    let mut rendered = 0;
    for record in records {
        match Card::from_record(record, variant) {
            Some(card) => {
                container.append(Node::Card(card));
                rendered += 1;
            }
            None => warn!(?record, "Skipping video with no URL/link/videoId"),
        }
    }

    rendered
}
