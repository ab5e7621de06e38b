//! Live filtering of the loaded collection
//!
//! Pure and synchronous: the backend is never queried.

use crate::types::VideoRecord;

/// Returns true if `title` or `channel` contains `needle`
///
/// `needle` must already be lower-cased. Missing fields never match.
pub fn matches(record: &VideoRecord, needle: &str) -> bool {
    let contains = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|value| value.to_lowercase().contains(needle))
    };
    contains(&record.title) || contains(&record.channel)
}

/// Filters records by a case-insensitive substring query
///
/// An empty query keeps every record. Input order is preserved.
///
/// # Example
/// ```
/// use trendgrid_core::{VideoRecord, filter::filter_records};
/// let records = vec![
///     VideoRecord { title: Some("Cat video".into()), ..Default::default() },
///     VideoRecord { channel: Some("DogTV".into()), ..Default::default() },
/// ];
/// assert_eq!(filter_records(&records, "CAT").len(), 1);
/// assert_eq!(filter_records(&records, "").len(), 2);
/// ```
pub fn filter_records(records: &[VideoRecord], query: &str) -> Vec<VideoRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, &needle))
        .cloned()
        .collect()
}
