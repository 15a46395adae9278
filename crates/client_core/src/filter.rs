//! Client-side search over a fetched record page, applied on top of the
//! backend's own filter.

use serde_json::Value;
use tracing::warn;

use crate::record::Record;

pub fn matches<R: Record>(record: &R, needle_lower: &str) -> bool {
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle_lower))
}

/// Case-insensitive substring match of `search` against each record's search
/// fields. An empty search keeps every record.
pub fn refilter<R: Record>(records: &[R], search: &str) -> Vec<R> {
    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|record| matches(*record, &needle))
        .cloned()
        .collect()
}

/// Reads the `data` member of a list envelope. Anything other than an array
/// of records (null, an object, a malformed element) yields an empty page.
pub fn decode_records<R: Record>(data: Value) -> Vec<R> {
    if !data.is_array() {
        if !data.is_null() {
            warn!(resource = R::RESOURCE, "list response data is not an array");
        }
        return Vec::new();
    }

    match serde_json::from_value::<Vec<R>>(data) {
        Ok(records) => records,
        Err(err) => {
            warn!(resource = R::RESOURCE, error = %err, "failed to decode list response records");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
