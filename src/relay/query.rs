//! Query string parsing for the current page location
//!
//! Decodes `application/x-www-form-urlencoded` pairs the same way the browser's
//! `URLSearchParams` does: `+` is a space, percent escapes are decoded and the
//! first occurrence of a repeated key wins.

use std::collections::HashMap;

/// Parse a location search string (with or without the leading `?`) into a mapping
pub fn parse_query(search: &str) -> HashMap<String, String> {
    let raw = search.strip_prefix('?').unwrap_or(search);

    let mut params = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    params
}

/// Look up a single key in a location search string
///
/// Returns `None` when the key is absent. Malformed input never errors.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    parse_query(search).remove(key)
}
