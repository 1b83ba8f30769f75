//! Query-string codec for pagination and filter parameters.
//!
//! The story list keeps its `page` and `filter` in the URL, so the same
//! mapping travels browser URL → controller → `GET /entries{?page,filter}`.
//! Values are flat strings; nothing is nested.

use std::collections::BTreeMap;

/// A flat mapping of query keys to values.
pub type Query = BTreeMap<String, String>;

/// Parse the query part of `s` into a [`Query`].
///
/// Returns an empty mapping unless `s` contains both `?` and `=`. Everything
/// after the first `?` is split on `&`, then each segment on its first `=`.
/// A key without `=` maps to the empty string. Malformed percent-encoding
/// yields an empty mapping rather than an error.
pub fn parse(s: &str) -> Query {
    if !s.contains('?') || !s.contains('=') {
        return Query::new();
    }
    let rest = match s.split_once('?') {
        Some((_, rest)) => rest,
        None => return Query::new(),
    };
    // Ignore a trailing fragment
    let rest = rest.split('#').next().unwrap_or_default();

    let mut query = Query::new();
    for segment in rest.split('&').filter(|seg| !seg.is_empty()) {
        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        let (Ok(key), Ok(value)) = (urlencoding::decode(key), urlencoding::decode(value)) else {
            return Query::new();
        };
        query.insert(key.into_owned(), value.into_owned());
    }
    query
}

/// Format `query` as `?k1=v1&k2=v2`, or the empty string when it is empty.
pub fn format(query: &Query) -> String {
    if query.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    format!("?{}", pairs.join("&"))
}
