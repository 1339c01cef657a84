//! Query-string parsing and `utm_*` stripping.

use super::encode::{decode_component, encode_component};

/// Prefix marking analytics tags that are always replaced, never merged.
pub const UTM_PREFIX: &str = "utm_";

/// A URL split at its first `#`, then at its first `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Everything before the first `?`.
    pub base: String,
    /// Decoded pairs in first-seen order.
    pub params: Vec<(String, String)>,
    /// Whether the input had a non-empty query string.
    pub has_query: bool,
    /// Raw text after the first `#`, without the `#`.
    pub fragment: Option<String>,
}

/// Splits `url` into base, decoded query pairs and fragment.
///
/// Pairs missing a key or a value (`a`, `=b`, `a=`) are dropped. A repeated key
/// keeps its first position and takes the last value.
pub fn parse_url(url: &str) -> ParsedUrl {
    let (url, fragment) = match url.split_once('#') {
        Some((url, fragment)) => (url, Some(fragment.to_string())),
        None => (url, None),
    };
    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, query),
        None => (url, ""),
    };

    let mut params = Vec::new();
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key.is_empty() || value.is_empty() {
            continue;
        }
        set_param(&mut params, decode_component(key), decode_component(value));
    }

    ParsedUrl {
        base: base.to_string(),
        params,
        has_query: !query.is_empty(),
        fragment,
    }
}

/// Inserts or overwrites `key`, keeping insertion order.
pub fn set_param(params: &mut Vec<(String, String)>, key: String, value: String) {
    match params.iter_mut().find(|(k, _)| *k == key) {
        Some((_, slot)) => *slot = value,
        None => params.push((key, value)),
    }
}

/// Drops every pair whose key starts with `utm_` (case-sensitive).
pub fn strip_utm(params: Vec<(String, String)>) -> Vec<(String, String)> {
    params
        .into_iter()
        .filter(|(k, _)| !k.starts_with(UTM_PREFIX))
        .collect()
}

/// Encodes pairs as `k=v&k=v`.
pub fn encode_params(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}
