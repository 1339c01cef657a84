//! Landing URL modeling and UTM tagging.
//!
//! Splits a landing URL into base and query, strips stale `utm_*` tags, merges
//! new ones and re-encodes. Tagging an already-tagged URL therefore never
//! leaves duplicate or outdated UTM parameters behind.

mod encode;
mod query;

pub use encode::{decode_component, encode_component};
pub use query::{encode_params, parse_url, set_param, strip_utm, ParsedUrl, UTM_PREFIX};

use crate::request::MaterialTag;

/// The UTM set written onto every generated URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtmParams {
    pub source: String,
    pub medium: String,
    pub campaign: String,
    pub material: Option<MaterialTag>,
}

impl UtmParams {
    /// Pairs in output order. An empty material value is omitted.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        let mut out = vec![
            ("utm_source", self.source.as_str()),
            ("utm_medium", self.medium.as_str()),
            ("utm_campaign", self.campaign.as_str()),
        ];
        if let Some(tag) = &self.material {
            if !tag.value().is_empty() {
                out.push((tag.key(), tag.value()));
            }
        }
        out
    }
}

/// Tags `base_url` with `utm`, replacing any `utm_*` parameters already present.
pub fn compose(base_url: &str, utm: &UtmParams) -> String {
    merge_query(base_url, utm.pairs())
}

/// Strips `utm_*` from `base_url`'s query and merges `extra` on top (new keys win).
///
/// Non-UTM parameters keep their first-seen order and come first. When the
/// final set is empty the bare base is returned without a trailing `?`.
/// A `#fragment` is carried over after the query.
pub fn merge_query<'a, I>(base_url: &str, extra: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let parsed = parse_url(base_url);
    let mut params = strip_utm(parsed.params);
    for (key, value) in extra {
        set_param(&mut params, key.to_string(), value.to_string());
    }

    let mut out = parsed.base;
    if !params.is_empty() {
        out.push('?');
        out.push_str(&encode_params(&params));
    }
    if let Some(fragment) = parsed.fragment {
        out.push('#');
        out.push_str(&fragment);
    }
    out
}

/// The part of `url` before the first `?` or `#`.
pub fn landing_url(url: &str) -> &str {
    url.split_once(['?', '#']).map_or(url, |(base, _)| base)
}
