//! Generation request and result types.
//!
//! Wire names follow the operator tool's JSON (`materialCount`, `builderType`,
//! ...) so saved templates and history entries stay interchangeable.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Builder mode: selects media/product vocabularies and material enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BuilderType {
    /// Display ads (meta, google, criteo).
    #[default]
    #[serde(rename = "DA")]
    Display,
    /// Search ads (naver powerlink).
    #[serde(rename = "SA")]
    Search,
    /// Naver brand-shop with 8 fixed placements.
    #[serde(rename = "BS")]
    BrandShop,
}

impl BuilderType {
    pub const ALL: [BuilderType; 3] = [
        BuilderType::Display,
        BuilderType::Search,
        BuilderType::BrandShop,
    ];

    /// Short code used in storage keys and exports (`DA`, `SA`, `BS`).
    pub fn code(self) -> &'static str {
        match self {
            BuilderType::Display => "DA",
            BuilderType::Search => "SA",
            BuilderType::BrandShop => "BS",
        }
    }
}

impl fmt::Display for BuilderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

/// Error for an unrecognized enum spelling on the command line or in config.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for BuilderType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DA" | "DISPLAY" => Ok(BuilderType::Display),
            "SA" | "SEARCH" => Ok(BuilderType::Search),
            "BS" | "BRANDSHOP" => Ok(BuilderType::BrandShop),
            _ => Err(UnknownVariant {
                kind: "builder type",
                value: s.to_string(),
                expected: "DA, SA, BS",
            }),
        }
    }
}

/// Landing URL source for Display/Search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlMode {
    /// Domain + per-brand path from the static table.
    #[default]
    Auto,
    /// One operator-supplied URL for every material.
    Manual,
}

/// Which UTM key carries the per-material identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtmParamType {
    #[default]
    Content,
    Term,
}

impl FromStr for UtmParamType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "content" | "utm_content" => Ok(UtmParamType::Content),
            "term" | "utm_term" => Ok(UtmParamType::Term),
            _ => Err(UnknownVariant {
                kind: "utm param type",
                value: s.to_string(),
                expected: "content, term",
            }),
        }
    }
}

/// Per-material identifier bound to exactly one UTM key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialTag {
    Content(String),
    Term(String),
}

impl MaterialTag {
    pub fn new(kind: UtmParamType, value: String) -> Self {
        match kind {
            UtmParamType::Content => MaterialTag::Content(value),
            UtmParamType::Term => MaterialTag::Term(value),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MaterialTag::Content(_) => "utm_content",
            MaterialTag::Term(_) => "utm_term",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            MaterialTag::Content(v) | MaterialTag::Term(v) => v,
        }
    }
}

/// Campaign attributes for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// YYMMDD.
    pub date: String,
    /// Ad platform; becomes `utm_source`.
    pub medium: String,
    /// Ad product; becomes `utm_medium`.
    pub product: String,
    pub brands: Vec<String>,
    pub objective: String,
    pub issue: String,
    pub season: String,
    #[serde(default)]
    pub promotion: String,
    /// Ignored for BrandShop.
    pub material_count: u32,
    pub builder_type: BuilderType,
    #[serde(default)]
    pub url_mode: UrlMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_url: Option<String>,
    #[serde(default)]
    pub utm_param_type: UtmParamType,
}

/// Generated identifiers and URLs for one brand. `content[i]` pairs with `url[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandUtm {
    pub campaign: String,
    pub content: Vec<String>,
    pub url: Vec<String>,
}

/// Brand code → generated identifiers, in request order.
///
/// Serializes as a JSON object keyed by brand. Inserting a brand that is
/// already present replaces its value and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    entries: Vec<(String, BrandUtm)>,
}

impl GenerationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, brand: String, utm: BrandUtm) {
        match self.entries.iter_mut().find(|(b, _)| *b == brand) {
            Some((_, slot)) => *slot = utm,
            None => self.entries.push((brand, utm)),
        }
    }

    pub fn get(&self, brand: &str) -> Option<&BrandUtm> {
        self.entries
            .iter()
            .find(|(b, _)| b == brand)
            .map(|(_, utm)| utm)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BrandUtm)> {
        self.entries.iter().map(|(b, utm)| (b.as_str(), utm))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of generated URLs across all brands.
    pub fn url_count(&self) -> usize {
        self.entries.iter().map(|(_, utm)| utm.url.len()).sum()
    }
}

impl Serialize for GenerationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (brand, utm) in &self.entries {
            map.serialize_entry(brand, utm)?;
        }
        map.end()
    }
}
