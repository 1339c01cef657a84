//! Per-mode static configuration: option vocabularies, landing URLs and the
//! material/area enumeration.

use crate::ident;
use crate::request::{BuilderType, GenerationRequest, UrlMode, UtmParamType};

/// Domain every auto-mode landing path is appended to.
pub const LANDING_DOMAIN: &str = "https://marithe-official.com";

/// Brand-shop placements in page order, each with its own destination.
pub const BRAND_SHOP_AREAS: [(&str, &str); 8] = [
    ("homelink", "https://marithe-official.com"),
    (
        "brandnews",
        "https://marithe-official.com/page/welcome-kit.html",
    ),
    (
        "mainimage",
        "https://marithe-official.com/product/list.html?cate_no=1515",
    ),
    ("maintext", "https://marithe-official.com"),
    (
        "thum1",
        "https://marithe-official.com/product/list.html?cate_no=809",
    ),
    (
        "thum2",
        "https://marithe-official.com/product/list.html?cate_no=810",
    ),
    (
        "thum3",
        "https://marithe-official.com/product/list.html?cate_no=819",
    ),
    (
        "sub1",
        "https://marithe-official.com/product/list.html?cate_no=922",
    ),
];

const DISPLAY_PATHS: &[(&str, &str)] = &[
    ("MFG", "/collection/detail/"),
    ("KID", "/collection/detail/"),
    ("UND", "/product/list.html?cate_no=1378"),
];
const DISPLAY_FALLBACK_PATH: &str = "/collection/detail/";

const SEARCH_PATHS: &[(&str, &str)] = &[
    ("MFG", "/"),
    ("KID", "?cate_no=811"),
    ("UND", "?cate_no=1378"),
];
const SEARCH_FALLBACK_PATH: &str = "/";

/// One material or area to tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Name shown in exports (`img_01`, `homelink`).
    pub name: String,
    /// Suffix of the material identifier (`img_01`, `01_homelink`).
    pub label: String,
    /// Untagged destination.
    pub landing_url: String,
}

impl BuilderType {
    /// Ad platforms offered for this mode; the first is the default.
    pub fn media(self) -> &'static [&'static str] {
        match self {
            BuilderType::Display => &["meta", "google", "criteo"],
            BuilderType::Search => &["naver_sa"],
            BuilderType::BrandShop => &["naver_bsa"],
        }
    }

    /// Ad products offered for this mode; the first is the default.
    pub fn products(self) -> &'static [&'static str] {
        match self {
            BuilderType::Display => &["traffic", "conversion"],
            BuilderType::Search => &["powerlink_pc", "powerlink_mo"],
            BuilderType::BrandShop => &["lite-pc", "lite-mo"],
        }
    }

    /// Whether the material list is the fixed brand-shop area set.
    pub fn has_fixed_areas(self) -> bool {
        matches!(self, BuilderType::BrandShop)
    }

    /// Brand → landing path table for auto URL mode, with its fallback.
    /// Brand-shop has none.
    pub fn auto_paths(self) -> Option<(&'static [(&'static str, &'static str)], &'static str)> {
        match self {
            BuilderType::Display => Some((DISPLAY_PATHS, DISPLAY_FALLBACK_PATH)),
            BuilderType::Search => Some((SEARCH_PATHS, SEARCH_FALLBACK_PATH)),
            BuilderType::BrandShop => None,
        }
    }

    /// Auto-mode landing URL for `brand`. Unknown brands use the fallback path.
    pub fn auto_landing_url(self, brand: &str) -> String {
        let path = match self.auto_paths() {
            Some((table, fallback)) => table
                .iter()
                .find(|(code, _)| *code == brand)
                .map_or(fallback, |(_, path)| *path),
            None => "/",
        };
        join_domain(LANDING_DOMAIN, path)
    }

    /// Landing URL for one brand, honoring the request's URL mode.
    /// Manual mode without a URL falls back to the bare domain.
    pub fn landing_url(self, request: &GenerationRequest, brand: &str) -> String {
        match request.url_mode {
            UrlMode::Auto => self.auto_landing_url(brand),
            UrlMode::Manual => request
                .manual_url
                .as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .unwrap_or(LANDING_DOMAIN)
                .to_string(),
        }
    }

    /// Materials/areas for one brand, in output order.
    pub fn placements(self, request: &GenerationRequest, brand: &str) -> Vec<Placement> {
        match self {
            BuilderType::BrandShop => BRAND_SHOP_AREAS
                .iter()
                .map(|(area, url)| Placement {
                    name: area.to_string(),
                    label: ident::area_label(area),
                    landing_url: url.to_string(),
                })
                .collect(),
            BuilderType::Display | BuilderType::Search => {
                let landing_url = self.landing_url(request, brand);
                (1..=request.material_count)
                    .map(|i| {
                        let label = ident::image_label(i);
                        Placement {
                            name: label.clone(),
                            label,
                            landing_url: landing_url.clone(),
                        }
                    })
                    .collect()
            }
        }
    }

    /// UTM key kind carrying the material id. Brand-shop always uses `utm_content`.
    pub fn material_param(self, requested: UtmParamType) -> UtmParamType {
        match self {
            BuilderType::BrandShop => UtmParamType::Content,
            BuilderType::Display | BuilderType::Search => requested,
        }
    }

    /// Export name for the material at 0-based `index`.
    pub fn material_name(self, index: usize) -> String {
        match self {
            BuilderType::BrandShop => BRAND_SHOP_AREAS
                .get(index)
                .map_or_else(|| format!("area_{}", index + 1), |(area, _)| area.to_string()),
            BuilderType::Display | BuilderType::Search => {
                ident::image_label(u32::try_from(index + 1).unwrap_or(u32::MAX))
            }
        }
    }
}

/// `domain + path`, inserting `/` when the path does not start with one.
fn join_domain(domain: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{domain}{path}")
    } else {
        format!("{domain}/{path}")
    }
}
