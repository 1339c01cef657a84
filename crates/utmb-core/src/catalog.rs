//! Known vocabularies and form defaults.

use crate::request::{BuilderType, GenerationRequest, UrlMode, UtmParamType};

pub const BRANDS: [&str; 3] = ["MFG", "KID", "UND"];
pub const OBJECTIVES: [&str; 3] = ["CV-RT", "CV-UT", "TF-RT"];
pub const ISSUES: [&str; 3] = ["RL", "PR", "AO"];
pub const SEASONS: [&str; 4] = ["25WI", "26SP", "26SS", "26FW"];

/// Analytics source and valid products for one medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaPreset {
    pub medium: &'static str,
    pub source: &'static str,
    pub valid_products: &'static [&'static str],
}

pub const MEDIA_PRESETS: [MediaPreset; 5] = [
    MediaPreset {
        medium: "meta",
        source: "meta",
        valid_products: &["traffic", "conversion"],
    },
    MediaPreset {
        medium: "google",
        source: "google",
        valid_products: &["traffic", "conversion"],
    },
    MediaPreset {
        medium: "criteo",
        source: "criteo",
        valid_products: &["traffic", "conversion"],
    },
    MediaPreset {
        medium: "naver_sa",
        source: "naver",
        valid_products: &["powerlink_pc", "powerlink_mo"],
    },
    MediaPreset {
        medium: "naver_bsa",
        source: "naver",
        valid_products: &["lite-pc", "lite-mo"],
    },
];

pub fn media_preset(medium: &str) -> Option<&'static MediaPreset> {
    MEDIA_PRESETS.iter().find(|p| p.medium == medium)
}

/// Today's local date as YYMMDD.
pub fn today_yymmdd() -> String {
    chrono::Local::now().format("%y%m%d").to_string()
}

impl GenerationRequest {
    /// The operator form's starting values for `builder`.
    pub fn defaults_for(builder: BuilderType, date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            medium: builder.media()[0].to_string(),
            product: builder.products()[0].to_string(),
            brands: vec![BRANDS[0].to_string()],
            objective: OBJECTIVES[0].to_string(),
            issue: ISSUES[0].to_string(),
            season: SEASONS[0].to_string(),
            promotion: String::new(),
            material_count: 1,
            builder_type: builder,
            url_mode: UrlMode::Auto,
            manual_url: None,
            utm_param_type: UtmParamType::Content,
        }
    }

    /// Switches mode, resetting medium and product to the new mode's first options.
    pub fn switch_builder(&mut self, builder: BuilderType) {
        if self.builder_type == builder {
            return;
        }
        self.builder_type = builder;
        self.medium = builder.media()[0].to_string();
        self.product = builder.products()[0].to_string();
    }
}
