//! `utmb options [MODE]` – show a mode's vocabularies and landing URLs.

use utmb_core::catalog;
use utmb_core::mode::{BRAND_SHOP_AREAS, LANDING_DOMAIN};
use utmb_core::BuilderType;

pub fn run_options(mode: Option<BuilderType>) {
    let modes: Vec<BuilderType> = match mode {
        Some(m) => vec![m],
        None => BuilderType::ALL.to_vec(),
    };
    let blocks: Vec<String> = modes.into_iter().map(describe).collect();
    println!("{}", blocks.join("\n\n"));
}

/// `naver_sa (source: naver)`; media without a preset are shown bare.
fn medium_label(medium: &str) -> String {
    match catalog::media_preset(medium) {
        Some(preset) => format!("{medium} (source: {})", preset.source),
        None => medium.to_string(),
    }
}

fn describe(builder: BuilderType) -> String {
    let media: Vec<String> = builder.media().iter().map(|m| medium_label(m)).collect();
    let mut lines = vec![
        format!("{builder}"),
        format!("  media:      {}", media.join(", ")),
        format!("  products:   {}", builder.products().join(", ")),
    ];

    if builder.has_fixed_areas() {
        lines.push(format!("  materials:  {} fixed areas", BRAND_SHOP_AREAS.len()));
        for (area, url) in BRAND_SHOP_AREAS {
            lines.push(format!("    {area:<10} {url}"));
        }
    } else {
        lines.push("  materials:  img_01..img_NN (--materials N)".to_string());
        if let Some((paths, fallback)) = builder.auto_paths() {
            lines.push(format!("  landing:    {LANDING_DOMAIN} + path (auto mode)"));
            for (brand, _) in paths {
                lines.push(format!("    {brand:<10} {}", builder.auto_landing_url(brand)));
            }
            lines.push(format!("    {:<10} {fallback}", "(other)"));
        }
    }

    lines.push(format!("  brands:     {}", catalog::BRANDS.join(", ")));
    lines.push(format!("  objectives: {}", catalog::OBJECTIVES.join(", ")));
    lines.push(format!("  issues:     {}", catalog::ISSUES.join(", ")));
    lines.push(format!("  seasons:    {}", catalog::SEASONS.join(", ")));
    lines.join("\n")
}
