//! Campaign and material identifier composition.
//!
//! Fields are joined with `_` verbatim. Empty fields still take their slot, so
//! an empty promotion yields `..._25WI__img_01`.

/// `date_brand_objective_issue_season_promotion`.
pub fn campaign(
    date: &str,
    brand: &str,
    objective: &str,
    issue: &str,
    season: &str,
    promotion: &str,
) -> String {
    [date, brand, objective, issue, season, promotion].join("_")
}

/// `date_brand_season_promotion_label`.
pub fn material_id(date: &str, brand: &str, season: &str, promotion: &str, label: &str) -> String {
    [date, brand, season, promotion, label].join("_")
}

/// `img_NN` for a 1-based material index.
pub fn image_label(index: u32) -> String {
    format!("img_{index:02}")
}

/// Brand-shop label for an area: `01_<area>`.
pub fn area_label(area: &str) -> String {
    format!("01_{area}")
}
