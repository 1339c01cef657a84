//! Input gating before generation.
//!
//! Generation itself never fails; everything here runs first and turns a form
//! into a list of blocking errors plus advisory warnings.

mod error;

pub use error::{MediaWarning, ValidationError};

use crate::catalog;
use crate::request::{BuilderType, GenerationRequest, UrlMode};

/// Upper bound on materials per brand for Display/Search.
pub const MAX_MATERIALS: u32 = 99;

/// Outcome of [`validate_request`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<MediaWarning>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks a YYMMDD date. Calendar validity beyond month/day ranges is not enforced.
pub fn validate_date(date: &str) -> Result<(), ValidationError> {
    if date.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    if date.len() != 6 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::DateFormat(date.to_string()));
    }
    let field = |range: std::ops::Range<usize>| {
        date[range]
            .parse::<u32>()
            .map_err(|_| ValidationError::DateFormat(date.to_string()))
    };
    let month = field(2..4)?;
    let day = field(4..6)?;
    if !(1..=12).contains(&month) {
        return Err(ValidationError::MonthRange(month));
    }
    if !(1..=31).contains(&day) {
        return Err(ValidationError::DayRange(day));
    }
    Ok(())
}

/// Lowercases and drops everything outside `[a-z0-9]`.
pub fn sanitize_promotion(promotion: &str) -> String {
    promotion
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// An empty promotion is allowed; otherwise it must already be sanitized.
pub fn validate_promotion(promotion: &str) -> Result<(), ValidationError> {
    if promotion.is_empty() {
        return Ok(());
    }
    let sanitized = sanitize_promotion(promotion);
    if sanitized != promotion {
        return Err(ValidationError::PromotionCharset {
            suggested: sanitized,
        });
    }
    Ok(())
}

/// Warns when `product` is outside the known set for `medium`. Unknown media pass.
pub fn validate_media_combination(medium: &str, product: &str) -> Option<MediaWarning> {
    let preset = catalog::media_preset(medium)?;
    if preset.valid_products.contains(&product) {
        return None;
    }
    Some(MediaWarning {
        medium: medium.to_string(),
        product: product.to_string(),
        allowed: preset.valid_products.to_vec(),
    })
}

/// Requires a non-empty, absolute, parseable URL.
pub fn validate_manual_url(manual_url: Option<&str>) -> Result<(), ValidationError> {
    let url = match manual_url.map(str::trim) {
        Some(u) if !u.is_empty() => u,
        _ => return Err(ValidationError::MissingManualUrl),
    };
    url::Url::parse(url)
        .map(|_| ())
        .map_err(|e| ValidationError::InvalidManualUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })
}

/// Collects every blocking error and advisory warning for `request`.
pub fn validate_request(request: &GenerationRequest) -> ValidationReport {
    let mut report = ValidationReport::default();

    if let Err(e) = validate_date(&request.date) {
        report.errors.push(e);
    }
    if let Err(e) = validate_promotion(&request.promotion) {
        report.errors.push(e);
    }
    if request.brands.is_empty() {
        report.errors.push(ValidationError::NoBrands);
    }
    if request.builder_type != BuilderType::BrandShop {
        if request.url_mode == UrlMode::Manual {
            if let Err(e) = validate_manual_url(request.manual_url.as_deref()) {
                report.errors.push(e);
            }
        }
        if !(1..=MAX_MATERIALS).contains(&request.material_count) {
            report.errors.push(ValidationError::MaterialCount {
                count: request.material_count,
                max: MAX_MATERIALS,
            });
        }
    }
    if let Some(w) = validate_media_combination(&request.medium, &request.product) {
        report.warnings.push(w);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_rules() {
        assert_eq!(validate_date("260119"), Ok(()));
        assert_eq!(validate_date("260231"), Ok(()));
        assert_eq!(validate_date(""), Err(ValidationError::MissingDate));
        assert_eq!(
            validate_date("2601190"),
            Err(ValidationError::DateFormat("2601190".into()))
        );
        assert_eq!(
            validate_date("26-119"),
            Err(ValidationError::DateFormat("26-119".into()))
        );
        assert_eq!(validate_date("261301"), Err(ValidationError::MonthRange(13)));
        assert_eq!(validate_date("260001"), Err(ValidationError::MonthRange(0)));
        assert_eq!(validate_date("260132"), Err(ValidationError::DayRange(32)));
        assert_eq!(validate_date("260100"), Err(ValidationError::DayRange(0)));
    }

    #[test]
    fn non_ascii_digits_rejected() {
        assert!(matches!(
            validate_date("２６０１１９"),
            Err(ValidationError::DateFormat(_))
        ));
    }

    #[test]
    fn promotion_sanitize_and_validate() {
        assert_eq!(sanitize_promotion("Winter Sale-2026!"), "wintersale2026");
        assert_eq!(validate_promotion(""), Ok(()));
        assert_eq!(validate_promotion("sale26"), Ok(()));
        assert_eq!(
            validate_promotion("Sale"),
            Err(ValidationError::PromotionCharset {
                suggested: "sale".into()
            })
        );
    }

    #[test]
    fn media_combination_is_advisory() {
        assert!(validate_media_combination("meta", "traffic").is_none());
        assert!(validate_media_combination("unknown", "anything").is_none());
        let w = validate_media_combination("naver_sa", "traffic").unwrap();
        assert_eq!(w.allowed, vec!["powerlink_pc", "powerlink_mo"]);
        assert_eq!(
            w.to_string(),
            "naver_sa supports only: powerlink_pc, powerlink_mo"
        );
    }

    #[test]
    fn manual_url_rules() {
        assert_eq!(
            validate_manual_url(None),
            Err(ValidationError::MissingManualUrl)
        );
        assert_eq!(
            validate_manual_url(Some("  ")),
            Err(ValidationError::MissingManualUrl)
        );
        assert!(matches!(
            validate_manual_url(Some("/relative/path")),
            Err(ValidationError::InvalidManualUrl { .. })
        ));
        assert_eq!(
            validate_manual_url(Some("https://example.com/a?b=1")),
            Ok(())
        );
    }

    #[test]
    fn request_collects_all_errors_and_warnings() {
        let mut req = GenerationRequest::defaults_for(BuilderType::Display, "261399");
        req.promotion = "Big Sale".into();
        req.brands.clear();
        req.url_mode = UrlMode::Manual;
        req.material_count = 0;
        req.product = "powerlink_pc".into();

        let report = validate_request(&req);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 5);
        assert_eq!(report.errors[0], ValidationError::MonthRange(13));
        assert!(report.errors.contains(&ValidationError::NoBrands));
        assert!(report.errors.contains(&ValidationError::MissingManualUrl));
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn brand_shop_skips_url_and_count_checks() {
        let mut req = GenerationRequest::defaults_for(BuilderType::BrandShop, "260119");
        req.url_mode = UrlMode::Manual;
        req.material_count = 0;
        let report = validate_request(&req);
        assert!(report.is_valid(), "{:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn warning_does_not_block() {
        let mut req = GenerationRequest::defaults_for(BuilderType::Display, "260119");
        req.product = "lite-pc".into();
        let report = validate_request(&req);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }
}
