//! Error and warning types for request validation.

use thiserror::Error;

/// A reason a request must not be generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("date is required")]
    MissingDate,
    #[error("date must be YYMMDD (6 digits), got '{0}'")]
    DateFormat(String),
    #[error("month must be between 01 and 12, got {0:02}")]
    MonthRange(u32),
    #[error("day must be between 01 and 31, got {0:02}")]
    DayRange(u32),
    #[error("promotion may contain only lowercase letters and digits (suggested: '{suggested}')")]
    PromotionCharset { suggested: String },
    #[error("select at least one brand")]
    NoBrands,
    #[error("landing URL is required in manual URL mode")]
    MissingManualUrl,
    #[error("landing URL '{url}' is not a valid absolute URL: {reason}")]
    InvalidManualUrl { url: String, reason: String },
    #[error("material count must be between 1 and {max}, got {count}")]
    MaterialCount { count: u32, max: u32 },
}

/// Advisory: the product is not one the medium normally offers. Never blocks generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{medium} supports only: {}", .allowed.join(", "))]
pub struct MediaWarning {
    pub medium: String,
    pub product: String,
    pub allowed: Vec<&'static str>,
}
