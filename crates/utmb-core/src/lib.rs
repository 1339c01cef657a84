pub mod config;
pub mod logging;

pub mod catalog;
pub mod export;
pub mod generator;
pub mod ident;
pub mod mode;
pub mod request;
pub mod store;
pub mod url_model;
pub mod validate;

pub use generator::generate;
pub use request::{
    BrandUtm, BuilderType, GenerationRequest, GenerationResult, MaterialTag, UrlMode,
    UtmParamType,
};
