//! Request flags shared by `generate`, `validate` and `template save`.

use anyhow::Result;
use clap::Args;
use utmb_core::catalog;
use utmb_core::config::UtmbConfig;
use utmb_core::store::{KeyValueStore, Templates};
use utmb_core::validate::sanitize_promotion;
use utmb_core::{BuilderType, GenerationRequest, UrlMode, UtmParamType};

#[derive(Debug, Clone, Default, Args)]
pub struct RequestArgs {
    /// Start from a saved template instead of the mode defaults.
    #[arg(long, value_name = "ID")]
    pub template: Option<String>,

    /// Builder mode: DA (display), SA (search) or BS (brand-shop).
    #[arg(short, long, value_name = "MODE")]
    pub builder: Option<BuilderType>,

    /// Campaign date as YYMMDD (default: today).
    #[arg(long, value_name = "YYMMDD")]
    pub date: Option<String>,

    /// Ad platform, written as utm_source.
    #[arg(long)]
    pub medium: Option<String>,

    /// Ad product, written as utm_medium.
    #[arg(long)]
    pub product: Option<String>,

    /// Brand codes; repeat or comma-separate.
    #[arg(long = "brand", value_delimiter = ',', value_name = "CODE")]
    pub brands: Vec<String>,

    #[arg(long)]
    pub objective: Option<String>,

    #[arg(long)]
    pub issue: Option<String>,

    #[arg(long)]
    pub season: Option<String>,

    /// Promotion name (lowercase letters and digits).
    #[arg(long)]
    pub promotion: Option<String>,

    /// Lowercase the promotion and drop disallowed characters.
    #[arg(long)]
    pub sanitize: bool,

    /// Materials per brand (DA/SA only).
    #[arg(short = 'n', long = "materials", value_name = "N")]
    pub material_count: Option<u32>,

    /// Use this landing URL for every material (switches to manual URL mode).
    #[arg(long, value_name = "URL", conflicts_with = "auto_url")]
    pub manual_url: Option<String>,

    /// Derive landing URLs from the per-brand table.
    #[arg(long)]
    pub auto_url: bool,

    /// Key carrying the material id: content or term.
    #[arg(long, value_name = "KEY")]
    pub utm_param: Option<UtmParamType>,
}

impl RequestArgs {
    /// Starting point: the named template, or the mode defaults for today.
    pub fn base_request<S>(&self, cfg: &UtmbConfig, store: &mut S) -> Result<GenerationRequest>
    where
        S: KeyValueStore + ?Sized,
    {
        if let Some(id) = &self.template {
            let template = Templates::new(store).get(id)?;
            tracing::debug!("starting from template {} ({})", id, template.template_name);
            return Ok(template.request);
        }
        let builder = self.builder.unwrap_or(cfg.default_builder);
        let mut req = GenerationRequest::defaults_for(builder, catalog::today_yymmdd());
        if !cfg.default_brands.is_empty() {
            req.brands = cfg.default_brands.clone();
        }
        req.utm_param_type = cfg.utm_param_type;
        Ok(req)
    }

    /// Overlays every flag that was given onto `base`.
    pub fn apply(&self, base: GenerationRequest) -> GenerationRequest {
        let mut req = base;
        if let Some(builder) = self.builder {
            req.switch_builder(builder);
        }
        if let Some(date) = &self.date {
            req.date = date.clone();
        }
        if let Some(medium) = &self.medium {
            req.medium = medium.clone();
        }
        if let Some(product) = &self.product {
            req.product = product.clone();
        }
        if !self.brands.is_empty() {
            req.brands = self.brands.clone();
        }
        if let Some(objective) = &self.objective {
            req.objective = objective.clone();
        }
        if let Some(issue) = &self.issue {
            req.issue = issue.clone();
        }
        if let Some(season) = &self.season {
            req.season = season.clone();
        }
        if let Some(promotion) = &self.promotion {
            req.promotion = promotion.clone();
        }
        if self.sanitize {
            req.promotion = sanitize_promotion(&req.promotion);
        }
        if let Some(count) = self.material_count {
            req.material_count = count;
        }
        if let Some(url) = &self.manual_url {
            req.url_mode = UrlMode::Manual;
            req.manual_url = Some(url.trim().to_string());
        }
        if self.auto_url {
            req.url_mode = UrlMode::Auto;
            req.manual_url = None;
        }
        if let Some(param) = self.utm_param {
            req.utm_param_type = param;
        }
        req
    }

    pub fn resolve<S>(&self, cfg: &UtmbConfig, store: &mut S) -> Result<GenerationRequest>
    where
        S: KeyValueStore + ?Sized,
    {
        Ok(self.apply(self.base_request(cfg, store)?))
    }
}
