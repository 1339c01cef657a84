//! `utmb generate` – build tagged URLs and print or export them.

use anyhow::Result;
use std::path::PathBuf;
use utmb_core::config::UtmbConfig;
use utmb_core::export::{default_export_filename, render_csv, render_tsv};
use utmb_core::store::{History, KeyValueStore};
use utmb_core::{generate, GenerationRequest, GenerationResult};

use super::{check_request, emit};
use crate::cli::{OutputFormat, RequestArgs};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub record_history: bool,
}

pub fn run_generate<S>(
    cfg: &UtmbConfig,
    store: &mut S,
    args: &RequestArgs,
    opts: &GenerateOptions,
) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    let request = args.resolve(cfg, store)?;
    check_request(&request)?;

    let result = generate(&request);
    tracing::info!(
        builder = %request.builder_type,
        brands = result.len(),
        urls = result.url_count(),
        "generated"
    );

    if opts.record_history {
        History::new(store, cfg.history_limit).record(&request)?;
    }

    let content = render(&request, &result, opts.format)?;
    let output = match (opts.format, &opts.output) {
        (_, Some(path)) => Some(path.clone()),
        (OutputFormat::Csv, None) => Some(PathBuf::from(default_export_filename(&request.date))),
        _ => None,
    };
    emit(&content, output.as_deref())
}

/// Renders `result` in `format`.
pub fn render(
    request: &GenerationRequest,
    result: &GenerationResult,
    format: OutputFormat,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Csv => render_csv(request, result),
        OutputFormat::Tsv => render_tsv(request, result),
    })
}

fn render_text(result: &GenerationResult) -> String {
    let mut out = Vec::new();
    for (brand, utm) in result.iter() {
        out.push(format!("[{brand}] {}", utm.campaign));
        for (content, url) in utm.content.iter().zip(&utm.url) {
            out.push(format!("  {content}"));
            out.push(format!("    {url}"));
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use utmb_core::BuilderType;

    fn request() -> GenerationRequest {
        let mut req = GenerationRequest::defaults_for(BuilderType::Display, "260119");
        req.promotion = "sale".into();
        req
    }

    #[test]
    fn text_lists_campaign_then_pairs() {
        let req = request();
        let text = render(&req, &generate(&req), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[MFG] 260119_MFG_CV-RT_RL_25WI_sale");
        assert_eq!(lines[1], "  260119_MFG_25WI_sale_img_01");
        assert!(lines[2].starts_with("    https://marithe-official.com/collection/detail/?"));
    }

    #[test]
    fn json_is_brand_keyed() {
        let req = request();
        let json = render(&req, &generate(&req), OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["MFG"]["campaign"], "260119_MFG_CV-RT_RL_25WI_sale");
    }

    #[test]
    fn csv_has_bom() {
        let req = request();
        let csv = render(&req, &generate(&req), OutputFormat::Csv).unwrap();
        assert!(csv.starts_with('\u{feff}'));
    }
}
