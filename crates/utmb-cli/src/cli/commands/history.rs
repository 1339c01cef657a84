//! `utmb history <MODE>` – show or clear recent requests.

use anyhow::Result;
use utmb_core::config::UtmbConfig;
use utmb_core::store::{History, KeyValueStore};
use utmb_core::{BuilderType, GenerationRequest};

pub fn run_history<S>(
    cfg: &UtmbConfig,
    store: &mut S,
    mode: BuilderType,
    json: bool,
    clear: bool,
) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    let mut history = History::new(store, cfg.history_limit);
    if clear {
        history.clear(mode)?;
        println!("Cleared {mode} history.");
        return Ok(());
    }

    let entries = history.load(mode)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("No {mode} history.");
    } else {
        for (i, entry) in entries.iter().enumerate() {
            println!("{:<3} {}", i + 1, summarize(entry));
        }
    }
    Ok(())
}

/// One-line summary: date, media, brands, identifiers, material count.
pub(crate) fn summarize(req: &GenerationRequest) -> String {
    let materials = if req.builder_type.has_fixed_areas() {
        "areas".to_string()
    } else {
        format!("x{}", req.material_count)
    };
    format!(
        "{} {}/{} [{}] {}_{}_{}_{} {}",
        req.date,
        req.medium,
        req.product,
        req.brands.join(","),
        req.objective,
        req.issue,
        req.season,
        req.promotion,
        materials
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line() {
        let mut req = GenerationRequest::defaults_for(BuilderType::Display, "260119");
        req.promotion = "sale".into();
        req.material_count = 3;
        assert_eq!(
            summarize(&req),
            "260119 meta/traffic [MFG] CV-RT_RL_25WI_sale x3"
        );
        let bs = GenerationRequest::defaults_for(BuilderType::BrandShop, "260119");
        assert!(summarize(&bs).ends_with(" areas"));
    }
}
