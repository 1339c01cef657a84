//! `utmb validate` – check a request without generating.

use anyhow::{bail, Result};
use utmb_core::config::UtmbConfig;
use utmb_core::store::KeyValueStore;
use utmb_core::validate::validate_request;
use utmb_core::GenerationRequest;

use crate::cli::RequestArgs;

/// Prints warnings to stderr and fails with every blocking error listed.
pub fn check_request(request: &GenerationRequest) -> Result<()> {
    let report = validate_request(request);
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
        tracing::warn!("{warning}");
    }
    if !report.is_valid() {
        let lines: Vec<String> = report.errors.iter().map(|e| format!("  - {e}")).collect();
        bail!("invalid request:\n{}", lines.join("\n"));
    }
    Ok(())
}

pub fn run_validate<S>(cfg: &UtmbConfig, store: &mut S, args: &RequestArgs) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    let request = args.resolve(cfg, store)?;
    check_request(&request)?;
    println!("OK");
    Ok(())
}
