//! CLI command handlers. Each command is in its own file.

mod completions;
mod generate;
mod history;
mod options;
mod template;
mod validate;

pub use completions::{run_completions, run_man};
pub use generate::{run_generate, GenerateOptions};
pub use history::run_history;
pub use options::run_options;
pub use template::run_template;
pub use validate::{check_request, run_validate};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes `content` to `output`, or stdout when it is absent or `-`.
pub(crate) fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) if path != Path::new("-") => {
            fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        _ => println!("{content}"),
    }
    Ok(())
}
