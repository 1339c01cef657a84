//! CLI for the UTMB campaign URL builder.

mod args;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use utmb_core::config::{self, UtmbConfig};
use utmb_core::store::FileStore;
use utmb_core::BuilderType;

pub use args::RequestArgs;
use commands::{
    run_completions, run_generate, run_history, run_man, run_options, run_template,
    run_validate, GenerateOptions,
};

/// Top-level CLI for the UTMB campaign URL builder.
#[derive(Debug, Parser)]
#[command(name = "utmb")]
#[command(about = "UTMB: UTM-tagged landing URLs and campaign ids for ad platforms", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    Text,
    /// Brand-keyed JSON.
    Json,
    /// Operator sheet as CSV (with BOM).
    Csv,
    /// Operator sheet as tab-separated text.
    Tsv,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate campaign ids and tagged URLs.
    Generate {
        #[command(flatten)]
        request: RequestArgs,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write output to a file ("-" for stdout). CSV defaults to marithe_utm_<date>.csv.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Do not record this request in history.
        #[arg(long)]
        no_history: bool,
    },

    /// Check a request without generating.
    Validate {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Show media, products and landing URLs for a builder mode (all modes if omitted).
    Options {
        /// Builder mode: DA, SA or BS.
        mode: Option<BuilderType>,
    },

    /// Show recent requests for a builder mode.
    History {
        /// Builder mode: DA, SA or BS.
        mode: BuilderType,

        /// Print entries as JSON.
        #[arg(long)]
        json: bool,

        /// Forget all entries for this mode.
        #[arg(long, conflicts_with = "json")]
        clear: bool,
    },

    /// Manage saved request templates.
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff).
    Man,
}

#[derive(Debug, Subcommand)]
pub enum TemplateAction {
    /// Save the request described by the flags under a name.
    Save {
        /// Template display name.
        #[arg(long)]
        name: String,

        #[command(flatten)]
        request: RequestArgs,
    },

    /// List saved templates.
    List,

    /// Print one template as JSON.
    Show {
        /// Template identifier.
        id: String,
    },

    /// Delete a template by ID.
    Delete {
        /// Template identifier.
        id: String,
    },

    /// Export one template (or all, if no ID) as JSON.
    Export {
        /// Template identifier.
        id: Option<String>,

        /// Write to this file instead of stdout.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Import templates from a JSON file (one object or an array).
    Import {
        /// Path to the JSON file.
        path: PathBuf,
    },
}

/// Loads config and opens the configured store.
fn open_env() -> Result<(UtmbConfig, FileStore)> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    let store = match &cfg.store_path {
        Some(path) => FileStore::new(path),
        None => FileStore::open_default()?,
    };
    tracing::debug!("using store {}", store.path().display());
    Ok((cfg, store))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Generate {
                request,
                format,
                output,
                no_history,
            } => {
                let (cfg, mut store) = open_env()?;
                let opts = GenerateOptions {
                    format,
                    output,
                    record_history: !no_history,
                };
                run_generate(&cfg, &mut store, &request, &opts)?;
            }
            CliCommand::Validate { request } => {
                let (cfg, mut store) = open_env()?;
                run_validate(&cfg, &mut store, &request)?;
            }
            CliCommand::Options { mode } => run_options(mode),
            CliCommand::History { mode, json, clear } => {
                let (cfg, mut store) = open_env()?;
                run_history(&cfg, &mut store, mode, json, clear)?;
            }
            CliCommand::Template { action } => {
                let (cfg, mut store) = open_env()?;
                run_template(&cfg, &mut store, action)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
