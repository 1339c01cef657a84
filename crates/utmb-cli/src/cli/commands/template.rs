//! `utmb template ...` – save, list, show, delete, export and import templates.

use anyhow::{Context, Result};
use std::fs;
use utmb_core::config::UtmbConfig;
use utmb_core::store::{KeyValueStore, Templates};

use super::emit;
use super::history::summarize;
use crate::cli::TemplateAction;

pub fn run_template<S>(cfg: &UtmbConfig, store: &mut S, action: TemplateAction) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    match action {
        TemplateAction::Save { name, request } => {
            let request = request.resolve(cfg, store)?;
            let template = Templates::new(store).save(&request, &name)?;
            println!("Saved template {} ({})", template.id, template.template_name);
        }
        TemplateAction::List => {
            let templates = Templates::new(store).list()?;
            if templates.is_empty() {
                println!("No saved templates.");
            } else {
                println!("{:<24} {:<4} {:<20} {}", "ID", "MODE", "NAME", "REQUEST");
                for t in templates {
                    println!(
                        "{:<24} {:<4} {:<20} {}",
                        t.id,
                        t.request.builder_type,
                        t.template_name,
                        summarize(&t.request)
                    );
                }
            }
        }
        TemplateAction::Show { id } => {
            println!("{}", Templates::new(store).export_one(&id)?);
        }
        TemplateAction::Delete { id } => {
            if Templates::new(store).delete(&id)? {
                println!("Deleted template {id}");
            } else {
                println!("No template with id {id}");
            }
        }
        TemplateAction::Export { id, output } => {
            let templates = Templates::new(store);
            let json = match id {
                Some(id) => templates.export_one(&id)?,
                None => templates.export_all()?,
            };
            emit(&json, output.as_deref())?;
        }
        TemplateAction::Import { path } => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let imported = Templates::new(store).import(&json)?;
            for t in &imported {
                println!("Imported template {} ({})", t.id, t.template_name);
            }
        }
    }
    Ok(())
}
