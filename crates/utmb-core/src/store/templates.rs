//! Named, reusable requests with JSON import/export.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use super::{load_list, save_list, KeyValueStore, StoreError, StoreResult};
use crate::request::GenerationRequest;

pub const TEMPLATES_KEY: &str = "utm_templates";

/// A saved request with an id and a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtmTemplate {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub template_name: String,
    #[serde(flatten)]
    pub request: GenerationRequest,
}

/// Template collection over any [`KeyValueStore`].
pub struct Templates<'s, S: KeyValueStore + ?Sized> {
    store: &'s mut S,
}

impl<'s, S: KeyValueStore + ?Sized> Templates<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> StoreResult<Vec<UtmTemplate>> {
        load_list(&*self.store, TEMPLATES_KEY)
    }

    pub fn get(&self, id: &str) -> StoreResult<UtmTemplate> {
        self.list()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::TemplateNotFound(id.to_string()))
    }

    /// Appends `request` under `name` and returns the stored template.
    pub fn save(&mut self, request: &GenerationRequest, name: &str) -> StoreResult<UtmTemplate> {
        let mut templates = self.list()?;
        let template = UtmTemplate {
            id: next_id(&templates),
            template_name: name.to_string(),
            request: request.clone(),
        };
        templates.push(template.clone());
        save_list(&mut *self.store, TEMPLATES_KEY, &templates)?;
        tracing::info!(id = %template.id, name = %name, "saved template");
        Ok(template)
    }

    /// Removes the template with `id`; returns whether one was removed.
    pub fn delete(&mut self, id: &str) -> StoreResult<bool> {
        let mut templates = self.list()?;
        let before = templates.len();
        templates.retain(|t| t.id != id);
        if templates.len() == before {
            return Ok(false);
        }
        save_list(&mut *self.store, TEMPLATES_KEY, &templates)?;
        tracing::info!(id = %id, "deleted template");
        Ok(true)
    }

    /// Pretty JSON of one template.
    pub fn export_one(&self, id: &str) -> StoreResult<String> {
        let template = self.get(id)?;
        Ok(serde_json::to_string_pretty(&template)?)
    }

    /// Pretty JSON array of every template.
    pub fn export_all(&self) -> StoreResult<String> {
        let templates = self.list()?;
        if templates.is_empty() {
            return Err(StoreError::NoTemplates);
        }
        Ok(serde_json::to_string_pretty(&templates)?)
    }

    /// Imports a single template object or an array of them and appends them.
    ///
    /// Every entry must carry a builder type and a date. Entries without an id,
    /// or whose id is already taken, get a fresh one.
    pub fn import(&mut self, json: &str) -> StoreResult<Vec<UtmTemplate>> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let items = match value {
            serde_json::Value::Array(items) => items,
            other => vec![other],
        };

        let mut templates = self.list()?;
        let mut imported = Vec::with_capacity(items.len());
        for item in items {
            check_template_shape(&item)?;
            let mut template: UtmTemplate = serde_json::from_value(item)?;
            if template.id.is_empty() || templates.iter().any(|t| t.id == template.id) {
                template.id = next_id(&templates);
            }
            templates.push(template.clone());
            imported.push(template);
        }

        save_list(&mut *self.store, TEMPLATES_KEY, &templates)?;
        tracing::info!(count = imported.len(), "imported templates");
        Ok(imported)
    }
}

fn check_template_shape(item: &serde_json::Value) -> StoreResult<()> {
    let has = |field: &str| {
        item.get(field)
            .and_then(serde_json::Value::as_str)
            .is_some_and(|s| !s.is_empty())
    };
    if !item.is_object() {
        return Err(StoreError::InvalidTemplate("expected a JSON object".into()));
    }
    if !has("builderType") {
        return Err(StoreError::InvalidTemplate("missing builderType".into()));
    }
    if !has("date") {
        return Err(StoreError::InvalidTemplate("missing date".into()));
    }
    Ok(())
}

/// `template_<unix-millis>`, bumped until unused.
fn next_id(existing: &[UtmTemplate]) -> String {
    let mut millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    loop {
        let id = format!("template_{millis}");
        if !existing.iter().any(|t| t.id == id) {
            return id;
        }
        millis += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::BuilderType;
    use crate::store::MemoryStore;

    fn req() -> GenerationRequest {
        let mut r = GenerationRequest::defaults_for(BuilderType::Display, "260119");
        r.promotion = "sale".into();
        r
    }

    #[test]
    fn save_list_get_delete() {
        let mut store = MemoryStore::new();
        let mut templates = Templates::new(&mut store);
        let a = templates.save(&req(), "winter").unwrap();
        let b = templates.save(&req(), "winter copy").unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("template_"));
        assert_eq!(templates.list().unwrap().len(), 2);
        assert_eq!(templates.get(&b.id).unwrap().template_name, "winter copy");

        assert!(templates.delete(&a.id).unwrap());
        assert!(!templates.delete(&a.id).unwrap());
        assert!(matches!(
            templates.get(&a.id),
            Err(StoreError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn template_json_is_flat() {
        let mut store = MemoryStore::new();
        let mut templates = Templates::new(&mut store);
        let t = templates.save(&req(), "flat").unwrap();
        let json = templates.export_one(&t.id).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["templateName"], "flat");
        assert_eq!(v["builderType"], "DA");
        assert_eq!(v["promotion"], "sale");
        assert_eq!(v["materialCount"], 1);
    }

    #[test]
    fn export_all_requires_templates() {
        let mut store = MemoryStore::new();
        let templates = Templates::new(&mut store);
        assert!(matches!(templates.export_all(), Err(StoreError::NoTemplates)));
    }

    #[test]
    fn import_roundtrip_reassigns_taken_ids() {
        let mut store = MemoryStore::new();
        let mut templates = Templates::new(&mut store);
        let t = templates.save(&req(), "orig").unwrap();
        let exported = templates.export_all().unwrap();

        let imported = templates.import(&exported).unwrap();
        assert_eq!(imported.len(), 1);
        assert_ne!(imported[0].id, t.id);
        assert_eq!(imported[0].request, t.request);
        assert_eq!(templates.list().unwrap().len(), 2);
    }

    #[test]
    fn import_single_object_without_id() {
        let mut store = MemoryStore::new();
        let mut templates = Templates::new(&mut store);
        let json = r#"{
            "templateName": "from file",
            "date": "260201", "medium": "naver_sa", "product": "powerlink_mo",
            "brands": ["KID"], "objective": "TF-RT", "issue": "PR",
            "season": "26SP", "promotion": "", "materialCount": 3,
            "builderType": "SA", "urlMode": "auto", "utmParamType": "term"
        }"#;
        let imported = templates.import(json).unwrap();
        assert!(imported[0].id.starts_with("template_"));
        assert_eq!(imported[0].request.builder_type, BuilderType::Search);
        assert_eq!(imported[0].request.material_count, 3);
    }

    #[test]
    fn import_rejects_bad_input() {
        let mut store = MemoryStore::new();
        let mut templates = Templates::new(&mut store);
        assert!(matches!(
            templates.import(r#"{"date": "260101"}"#),
            Err(StoreError::InvalidTemplate(_))
        ));
        assert!(matches!(
            templates.import(r#"{"builderType": "DA"}"#),
            Err(StoreError::InvalidTemplate(_))
        ));
        assert!(matches!(
            templates.import("[1]"),
            Err(StoreError::InvalidTemplate(_))
        ));
        assert!(matches!(
            templates.import("{oops"),
            Err(StoreError::Parse(_))
        ));
        assert!(templates.list().unwrap().is_empty());
    }
}
