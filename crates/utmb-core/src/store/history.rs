//! Recently generated requests, per builder mode.

use super::{load_list, save_list, KeyValueStore, StoreResult};
use crate::request::{BuilderType, GenerationRequest};

pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Most-recent-first request history over any [`KeyValueStore`].
pub struct History<'s, S: KeyValueStore + ?Sized> {
    store: &'s mut S,
    limit: usize,
}

impl<'s, S: KeyValueStore + ?Sized> History<'s, S> {
    pub fn new(store: &'s mut S, limit: usize) -> Self {
        Self { store, limit }
    }

    pub fn key(builder: BuilderType) -> String {
        format!("utm_history_{}", builder.code())
    }

    /// Entries for `builder`, newest first.
    pub fn load(&self, builder: BuilderType) -> StoreResult<Vec<GenerationRequest>> {
        load_list(&*self.store, &Self::key(builder))
    }

    /// Puts `request` first, drops equal older entries and truncates to the limit.
    pub fn record(&mut self, request: &GenerationRequest) -> StoreResult<()> {
        let builder = request.builder_type;
        let mut entries = self.load(builder)?;
        entries.retain(|h| h != request);
        entries.insert(0, request.clone());
        entries.truncate(self.limit);
        save_list(&mut *self.store, &Self::key(builder), &entries)?;
        tracing::info!(
            builder = %builder,
            entries = entries.len(),
            "recorded history entry"
        );
        Ok(())
    }

    pub fn clear(&mut self, builder: BuilderType) -> StoreResult<()> {
        self.store.remove(&Self::key(builder))
    }
}
