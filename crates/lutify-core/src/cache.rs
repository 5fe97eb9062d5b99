//! In-memory atlas cache keyed by the record store's LUT id.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::atlas::Atlas;

/// Shared map of built atlases. Cheap to clone entries out; atlases are immutable.
#[derive(Debug, Default)]
pub struct AtlasCache {
    entries: RwLock<HashMap<i64, Arc<Atlas>>>,
}

impl AtlasCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached atlas for `id`, if any.
    pub fn get(&self, id: i64) -> Option<Arc<Atlas>> {
        self.entries.read().get(&id).cloned()
    }

    /// Store `atlas` under `id`, replacing any previous entry.
    pub fn insert(&self, id: i64, atlas: Atlas) -> Arc<Atlas> {
        let atlas = Arc::new(atlas);
        self.entries.write().insert(id, Arc::clone(&atlas));
        atlas
    }

    /// Return the cached atlas, or load one with `load` and cache it.
    ///
    /// `load` typically reads a persisted blob through
    /// [`Atlas::from_bytes`] or rebuilds from `.cube` text. It runs without the
    /// lock held; if two callers race, the first insert wins.
    pub fn get_or_try_insert_with<E>(
        &self,
        id: i64,
        load: impl FnOnce() -> Result<Atlas, E>,
    ) -> Result<Arc<Atlas>, E> {
        if let Some(hit) = self.get(id) {
            tracing::debug!(id, "atlas cache hit");
            return Ok(hit);
        }
        tracing::debug!(id, "atlas cache miss");
        let atlas = Arc::new(load()?);
        let mut entries = self.entries.write();
        Ok(Arc::clone(entries.entry(id).or_insert(atlas)))
    }

    /// Drop the entry for `id` (e.g. after the LUT record is deleted).
    pub fn remove(&self, id: i64) -> Option<Arc<Atlas>> {
        self.entries.write().remove(&id)
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
