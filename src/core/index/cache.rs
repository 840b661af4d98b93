//! Staleness-aware cache of built corpus indexes.
//!
//! Entries are keyed by corpus identity and revalidated against the
//! source modification time on every lookup. Each identity has its own
//! slot lock, so a rebuild of one corpus never blocks lookups of another.
//! Entries live for the lifetime of the cache; there is no eviction.

use crate::core::error::Result;
use crate::core::index::CorpusIndex;
use crate::core::types::Row;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// A fully built index together with the rows it was built from.
#[derive(Debug)]
pub struct CacheEntry {
    pub identity: String,
    pub modified: SystemTime,
    pub index: CorpusIndex,
    pub rows: Vec<Row>,
}

type Slot = Arc<Mutex<Option<Arc<CacheEntry>>>>;

/// Process-wide index cache.
#[derive(Debug, Default)]
pub struct IndexCache {
    slots: RwLock<HashMap<String, Slot>>,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached entry for `identity` if it was built from a source
    /// with timestamp `modified`; otherwise call `loader`, build a new index
    /// over `search_fields` and swap it in.
    ///
    /// Callers only ever see a complete entry. If `loader` fails the
    /// previous entry (if any) is left in place.
    pub fn get_or_build<F>(
        &self,
        identity: &str,
        modified: SystemTime,
        search_fields: &[&str],
        loader: F,
    ) -> Result<Arc<CacheEntry>>
    where
        F: FnOnce() -> Result<Vec<Row>>,
    {
        let slot = self.slot(identity);
        let mut guard = slot.lock();

        if let Some(entry) = guard.as_ref() {
            if entry.modified == modified {
                tracing::debug!(identity, "Index cache hit");
                return Ok(Arc::clone(entry));
            }
            tracing::debug!(identity, "Corpus changed, rebuilding index");
        }

        let start = Instant::now();
        let rows = loader()?;
        let index = CorpusIndex::build(&rows, search_fields);
        let entry = Arc::new(CacheEntry {
            identity: identity.to_string(),
            modified,
            index,
            rows,
        });

        tracing::info!(
            identity,
            documents = entry.index.len(),
            terms = entry.index.vocabulary_size(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Built corpus index"
        );

        *guard = Some(Arc::clone(&entry));
        Ok(entry)
    }

    /// Cached entry for `identity`, without revalidation
    pub fn get(&self, identity: &str) -> Option<Arc<CacheEntry>> {
        let slot = self.slots.read().get(identity).cloned()?;
        let guard = slot.lock();
        guard.clone()
    }

    /// Whether a built entry exists for `identity`
    pub fn contains(&self, identity: &str) -> bool {
        self.get(identity).is_some()
    }

    /// Number of built entries
    pub fn len(&self) -> usize {
        let slots: Vec<Slot> = self.slots.read().values().cloned().collect();
        slots.iter().filter(|slot| slot.lock().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, identity: &str) -> Slot {
        if let Some(slot) = self.slots.read().get(identity) {
            return Arc::clone(slot);
        }
        let mut slots = self.slots.write();
        Arc::clone(slots.entry(identity.to_string()).or_default())
    }
}
