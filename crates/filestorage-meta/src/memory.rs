use std::collections::BTreeMap;
use std::fmt;

use filestorage_types::{FileMetadata, Metadata};
use tracing::debug;
use uuid::Uuid;

use crate::error::{MetaError, MetaResult};
use crate::traits::MetadataStorage;

/// In-memory, `BTreeMap`-based metadata store.
///
/// Generic over the record type; defaults to [`FileMetadata`]. Records are
/// cloned on the way in and on the way out, and listed in identifier order.
/// Nothing is persisted: the records are dropped with the store.
pub struct InMemoryMetadataStorage<M = FileMetadata> {
    docs: BTreeMap<String, M>,
}

impl<M: Metadata + Clone + Default> InMemoryMetadataStorage<M> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            docs: BTreeMap::new(),
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Returns `true` if a record is held under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    /// Return the identifiers of all held records, sorted.
    pub fn ids(&self) -> Vec<String> {
        self.docs.keys().cloned().collect()
    }

    /// Generate an identifier not used by any held record.
    fn next_id(&self) -> String {
        loop {
            let id = Uuid::now_v7().to_string();
            if !self.docs.contains_key(&id) {
                return id;
            }
        }
    }

    fn get_mut(&mut self, id: &str) -> MetaResult<&mut M> {
        self.docs.get_mut(id).ok_or_else(|| MetaError::NotFound {
            id: id.to_string(),
        })
    }
}

impl<M: Metadata + Clone + Default> Default for InMemoryMetadataStorage<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Metadata + Clone + Default> MetadataStorage for InMemoryMetadataStorage<M> {
    type Meta = M;

    fn new_metadata(&self) -> M {
        M::default()
    }

    fn add_metadata(&mut self, meta: &M) -> MetaResult<String> {
        if !meta.id().is_empty() {
            return Err(MetaError::IdAlreadySet {
                id: meta.id().to_string(),
            });
        }

        let id = self.next_id();
        let mut copy = meta.clone();
        if copy.set_id(&id) {
            // A Clone impl that invents an identifier breaks the contract.
            return Err(MetaError::IdAlreadySet {
                id: copy.id().to_string(),
            });
        }
        self.docs.insert(id.clone(), copy);
        debug!(%id, "added metadata");
        Ok(id)
    }

    fn metadata(&self, id: &str) -> MetaResult<M> {
        self.docs.get(id).cloned().ok_or_else(|| MetaError::NotFound {
            id: id.to_string(),
        })
    }

    fn list_metadata(&self) -> MetaResult<Vec<M>> {
        Ok(self.docs.values().cloned().collect())
    }

    fn remove_doc(&mut self, id: &str) -> MetaResult<()> {
        match self.docs.remove(id) {
            Some(_) => {
                debug!(%id, "removed metadata");
                Ok(())
            }
            None => Err(MetaError::NotFound { id: id.to_string() }),
        }
    }

    fn set_stored(&mut self, meta: &dyn Metadata) -> MetaResult<()> {
        let id = meta.id();
        let held = self.get_mut(id)?;
        if !held.stored() {
            held.set_stored();
            debug!(%id, "marked metadata stored");
        }
        Ok(())
    }
}

impl<M> fmt::Debug for InMemoryMetadataStorage<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryMetadataStorage")
            .field("doc_count", &self.docs.len())
            .finish()
    }
}
