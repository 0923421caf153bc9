use std::any::{self, Any};

use filestorage_types::Metadata;

use crate::error::{MetaError, MetaResult};

/// Identifier-keyed store of metadata records.
///
/// All implementations must satisfy these invariants:
/// - Every held record has a non-empty identifier unique within the store.
/// - A record's identifier never changes once assigned.
/// - The store holds its own copy of each record; callers get clones.
/// - Removing or updating an unknown identifier is an error, not a no-op.
pub trait MetadataStorage {
    /// The concrete record type this store holds.
    type Meta: Metadata + Clone;

    /// Return a fresh, unstored record with no identifier.
    fn new_metadata(&self) -> Self::Meta;

    /// Add a typed record and return its newly assigned identifier.
    ///
    /// Fails with [`MetaError::IdAlreadySet`] if the record already carries
    /// an identifier.
    fn add_metadata(&mut self, meta: &Self::Meta) -> MetaResult<String>;

    /// Return a clone of the record held under `id`.
    fn metadata(&self, id: &str) -> MetaResult<Self::Meta>;

    /// Return clones of every held record.
    fn list_metadata(&self) -> MetaResult<Vec<Self::Meta>>;

    /// Delete the record held under `id`.
    fn remove_doc(&mut self, id: &str) -> MetaResult<()>;

    /// Mark the store's copy of `meta` (looked up by its identifier) as
    /// stored. The caller's value is not touched.
    fn set_stored(&mut self, meta: &dyn Metadata) -> MetaResult<()>;

    /// Add an arbitrary value, which must be of type [`Self::Meta`].
    ///
    /// Default implementation downcasts and calls `add_metadata()`.
    fn add_doc(&mut self, doc: &dyn Any) -> MetaResult<String> {
        let meta = doc
            .downcast_ref::<Self::Meta>()
            .ok_or(MetaError::InvalidType {
                expected: any::type_name::<Self::Meta>(),
            })?;
        self.add_metadata(meta)
    }

    /// Untyped variant of `metadata()`.
    fn doc(&self, id: &str) -> MetaResult<Box<dyn Any>> {
        Ok(Box::new(self.metadata(id)?))
    }

    /// Untyped variant of `list_metadata()`.
    fn list_docs(&self) -> MetaResult<Vec<Box<dyn Any>>> {
        Ok(self
            .list_metadata()?
            .into_iter()
            .map(|meta| Box::new(meta) as Box<dyn Any>)
            .collect())
    }
}
