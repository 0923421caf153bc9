//! Metadata storage for filestorage.
//!
//! This crate keeps metadata records in memory, keyed by identifiers the
//! store generates itself. It knows nothing about where the file bytes
//! live; that is the job of `filestorage-raw`.
//!
//! # Storage Backends
//!
//! All backends implement the [`MetadataStorage`] trait:
//!
//! - [`InMemoryMetadataStorage`] -- `BTreeMap`-based store, generic over the
//!   record type
//!
//! # Design Rules
//!
//! 1. The store owns a clone of every record it accepts. Later changes to
//!    the caller's value never reach the stored copy.
//! 2. Identifiers are assigned exactly once, at add time, and are unique
//!    among the records currently held.
//! 3. The stored flag only moves from unstored to stored.
//! 4. Missing identifiers and wrong record types are returned as errors,
//!    never panics.
//! 5. No internal locking: mutation takes `&mut self`.

pub mod error;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{MetaError, MetaResult};
pub use memory::InMemoryMetadataStorage;
pub use traits::MetadataStorage;
