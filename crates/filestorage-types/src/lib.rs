//! Foundation types for filestorage.
//!
//! This crate provides the record types shared by the metadata store and
//! the raw file store. Every other filestorage crate depends on
//! `filestorage-types`.
//!
//! # Key Types
//!
//! - [`Metadata`] — Capability trait every storable record implements
//! - [`FileMetadata`] — Concrete record describing one stored file

pub mod error;
pub mod metadata;

pub use error::{TypeError, TypeResult};
pub use metadata::{FileMetadata, Metadata};
