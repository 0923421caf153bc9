//! Raw file storage for filestorage.
//!
//! Maps a logical file name to a regular file directly under a root
//! directory. The store keeps no state beyond its root and configuration;
//! every call opens and releases its own file handles.
//!
//! # Modules
//!
//! - [`error`] — Error types for raw storage operations
//! - [`traits`] — The [`RawFileStorage`] trait defining the storage interface
//! - [`dir`] — Directory-backed [`DirFileStorage`]
//! - [`names`] — File name validation
//! - [`config`] — [`RawStorageConfig`], loadable from TOML

pub mod config;
pub mod dir;
pub mod error;
pub mod names;
pub mod traits;

pub use config::RawStorageConfig;
pub use dir::DirFileStorage;
pub use error::{RawError, RawResult};
pub use names::validate_file_name;
pub use traits::RawFileStorage;
