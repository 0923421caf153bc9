use std::any::Any;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// Capability contract for any record a metadata store can hold.
///
/// The store only ever touches the identifier and the stored flag. Every
/// other field belongs to the caller and is carried along untouched.
///
/// Implementations must uphold:
/// - The identifier is empty until a store assigns one, and never changes
///   afterwards.
/// - The stored flag only moves from `false` to `true`.
pub trait Metadata: Any + fmt::Debug {
    /// The record's identifier, or `""` if no store has assigned one.
    fn id(&self) -> &str;

    /// Assign the identifier if none is set yet.
    ///
    /// Returns `true` if an identifier was already present, in which case
    /// the record is left unchanged.
    fn set_id(&mut self, id: &str) -> bool;

    /// Whether the raw content for this record has been confirmed written.
    fn stored(&self) -> bool;

    /// Mark the record as stored. Calling it again has no effect.
    fn set_stored(&mut self);
}

/// Metadata describing a single file held in raw storage.
///
/// `size`, `checksum` and `checksum_format` are supplied by the caller; the
/// stores never compute or verify them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    id: String,
    size: u64,
    checksum: String,
    checksum_format: String,
    timestamp: DateTime<Utc>,
    stored: Option<DateTime<Utc>>,
}

impl FileMetadata {
    /// Create an unstored record with no identifier.
    ///
    /// The creation timestamp defaults to now.
    pub fn new(timestamp: Option<DateTime<Utc>>) -> Self {
        Self {
            id: String::new(),
            size: 0,
            checksum: String::new(),
            checksum_format: String::new(),
            timestamp: timestamp.unwrap_or_else(Utc::now),
            stored: None,
        }
    }

    /// Size of the file in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn checksum_format(&self) -> &str {
        &self.checksum_format
    }

    /// When the record was created.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// When the raw content was confirmed written, if it has been.
    pub fn stored_at(&self) -> Option<DateTime<Utc>> {
        self.stored
    }

    /// Set the file information.
    ///
    /// A zero `size` or an empty string keeps the current value for that
    /// field. A checksum without a checksum format is rejected.
    pub fn set_file(
        &mut self,
        size: u64,
        checksum: &str,
        checksum_format: &str,
    ) -> TypeResult<()> {
        let size = if size == 0 { self.size } else { size };
        let checksum = if checksum.is_empty() {
            self.checksum.as_str()
        } else {
            checksum
        };
        let checksum_format = if checksum_format.is_empty() {
            self.checksum_format.as_str()
        } else {
            checksum_format
        };

        if !checksum.is_empty() && checksum_format.is_empty() {
            return Err(TypeError::MissingChecksumFormat {
                checksum: checksum.to_string(),
            });
        }

        let checksum = checksum.to_string();
        let checksum_format = checksum_format.to_string();
        self.size = size;
        self.checksum = checksum;
        self.checksum_format = checksum_format;
        Ok(())
    }

    /// Mark the record as stored at `timestamp`.
    ///
    /// A record that is already stored keeps its original timestamp.
    pub fn set_stored_at(&mut self, timestamp: DateTime<Utc>) {
        if self.stored.is_none() {
            self.stored = Some(timestamp);
        }
    }
}

impl Default for FileMetadata {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Metadata for FileMetadata {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) -> bool {
        if !self.id.is_empty() {
            return true;
        }
        self.id = id.to_string();
        false
    }

    fn stored(&self) -> bool {
        self.stored.is_some()
    }

    fn set_stored(&mut self) {
        self.set_stored_at(Utc::now());
    }
}

impl fmt::Display for FileMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = if self.id.is_empty() { "<unset>" } else { &self.id };
        write!(f, "{id} ({} bytes)", self.size)
    }
}
