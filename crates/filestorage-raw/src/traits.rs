//! The [`RawFileStorage`] trait defining the raw storage interface.

use std::io::Read;

use crate::error::RawResult;

/// Storage backend mapping logical names to byte content.
///
/// Implementations must:
/// - Replace, never append to, the content of an existing name.
/// - Leave existing content untouched when an add fails.
/// - Treat reading or removing an unknown name as an error.
/// - Reject names that would resolve outside their storage area.
pub trait RawFileStorage {
    /// Readable handle returned by `file()`. Dropping it releases the file.
    type File: Read;

    /// Store exactly `length` bytes read from `content` under `name`.
    ///
    /// Fails with `InvalidSize` if `content` ends early. Bytes past
    /// `length` are not read.
    fn add_file(&self, name: &str, content: &mut dyn Read, length: u64) -> RawResult<()>;

    /// Open the content stored under `name` for reading.
    fn file(&self, name: &str) -> RawResult<Self::File>;

    /// Delete the content stored under `name`.
    fn remove_file(&self, name: &str) -> RawResult<()>;

    /// Check whether content is stored under `name`.
    fn exists(&self, name: &str) -> RawResult<bool>;

    /// Read the whole content stored under `name`.
    ///
    /// Default implementation drains the handle from `file()`.
    fn read_file(&self, name: &str) -> RawResult<Vec<u8>> {
        let mut data = Vec::new();
        self.file(name)?.read_to_end(&mut data)?;
        Ok(data)
    }
}
