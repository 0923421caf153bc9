use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{RawError, RawResult};

/// Configuration for a directory-backed raw file store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawStorageConfig {
    /// Directory holding one file per stored name. Must already exist.
    pub root_dir: PathBuf,
    /// `fsync` each file before it is moved into place.
    pub sync_on_write: bool,
}

impl Default for RawStorageConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            sync_on_write: false,
        }
    }
}

impl RawStorageConfig {
    /// A default configuration rooted at `root_dir`.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Default::default()
        }
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> RawResult<Self> {
        toml::from_str(s).map_err(|e| RawError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = RawStorageConfig::default();
        assert_eq!(c.root_dir, PathBuf::from("."));
        assert!(!c.sync_on_write);
    }

    #[test]
    fn new_keeps_defaults() {
        let c = RawStorageConfig::new("/var/lib/files");
        assert_eq!(c.root_dir, PathBuf::from("/var/lib/files"));
        assert!(!c.sync_on_write);
    }

    #[test]
    fn parse_full_toml() {
        let c = RawStorageConfig::from_toml_str(
            "root_dir = \"/srv/files\"\nsync_on_write = true\n",
        )
        .unwrap();
        assert_eq!(c.root_dir, PathBuf::from("/srv/files"));
        assert!(c.sync_on_write);
    }

    #[test]
    fn parse_partial_toml() {
        let c = RawStorageConfig::from_toml_str("sync_on_write = true").unwrap();
        assert_eq!(c.root_dir, PathBuf::from("."));
        assert!(c.sync_on_write);
    }

    #[test]
    fn parse_invalid_toml() {
        let err = RawStorageConfig::from_toml_str("sync_on_write = \"yes\"").unwrap_err();
        assert!(matches!(err, RawError::Config(_)));
    }
}
