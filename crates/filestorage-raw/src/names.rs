//! File name validation.
//!
//! A name is used verbatim as the base name of a file directly under the
//! storage root. Valid names:
//! - Must be non-empty
//! - Must not be `.` or `..`
//! - Must not contain `/`, `\` or NUL
//! - Must form exactly one normal path component (no root, no prefix)

use std::path::{Component, Path};

use crate::error::{RawError, RawResult};

/// Characters that are forbidden anywhere in a file name.
const FORBIDDEN_CHARS: &[char] = &['/', '\\', '\0'];

/// Validate a file name, returning `Ok(())` if it maps to a file directly
/// under the root.
///
/// # Examples
///
/// ```
/// use filestorage_raw::names::validate_file_name;
///
/// assert!(validate_file_name("eggs").is_ok());
/// assert!(validate_file_name("backup-2014.tar.gz").is_ok());
/// assert!(validate_file_name("").is_err());
/// assert!(validate_file_name("../etc/passwd").is_err());
/// ```
pub fn validate_file_name(name: &str) -> RawResult<()> {
    if name.is_empty() {
        return Err(invalid(name, "file name must not be empty"));
    }

    if name == "." || name == ".." {
        return Err(invalid(name, "must not be a relative directory reference"));
    }

    for ch in FORBIDDEN_CHARS {
        if name.contains(*ch) {
            return Err(invalid(
                name,
                &format!("contains forbidden character: {ch:?}"),
            ));
        }
    }

    // Catches platform prefixes such as `C:` that survive the checks above.
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid(name, "must be a single path component")),
    }
}

fn invalid(name: &str, reason: &str) -> RawError {
    RawError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_simple_names() {
        assert!(validate_file_name("eggs").is_ok());
        assert!(validate_file_name("spam.txt").is_ok());
        assert!(validate_file_name("backup-20140501.tar.gz").is_ok());
        assert!(validate_file_name("has space").is_ok());
        assert!(validate_file_name(".hidden").is_ok());
        assert!(validate_file_name("a..b").is_ok());
    }

    #[test]
    fn reject_empty_name() {
        assert!(validate_file_name("").is_err());
    }

    #[test]
    fn reject_directory_references() {
        assert!(validate_file_name(".").is_err());
        assert!(validate_file_name("..").is_err());
    }

    #[test]
    fn reject_traversal() {
        assert!(validate_file_name("../eggs").is_err());
        assert!(validate_file_name("a/../../eggs").is_err());
        assert!(validate_file_name("..\\eggs").is_err());
    }

    #[test]
    fn reject_absolute_paths() {
        assert!(validate_file_name("/etc/passwd").is_err());
        assert!(validate_file_name("\\windows").is_err());
    }

    #[test]
    fn reject_nested_names() {
        assert!(validate_file_name("sub/eggs").is_err());
        assert!(validate_file_name("eggs/").is_err());
    }

    #[test]
    fn reject_nul() {
        assert!(validate_file_name("eg\0gs").is_err());
    }

    #[test]
    fn error_carries_name_and_reason() {
        match validate_file_name("../eggs") {
            Err(RawError::InvalidName { name, reason }) => {
                assert_eq!(name, "../eggs");
                assert!(reason.contains("'/'"));
            }
            other => panic!("expected InvalidName, got {other:?}"),
        }
    }
}
