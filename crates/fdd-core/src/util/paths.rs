//! Path helpers for configured directories.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or platforms without a home directory,
/// are returned unchanged.
///
/// # Example
///
/// ```
/// use fdd_core::util::paths::expand_tilde;
///
/// let expanded = expand_tilde("~/site/docs");
/// assert!(expanded.ends_with("site/docs"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/docs"), home.join("docs"));
            assert_eq!(expand_tilde("~"), home);
        }
    }

    #[test]
    fn test_expand_tilde_absolute_unchanged() {
        assert_eq!(expand_tilde("/srv/docs"), PathBuf::from("/srv/docs"));
    }

    #[test]
    fn test_expand_tilde_relative_unchanged() {
        assert_eq!(expand_tilde("docs"), PathBuf::from("docs"));
        assert_eq!(expand_tilde("docs/~draft"), PathBuf::from("docs/~draft"));
    }
}
