//! Async file utilities.
//!
//! Content lives in a flat directory, one file per document, so discovery is
//! a single non-recursive `read_dir` pass.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{Error, Result};

/// Options for listing files in a content directory.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// File extension to match (without dot), e.g., "md"
    pub extension: Option<String>,
    /// Whether dotfiles (".draft.md") are listed
    pub include_hidden: bool,
}

impl FindOptions {
    /// Options for finding markdown files.
    pub fn markdown() -> Self {
        Self::with_extension("md")
    }

    /// Options for files with the given extension (leading dot optional).
    pub fn with_extension(ext: &str) -> Self {
        Self {
            extension: Some(ext.trim_start_matches('.').to_string()),
            include_hidden: false,
        }
    }

    /// List dotfiles too.
    pub fn include_hidden(mut self) -> Self {
        self.include_hidden = true;
        self
    }

    fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if !self.include_hidden && name.starts_with('.') {
            return false;
        }
        match &self.extension {
            Some(ext) => path.extension().and_then(|e| e.to_str()) == Some(ext.as_str()),
            None => true,
        }
    }
}

/// Information about a discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// File stem (filename without extension).
    pub stem: String,
}

/// List the files directly inside `dir` that match `options`.
///
/// Subdirectories are skipped, not descended into. Results are sorted by
/// stem so that callers see the same order on every platform.
///
/// # Errors
///
/// Returns [`Error::Io`] tagged with `dir` if the directory cannot be read.
pub async fn list_files(dir: &Path, options: &FindOptions) -> Result<Vec<FileInfo>> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| Error::io_with_path(e, dir))?;
    let mut files = Vec::new();

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, dir))?
    {
        let path = entry.path();
        let is_file = entry
            .file_type()
            .await
            .map(|t| t.is_file())
            .unwrap_or(false);
        if !is_file || !options.matches(&path) {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            log::debug!("Skipping non UTF-8 filename {}", path.display());
            continue;
        };

        files.push(FileInfo {
            stem: stem.to_string(),
            path,
        });
    }

    files.sort_by(|a, b| a.stem.cmp(&b.stem));
    Ok(files)
}

/// Read a file's contents as a string.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}
