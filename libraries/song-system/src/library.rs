//! Media root enumeration

use song_core::{Result, SongError};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Directory of media files the default playlist is built from
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    /// Media root directory
    root: PathBuf,

    /// Extension of media files, without the dot (matched case-insensitively)
    extension: String,

    /// Maximum directory depth to traverse (1 = root only)
    max_depth: usize,
}

impl MediaLibrary {
    /// Create a library over `root` listing `*.extension` files directly in it
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into().trim_start_matches('.').to_lowercase(),
            max_depth: 1,
        }
    }

    /// Set maximum directory depth to traverse
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// List media files under the root, sorted by path
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(SongError::library(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(self.max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| is_media_file(path, &self.extension))
            .collect();

        files.sort();
        Ok(files)
    }

    /// Resolve a file name typed by the operator against the root
    ///
    /// The name is taken literally (no quoting or escaping). It must stay
    /// inside the root and name an existing file.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() {
            return Err(SongError::invalid_input("empty file name"));
        }

        let relative = Path::new(name);
        let escapes_root = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes_root {
            return Err(SongError::invalid_input(format!(
                "{} is not inside the music directory",
                name
            )));
        }

        let path = self.root.join(relative);
        if !path.is_file() {
            return Err(SongError::library(format!("{} not found", path.display())));
        }

        Ok(path)
    }

    /// Player URI for a local media file
    pub fn uri(path: &Path) -> String {
        format!("file://{}", path.display())
    }
}

/// Check if a file has the given media extension
pub fn is_media_file(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}
