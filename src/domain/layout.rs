//! Fixed filesystem layout the mirror builder operates on.

use std::path::{Path, PathBuf};

/// Library whose angle-bracket imports are rewritten.
pub const LIBRARY_NAME: &str = "JDStatusBarNotification";
/// Source directory, relative to the project root.
pub const SOURCE_DIR: &str = "JDStatusBarNotification";
/// Anchor file, relative to the source directory. Only its existence is checked.
pub const ANCHOR_FILE: &str = "Public/NotificationPresenter.swift";
/// Mirror directory, relative to the project root.
pub const MIRROR_DIR: &str = "spm_sources";
/// Subdirectory of the mirror scanned for headers.
pub const PUBLIC_DIR: &str = "Public";
/// Header file extension (case-sensitive, without the dot).
pub const HEADER_EXTENSION: &str = "h";

/// Names that make up the mirror layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorLayout {
    pub library_name: String,
    pub source_dir: String,
    pub anchor_file: String,
    pub mirror_dir: String,
    pub public_dir: String,
    pub header_extension: String,
}

impl Default for MirrorLayout {
    fn default() -> Self {
        Self {
            library_name: LIBRARY_NAME.to_string(),
            source_dir: SOURCE_DIR.to_string(),
            anchor_file: ANCHOR_FILE.to_string(),
            mirror_dir: MIRROR_DIR.to_string(),
            public_dir: PUBLIC_DIR.to_string(),
            header_extension: HEADER_EXTENSION.to_string(),
        }
    }
}

impl MirrorLayout {
    /// Override the mirror directory name.
    pub fn with_mirror_dir(mut self, name: impl Into<String>) -> Self {
        self.mirror_dir = name.into();
        self
    }

    /// Whether `file_name` carries the header extension.
    ///
    /// Mirrors `os.path.splitext` semantics: a leading dot does not start an
    /// extension, so `.h` alone is not a header.
    pub fn is_header_name(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.header_extension)
    }
}

/// Absolute paths derived from a project root and a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorPaths {
    pub source_dir: PathBuf,
    pub anchor_file: PathBuf,
    pub mirror_dir: PathBuf,
    pub mirror_public_dir: PathBuf,
}

impl MirrorPaths {
    pub fn resolve(root: &Path, layout: &MirrorLayout) -> Self {
        let source_dir = root.join(&layout.source_dir);
        let anchor_file = source_dir.join(&layout.anchor_file);
        let mirror_dir = root.join(&layout.mirror_dir);
        let mirror_public_dir = mirror_dir.join(&layout.public_dir);
        Self { source_dir, anchor_file, mirror_dir, mirror_public_dir }
    }
}
