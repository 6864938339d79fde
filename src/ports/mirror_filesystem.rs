//! Filesystem operations needed by the mirror builder.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, WriteMode};

/// Counts reported by a recursive copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    pub directories: usize,
    pub files: usize,
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_file: bool,
}

/// Port for the filesystem the mirror is built on.
pub trait MirrorFilesystem {
    /// Whether `path` references an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` references an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Resolve symlinks and relative components into an absolute path.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, AppError>;

    /// Recursively copy `from` into `to`, merging with whatever `to` already holds.
    ///
    /// Same-named files are overwritten; files only present under `to` are kept.
    fn copy_tree(&self, from: &Path, to: &Path) -> Result<CopySummary, AppError>;

    /// List the immediate children of `path` in filesystem order.
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, AppError>;

    /// Read `path` as text and hand it to `edit`.
    ///
    /// When `edit` returns new content it replaces the file using `mode`;
    /// `None` leaves the file untouched. Returns whether a write happened.
    fn update_file(
        &self,
        path: &Path,
        mode: WriteMode,
        edit: &mut dyn FnMut(&str) -> Option<String>,
    ) -> Result<bool, AppError>;
}
