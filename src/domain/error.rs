use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for spm-mirror operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Expected directory is missing.
    #[error("Couldn't find dir: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// Expected regular file is missing.
    #[error("Couldn't find file: {}", .0.display())]
    MissingFile(PathBuf),

    /// Mirror directory is the source directory, or one contains the other.
    #[error("Mirror dir {} overlaps source dir {}", .mirror_dir.display(), .source_dir.display())]
    OverlappingMirror { source_dir: PathBuf, mirror_dir: PathBuf },

    /// Recursive copy failed partway through.
    #[error("Failed to copy {path}: {details}")]
    CopyFailed { path: String, details: String },

    /// Import pattern could not be compiled.
    #[error("Invalid import pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
