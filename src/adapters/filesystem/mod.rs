//! Local filesystem adapter for the `MirrorFilesystem` port.

mod mirror_filesystem;

/// Filesystem adapter backed by `std::fs`, `walkdir`, and `tempfile`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}
