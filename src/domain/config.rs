//! Run configuration for the mirror builder.

use std::path::PathBuf;

use crate::domain::MirrorLayout;

/// Environment variable naming the project root.
pub const PROJECT_DIR_ENV: &str = "PROJECT_DIR";

/// How rewritten headers are written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate the open file and write the new content into it.
    ///
    /// A crash between the two steps leaves the header empty.
    #[default]
    Truncate,
    /// Write a sibling temporary file and rename it over the header.
    Atomic,
}

/// Explicit configuration passed into the mirror command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorConfig {
    pub project_root: PathBuf,
    pub layout: MirrorLayout,
    pub write_mode: WriteMode,
}

impl MirrorConfig {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            layout: MirrorLayout::default(),
            write_mode: WriteMode::default(),
        }
    }

    /// Read the project root from `PROJECT_DIR`.
    ///
    /// An unset variable yields an empty root; the existence checks reject it.
    pub fn from_env() -> Self {
        let root = std::env::var_os(PROJECT_DIR_ENV).map(PathBuf::from).unwrap_or_default();
        Self::new(root)
    }

    pub fn with_layout(mut self, layout: MirrorLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }
}
