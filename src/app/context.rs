use crate::domain::MirrorConfig;
use crate::ports::MirrorFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: MirrorFilesystem> {
    config: MirrorConfig,
    filesystem: F,
}

impl<F: MirrorFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(config: MirrorConfig, filesystem: F) -> Self {
        Self { config, filesystem }
    }

    /// Get the run configuration.
    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Get a reference to the filesystem adapter.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }
}
