//! API Facade for the application.
//!
//! Wires the local filesystem adapter into the mirror command.

use crate::adapters::LocalFilesystem;
use crate::app::{AppContext, commands::mirror};
use crate::domain::{AppError, MirrorConfig};

pub use crate::app::commands::mirror::{HeaderRewrite, MirrorOutcome};

/// Mirror sources and fix header imports for an explicit configuration.
pub fn mirror(config: MirrorConfig) -> Result<MirrorOutcome, AppError> {
    let ctx = AppContext::new(config, LocalFilesystem::new());
    mirror::execute(&ctx)
}

/// Mirror sources using the project root named by `PROJECT_DIR`.
pub fn mirror_from_env() -> Result<MirrorOutcome, AppError> {
    mirror(MirrorConfig::from_env())
}
