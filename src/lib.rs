//! spm-mirror: Mirror library sources into an SPM-consumable tree and fix up header imports.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use app::api::{mirror, mirror_from_env};
pub use app::commands::mirror::{HeaderRewrite, MirrorOutcome};
pub use domain::{AppError, ImportRewriter, MirrorConfig, MirrorLayout, MirrorPaths, WriteMode};
