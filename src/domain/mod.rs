pub mod config;
pub mod error;
pub mod layout;
pub mod rewrite;

pub use config::{MirrorConfig, PROJECT_DIR_ENV, WriteMode};
pub use error::AppError;
pub use layout::{MirrorLayout, MirrorPaths};
pub use rewrite::{ImportRewriter, Rewrite};
