mod mirror_filesystem;

pub use mirror_filesystem::{CopySummary, DirEntry, MirrorFilesystem};
