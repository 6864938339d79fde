//! Mirror command: copy the source tree and fix up public header imports.

use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, ImportRewriter, MirrorLayout, MirrorPaths, WriteMode};
use crate::ports::{CopySummary, MirrorFilesystem};

/// Import rewrite result for one public header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRewrite {
    pub name: String,
    pub replacements: usize,
}

/// Result of a completed mirror run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorOutcome {
    pub copied: CopySummary,
    pub headers: Vec<HeaderRewrite>,
}

impl MirrorOutcome {
    /// Total imports rewritten across all headers.
    pub fn total_replacements(&self) -> usize {
        self.headers.iter().map(|h| h.replacements).sum()
    }

    /// Headers that were written back.
    pub fn rewritten(&self) -> impl Iterator<Item = &HeaderRewrite> {
        self.headers.iter().filter(|h| h.replacements > 0)
    }
}

pub fn execute<F: MirrorFilesystem>(ctx: &AppContext<F>) -> Result<MirrorOutcome, AppError> {
    let config = ctx.config();
    let fs = ctx.filesystem();
    let layout = &config.layout;

    println!("PROJECT_DIR: {}", config.project_root.display());

    let paths = MirrorPaths::resolve(&config.project_root, layout);
    checked_dir(fs, &paths.source_dir)?;
    checked_file(fs, &paths.anchor_file)?;
    checked_dir(fs, &paths.mirror_dir)?;
    checked_disjoint(fs, &paths.source_dir, &paths.mirror_dir)?;

    println!("Copying sources to: {}", layout.mirror_dir);
    let copied = fs.copy_tree(&paths.source_dir, &paths.mirror_dir)?;

    checked_dir(fs, &paths.mirror_public_dir)?;
    let headers = discover_headers(fs, &paths.mirror_public_dir, layout)?;
    println!("Found public headers: {:?}", headers);

    let rewriter = ImportRewriter::new(&layout.library_name)?;
    let mut results = Vec::with_capacity(headers.len());
    for name in headers {
        let path = paths.mirror_public_dir.join(&name);
        let replacements = rewrite_header(fs, &rewriter, &path, config.write_mode)?;
        if replacements > 0 {
            println!("replaced {} imports in: {}", replacements, name);
        }
        results.push(HeaderRewrite { name, replacements });
    }

    Ok(MirrorOutcome { copied, headers: results })
}

/// Fail unless `path` is an existing directory.
pub fn checked_dir<F: MirrorFilesystem>(fs: &F, path: &Path) -> Result<(), AppError> {
    if !fs.is_dir(path) {
        return Err(AppError::MissingDirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Fail unless `path` is an existing regular file.
pub fn checked_file<F: MirrorFilesystem>(fs: &F, path: &Path) -> Result<(), AppError> {
    if !fs.is_file(path) {
        return Err(AppError::MissingFile(path.to_path_buf()));
    }
    Ok(())
}

/// Fail when copying `source` into `mirror` would write into the source tree.
pub fn checked_disjoint<F: MirrorFilesystem>(
    fs: &F,
    source: &Path,
    mirror: &Path,
) -> Result<(), AppError> {
    let source_dir = fs.canonicalize(source)?;
    let mirror_dir = fs.canonicalize(mirror)?;
    if mirror_dir.starts_with(&source_dir) || source_dir.starts_with(&mirror_dir) {
        return Err(AppError::OverlappingMirror { source_dir, mirror_dir });
    }
    Ok(())
}

/// Names of the header files directly inside `public_dir`, in listing order.
pub fn discover_headers<F: MirrorFilesystem>(
    fs: &F,
    public_dir: &Path,
    layout: &MirrorLayout,
) -> Result<Vec<String>, AppError> {
    let headers = fs
        .list_dir(public_dir)?
        .into_iter()
        .filter(|entry| entry.is_file && layout.is_header_name(&entry.name))
        .map(|entry| entry.name)
        .collect();
    Ok(headers)
}

/// Rewrite the imports of one header, writing only when something matched.
pub fn rewrite_header<F: MirrorFilesystem>(
    fs: &F,
    rewriter: &ImportRewriter,
    path: &Path,
    mode: WriteMode,
) -> Result<usize, AppError> {
    let mut replacements = 0;
    fs.update_file(path, mode, &mut |contents: &str| {
        let rewrite = rewriter.rewrite(contents);
        replacements = rewrite.replacements;
        rewrite.changed().then(|| rewrite.content.into_owned())
    })?;
    Ok(replacements)
}
