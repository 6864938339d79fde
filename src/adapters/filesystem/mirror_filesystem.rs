//! `MirrorFilesystem` implementation for `LocalFilesystem`.

use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::domain::{AppError, WriteMode};
use crate::ports::{CopySummary, DirEntry, MirrorFilesystem};

use super::LocalFilesystem;

impl MirrorFilesystem for LocalFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, AppError> {
        fs::canonicalize(path).map_err(AppError::from)
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> Result<CopySummary, AppError> {
        let mut summary = CopySummary::default();

        for entry in WalkDir::new(from).follow_links(true) {
            let entry = entry.map_err(|err| AppError::CopyFailed {
                path: err.path().unwrap_or(from).display().to_string(),
                details: err.to_string(),
            })?;
            let relative = entry.path().strip_prefix(from).map_err(|err| AppError::CopyFailed {
                path: entry.path().display().to_string(),
                details: err.to_string(),
            })?;
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)?;
                if entry.depth() > 0 {
                    summary.directories += 1;
                }
            } else {
                fs::copy(entry.path(), &target).map_err(|err| AppError::CopyFailed {
                    path: entry.path().display().to_string(),
                    details: err.to_string(),
                })?;
                summary.files += 1;
            }
        }

        Ok(summary)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, AppError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_file: entry.path().is_file(),
            });
        }
        Ok(entries)
    }

    fn update_file(
        &self,
        path: &Path,
        mode: WriteMode,
        edit: &mut dyn FnMut(&str) -> Option<String>,
    ) -> Result<bool, AppError> {
        let mut file = OpenOptions::new().read(true).write(true).open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let Some(updated) = edit(&contents) else {
            return Ok(false);
        };

        match mode {
            WriteMode::Truncate => {
                file.seek(SeekFrom::Start(0))?;
                file.set_len(0)?;
                file.write_all(updated.as_bytes())?;
                file.flush()?;
            }
            WriteMode::Atomic => {
                let permissions = file.metadata()?.permissions();
                drop(file);
                let dir = path
                    .parent()
                    .filter(|parent| !parent.as_os_str().is_empty())
                    .unwrap_or(Path::new("."));
                let mut temp = NamedTempFile::new_in(dir)?;
                temp.write_all(updated.as_bytes())?;
                temp.as_file().sync_all()?;
                fs::set_permissions(temp.path(), permissions)?;
                temp.persist(path).map_err(|err| AppError::Io(err.error))?;
            }
        }

        Ok(true)
    }
}
