use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{NoteStore, StoreError, StoreResult};

/// Notes on the local filesystem, addressed relative to a vault root.
#[derive(Debug, Clone)]
pub struct FsNoteStore {
    root: PathBuf,
}

impl FsNoteStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute path of a vault-relative note path.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) }
    }
}

fn io_error(path: &Path, source: io::Error) -> StoreError {
    if source.kind() == io::ErrorKind::NotFound {
        StoreError::NotFound(path.to_path_buf())
    } else {
        StoreError::Io { path: path.to_path_buf(), source }
    }
}

impl NoteStore for FsNoteStore {
    fn read(&self, path: &Path) -> StoreResult<String> {
        let full = self.resolve(path);
        fs::read_to_string(&full).map_err(|e| io_error(&full, e))
    }

    fn write(&self, path: &Path, content: &str) -> StoreResult<()> {
        let full = self.resolve(path);
        let parent = full.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;

        // Write beside the target and rename over it so readers never see
        // a half-written note.
        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| io_error(parent, e))?;
        tmp.write_all(content.as_bytes()).map_err(|e| io_error(&full, e))?;

        // The temp file is private; an existing note keeps its own mode.
        if let Ok(meta) = fs::metadata(&full) {
            tmp.as_file().set_permissions(meta.permissions()).map_err(|e| io_error(&full, e))?;
        }
        tmp.persist(&full).map_err(|e| io_error(&full, e.error))?;

        debug!(path = %full.display(), bytes = content.len(), "wrote note");
        Ok(())
    }

    fn append(&self, path: &Path, text: &str) -> StoreResult<()> {
        let full = self.resolve(path);
        let mut file =
            OpenOptions::new().append(true).open(&full).map_err(|e| io_error(&full, e))?;
        file.write_all(text.as_bytes()).map_err(|e| io_error(&full, e))?;

        debug!(path = %full.display(), bytes = text.len(), "appended to note");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }
}
