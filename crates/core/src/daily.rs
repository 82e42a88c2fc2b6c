//! Daily note location.
//!
//! Daily notes live at `<dir>/<date formatted with file_format>.md`,
//! relative to the vault root.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::memo::format::{FormatError, validate_date_strftime};
use crate::store::{NoteStore, StoreResult};

const DEFAULT_FILE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyNotes {
    dir: PathBuf,
    file_format: String,
}

impl DailyNotes {
    /// `dir` is vault-relative; an empty `dir` puts notes at the vault root.
    pub fn new(dir: impl Into<PathBuf>, file_format: impl Into<String>) -> Result<Self, FormatError> {
        let file_format = file_format.into();
        validate_date_strftime(&file_format)?;
        Ok(Self { dir: dir.into(), file_format })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_format(&self) -> &str {
        &self.file_format
    }

    /// Vault-relative path of the note for `date`.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.md", date.format(&self.file_format)))
    }

    /// Create an empty note for `date` unless one exists.
    ///
    /// Returns whether a note was created.
    pub fn ensure<S: NoteStore + ?Sized>(&self, store: &S, date: NaiveDate) -> StoreResult<bool> {
        let path = self.path_for(date);
        if store.exists(&path) {
            return Ok(false);
        }

        store.write(&path, "")?;
        info!(path = %path.display(), "created daily note");
        Ok(true)
    }
}

impl Default for DailyNotes {
    fn default() -> Self {
        Self { dir: PathBuf::new(), file_format: DEFAULT_FILE_FORMAT.to_string() }
    }
}
