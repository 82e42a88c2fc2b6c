//! File access for daily notes.
//!
//! The memo engine never touches the filesystem directly: every mutating
//! operation is read, compute, then exactly one `write` or `append` through
//! a [`NoteStore`].

pub mod fs;
pub mod memory;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::markdown_ast::{MarkdownEditor, Outline};

pub use fs::FsNoteStore;
pub use memory::{MemoryStore, StoreOp};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("note not found: {0}")]
    NotFound(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Host storage for note files.
pub trait NoteStore {
    /// Full current content of a note.
    ///
    /// # Errors
    /// `StoreError::NotFound` when the note does not exist.
    fn read(&self, path: &Path) -> StoreResult<String>;

    /// Replace the full content of a note in one step.
    fn write(&self, path: &Path, content: &str) -> StoreResult<()>;

    /// Append text to the end of an existing note.
    fn append(&self, path: &Path, text: &str) -> StoreResult<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Structural index of a note whose content was just read.
    ///
    /// Hosts that maintain their own index can override this; the default
    /// parses `content`.
    fn outline(&self, _path: &Path, content: &str) -> StoreResult<Outline> {
        Ok(MarkdownEditor::outline(content))
    }
}
