use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{NoteStore, StoreError, StoreResult};
use crate::markdown_ast::{MarkdownEditor, Outline};

/// A mutation recorded by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Write { path: PathBuf, content: String },
    Append { path: PathBuf, text: String },
}

/// In-memory note store that records every mutation.
///
/// Outlines can be pinned per path to stand in for a host's own index.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: RefCell<HashMap<PathBuf, String>>,
    outlines: HashMap<PathBuf, Outline>,
    ops: RefCell<Vec<StoreOp>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.notes.borrow_mut().insert(path.into(), content.into());
        self
    }

    /// Serve `outline` for `path` instead of indexing the content.
    pub fn with_outline(mut self, path: impl Into<PathBuf>, outline: Outline) -> Self {
        self.outlines.insert(path.into(), outline);
        self
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.notes.borrow().get(path.as_ref()).cloned()
    }

    /// Mutations in the order they happened.
    pub fn ops(&self) -> Vec<StoreOp> {
        self.ops.borrow().clone()
    }
}

impl NoteStore for MemoryStore {
    fn read(&self, path: &Path) -> StoreResult<String> {
        self.content(path).ok_or_else(|| StoreError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> StoreResult<()> {
        self.notes.borrow_mut().insert(path.to_path_buf(), content.to_string());
        self.ops
            .borrow_mut()
            .push(StoreOp::Write { path: path.to_path_buf(), content: content.to_string() });
        Ok(())
    }

    fn append(&self, path: &Path, text: &str) -> StoreResult<()> {
        let mut notes = self.notes.borrow_mut();
        let note =
            notes.get_mut(path).ok_or_else(|| StoreError::NotFound(path.to_path_buf()))?;
        note.push_str(text);
        self.ops
            .borrow_mut()
            .push(StoreOp::Append { path: path.to_path_buf(), text: text.to_string() });
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.notes.borrow().contains_key(path)
    }

    fn outline(&self, path: &Path, content: &str) -> StoreResult<Outline> {
        Ok(self
            .outlines
            .get(path)
            .cloned()
            .unwrap_or_else(|| MarkdownEditor::outline(content)))
    }
}
