//! Timestamped memos in daily notes.

pub mod extract;
pub mod format;
pub mod insert;
pub mod service;
pub mod types;

use thiserror::Error;

use crate::store::StoreError;

pub use extract::{extract_entries, extract_list_entries, extract_tasks, set_check_mark};
pub use format::{FormatError, TimestampFormat, effective_post_format, to_text};
pub use insert::{InsertBranch, InsertPlan, WriteOp, apply_plan, plan_insertion};
pub use service::MemoService;
pub use types::{CodeBlock, Entry, Header, MemoSettings, Post, PostFormat, PostReceipt, Task};

#[derive(Debug, Error)]
pub enum MemoError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("nothing to post: memo text is empty")]
    EmptyPost,

    #[error("no checkbox at or after offset {0}")]
    NoCheckbox(usize),
}

pub type MemoResult<T> = Result<T, MemoError>;
