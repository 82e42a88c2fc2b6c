use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::format::TimestampFormat;
use super::insert::InsertBranch;

/// How a memo is serialized into the note, and how it is read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PostFormat {
    /// A fenced `fw` code block whose info string carries the timestamp
    #[default]
    Codeblock,
    /// A `- <timestamp> <message>` bullet
    List,
    /// A `<#...> <timestamp>` heading followed by the message
    Header { level: u8 },
}

/// One timestamped item recovered from a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The rendered timestamp as it appears in the note
    pub timestamp: String,
    pub message: String,
    /// Byte offset of the entry's first character in the note
    pub offset: usize,
}

/// An entry whose timestamp parsed with the configured format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub offset: usize,
}

/// A fenced code block read from a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Info-string language token (`fw` for memos)
    pub lang: String,
    /// Rest of the info string after the language
    pub meta: String,
    /// Lines between the fences
    pub code: String,
    pub offset: usize,
}

/// A heading and the text under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: String,
    pub body: String,
    pub title_offset: usize,
}

/// A checkbox list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// The character between the brackets (`' '` when open)
    pub mark: char,
    pub name: String,
    pub offset: usize,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.mark != ' '
    }
}

/// User settings driving where and how memos are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoSettings {
    pub post_format: PostFormat,
    /// Heading address of the target section; empty appends to end of file
    pub section: String,
    /// Early end-of-section marker; empty for none
    pub section_end: String,
    pub timestamp_format: TimestampFormat,
    /// Keep header-format posts one level below the target section heading
    pub auto_demote_heading: bool,
}

impl Default for MemoSettings {
    fn default() -> Self {
        Self {
            post_format: PostFormat::default(),
            section: String::new(),
            section_end: String::new(),
            timestamp_format: TimestampFormat::default(),
            auto_demote_heading: true,
        }
    }
}

/// What a successful post did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostReceipt {
    /// Vault-relative path of the daily note
    pub path: PathBuf,
    pub branch: InsertBranch,
    /// The daily note did not exist and was created empty first
    pub created_note: bool,
}
