use serde::Serialize;
use thiserror::Error;

/// A section address such as `## Journal`, split into level and title
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeadingSpec {
    /// The heading level (1-6)
    pub level: u8,
    /// The heading title, trimmed and never empty
    pub title: String,
}

/// A heading as reported by the outline indexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingOutlineEntry {
    /// The heading level (1-6)
    pub level: u8,
    /// The heading text content
    pub title: String,
    /// Byte offset of the first character of the heading line
    pub start_offset: usize,
    /// Byte offset where the heading line ends (its newline, or EOF)
    pub end_offset: usize,
}

/// A list item as reported by the outline indexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItemEntry {
    /// Byte offset of the bullet marker
    pub start_offset: usize,
    /// Byte offset where the item ends
    pub end_offset: usize,
    /// Checkbox mark for task items (`' '`, `'x'`, ...), `None` for plain bullets
    pub task: Option<char>,
}

/// A fenced code block, opening fence through closing fence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeSectionEntry {
    pub start_offset: usize,
    pub end_offset: usize,
}

/// Structural index of a document, ordered by appearance.
///
/// The outline is an immutable snapshot: the engine reads it but never
/// rebuilds or mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outline {
    pub headings: Vec<HeadingOutlineEntry>,
    pub list_items: Vec<ListItemEntry>,
    pub code_sections: Vec<CodeSectionEntry>,
}

/// Byte range of a section body, heading line excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    /// First byte after the heading line
    pub section_start: usize,
    /// Next same-or-shallower heading, end delimiter, or EOF
    pub section_end: usize,
}

impl SectionRange {
    /// Slice the section body out of the document it was computed from
    pub fn body<'a>(&self, content: &'a str) -> &'a str {
        &content[self.section_start..self.section_end]
    }

    /// Whether a byte offset falls inside the section body
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.section_start && offset < self.section_end
    }
}

#[derive(Debug, Error)]
pub enum MarkdownAstError {
    #[error("invalid heading spec: '{0}' (expected e.g. '## Journal')")]
    InvalidHeadingSpec(String),
}
