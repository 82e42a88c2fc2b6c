use crate::markdown_ast::types::*;
use crate::markdown_ast::{comrak, heading, section};

/// A heading address resolved against a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionLookup {
    /// The address string is empty or not a heading spec
    NoSpec,
    /// The heading spec is valid but no heading matches it
    NotFound(HeadingSpec),
    /// The section exists
    Found(HeadingSpec, SectionRange),
}

/// High-level API for Markdown section operations
pub struct MarkdownEditor;

impl MarkdownEditor {
    /// Resolve a raw heading address (e.g. `"## Journal"`) to a section.
    ///
    /// # Arguments
    /// * `content` - The source Markdown document
    /// * `outline` - The document's outline snapshot
    /// * `spec` - Raw, unparsed heading address
    /// * `end_delimiter` - Optional early end-of-section marker; empty means none
    pub fn lookup(
        content: &str,
        outline: &Outline,
        spec: &str,
        end_delimiter: &str,
    ) -> SectionLookup {
        let Some(parsed) = heading::parse_heading_spec(spec) else {
            return SectionLookup::NoSpec;
        };

        match section::locate_section(content, outline, &parsed, Some(end_delimiter)) {
            Some(range) => SectionLookup::Found(parsed, range),
            None => SectionLookup::NotFound(parsed),
        }
    }

    /// Index a document's headings, list items and fenced code blocks
    pub fn outline(input: &str) -> Outline {
        comrak::build_outline(input)
    }

    /// Find all headings in a document
    ///
    /// Useful for diagnostics when a configured section cannot be found
    pub fn find_headings(input: &str) -> Vec<HeadingOutlineEntry> {
        comrak::find_headings(input)
    }
}
