use comrak::nodes::{LineColumn, NodeValue, Sourcepos};
use comrak::{Arena, Options, parse_document};

use crate::markdown_ast::types::*;

/// Byte offsets of every line start, used to turn comrak's
/// 1-based line/column source positions into byte offsets.
struct LineIndex {
    starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    fn new(input: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(input.match_indices('\n').map(|(i, _)| i + 1));
        Self { starts, len: input.len() }
    }

    /// Byte offset of a 1-based line/column position
    fn offset(&self, pos: LineColumn) -> usize {
        let line_start = self.line_start(pos.line);
        (line_start + pos.column.saturating_sub(1)).min(self.len)
    }

    fn line_start(&self, line: usize) -> usize {
        self.starts.get(line.saturating_sub(1)).copied().unwrap_or(self.len)
    }

    /// Byte offset of the newline terminating a 1-based line (or EOF)
    fn line_end(&self, line: usize) -> usize {
        match self.starts.get(line) {
            Some(&next) => next - 1,
            None => self.len,
        }
    }
}

/// Index the headings, list items and fenced code blocks of a document.
pub fn build_outline(input: &str) -> Outline {
    let arena = Arena::new();
    let options = default_options();
    let root = parse_document(&arena, input, &options);
    let lines = LineIndex::new(input);

    let mut outline = Outline::default();

    for node in root.descendants() {
        let sourcepos = node.data.borrow().sourcepos;
        match node.data.borrow().value {
            NodeValue::Heading(ref heading) => {
                let title = if heading.setext {
                    setext_title(input, &lines, sourcepos)
                } else {
                    let line = input
                        .get(lines.offset(sourcepos.start)..lines.line_end(sourcepos.start.line))
                        .unwrap_or_default();
                    atx_title(line)
                };
                outline.headings.push(HeadingOutlineEntry {
                    level: heading.level,
                    title,
                    start_offset: lines.line_start(sourcepos.start.line),
                    end_offset: lines.line_end(sourcepos.end.line),
                });
            }
            NodeValue::Item(_) => {
                outline.list_items.push(ListItemEntry {
                    start_offset: lines.offset(sourcepos.start),
                    end_offset: lines.line_end(sourcepos.end.line),
                    task: None,
                });
            }
            NodeValue::TaskItem(mark) => {
                outline.list_items.push(ListItemEntry {
                    start_offset: lines.offset(sourcepos.start),
                    end_offset: lines.line_end(sourcepos.end.line),
                    task: Some(mark.unwrap_or(' ')),
                });
            }
            NodeValue::CodeBlock(ref block) if block.fenced => {
                outline.code_sections.push(CodeSectionEntry {
                    start_offset: lines.offset(sourcepos.start),
                    end_offset: lines.line_end(sourcepos.end.line),
                });
            }
            _ => {}
        }
    }

    outline
}

/// Find all headings in the document
pub fn find_headings(input: &str) -> Vec<HeadingOutlineEntry> {
    build_outline(input).headings
}

// --- Internal helpers ---

fn default_options() -> Options<'static> {
    let mut options = Options::default();
    // Enable GFM extensions for compatibility
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.front_matter_delimiter = Some("---".to_string());

    options.parse.smart = false;

    options
}

/// Raw title of an ATX heading line: opening `#` run and closing sequence
/// removed, inline markup kept as written.
fn atx_title(line: &str) -> String {
    let rest = line.trim().trim_start_matches('#').trim_end();
    let unclosed = rest.trim_end_matches('#');
    // A closing sequence only counts when separated from the title
    let title = if unclosed.is_empty() || unclosed.ends_with([' ', '\t']) { unclosed } else { rest };
    title.trim().to_string()
}

/// Raw title of a setext heading: its text lines, underline excluded.
fn setext_title(input: &str, lines: &LineIndex, pos: Sourcepos) -> String {
    let first = pos.start.line;
    let last = pos.end.line.saturating_sub(1).max(first);

    (first..=last)
        .filter_map(|l| input.get(lines.line_start(l)..lines.line_end(l)))
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}
