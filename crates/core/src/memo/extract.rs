//! Read memos and tasks back out of a note.

use std::sync::LazyLock;

use regex::Regex;

use super::format::{MEMO_CODE_LANG, TimestampFormat};
use super::types::{CodeBlock, Entry, Header, PostFormat, Task};
use crate::markdown_ast::{MarkdownEditor, Outline, SectionLookup, SectionRange};

const LIST_PREFIX: &str = "- ";

static TASK_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*+]|\d+[.)])\s+\[.\]\s*").unwrap());

/// Split the list entries of a section into timestamp and message.
///
/// Each line starting with `"- "` yields an entry whose timestamp is the
/// next `timestamp_width` characters. Offsets point at the line start in
/// `content`. Returns `None` when `spec` is not a heading spec or the
/// section does not exist.
pub fn extract_list_entries(
    content: &str,
    outline: &Outline,
    spec: &str,
    end_delimiter: &str,
    timestamp_width: usize,
) -> Option<Vec<Entry>> {
    let SectionLookup::Found(_, range) =
        MarkdownEditor::lookup(content, outline, spec, end_delimiter)
    else {
        return None;
    };

    let mut entries = Vec::new();
    let mut offset = range.section_start;

    for line in range.body(content).split('\n') {
        if let Some(rest) = line.strip_prefix(LIST_PREFIX) {
            let split = rest.char_indices().nth(timestamp_width).map_or(rest.len(), |(i, _)| i);
            let (timestamp, message) = rest.split_at(split);
            entries.push(Entry {
                timestamp: timestamp.to_string(),
                message: message.trim_start().to_string(),
                offset,
            });
        }
        offset += line.len() + 1;
    }

    Some(entries)
}

/// Fenced code blocks starting inside `range`.
pub fn extract_code_blocks(content: &str, outline: &Outline, range: SectionRange) -> Vec<CodeBlock> {
    outline
        .code_sections
        .iter()
        .filter(|cs| range.contains(cs.start_offset))
        .map(|cs| {
            let block = &content[cs.start_offset..cs.end_offset];
            let lines: Vec<&str> = block.split('\n').collect();

            let info = lines[0].trim_start_matches(['`', '~']);
            let (lang, meta) = info.split_once(' ').unwrap_or((info, ""));

            let closed = lines.len() > 1 && is_fence(lines[lines.len() - 1]);
            let inner_end = if closed { lines.len() - 1 } else { lines.len() };
            let code = lines.get(1..inner_end).map(|l| l.join("\n")).unwrap_or_default();

            CodeBlock {
                lang: lang.trim().to_string(),
                meta: meta.trim().to_string(),
                code,
                offset: cs.start_offset,
            }
        })
        .collect()
}

fn is_fence(line: &str) -> bool {
    let t = line.trim();
    t.starts_with("```") || t.starts_with("~~~")
}

/// Headings of exactly `level` inside `range`, each with the text up to the
/// next heading of the same or a shallower level.
pub fn extract_headers(
    content: &str,
    outline: &Outline,
    level: u8,
    range: SectionRange,
) -> Vec<Header> {
    let headings = &outline.headings;

    headings
        .iter()
        .enumerate()
        .filter(|(_, h)| h.level == level && range.contains(h.start_offset))
        .map(|(i, h)| {
            let body_start = (h.end_offset + 1).min(range.section_end);
            let body_end = headings[i + 1..]
                .iter()
                .find(|next| next.level <= level)
                .map_or(range.section_end, |next| next.start_offset)
                .clamp(body_start, range.section_end);

            Header {
                title: h.title.clone(),
                body: content[body_start..body_end].trim().to_string(),
                title_offset: h.start_offset,
            }
        })
        .collect()
}

/// Read memo entries back using the same format they were written with.
///
/// List entries live in the addressed section and need it to exist.
/// Code block and header entries are collected from the whole note.
pub fn extract_entries(
    content: &str,
    outline: &Outline,
    spec: &str,
    end_delimiter: &str,
    format: &PostFormat,
    timestamp_format: &TimestampFormat,
) -> Option<Vec<Entry>> {
    let whole = SectionRange { section_start: 0, section_end: content.len() };

    match format {
        PostFormat::List => {
            extract_list_entries(content, outline, spec, end_delimiter, timestamp_format.width())
        }
        PostFormat::Codeblock => Some(
            extract_code_blocks(content, outline, whole)
                .into_iter()
                .filter(|b| b.lang == MEMO_CODE_LANG)
                .map(|b| Entry { timestamp: b.meta, message: b.code, offset: b.offset })
                .collect(),
        ),
        PostFormat::Header { level } => Some(
            extract_headers(content, outline, *level, whole)
                .into_iter()
                .map(|h| Entry { timestamp: h.title, message: h.body, offset: h.title_offset })
                .collect(),
        ),
    }
}

/// Checkbox list items, in document order.
pub fn extract_tasks(content: &str, outline: &Outline) -> Vec<Task> {
    outline
        .list_items
        .iter()
        .filter_map(|item| {
            let mark = item.task?;
            let rest = content.get(item.start_offset..)?;
            let line = rest.split('\n').next().unwrap_or_default();
            let name = TASK_PREFIX_RE.replace(line, "").trim_end().to_string();
            Some(Task { mark, name, offset: item.start_offset })
        })
        .collect()
}

/// Set the checkbox mark of the task starting at `offset`.
///
/// Replaces the character after the first `[` at or after `offset`.
/// Returns `None` when `offset` is outside the note or no checkbox follows.
pub fn set_check_mark(content: &str, mark: char, offset: usize) -> Option<String> {
    let bracket = content.get(offset..)?.find('[')?;
    let mark_start = offset + bracket + 1;
    let old = content[mark_start..].chars().next()?;

    Some(format!(
        "{}{mark}{}",
        &content[..mark_start],
        &content[mark_start + old.len_utf8()..]
    ))
}
