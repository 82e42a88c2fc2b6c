//! Decide how new memo text lands in a note.
//!
//! Planning is pure: [`plan_insertion`] looks at the current content and
//! outline and describes a single write. [`apply_plan`] performs it.

use std::path::Path;

use tracing::debug;

use super::types::PostFormat;
use crate::markdown_ast::{MarkdownEditor, Outline, SectionLookup, SectionRange};
use crate::store::{NoteStore, StoreResult};

/// Which insertion rule was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertBranch {
    /// No usable heading spec; text appended to the end of the note
    AppendedToEnd,
    /// The section was missing and has been created at the end of the note
    CreatedSection,
    /// Text appended as a block at the end of the section
    AppendedBlock,
    /// Text merged into the section's list
    MergedList,
}

/// The single store mutation an insertion needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    Append { text: String },
    Overwrite { content: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertPlan {
    pub branch: InsertBranch,
    pub op: WriteOp,
}

/// Newlines needed after `s` so that what follows starts after exactly
/// one blank line.
pub fn separator_for(s: &str) -> &'static str {
    if s.ends_with("\n\n") {
        ""
    } else if s.ends_with('\n') {
        "\n"
    } else {
        "\n\n"
    }
}

/// Plan the insertion of `text` under the section addressed by `spec`.
///
/// # Arguments
/// * `content` - Current note content
/// * `outline` - Outline of `content`
/// * `spec` - Raw heading address; empty or malformed appends to the end
/// * `text` - Rendered memo text
/// * `format` - Post format; list posts are merged into the section's list
/// * `end_delimiter` - Early end-of-section marker; empty means none
pub fn plan_insertion(
    content: &str,
    outline: &Outline,
    spec: &str,
    text: &str,
    format: &PostFormat,
    end_delimiter: &str,
) -> InsertPlan {
    let plan = match MarkdownEditor::lookup(content, outline, spec, end_delimiter) {
        SectionLookup::NoSpec => InsertPlan {
            branch: InsertBranch::AppendedToEnd,
            op: WriteOp::Append { text: text.to_string() },
        },
        SectionLookup::NotFound(heading) => {
            let new_content = format!(
                "{content}{}{}\n\n{text}",
                separator_for(content),
                heading.heading_line()
            );
            InsertPlan {
                branch: InsertBranch::CreatedSection,
                op: WriteOp::Overwrite { content: new_content },
            }
        }
        SectionLookup::Found(_, range) => match format {
            PostFormat::List => InsertPlan {
                branch: InsertBranch::MergedList,
                op: WriteOp::Overwrite { content: merge_into_list(content, range, text) },
            },
            PostFormat::Codeblock | PostFormat::Header { .. } => {
                let (before, after) = content.split_at(range.section_end);
                InsertPlan {
                    branch: InsertBranch::AppendedBlock,
                    op: WriteOp::Overwrite {
                        content: format!("{before}{}{text}{after}", separator_for(before)),
                    },
                }
            }
        },
    };

    debug!(branch = ?plan.branch, spec, "planned insertion");
    plan
}

/// Add a single-line entry to the list in a section body.
///
/// The entry goes right after the last line starting with `-`, or replaces
/// it when that line is an empty `-` placeholder. A body without list lines
/// gets the entry as its first line.
fn merge_into_list(content: &str, range: SectionRange, text: &str) -> String {
    let body = range.body(content);
    let entry = text.trim();

    let mut lines: Vec<&str> = body.split('\n').collect();
    let last_list_line = lines.iter().rposition(|l| l.trim().starts_with('-'));

    let new_body = match last_list_line {
        Some(i) if is_placeholder(lines[i]) => {
            lines[i] = entry;
            lines.join("\n")
        }
        Some(i) => {
            lines.insert(i + 1, entry);
            lines.join("\n")
        }
        None => {
            let lead = if body.starts_with('\n') { "" } else { "\n" };
            format!("{lead}{entry}\n{body}")
        }
    };

    format!(
        "{}{new_body}{}",
        &content[..range.section_start],
        &content[range.section_end..]
    )
}

/// A bare `-` bullet left by a template to keep the list recognisable
fn is_placeholder(line: &str) -> bool {
    line.trim() == "-"
}

/// Perform a planned insertion with exactly one store call.
pub fn apply_plan<S: NoteStore + ?Sized>(
    store: &S,
    path: &Path,
    plan: &InsertPlan,
) -> StoreResult<()> {
    match &plan.op {
        WriteOp::Append { text } => store.append(path, text),
        WriteOp::Overwrite { content } => store.write(path, content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown_ast::HeadingOutlineEntry;

    fn outline_with(level: u8, title: &str, start: usize, end: usize) -> Outline {
        Outline {
            headings: vec![HeadingOutlineEntry {
                level,
                title: title.into(),
                start_offset: start,
                end_offset: end,
            }],
            ..Outline::default()
        }
    }

    fn overwritten(plan: InsertPlan) -> String {
        match plan.op {
            WriteOp::Overwrite { content } => content,
            WriteOp::Append { .. } => panic!("expected overwrite, got {plan:?}"),
        }
    }

    #[test]
    fn separator_normalizes_to_one_blank_line() {
        assert_eq!(separator_for("a\n\n"), "");
        assert_eq!(separator_for("a\n"), "\n");
        assert_eq!(separator_for("a"), "\n\n");
        assert_eq!(separator_for(""), "\n\n");
    }

    #[test]
    fn invalid_spec_appends_verbatim() {
        let plan = plan_insertion("x", &Outline::default(), "Journal", "\n- t\n", &PostFormat::List, "");
        assert_eq!(plan.branch, InsertBranch::AppendedToEnd);
        assert_eq!(plan.op, WriteOp::Append { text: "\n- t\n".into() });
    }

    #[test]
    fn placeholder_bullet_is_replaced() {
        let content = "## H\n- \n";
        let plan = plan_insertion(
            content,
            &outline_with(2, "H", 0, 4),
            "## H",
            "\n- 2024 msg\n",
            &PostFormat::List,
            "",
        );
        assert_eq!(plan.branch, InsertBranch::MergedList);
        assert_eq!(overwritten(plan), "## H\n- 2024 msg\n");
    }

    #[test]
    fn list_entry_goes_before_delimiter() {
        let content = "## H\n- a\n---\n";
        let plan = plan_insertion(
            content,
            &outline_with(2, "H", 0, 4),
            "## H",
            "\n- b\n",
            &PostFormat::List,
            "---",
        );
        assert_eq!(overwritten(plan), "## H\n- a\n- b\n---\n");
    }

    #[test]
    fn list_entry_follows_last_bullet_not_trailing_text() {
        let content = "## H\n- a\n  - nested\nnote\n\n## I\n";
        let plan = plan_insertion(
            content,
            &outline_with(2, "H", 0, 4),
            "## H",
            "- b",
            &PostFormat::List,
            "",
        );
        assert_eq!(overwritten(plan), "## H\n- a\n  - nested\n- b\nnote\n\n## I\n");
    }

    #[test]
    fn list_entry_leads_a_body_without_bullets() {
        let content = "## H\nprose\n";
        let plan =
            plan_insertion(content, &outline_with(2, "H", 0, 4), "## H", "- b", &PostFormat::List, "");
        assert_eq!(overwritten(plan), "## H\n\n- b\nprose\n");

        let content = "## H\n\nprose\n";
        let plan =
            plan_insertion(content, &outline_with(2, "H", 0, 4), "## H", "- b", &PostFormat::List, "");
        assert_eq!(overwritten(plan), "## H\n- b\n\nprose\n");
    }

    #[test]
    fn block_is_appended_at_section_end() {
        let content = "## H\nold\n## I\n";
        let mut outline = outline_with(2, "H", 0, 4);
        outline.headings.push(HeadingOutlineEntry {
            level: 2,
            title: "I".into(),
            start_offset: 9,
            end_offset: 13,
        });

        let plan =
            plan_insertion(content, &outline, "## H", "new\n", &PostFormat::Codeblock, "");
        assert_eq!(plan.branch, InsertBranch::AppendedBlock);
        assert_eq!(overwritten(plan), "## H\nold\n\nnew\n## I\n");
    }

    #[test]
    fn missing_section_is_created_after_one_blank_line() {
        for content in ["intro", "intro\n", "intro\n\n"] {
            let plan = plan_insertion(
                content,
                &Outline::default(),
                "## Missing",
                "text\n",
                &PostFormat::Header { level: 3 },
                "",
            );
            assert_eq!(plan.branch, InsertBranch::CreatedSection);
            assert_eq!(overwritten(plan), "intro\n\n## Missing\n\ntext\n");
        }
    }
}
