use tracing::debug;

use crate::markdown_ast::types::{HeadingSpec, Outline, SectionRange};

/// Find the body byte range of the section addressed by `spec`.
///
/// The first outline heading with the same level and title wins. The section
/// runs from the byte after the heading line up to the next heading of the
/// same or a shallower level (or EOF). A non-empty `end_delimiter` found
/// inside that range cuts it short; it never extends it.
///
/// Returns `None` when no heading matches.
pub fn locate_section(
    content: &str,
    outline: &Outline,
    spec: &HeadingSpec,
    end_delimiter: Option<&str>,
) -> Option<SectionRange> {
    let headings = &outline.headings;
    let index = headings.iter().position(|h| spec.matches(h.level, &h.title))?;
    let matched = &headings[index];

    let next_heading_pos = headings[index + 1..]
        .iter()
        .find(|h| h.level <= matched.level)
        .map_or(content.len(), |h| h.start_offset);

    // The heading line normally ends with a newline; a heading on the last
    // line without one yields an empty body at EOF.
    let section_start = (matched.end_offset + 1).min(content.len());
    let mut section_end = next_heading_pos.clamp(section_start, content.len());

    if let Some(delim) = end_delimiter.filter(|d| !d.is_empty())
        && let Some(found) = content[section_start..].find(delim)
    {
        let delim_pos = section_start + found;
        if delim_pos < section_end {
            section_end = delim_pos;
        }
    }

    debug!(
        heading = %spec,
        section_start,
        section_end,
        "located section"
    );

    Some(SectionRange { section_start, section_end })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown_ast::types::HeadingOutlineEntry;

    fn heading(level: u8, title: &str, start: usize, end: usize) -> HeadingOutlineEntry {
        HeadingOutlineEntry { level, title: title.into(), start_offset: start, end_offset: end }
    }

    fn outline(headings: Vec<HeadingOutlineEntry>) -> Outline {
        Outline { headings, ..Outline::default() }
    }

    #[test]
    fn section_runs_to_next_same_level_heading() {
        let content = "## A\nbody\n## B\nother\n";
        let o = outline(vec![heading(2, "A", 0, 4), heading(2, "B", 10, 14)]);

        let range = locate_section(content, &o, &HeadingSpec::new(2, "A"), None).unwrap();
        assert_eq!(range, SectionRange { section_start: 5, section_end: 10 });
        assert_eq!(range.body(content), "body\n");
    }

    #[test]
    fn deeper_headings_stay_inside_the_section() {
        let content = "## A\n### sub\nx\n# Top\n";
        let o = outline(vec![
            heading(2, "A", 0, 4),
            heading(3, "sub", 5, 12),
            heading(1, "Top", 15, 20),
        ]);

        let range = locate_section(content, &o, &HeadingSpec::new(2, "A"), None).unwrap();
        assert_eq!(range.body(content), "### sub\nx\n");
    }

    #[test]
    fn last_section_runs_to_eof() {
        let content = "# T\n## A\nline\n";
        let o = outline(vec![heading(1, "T", 0, 3), heading(2, "A", 4, 8)]);

        let range = locate_section(content, &o, &HeadingSpec::new(2, "A"), None).unwrap();
        assert_eq!(range.section_end, content.len());
    }

    #[test]
    fn missing_heading_is_none() {
        let o = outline(vec![heading(2, "A", 0, 4)]);
        assert!(locate_section("## A\n", &o, &HeadingSpec::new(2, "B"), None).is_none());
        assert!(locate_section("## A\n", &o, &HeadingSpec::new(3, "A"), None).is_none());
        assert!(locate_section("## A\n", &o, &HeadingSpec::new(2, "a"), None).is_none());
    }

    #[test]
    fn first_duplicate_wins() {
        let content = "## A\none\n## A\ntwo\n";
        let o = outline(vec![heading(2, "A", 0, 4), heading(2, "A", 9, 13)]);

        let range = locate_section(content, &o, &HeadingSpec::new(2, "A"), None).unwrap();
        assert_eq!(range.body(content), "one\n");
    }

    #[test]
    fn delimiter_shrinks_range() {
        let content = "## H\n- a\n---\nrest\n";
        let o = outline(vec![heading(2, "H", 0, 4)]);

        let range = locate_section(content, &o, &HeadingSpec::new(2, "H"), Some("---")).unwrap();
        assert_eq!(range.body(content), "- a\n");
    }

    #[test]
    fn delimiter_past_next_heading_is_ignored() {
        let content = "## H\na\n## I\n---\n";
        let o = outline(vec![heading(2, "H", 0, 4), heading(2, "I", 7, 11)]);

        let range = locate_section(content, &o, &HeadingSpec::new(2, "H"), Some("---")).unwrap();
        assert_eq!(range.body(content), "a\n");
    }

    #[test]
    fn empty_delimiter_is_ignored() {
        let content = "## H\na\n";
        let o = outline(vec![heading(2, "H", 0, 4)]);

        let range = locate_section(content, &o, &HeadingSpec::new(2, "H"), Some("")).unwrap();
        assert_eq!(range.body(content), "a\n");
    }

    #[test]
    fn heading_without_trailing_newline_has_empty_body() {
        let content = "## H";
        let o = outline(vec![heading(2, "H", 0, 4)]);

        let range = locate_section(content, &o, &HeadingSpec::new(2, "H"), None).unwrap();
        assert_eq!(range, SectionRange { section_start: 4, section_end: 4 });
    }
}
