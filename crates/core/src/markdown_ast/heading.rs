//! Heading address parsing and heading line construction.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::markdown_ast::types::{HeadingSpec, MarkdownAstError};

static HEADING_SPEC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

/// Parse a one-line heading address such as `"## Journal"`.
///
/// Returns `None` when the trimmed input is empty or is not 1-6 `#`
/// characters followed by whitespace and a title.
pub fn parse_heading_spec(spec: &str) -> Option<HeadingSpec> {
    let s = spec.trim();
    if s.is_empty() {
        return None;
    }

    let caps = HEADING_SPEC_RE.captures(s)?;
    let level = u8::try_from(caps[1].len()).ok()?;
    let title = caps[2].trim().to_string();

    Some(HeadingSpec { level, title })
}

/// Build a heading line (`level` hashes, a space, the title), without newline.
pub fn build_heading_line(level: u8, title: &str) -> String {
    format!("{} {}", "#".repeat(usize::from(level)), title)
}

impl HeadingSpec {
    pub fn new(level: u8, title: impl Into<String>) -> Self {
        Self { level, title: title.into() }
    }

    /// Whether an outline heading addresses the same section.
    /// Matching is exact and case-sensitive.
    pub fn matches(&self, level: u8, title: &str) -> bool {
        self.level == level && self.title == title
    }

    pub fn heading_line(&self) -> String {
        build_heading_line(self.level, &self.title)
    }
}

impl FromStr for HeadingSpec {
    type Err = MarkdownAstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_heading_spec(s).ok_or_else(|| MarkdownAstError::InvalidHeadingSpec(s.to_string()))
    }
}

impl fmt::Display for HeadingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.heading_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# A", 1, "A")]
    #[case("##  Title ", 2, "Title")]
    #[case("###### deep title", 6, "deep title")]
    #[case("  ### padded  ", 3, "padded")]
    #[case("##\tTabbed", 2, "Tabbed")]
    fn parses_level_and_title(#[case] input: &str, #[case] level: u8, #[case] title: &str) {
        assert_eq!(parse_heading_spec(input), Some(HeadingSpec::new(level, title)));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("A")]
    #[case("#######x")]
    #[case("####### too deep")]
    #[case("#")]
    #[case("##NoSpace")]
    fn rejects_malformed(#[case] input: &str) {
        assert_eq!(parse_heading_spec(input), None);
    }

    #[test]
    fn builds_heading_line() {
        assert_eq!(build_heading_line(1, "A"), "# A");
        assert_eq!(build_heading_line(3, "B"), "### B");
    }

    #[test]
    fn build_then_parse_round_trips() {
        for level in 1..=6u8 {
            for title in ["Journal", "deep title", "つぶやき", "a#b"] {
                let line = build_heading_line(level, title);
                assert_eq!(parse_heading_spec(&line), Some(HeadingSpec::new(level, title)));
            }
        }
    }

    #[test]
    fn from_str_reports_invalid_spec() {
        let err = "Journal".parse::<HeadingSpec>().unwrap_err();
        assert!(matches!(err, MarkdownAstError::InvalidHeadingSpec(s) if s == "Journal"));
        assert_eq!("## Journal".parse::<HeadingSpec>().unwrap().to_string(), "## Journal");
    }
}
