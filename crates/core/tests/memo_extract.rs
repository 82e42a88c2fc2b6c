use daymemo_core::markdown_ast::MarkdownEditor;
use daymemo_core::memo::{Entry, PostFormat, TimestampFormat, extract_entries, extract_list_entries};

const DAY: &str = "\
# 2024-03-09

## Journal
- 2024-03-09 08:15 coffee
some prose in between
- 2024-03-09 09:30 standup with the team
  - nested detail
---
- 2024-03-09 23:59 after the delimiter

## Notes
- 2024-03-09 12:00 not in the journal
";

fn line_offset(content: &str, line: &str) -> usize {
    content.find(line).unwrap()
}

#[test]
fn list_entry_offsets_point_at_their_lines() {
    let outline = MarkdownEditor::outline(DAY);
    let width = TimestampFormat::default().width();

    let entries = extract_list_entries(DAY, &outline, "## Journal", "", width).unwrap();

    assert_eq!(
        entries,
        vec![
            Entry {
                timestamp: "2024-03-09 08:15".into(),
                message: "coffee".into(),
                offset: line_offset(DAY, "- 2024-03-09 08:15"),
            },
            Entry {
                timestamp: "2024-03-09 09:30".into(),
                message: "standup with the team".into(),
                offset: line_offset(DAY, "- 2024-03-09 09:30"),
            },
            Entry {
                timestamp: "2024-03-09 23:59".into(),
                message: "after the delimiter".into(),
                offset: line_offset(DAY, "- 2024-03-09 23:59"),
            },
        ]
    );
    for entry in &entries {
        assert!(DAY[entry.offset..].starts_with("- "));
    }
}

#[test]
fn end_delimiter_cuts_the_section_short() {
    let outline = MarkdownEditor::outline(DAY);
    let width = TimestampFormat::default().width();

    let entries = extract_list_entries(DAY, &outline, "## Journal", "---", width).unwrap();

    let messages: Vec<_> = entries.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, ["coffee", "standup with the team"]);
}

#[test]
fn missing_section_or_bad_spec_yields_none() {
    let outline = MarkdownEditor::outline(DAY);

    assert_eq!(extract_list_entries(DAY, &outline, "## Nope", "", 16), None);
    assert_eq!(extract_list_entries(DAY, &outline, "Journal", "", 16), None);
}

#[test]
fn codeblock_memos_are_read_from_the_whole_note() {
    let content = "\
# Day

````fw 2024-03-09 08:15
first
line two
````

```rust
fn main() {}
```

## Later
````fw 2024-03-09 10:00
second
````
";
    let outline = MarkdownEditor::outline(content);

    let entries = extract_entries(
        content,
        &outline,
        "",
        "",
        &PostFormat::Codeblock,
        &TimestampFormat::default(),
    )
    .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].timestamp, "2024-03-09 08:15");
    assert_eq!(entries[0].message, "first\nline two");
    assert_eq!(entries[0].offset, line_offset(content, "````fw 2024-03-09 08:15"));
    assert_eq!(entries[1].message, "second");
}

#[test]
fn header_memos_carry_their_body() {
    let content = "\
## Log

### 2024-03-09 08:15

coffee

### 2024-03-09 09:30

standup
#### detail
still standup

## Other
";
    let outline = MarkdownEditor::outline(content);

    let entries = extract_entries(
        content,
        &outline,
        "## Log",
        "",
        &PostFormat::Header { level: 3 },
        &TimestampFormat::default(),
    )
    .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].timestamp, "2024-03-09 08:15");
    assert_eq!(entries[0].message, "coffee");
    assert_eq!(entries[1].message, "standup\n#### detail\nstill standup");
    assert_eq!(entries[1].offset, line_offset(content, "### 2024-03-09 09:30"));
}
