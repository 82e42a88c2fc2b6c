pub mod comrak;
pub mod editor;
pub mod heading;
pub mod section;
pub mod types;

// Re-export primary API
pub use editor::{MarkdownEditor, SectionLookup};
pub use heading::{build_heading_line, parse_heading_spec};
pub use section::locate_section;
pub use types::{
    CodeSectionEntry, HeadingOutlineEntry, HeadingSpec, ListItemEntry, MarkdownAstError,
    Outline, SectionRange,
};
