//! Markdown structure: style tags, table of contents, line formatting

pub mod formatting;
pub mod highlights;
pub mod tagger;
pub mod toc;

pub use formatting::{format_line, toggle_line_style, LineStyle};
pub use highlights::{Highlights, StyledRange};
pub use tagger::{compute_tags, MarkdownTag, MarkdownTagger, TagAssignment, TaggerOptions};
pub use toc::{table_of_contents, TocEntry};
