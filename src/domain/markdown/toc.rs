//! Table of contents extraction

/// Deepest heading level listed
pub const MAX_TOC_LEVEL: usize = 5;

/// One heading in the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (1-5)
    pub level: u8,
    /// Heading text without the `#` prefix
    pub title: String,
    /// Line number in the source document (1-indexed)
    pub line: usize,
}

impl TocEntry {
    /// Title indented by two spaces per level below 1
    pub fn indented(&self) -> String {
        format!(
            "{}{}",
            "  ".repeat(self.level.saturating_sub(1) as usize),
            self.title
        )
    }
}

/// Split `## Title` into its level and title
pub fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=MAX_TOC_LEVEL).contains(&level) {
        return None;
    }
    line[level..]
        .strip_prefix(' ')
        .map(|title| (level as u8, title))
}

/// Every `#`-prefixed heading of `text`, in document order
pub fn table_of_contents(text: &str) -> Vec<TocEntry> {
    text.split('\n')
        .enumerate()
        .filter_map(|(idx, line)| {
            parse_heading(line).map(|(level, title)| TocEntry {
                level,
                title: title.to_string(),
                line: idx + 1,
            })
        })
        .collect()
}
