//! Named style ranges held for one document

use super::tagger::{MarkdownTag, MarkdownTagger};

/// A named character range, `end` exclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRange {
    pub name: String,
    pub start: usize,
    pub end: usize,
}

/// Style ranges of one buffer. Markdown tags are replaced wholesale on every
/// refresh; any other name (`current_line`, `search_highlight`, ...) is kept.
#[derive(Debug, Clone, Default)]
pub struct Highlights {
    ranges: Vec<StyledRange>,
}

impl Highlights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, start: usize, end: usize) {
        self.ranges.push(StyledRange {
            name: name.to_string(),
            start,
            end,
        });
    }

    /// Drop every range with the given name
    pub fn remove(&mut self, name: &str) {
        self.ranges.retain(|range| range.name != name);
    }

    pub fn ranges(&self) -> &[StyledRange] {
        &self.ranges
    }

    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a StyledRange> + 'a {
        self.ranges.iter().filter(move |range| range.name == name)
    }

    /// Recompute Markdown tags for `text`, keeping ranges with other names
    pub fn refresh(&mut self, text: &str, tagger: &MarkdownTagger) {
        self.ranges
            .retain(|range| range.name.parse::<MarkdownTag>().is_err());
        self.ranges
            .extend(tagger.compute(text).into_iter().map(|assignment| StyledRange {
                name: assignment.tag.name().to_string(),
                start: assignment.start,
                end: assignment.end,
            }));
        self.ranges.sort_by_key(|range| range.start);
    }
}
