//! Highlight use case

use crate::application::open_pair::PairSession;
use crate::domain::markdown::{Highlights, MarkdownTagger};
use crate::domain::pair::Side;
use crate::domain::position::LineIndex;
use crate::domain::search::{find_matches, SearchQuery};
use crate::error::{ParmdError, Result};

/// Range name for the line holding the cursor
pub const CURRENT_LINE: &str = "current_line";

/// Range name for search matches
pub const SEARCH_HIGHLIGHT: &str = "search_highlight";

#[derive(Debug, Clone, Default)]
pub struct HighlightOptions {
    /// Mark this 1-indexed line as `current_line`
    pub current_line: Option<usize>,
    /// Mark matches of this query as `search_highlight`
    pub search: Option<SearchQuery>,
}

/// A side's text with its computed style ranges
#[derive(Debug, Clone)]
pub struct HighlightView {
    pub text: String,
    pub highlights: Highlights,
}

pub fn highlight(
    session: &PairSession,
    side: Side,
    options: &HighlightOptions,
) -> Result<HighlightView> {
    let text = session.read(side)?;
    let mut highlights = Highlights::new();

    if let Some(line) = options.current_line {
        let index = LineIndex::new(&text);
        let (start, end) = index.line_range(line).ok_or(ParmdError::LineOutOfRange {
            line,
            total: index.line_count(),
        })?;
        highlights.add(CURRENT_LINE, start, end);
    }

    if let Some(query) = &options.search {
        for found in find_matches(&text, query)? {
            highlights.add(SEARCH_HIGHLIGHT, found.start, found.end);
        }
    }

    let tagger = MarkdownTagger::new(session.config.tagger_options());
    highlights.refresh(&text, &tagger);
    log::debug!(
        "{} ranges for {}",
        highlights.ranges().len(),
        session.path(side).display()
    );

    Ok(HighlightView { text, highlights })
}
