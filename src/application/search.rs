//! Search use case

use crate::application::open_pair::PairSession;
use crate::domain::pair::Side;
use crate::domain::position::{LineIndex, Position};
use crate::domain::search::{find_matches, SearchQuery, SearchResults};
use crate::error::Result;

/// A match with its position and the text of its line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub position: Position,
    pub matched: String,
    pub line_text: String,
}

/// Search one side, returning the hits in document order
pub fn search(session: &PairSession, side: Side, query: &SearchQuery) -> Result<Vec<SearchHit>> {
    let text = session.read(side)?;
    let results = SearchResults::new(find_matches(&text, query)?);
    log::debug!("{} matches for {:?}", results.len(), query.term);

    let chars: Vec<char> = text.chars().collect();
    let lines: Vec<&str> = text.split('\n').collect();
    let index = LineIndex::new(&text);

    Ok(results
        .matches()
        .iter()
        .map(|found| {
            let position = index.position(found.start);
            SearchHit {
                position,
                matched: chars[found.start..found.end].iter().collect(),
                line_text: lines
                    .get(position.line - 1)
                    .map(|line| line.to_string())
                    .unwrap_or_default(),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParmdError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_search_reports_positions() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Book.en.md"), "x").unwrap();
        fs::write(
            temp.path().join("Book.ru.md"),
            "# Глава\n\n Кот и кот.\n",
        )
        .unwrap();
        let session = PairSession::open(&temp.path().join("Book.ru.md")).unwrap();

        let hits = search(&session, Side::Translation, &SearchQuery::literal("кот")).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].position, Position { line: 3, column: 1 });
        assert_eq!(hits[0].matched, "Кот");
        assert_eq!(hits[1].position, Position { line: 3, column: 7 });
        assert_eq!(hits[1].line_text, " Кот и кот.");
    }

    #[test]
    fn test_invalid_pattern() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Book.en.md"), "x").unwrap();
        fs::write(temp.path().join("Book.ru.md"), "y").unwrap();
        let session = PairSession::open(&temp.path().join("Book.en.md")).unwrap();

        let err = search(&session, Side::Original, &SearchQuery::regex("[")).unwrap_err();
        assert!(matches!(err, ParmdError::InvalidPattern(_)));
    }
}
