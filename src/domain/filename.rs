//! Book file name conventions: `Title [Author].lang.md`

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// `title [author].lang` where the author segment and the two-letter language are optional.
/// After an author segment a longer suffix is cut to its first two letters (`.english` -> `en`).
fn stem_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^(.*?)(?:\s*\[(.*?)\](?:\.([a-z]{2})[a-z]*)?|(?:\.([a-z]{2}))?)$")
            .expect("valid stem regex")
    })
}

fn title_author_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(.*?)(?:\[(.*?)\])?$").expect("valid title regex"))
}

fn bracket_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r" \[.*?\]").expect("valid bracket regex"))
}

/// Components of a file stem such as `Book [Jane Doe].ru`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemParts {
    pub title: String,
    pub author: Option<String>,
    pub lang: Option<String>,
}

impl StemParts {
    /// Split a stem into title, bracketed author and language suffix
    pub fn parse(stem: &str) -> Self {
        let Some(captures) = stem_regex().captures(stem) else {
            return StemParts {
                title: stem.trim().to_string(),
                author: None,
                lang: None,
            };
        };

        StemParts {
            title: captures
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            author: captures.get(2).map(|m| m.as_str().trim().to_string()),
            lang: captures
                .get(3)
                .or_else(|| captures.get(4))
                .map(|m| m.as_str().to_string()),
        }
    }
}

/// File name without its final extension (`Book [Jane].ru.md` -> `Book [Jane].ru`)
pub fn file_stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Stem with bracketed segments removed and dots replaced by underscores
pub fn base_title(stem: &str) -> String {
    bracket_regex()
        .replace_all(stem, "")
        .trim()
        .replace('.', "_")
}

/// Title and optional author from a pair base name (`Book [Jane Doe]`)
pub fn title_and_author(base_name: &str) -> (String, Option<String>) {
    match title_author_regex().captures(base_name) {
        Some(captures) => (
            captures
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            captures
                .get(2)
                .map(|m| m.as_str().trim().to_string())
                .filter(|author| !author.is_empty()),
        ),
        None => (base_name.trim().to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_stem() {
        let parts = StemParts::parse("Book [Jane Doe].ru");
        assert_eq!(parts.title, "Book");
        assert_eq!(parts.author.as_deref(), Some("Jane Doe"));
        assert_eq!(parts.lang.as_deref(), Some("ru"));
    }

    #[test]
    fn test_parse_stem_without_author() {
        let parts = StemParts::parse("Book.en");
        assert_eq!(parts.title, "Book");
        assert_eq!(parts.author, None);
        assert_eq!(parts.lang.as_deref(), Some("en"));
    }

    #[test]
    fn test_parse_long_language_suffix() {
        let parts = StemParts::parse("Book [A].english");
        assert_eq!(parts.title, "Book");
        assert_eq!(parts.author.as_deref(), Some("A"));
        assert_eq!(parts.lang.as_deref(), Some("en"));

        let parts = StemParts::parse("notes.draft");
        assert_eq!(parts.title, "notes.draft");
        assert_eq!(parts.lang, None);
    }

    #[test]
    fn test_parse_plain_stem() {
        let parts = StemParts::parse("My Long Title");
        assert_eq!(parts.title, "My Long Title");
        assert_eq!(parts.author, None);
        assert_eq!(parts.lang, None);
    }

    #[test]
    fn test_file_stem_drops_last_extension_only() {
        assert_eq!(file_stem("Book [Jane].ru.md"), "Book [Jane].ru");
        assert_eq!(file_stem("/tmp/dir/Book.en.md"), "Book.en");
    }

    #[test]
    fn test_base_title() {
        assert_eq!(base_title("Book [Jane].ru"), "Book_ru");
        assert_eq!(base_title("Plain"), "Plain");
    }

    #[test]
    fn test_title_and_author() {
        assert_eq!(
            title_and_author("Book [Jane Doe]"),
            ("Book".to_string(), Some("Jane Doe".to_string()))
        );
        assert_eq!(title_and_author("Book"), ("Book".to_string(), None));
        assert_eq!(title_and_author("Book []"), ("Book".to_string(), None));
    }
}
