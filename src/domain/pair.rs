//! Original/translation file pairs: `<base>.<lang>.md`

use crate::error::{ParmdError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which file of a pair an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Original,
    Translation,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Original => Side::Translation,
            Side::Translation => Side::Original,
        }
    }

    /// Parse a `--side` argument; `both` selects original then translation
    pub fn parse_selection(s: &str) -> std::result::Result<Vec<Side>, String> {
        match s.to_lowercase().as_str() {
            "both" | "all" => Ok(vec![Side::Original, Side::Translation]),
            other => other.parse::<Side>().map(|side| vec![side]),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "original" | "orig" | "left" => Ok(Side::Original),
            "translation" | "trans" | "right" => Ok(Side::Translation),
            _ => Err(format!(
                "Invalid side: {}. Valid sides: original, translation, both",
                s
            )),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Original => f.write_str("original"),
            Side::Translation => f.write_str("translation"),
        }
    }
}

/// The two language markers of a pair (`en` original, `ru` translation by default)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub original: String,
    pub translation: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        LanguagePair {
            original: "en".to_string(),
            translation: "ru".to_string(),
        }
    }
}

impl LanguagePair {
    pub fn new(original: &str, translation: &str) -> Self {
        LanguagePair {
            original: original.to_string(),
            translation: translation.to_string(),
        }
    }

    pub fn lang(&self, side: Side) -> &str {
        match side {
            Side::Original => &self.original,
            Side::Translation => &self.translation,
        }
    }

    fn side_of(&self, lang: &str) -> Option<Side> {
        if lang == self.original {
            Some(Side::Original)
        } else if lang == self.translation {
            Some(Side::Translation)
        } else {
            None
        }
    }
}

/// Check that a language marker is two lowercase ASCII letters
pub fn validate_lang(lang: &str) -> std::result::Result<(), String> {
    if lang.len() == 2 && lang.chars().all(|c| c.is_ascii_lowercase()) {
        Ok(())
    } else {
        Err(format!(
            "Invalid language marker: '{}'. Expected two lowercase letters (e.g., en, ru)",
            lang
        ))
    }
}

/// Resolved paths of both files of a pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairPaths {
    pub original: PathBuf,
    pub translation: PathBuf,
    /// Side the pair was opened from
    pub opened: Side,
    base_name: String,
}

impl PairPaths {
    /// Resolve a pair from either of its files.
    ///
    /// The file name must be `<base>.<lang>.md` where `lang` is one of the pair's
    /// markers; the counterpart swaps the marker. Existence is not checked here.
    pub fn resolve(path: &Path, languages: &LanguagePair) -> Result<Self> {
        let not_pair = || ParmdError::NotPairFile(path.to_path_buf());

        let file_name = path.file_name().and_then(|n| n.to_str()).ok_or_else(not_pair)?;
        let stem = file_name.strip_suffix(".md").ok_or_else(not_pair)?;
        let (base, lang) = stem.rsplit_once('.').ok_or_else(not_pair)?;
        if base.is_empty() {
            return Err(not_pair());
        }
        let opened = languages.side_of(lang).ok_or_else(not_pair)?;

        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(PairPaths {
            original: dir.join(format!("{}.{}.md", base, languages.original)),
            translation: dir.join(format!("{}.{}.md", base, languages.translation)),
            opened,
            base_name: base.to_string(),
        })
    }

    pub fn path(&self, side: Side) -> &Path {
        match side {
            Side::Original => &self.original,
            Side::Translation => &self.translation,
        }
    }

    /// The file the pair was not opened from
    pub fn counterpart(&self) -> &Path {
        self.path(self.opened.other())
    }

    /// Shared base name (`Book [Author]` for `Book [Author].en.md`)
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn directory(&self) -> &Path {
        self.original.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Short title shown for the pair: base name up to its first dot
    pub fn display_title(&self) -> &str {
        self.base_name
            .split('.')
            .next()
            .unwrap_or(&self.base_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_original() {
        let paths = PairPaths::resolve(Path::new("/books/Novel.en.md"), &LanguagePair::default())
            .unwrap();
        assert_eq!(paths.original, PathBuf::from("/books/Novel.en.md"));
        assert_eq!(paths.translation, PathBuf::from("/books/Novel.ru.md"));
        assert_eq!(paths.opened, Side::Original);
        assert_eq!(paths.counterpart(), Path::new("/books/Novel.ru.md"));
        assert_eq!(paths.base_name(), "Novel");
        assert_eq!(paths.directory(), Path::new("/books"));
    }

    #[test]
    fn test_resolve_from_translation() {
        let paths =
            PairPaths::resolve(Path::new("Book [Jane].ru.md"), &LanguagePair::default()).unwrap();
        assert_eq!(paths.original, PathBuf::from("Book [Jane].en.md"));
        assert_eq!(paths.opened, Side::Translation);
        assert_eq!(paths.counterpart(), Path::new("Book [Jane].en.md"));
        assert_eq!(paths.base_name(), "Book [Jane]");
    }

    #[test]
    fn test_resolve_custom_languages() {
        let langs = LanguagePair::new("de", "fr");
        let paths = PairPaths::resolve(Path::new("a.fr.md"), &langs).unwrap();
        assert_eq!(paths.original, PathBuf::from("a.de.md"));
        assert!(PairPaths::resolve(Path::new("a.en.md"), &langs).is_err());
    }

    #[test]
    fn test_resolve_rejects_non_pair_files() {
        let langs = LanguagePair::default();
        for name in ["book.md", "book.en.txt", ".en.md", "book.de.md", "book"] {
            let err = PairPaths::resolve(Path::new(name), &langs).unwrap_err();
            assert!(matches!(err, ParmdError::NotPairFile(_)), "{}", name);
        }
    }

    #[test]
    fn test_display_title() {
        let paths =
            PairPaths::resolve(Path::new("Vol.1 [X].en.md"), &LanguagePair::default()).unwrap();
        assert_eq!(paths.display_title(), "Vol");
    }

    #[test]
    fn test_side_selection() {
        assert_eq!(Side::parse_selection("both").unwrap().len(), 2);
        assert_eq!(
            Side::parse_selection("Translation").unwrap(),
            vec![Side::Translation]
        );
        assert!(Side::parse_selection("middle").is_err());
    }

    #[test]
    fn test_validate_lang() {
        assert!(validate_lang("en").is_ok());
        assert!(validate_lang("EN").is_err());
        assert!(validate_lang("eng").is_err());
    }
}
