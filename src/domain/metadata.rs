//! Book metadata stored in the `.bnf` sidecar next to a pair

use crate::domain::filename::title_and_author;
use serde::{Deserialize, Serialize};

/// Default language field for a freshly described book
pub const DEFAULT_BOOK_LANG: &str = "en-ru";

/// Extension of the sidecar file (`<base>.bnf`)
pub const SIDECAR_EXTENSION: &str = "bnf";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMetadata {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default = "default_lang")]
    pub lang: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub description: String,
}

fn default_lang() -> String {
    DEFAULT_BOOK_LANG.to_string()
}

impl Default for BookMetadata {
    fn default() -> Self {
        BookMetadata {
            title: String::new(),
            author: String::new(),
            lang: default_lang(),
            tags: Vec::new(),
            description: String::new(),
        }
    }
}

impl BookMetadata {
    /// Defaults derived from a pair base name such as `Book [Jane Doe]`
    pub fn from_base_name(base_name: &str) -> Self {
        let (title, author) = title_and_author(base_name);
        BookMetadata {
            title,
            author: author.unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Tags joined for display
    pub fn tags_display(&self) -> String {
        self.tags.join(", ")
    }
}

/// Split a comma-separated tag string, trimming entries and dropping empties
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
