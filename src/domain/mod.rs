//! Domain layer - Text processing and book models

pub mod book;
pub mod filename;
pub mod markdown;
pub mod metadata;
pub mod normalize;
pub mod pair;
pub mod position;
pub mod search;

pub use book::{align_lines, BookLayout, ParallelBook};
pub use markdown::{compute_tags, MarkdownTag, MarkdownTagger, TagAssignment, TaggerOptions};
pub use metadata::BookMetadata;
pub use normalize::{normalize, RuleSet, TextNormalizer};
pub use pair::{LanguagePair, PairPaths, Side};
pub use position::{LineIndex, Position};
pub use search::{find_matches, SearchQuery, SearchResults};
