//! parmd - Parallel Markdown editor core
//!
//! Normalizes typography and computes Markdown style tags for books kept as
//! an original/translation pair of files (`<book>.en.md` / `<book>.ru.md`),
//! with alignment, search, metadata and parallel book export on top.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{compute_tags, normalize};
pub use error::ParmdError;
