//! Export parallel book use case

use crate::application::open_pair::PairSession;
use crate::domain::book::{align_lines, BookLayout, ParallelBook};
use crate::domain::pair::Side;
use crate::error::{ParmdError, Result};
use std::path::PathBuf;

/// Extension of the rendered book
pub const EXPORT_EXTENSION: &str = "xhtml";

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Layout override; the config's layout otherwise
    pub layout: Option<BookLayout>,
    /// Destination; `<dir>/<base>.xhtml` otherwise
    pub output: Option<PathBuf>,
}

/// Render the pair as a parallel XHTML book and write it. Returns the written path.
pub fn export(session: &PairSession, options: &ExportOptions) -> Result<PathBuf> {
    let original = session.read(Side::Original)?;
    let translation = session.read(Side::Translation)?;
    let (left, right) = align_lines(&original, &translation);

    let metadata = session.repository().load_metadata(&session.paths);
    let title = if metadata.title.is_empty() {
        session.paths.display_title().to_string()
    } else {
        metadata.title
    };

    let book = ParallelBook::new(&title, &left, &right);
    if book.rows().is_empty() {
        return Err(ParmdError::Export(format!(
            "Nothing to export: both sides of '{}' are empty",
            session.paths.base_name()
        )));
    }

    let layout = options.layout.unwrap_or(session.config.layout);
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_output(session));

    session
        .repository()
        .write_document_atomic(&output, &book.render(layout))?;
    log::info!(
        "Exported {} rows ({} layout) to {}",
        book.rows().len(),
        layout,
        output.display()
    );

    Ok(output)
}

fn default_output(session: &PairSession) -> PathBuf {
    session.paths.directory().join(format!(
        "{}.{}",
        session.paths.base_name(),
        EXPORT_EXTENSION
    ))
}
