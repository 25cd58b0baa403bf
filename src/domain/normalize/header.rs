//! Title/author header synthesis from the source file name

use crate::domain::filename::{base_title, file_stem, StemParts};

/// Prepend a `%` metadata header derived from `filename`.
///
/// A document that opens with a heading gets the full block
/// (`% Title`, `% <label>: Author`, blank line). A document that opens with a
/// blank line and a `%` line only gets the title line. Anything else is
/// returned unchanged.
pub fn synthesize_header(content: &str, filename: &str, author_label: &str) -> String {
    let stem = file_stem(filename);

    if content.starts_with('#') {
        let parts = StemParts::parse(&stem);
        let title = match &parts.lang {
            Some(lang) => format!("{}_{}", parts.title, lang),
            None => parts.title.clone(),
        };
        let author = parts.author.as_deref().unwrap_or("");
        format!("% {}\n% {}: {}\n\n{}", title, author_label, author, content)
    } else if content.starts_with("\n%") {
        format!("% {}{}", base_title(&stem), content)
    } else {
        content.to_string()
    }
}
