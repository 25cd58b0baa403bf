//! Text correction for translated Markdown
//!
//! `normalize` runs, in order: optional header synthesis from the file name,
//! the replacement rule table, line-start whitespace normalization, and a final
//! trim that leaves exactly one trailing newline.

pub mod header;
pub mod rules;

pub use header::synthesize_header;
pub use rules::{ReplacementRule, RuleSet};

/// Label used on the synthesized author line when none is configured
pub const DEFAULT_AUTHOR_LABEL: &str = "Author";

/// Applies a rule set to whole documents
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    rules: RuleSet,
    author_label: String,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        TextNormalizer::new(RuleSet::standard())
    }
}

impl TextNormalizer {
    pub fn new(rules: RuleSet) -> Self {
        TextNormalizer {
            rules,
            author_label: DEFAULT_AUTHOR_LABEL.to_string(),
        }
    }

    pub fn with_author_label(mut self, label: impl Into<String>) -> Self {
        self.author_label = label.into();
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Normalize a full document; `source_filename` enables header synthesis
    pub fn normalize(&self, text: &str, source_filename: Option<&str>) -> String {
        let text = text.replace("\r\n", "\n");
        let content = match source_filename {
            Some(filename) => synthesize_header(&text, filename, &self.author_label),
            None => text,
        };

        let content = self.rules.apply(&content);
        let content = fix_line_start_spaces(&content);

        format!("{}\n", content.trim())
    }
}

/// Normalize with the standard rule table
pub fn normalize(text: &str, source_filename: Option<&str>) -> String {
    TextNormalizer::default().normalize(text, source_filename)
}

/// Give every body line exactly one leading space.
///
/// Headings and metadata lines (`#`, `%`) and list items (`*`, after any
/// indentation) keep their leading formatting; blank lines stay empty.
/// `\r\n` line ends come out as `\n`.
pub fn fix_line_start_spaces(content: &str) -> String {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| {
            let stripped = line.trim_start();
            if line.starts_with(['#', '%']) || stripped.starts_with('*') {
                line.to_string()
            } else if stripped.is_empty() {
                String::new()
            } else {
                format!(" {}", stripped)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
