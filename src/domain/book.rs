//! Line alignment and parallel book rendering

use pulldown_cmark::{html, Event, Parser as MdParser, Tag, TagEnd};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trim both documents, split them into lines and pad the shorter side with
/// empty lines so both have the same length.
pub fn align_lines(original: &str, translated: &str) -> (Vec<String>, Vec<String>) {
    let mut left: Vec<String> = original.trim().split('\n').map(str::to_string).collect();
    let mut right: Vec<String> = translated.trim().split('\n').map(str::to_string).collect();

    let len = left.len().max(right.len());
    left.resize(len, String::new());
    right.resize(len, String::new());

    (left, right)
}

/// How aligned rows are laid out in the rendered book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookLayout {
    /// Two-column table, original on the left
    #[default]
    Table,
    /// Original paragraph in bold followed by its translation
    #[serde(rename = "list")]
    Interleaved,
}

impl FromStr for BookLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(BookLayout::Table),
            "list" | "interleaved" => Ok(BookLayout::Interleaved),
            _ => Err(format!("Invalid layout: {}. Valid layouts: table, list", s)),
        }
    }
}

impl fmt::Display for BookLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookLayout::Table => f.write_str("table"),
            BookLayout::Interleaved => f.write_str("list"),
        }
    }
}

/// One aligned row of the book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub original: String,
    pub translation: String,
}

/// An aligned original/translation pair ready to be rendered
#[derive(Debug, Clone)]
pub struct ParallelBook {
    title: String,
    rows: Vec<BookRow>,
}

impl ParallelBook {
    /// Zip the two line lists, dropping rows where both sides are blank.
    /// Missing lines on the shorter side are treated as empty.
    pub fn new(title: &str, original: &[String], translated: &[String]) -> Self {
        let len = original.len().max(translated.len());
        let rows = (0..len)
            .map(|i| BookRow {
                original: original.get(i).map(|s| s.trim().to_string()).unwrap_or_default(),
                translation: translated
                    .get(i)
                    .map(|s| s.trim().to_string())
                    .unwrap_or_default(),
            })
            .filter(|row| !(row.original.is_empty() && row.translation.is_empty()))
            .collect();

        ParallelBook {
            title: title.to_string(),
            rows,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rows(&self) -> &[BookRow] {
        &self.rows
    }

    /// Render a standalone XHTML document
    pub fn render(&self, layout: BookLayout) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        out.push_str("<!DOCTYPE html>\n");
        out.push_str("<html xmlns=\"http://www.w3.org/1999/xhtml\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\" />\n<title>");
        push_escaped(&mut out, &self.title);
        out.push_str("</title>\n</head>\n<body>\n<h1>");
        push_escaped(&mut out, &self.title);
        out.push_str("</h1>\n");

        match layout {
            BookLayout::Table => self.render_table(&mut out),
            BookLayout::Interleaved => self.render_interleaved(&mut out),
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn render_table(&self, out: &mut String) {
        out.push_str("<table border=\"1\" style=\"width:100%; border-collapse:collapse;\">\n");
        out.push_str("<tr><th>Original</th><th>Translation</th></tr>\n");
        for row in &self.rows {
            out.push_str("<tr><td>");
            out.push_str(&render_inline(&row.original));
            out.push_str("</td><td>");
            out.push_str(&render_inline(&row.translation));
            out.push_str("</td></tr>\n");
        }
        out.push_str("</table>\n");
    }

    fn render_interleaved(&self, out: &mut String) {
        for row in &self.rows {
            out.push_str("<p><b>");
            out.push_str(&render_inline(&row.original));
            out.push_str("</b><br />");
            out.push_str(&render_inline(&row.translation));
            out.push_str("</p>\n");
        }
    }
}

/// Render a single line of Markdown without the surrounding paragraph
pub fn render_inline(text: &str) -> String {
    let events = MdParser::new(text).filter(|event| {
        !matches!(
            event,
            Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph)
        )
    });

    let mut html_out = String::new();
    html::push_html(&mut html_out, events);
    html_out.trim_end().to_string()
}

fn push_escaped(out: &mut String, text: &str) {
    html::push_html(out, std::iter::once(Event::Text(text.into())));
}
