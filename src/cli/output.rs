//! Output formatting utilities

use crate::application::correct::CorrectionReport;
use crate::application::open_pair::SideSummary;
use crate::application::search::SearchHit;
use crate::domain::markdown::{Highlights, TocEntry};
use crate::domain::metadata::BookMetadata;
use crate::domain::pair::PairPaths;
use crate::domain::position::LineIndex;

/// Format the overview of an opened pair
pub fn format_pair_summary(title: &str, sides: &[SideSummary]) -> String {
    let mut output = format!("{}\n", title);
    for side in sides {
        output.push_str(&format!(
            "  {:<12} [{}] {} ({} lines)\n",
            side.side.to_string(),
            side.lang,
            side.path.display(),
            side.lines
        ));
    }
    output
}

/// Format style ranges as `start-end name` with `line.column` positions
pub fn format_highlights(text: &str, highlights: &Highlights) -> String {
    if highlights.ranges().is_empty() {
        return "No tags found".to_string();
    }

    let index = LineIndex::new(text);
    let mut output = String::new();
    for range in highlights.ranges() {
        output.push_str(&format!(
            "{}-{}  {}\n",
            index.position(range.start),
            index.position(range.end),
            range.name
        ));
    }
    output
}

/// Format a table of contents, indented by level
pub fn format_toc(entries: &[TocEntry]) -> String {
    if entries.is_empty() {
        return "No headings found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!("{:>5}  {}\n", entry.line, entry.indented()));
    }
    output
}

/// Format search hits as `line.column: line text`
pub fn format_search_hits(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No matches found".to_string();
    }

    let mut output = String::new();
    for hit in hits {
        output.push_str(&format!("{}: {}\n", hit.position, hit.line_text.trim()));
    }
    output
}

pub fn format_corrections(reports: &[CorrectionReport]) -> String {
    let mut output = String::new();
    for report in reports {
        let status = if report.changed { "corrected" } else { "unchanged" };
        output.push_str(&format!("{}: {}\n", status, report.path.display()));
    }
    output
}

pub fn format_metadata(metadata: &BookMetadata) -> String {
    format!(
        "title = {}\nauthor = {}\nlang = {}\ntags = {}\ndescription = {}\n",
        metadata.title,
        metadata.author,
        metadata.lang,
        metadata.tags_display(),
        metadata.description
    )
}

/// Format a list of pairs for display
pub fn format_pair_list(pairs: &[PairPaths]) -> String {
    if pairs.is_empty() {
        return "No pairs found".to_string();
    }

    let mut output = String::new();
    for pair in pairs {
        output.push_str(&format!(
            "{}  ({} | {})\n",
            pair.base_name(),
            pair.original.display(),
            pair.translation.display()
        ));
    }
    output
}
