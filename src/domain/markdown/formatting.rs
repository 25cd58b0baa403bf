//! Line-level formatting toggles (bold, italic, heading levels)

use crate::error::{ParmdError, Result};
use std::fmt;
use std::str::FromStr;

/// Formatting applied to a whole line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Bold,
    Italic,
    /// Heading level 1-5
    Heading(u8),
}

impl FromStr for LineStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bold" | "b" => Ok(LineStyle::Bold),
            "italic" | "i" => Ok(LineStyle::Italic),
            "h1" => Ok(LineStyle::Heading(1)),
            "h2" => Ok(LineStyle::Heading(2)),
            "h3" => Ok(LineStyle::Heading(3)),
            "h4" => Ok(LineStyle::Heading(4)),
            "h5" => Ok(LineStyle::Heading(5)),
            _ => Err(format!(
                "Invalid style: {}. Valid styles: bold, italic, h1, h2, h3, h4, h5",
                s
            )),
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineStyle::Bold => f.write_str("bold"),
            LineStyle::Italic => f.write_str("italic"),
            LineStyle::Heading(level) => write!(f, "h{}", level),
        }
    }
}

/// Toggle `style` on a single line: remove it when present, add it otherwise
pub fn toggle_line_style(line: &str, style: LineStyle) -> String {
    match style {
        LineStyle::Bold => match unwrap_marker(line, "**") {
            Some(inner) => inner.to_string(),
            None => format!("**{}**", line.trim().trim_matches('*')),
        },
        LineStyle::Italic => match unwrap_marker(line, "*") {
            Some(inner) => inner.to_string(),
            None => format!("*{}*", line.trim()),
        },
        LineStyle::Heading(level) => {
            let prefix = format!("{} ", "#".repeat(level as usize));
            match line.strip_prefix(&prefix) {
                Some(rest) => rest.to_string(),
                None => format!("{}{}", prefix, line),
            }
        }
    }
}

/// Inner text of a line that starts and ends with `marker`.
/// A line too short to hold two markers (`*` for italic) unwraps to "".
fn unwrap_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    if !(line.starts_with(marker) && line.ends_with(marker)) {
        return None;
    }
    let end = line.len().saturating_sub(marker.len());
    Some(line.get(marker.len()..end).unwrap_or(""))
}

/// Toggle `style` on 1-indexed line `line_number` of `document`
pub fn format_line(document: &str, line_number: usize, style: LineStyle) -> Result<String> {
    let mut lines: Vec<String> = document.split('\n').map(str::to_string).collect();
    let total = lines.len();

    if line_number == 0 || line_number > total {
        return Err(ParmdError::LineOutOfRange {
            line: line_number,
            total,
        });
    }

    let target = &mut lines[line_number - 1];
    *target = toggle_line_style(target, style);

    Ok(lines.join("\n"))
}
