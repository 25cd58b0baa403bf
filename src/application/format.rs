//! Format line use case

use crate::application::open_pair::PairSession;
use crate::domain::markdown::{format_line, LineStyle};
use crate::domain::pair::Side;
use crate::error::Result;

/// Toggle `style` on one line of a side and save it. Returns the new line.
pub fn format(session: &PairSession, side: Side, line: usize, style: LineStyle) -> Result<String> {
    let text = session.read(side)?;
    let formatted = format_line(&text, line, style)?;
    session.write(side, &formatted)?;

    log::info!(
        "Toggled {} on line {} of {}",
        style,
        line,
        session.path(side).display()
    );

    Ok(formatted
        .split('\n')
        .nth(line - 1)
        .unwrap_or_default()
        .to_string())
}
