//! Table of contents use case

use crate::application::open_pair::PairSession;
use crate::domain::markdown::{table_of_contents, TocEntry};
use crate::domain::pair::Side;
use crate::error::Result;

pub fn toc(session: &PairSession, side: Side) -> Result<Vec<TocEntry>> {
    let text = session.read(side)?;
    Ok(table_of_contents(&text))
}
