//! Correct (normalize) use case

use crate::application::open_pair::PairSession;
use crate::domain::pair::Side;
use crate::error::Result;
use std::path::PathBuf;

/// Outcome of normalizing one side of a pair
#[derive(Debug, Clone)]
pub struct CorrectionReport {
    pub side: Side,
    pub path: PathBuf,
    pub changed: bool,
    pub corrected: String,
}

/// Normalize the selected sides. Changed files are rewritten unless `dry_run`.
pub fn correct(
    session: &PairSession,
    sides: &[Side],
    dry_run: bool,
) -> Result<Vec<CorrectionReport>> {
    let normalizer = session.config.normalizer();
    let mut reports = Vec::with_capacity(sides.len());

    for &side in sides {
        let path = session.path(side).to_path_buf();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        let text = session.read(side)?;
        let corrected = normalizer.normalize(text.trim(), Some(&filename));
        let changed = corrected != text;

        if changed && !dry_run {
            session.write(side, &corrected)?;
            log::info!("Corrected {}", path.display());
        } else if !changed {
            log::debug!("{} already clean", path.display());
        }

        reports.push(CorrectionReport {
            side,
            path,
            changed,
            corrected,
        });
    }

    Ok(reports)
}
