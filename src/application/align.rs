//! Align pair use case

use crate::application::open_pair::PairSession;
use crate::domain::book::align_lines;
use crate::domain::pair::Side;
use crate::error::Result;

/// Line counts before and after aligning a pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignReport {
    pub original_lines: usize,
    pub translation_lines: usize,
    pub aligned_lines: usize,
}

/// Pad the shorter side with empty lines and save both sides
pub fn align(session: &PairSession) -> Result<AlignReport> {
    let original = session.read(Side::Original)?;
    let translation = session.read(Side::Translation)?;

    let original_lines = original.trim().split('\n').count();
    let translation_lines = translation.trim().split('\n').count();
    let (left, right) = align_lines(&original, &translation);

    session.write(Side::Original, &format!("{}\n", left.join("\n")))?;
    session.write(Side::Translation, &format!("{}\n", right.join("\n")))?;

    log::info!(
        "Aligned {} ({} / {} -> {} lines)",
        session.paths.base_name(),
        original_lines,
        translation_lines,
        left.len()
    );

    Ok(AlignReport {
        original_lines,
        translation_lines,
        aligned_lines: left.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_align_pads_translation() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Book.en.md"), "# One\n\n Text\n\n More\n").unwrap();
        fs::write(temp.path().join("Book.ru.md"), "# Один\n").unwrap();
        let session = PairSession::open(&temp.path().join("Book.ru.md")).unwrap();

        let report = align(&session).unwrap();
        assert_eq!(
            report,
            AlignReport {
                original_lines: 5,
                translation_lines: 1,
                aligned_lines: 5,
            }
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("Book.ru.md")).unwrap(),
            "# Один\n\n\n\n\n"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("Book.en.md")).unwrap(),
            "# One\n\n Text\n\n More\n"
        );
    }
}
