//! Open pair use case

use crate::domain::pair::{PairPaths, Side};
use crate::domain::position::LineIndex;
use crate::error::{ParmdError, Result};
use crate::infrastructure::{Config, FileSystemRepository};
use std::io;
use std::path::{Path, PathBuf};

/// An opened original/translation pair with the config that governs it
#[derive(Debug, Clone)]
pub struct PairSession {
    pub paths: PairPaths,
    pub config: Config,
    repository: FileSystemRepository,
}

/// Overview of one side of an opened pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideSummary {
    pub side: Side,
    pub lang: String,
    pub path: PathBuf,
    pub lines: usize,
}

impl PairSession {
    /// Open the pair containing `file`.
    ///
    /// Both files must exist: the given one, and its counterpart
    /// (`CounterpartMissing` otherwise).
    pub fn open(file: &Path) -> Result<Self> {
        let repository = FileSystemRepository::for_document(file)?;
        let config = repository.load_config_or_default()?;
        let paths = PairPaths::resolve(file, &config.languages())?;

        if !file.is_file() {
            return Err(ParmdError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", file.display()),
            )));
        }
        if !paths.counterpart().is_file() {
            return Err(ParmdError::CounterpartMissing(
                paths.counterpart().to_path_buf(),
            ));
        }

        log::info!(
            "Opened pair {} ({} / {})",
            paths.base_name(),
            paths.original.display(),
            paths.translation.display()
        );

        Ok(PairSession {
            paths,
            config,
            repository,
        })
    }

    pub fn repository(&self) -> &FileSystemRepository {
        &self.repository
    }

    pub fn path(&self, side: Side) -> &Path {
        self.paths.path(side)
    }

    pub fn read(&self, side: Side) -> Result<String> {
        self.repository.read_document(self.paths.path(side))
    }

    pub fn write(&self, side: Side, content: &str) -> Result<()> {
        self.repository
            .write_document_atomic(self.paths.path(side), content)
    }

    /// Paths, languages and line counts of both sides
    pub fn summary(&self) -> Result<Vec<SideSummary>> {
        let languages = self.config.languages();
        [Side::Original, Side::Translation]
            .into_iter()
            .map(|side| {
                let text = self.read(side)?;
                Ok(SideSummary {
                    side,
                    lang: languages.lang(side).to_string(),
                    path: self.path(side).to_path_buf(),
                    lines: LineIndex::new(text.trim_end_matches('\n')).line_count(),
                })
            })
            .collect()
    }
}
