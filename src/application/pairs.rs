//! List pairs use case

use crate::domain::pair::PairPaths;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use std::path::Path;

/// Complete pairs under `dir`, using the languages configured for it
pub fn list_pairs(dir: &Path, recursive: bool) -> Result<Vec<PairPaths>> {
    let config = FileSystemRepository::for_directory(dir)?.load_config_or_default()?;
    let pairs = FileSystemRepository::new(dir.to_path_buf())
        .list_pairs(&config.languages(), recursive)?;

    log::debug!("Found {} pairs under {}", pairs.len(), dir.display());
    Ok(pairs)
}
