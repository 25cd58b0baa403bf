//! Initialize library use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, LibraryRepository};
use std::fs;
use std::path::Path;

/// Initialize a parmd library at the specified path.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    log::info!("Initialized parmd library at {}", path.display());
    Ok(config)
}
