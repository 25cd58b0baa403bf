//! Config management use case

use crate::domain::BookLayout;
use crate::error::{ParmdError, Result};
use crate::infrastructure::{Config, FileSystemRepository, LibraryRepository};
use std::str::FromStr;

/// Keys accepted by `get`, in listing order
pub const CONFIG_KEYS: &[&str] = &[
    "original_lang",
    "translation_lang",
    "author_label",
    "metadata_lines",
    "hashtags",
    "layout",
    "created",
];

/// Service for managing library configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;
        value_of(&config, key)
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "original_lang" => config.original_lang = value.trim().to_string(),
            "translation_lang" => config.translation_lang = value.trim().to_string(),
            "author_label" => config.author_label = value.trim().to_string(),
            "metadata_lines" => config.metadata_lines = parse_bool(key, value)?,
            "hashtags" => config.hashtags = parse_bool(key, value)?,
            "layout" => config.layout = BookLayout::from_str(value).map_err(ParmdError::Config)?,
            "created" => {
                return Err(ParmdError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ParmdError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key,
                    CONFIG_KEYS[..CONFIG_KEYS.len() - 1].join(", ")
                )));
            }
        }

        config.validate()?;
        self.repository.save_config(&config)?;
        log::info!("Set {} = {}", key, value);
        Ok(())
    }

    /// List all config values as key/value pairs
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        let config = self.repository.load_config()?;
        CONFIG_KEYS
            .iter()
            .map(|&key| value_of(&config, key).map(|value| (key, value)))
            .collect()
    }
}

fn value_of(config: &Config, key: &str) -> Result<String> {
    match key {
        "original_lang" => Ok(config.original_lang.clone()),
        "translation_lang" => Ok(config.translation_lang.clone()),
        "author_label" => Ok(config.author_label.clone()),
        "metadata_lines" => Ok(config.metadata_lines.to_string()),
        "hashtags" => Ok(config.hashtags.to_string()),
        "layout" => Ok(config.layout.to_string()),
        "created" => Ok(config.created.to_rfc3339()),
        _ => Err(ParmdError::Config(format!(
            "Unknown config key: '{}'. Valid keys are: {}",
            key,
            CONFIG_KEYS.join(", ")
        ))),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ParmdError::Config(format!(
            "Invalid value for '{}': '{}'. Expected true or false",
            key, value
        ))),
    }
}
