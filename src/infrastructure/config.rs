//! Configuration management

use crate::domain::markdown::TaggerOptions;
use crate::domain::normalize::{TextNormalizer, DEFAULT_AUTHOR_LABEL};
use crate::domain::pair::{validate_lang, LanguagePair};
use crate::domain::BookLayout;
use crate::error::{ParmdError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-library configuration directory
pub const CONFIG_DIR: &str = ".parmd";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_original_lang")]
    pub original_lang: String,

    #[serde(default = "default_translation_lang")]
    pub translation_lang: String,

    /// Label used for the synthesized author line (`% Author: ...`)
    #[serde(default = "default_author_label")]
    pub author_label: String,

    /// Tag `% ` metadata lines as info
    #[serde(default = "default_true")]
    pub metadata_lines: bool,

    /// Tag `#word` hashtags
    #[serde(default = "default_true")]
    pub hashtags: bool,

    #[serde(default)]
    pub layout: BookLayout,

    pub created: DateTime<Utc>,
}

fn default_original_lang() -> String {
    "en".to_string()
}

fn default_translation_lang() -> String {
    "ru".to_string()
}

fn default_author_label() -> String {
    DEFAULT_AUTHOR_LABEL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            original_lang: default_original_lang(),
            translation_lang: default_translation_lang(),
            author_label: default_author_label(),
            metadata_lines: true,
            hashtags: true,
            layout: BookLayout::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .parmd/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ParmdError::NotConfigured(path.to_path_buf())
            } else {
                ParmdError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ParmdError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .parmd/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ParmdError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Check language markers: two lowercase letters each, and distinct
    pub fn validate(&self) -> Result<()> {
        validate_lang(&self.original_lang).map_err(ParmdError::Config)?;
        validate_lang(&self.translation_lang).map_err(ParmdError::Config)?;
        if self.original_lang == self.translation_lang {
            return Err(ParmdError::Config(format!(
                "original_lang and translation_lang must differ (both are '{}')",
                self.original_lang
            )));
        }
        Ok(())
    }

    pub fn languages(&self) -> LanguagePair {
        LanguagePair::new(&self.original_lang, &self.translation_lang)
    }

    pub fn tagger_options(&self) -> TaggerOptions {
        TaggerOptions {
            metadata_lines: self.metadata_lines,
            hashtags: self.hashtags,
        }
    }

    /// Normalizer with the standard rule table and this config's author label
    pub fn normalizer(&self) -> TextNormalizer {
        TextNormalizer::default().with_author_label(self.author_label.clone())
    }
}
