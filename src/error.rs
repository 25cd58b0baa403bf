//! Error types for parmd

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for parmd
#[derive(Debug, Error)]
pub enum ParmdError {
    #[error("Not a language pair file: {0}")]
    NotPairFile(PathBuf),

    #[error("Counterpart file not found: {0}")]
    CounterpartMissing(PathBuf),

    #[error("Not a parmd directory: {0}")]
    NotConfigured(PathBuf),

    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),

    #[error("Line {line} is out of range (document has {total} lines)")]
    LineOutOfRange { line: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ParmdError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ParmdError::NotPairFile(_) => 2,
            ParmdError::CounterpartMissing(_) => 3,
            ParmdError::NotConfigured(_) => 4,
            ParmdError::InvalidPattern(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ParmdError::NotPairFile(path) => {
                format!(
                    "Not a language pair file: {}\n\n\
                    Suggestions:\n\
                    • Pair files are named <book>.<lang>.md (e.g., novel.en.md / novel.ru.md)\n\
                    • Check the configured languages: parmd config original_lang\n\
                    • Use 'parmd pairs' to list complete pairs in a directory",
                    path.display()
                )
            }
            ParmdError::CounterpartMissing(path) => {
                format!(
                    "Counterpart file not found: {}\n\n\
                    Suggestions:\n\
                    • Create the missing side of the pair (it may be empty)\n\
                    • Check that both files share the same base name",
                    path.display()
                )
            }
            ParmdError::NotConfigured(path) => {
                format!(
                    "Not a parmd directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'parmd init' in this directory to create a config\n\
                    • Set PARMD_ROOT environment variable to your library path",
                    path.display()
                )
            }
            ParmdError::InvalidPattern(msg) => {
                format!(
                    "Invalid search pattern: {}\n\n\
                    Suggestions:\n\
                    • Escape special characters such as ( [ * + ? with a backslash\n\
                    • Drop --regex to search for the literal text",
                    msg
                )
            }
            ParmdError::Config(msg) => {
                if msg.contains("Invalid layout") {
                    format!(
                        "{}\n\n\
                        Valid layouts: table, list\n\
                        Example: parmd config layout list",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ParmdError
pub type Result<T> = std::result::Result<T, ParmdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_pair_file_suggestion() {
        let err = ParmdError::NotPairFile(PathBuf::from("/tmp/book.md"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("<book>.<lang>.md"));
        assert!(msg.contains("parmd pairs"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_not_configured_suggestion() {
        let err = ParmdError::NotConfigured(PathBuf::from("/tmp/lib"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("parmd init"));
        assert!(msg.contains("PARMD_ROOT"));
    }

    #[test]
    fn test_invalid_pattern_suggestion() {
        let err = ParmdError::InvalidPattern("unclosed group".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("unclosed group"));
        assert!(msg.contains("--regex"));
    }

    #[test]
    fn test_config_invalid_layout_suggestions() {
        let err = ParmdError::Config("Invalid layout: grid".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("table, list"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ParmdError::NotPairFile(PathBuf::new()).exit_code(), 2);
        assert_eq!(ParmdError::CounterpartMissing(PathBuf::new()).exit_code(), 3);
        assert_eq!(ParmdError::NotConfigured(PathBuf::new()).exit_code(), 4);
        assert_eq!(ParmdError::InvalidPattern(String::new()).exit_code(), 5);
        assert_eq!(ParmdError::Export("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = ParmdError::Export("no rows".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Export error: no rows");
    }
}
