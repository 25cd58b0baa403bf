//! File system repository

use crate::domain::metadata::{BookMetadata, SIDECAR_EXTENSION};
use crate::domain::pair::{LanguagePair, PairPaths};
use crate::error::{ParmdError, Result};
use crate::infrastructure::config::{Config, CONFIG_DIR};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Environment variable pointing at a library root
pub const ROOT_ENV: &str = "PARMD_ROOT";

/// Abstract repository for library-level operations
pub trait LibraryRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .parmd/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .parmd/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .parmd directory exists
    fn is_initialized(&self) -> bool;

    /// Create .parmd directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of LibraryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover library root by walking up from current directory.
    /// First checks PARMD_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Some(repo) = Self::from_env()? {
            return Ok(repo);
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover library root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(ParmdError::NotConfigured(start.to_path_buf())),
            }
        }
    }

    /// Repository governing a document: PARMD_ROOT, then the nearest
    /// configured ancestor of the document's directory, then the directory
    /// itself (unconfigured, defaults apply).
    pub fn for_document(document: &Path) -> Result<Self> {
        match document.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Self::for_directory(parent),
            _ => Self::for_directory(&std::env::current_dir()?),
        }
    }

    /// Like `for_document`, starting from a directory
    pub fn for_directory(dir: &Path) -> Result<Self> {
        if let Some(repo) = Self::from_env()? {
            return Ok(repo);
        }

        let start = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());

        match Self::discover_from(&start) {
            Ok(repo) => Ok(repo),
            Err(ParmdError::NotConfigured(_)) => {
                log::debug!(
                    "No {} found above {}, using defaults",
                    CONFIG_DIR,
                    start.display()
                );
                Ok(FileSystemRepository::new(dir.to_path_buf()))
            }
            Err(e) => Err(e),
        }
    }

    fn from_env() -> Result<Option<Self>> {
        let Ok(root_path) = std::env::var(ROOT_ENV) else {
            return Ok(None);
        };

        let path = PathBuf::from(root_path);
        if Self::has_config_dir(&path) {
            log::debug!("Using {} = {}", ROOT_ENV, path.display());
            Ok(Some(FileSystemRepository::new(path)))
        } else {
            Err(ParmdError::Config(format!(
                "{} is set to '{}' but no {} directory found. \
                Run 'parmd init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                CONFIG_DIR,
                ROOT_ENV
            )))
        }
    }

    /// Check if a path contains a .parmd directory
    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }

    /// Stored config, or defaults when the library was never initialized
    pub fn load_config_or_default(&self) -> Result<Config> {
        if self.is_initialized() {
            self.load_config()
        } else {
            Ok(Config::new())
        }
    }
}

impl LibraryRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(ParmdError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&config_dir)?;
        Ok(())
    }
}

// Document operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Read a document as UTF-8
    pub fn read_document(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ParmdError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("File not found: {}", path.display()),
                ))
            } else {
                ParmdError::Io(e)
            }
        })
    }

    /// Write document content using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    pub fn write_document_atomic(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.parmd-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("document.md"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        log::debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    /// Sidecar path for a pair: `<dir>/<base>.bnf`
    pub fn metadata_path(&self, pair: &PairPaths) -> PathBuf {
        pair.directory()
            .join(format!("{}.{}", pair.base_name(), SIDECAR_EXTENSION))
    }

    /// Load the pair's sidecar. A missing sidecar yields defaults derived from
    /// the base name; an unreadable or corrupt one does too, with a warning.
    pub fn load_metadata(&self, pair: &PairPaths) -> BookMetadata {
        let path = self.metadata_path(pair);
        let defaults = BookMetadata::from_base_name(pair.base_name());

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return defaults,
            Err(e) => {
                log::warn!("Cannot read metadata {}: {}", path.display(), e);
                return defaults;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(meta) => meta,
            Err(e) => {
                log::warn!("Ignoring corrupt metadata {}: {}", path.display(), e);
                defaults
            }
        }
    }

    /// Write the pair's sidecar as pretty UTF-8 JSON
    pub fn save_metadata(&self, pair: &PairPaths, metadata: &BookMetadata) -> Result<()> {
        let json = serde_json::to_string_pretty(metadata)?;
        self.write_document_atomic(&self.metadata_path(pair), &json)
    }

    fn pair_from_path(path: &Path, languages: &LanguagePair) -> Option<PairPaths> {
        let leaf = path.file_name()?.to_str()?;
        let suffix = format!(".{}.md", languages.original);
        if !leaf.ends_with(&suffix) {
            return None;
        }

        let pair = PairPaths::resolve(path, languages).ok()?;
        pair.translation.is_file().then_some(pair)
    }

    fn collect_root_pairs(&self, languages: &LanguagePair) -> Result<Vec<PairPaths>> {
        let entries = fs::read_dir(&self.root)?;
        let mut pairs = Vec::new();

        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(pair) = Self::pair_from_path(&path, languages) {
                pairs.push(pair);
            }
        }

        Ok(pairs)
    }

    fn collect_recursive_pairs(&self, languages: &LanguagePair) -> Vec<PairPaths> {
        let mut pairs = Vec::new();

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(pair) = Self::pair_from_path(entry.path(), languages) {
                pairs.push(pair);
            }
        }

        pairs
    }

    /// List every complete pair (original with an existing translation),
    /// sorted by directory then base name
    pub fn list_pairs(&self, languages: &LanguagePair, recursive: bool) -> Result<Vec<PairPaths>> {
        let mut pairs = if recursive {
            self.collect_recursive_pairs(languages)
        } else {
            self.collect_root_pairs(languages)?
        };

        pairs.sort_by(|a, b| {
            a.directory()
                .cmp(b.directory())
                .then_with(|| a.base_name().cmp(b.base_name()))
        });

        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn write_pair(dir: &Path, base: &str) -> PairPaths {
        fs::write(dir.join(format!("{}.en.md", base)), "# One\n").unwrap();
        fs::write(dir.join(format!("{}.ru.md", base)), "# Один\n").unwrap();
        PairPaths::resolve(&dir.join(format!("{}.en.md", base)), &LanguagePair::default()).unwrap()
    }

    #[test]
    fn test_initialize_creates_config_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();

        assert!(temp.path().join(".parmd").is_dir());
        assert!(repo.is_initialized());
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".parmd")).unwrap();

        let subdir = temp.path().join("books").join("tolstoy");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_unconfigured() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()).unwrap_err() {
            ParmdError::NotConfigured(_) => {}
            other => panic!("Expected NotConfigured error, got {:?}", other),
        }
    }

    #[test]
    fn test_for_document_falls_back_to_its_directory() {
        let _lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);
        std::env::remove_var(ROOT_ENV);

        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("Book.en.md");

        let repo = FileSystemRepository::for_document(&doc).unwrap();
        assert_eq!(repo.root, temp.path());
        assert!(!repo.is_initialized());

        let config = repo.load_config_or_default().unwrap();
        assert_eq!(config.original_lang, "en");
    }

    #[test]
    fn test_atomic_write_replaces_content() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let path = temp.path().join("Book.ru.md");

        repo.write_document_atomic(&path, "first\n").unwrap();
        repo.write_document_atomic(&path, "second\n").unwrap();

        assert_eq!(repo.read_document(&path).unwrap(), "second\n");
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("parmd-tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_read_missing_document() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let err = repo.read_document(&temp.path().join("nope.md")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_metadata_defaults_and_round_trip() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let pair = write_pair(temp.path(), "Book [Jane Doe]");

        let meta = repo.load_metadata(&pair);
        assert_eq!(meta.title, "Book");
        assert_eq!(meta.author, "Jane Doe");

        let updated = BookMetadata {
            description: "Роман".to_string(),
            ..meta
        };
        repo.save_metadata(&pair, &updated).unwrap();

        assert!(temp.path().join("Book [Jane Doe].bnf").exists());
        assert_eq!(repo.load_metadata(&pair), updated);
    }

    #[test]
    fn test_corrupt_metadata_falls_back() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let pair = write_pair(temp.path(), "Novel");
        fs::write(temp.path().join("Novel.bnf"), "{ not json").unwrap();

        let meta = repo.load_metadata(&pair);
        assert_eq!(meta.title, "Novel");
        assert_eq!(meta.lang, "en-ru");
    }

    #[test]
    fn test_list_pairs() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        write_pair(temp.path(), "Beta");
        write_pair(temp.path(), "Alpha");
        fs::write(temp.path().join("Lonely.en.md"), "x").unwrap();
        fs::write(temp.path().join("notes.md"), "x").unwrap();

        let nested = temp.path().join("shelf");
        fs::create_dir(&nested).unwrap();
        write_pair(&nested, "Gamma");

        let hidden = temp.path().join(".trash");
        fs::create_dir(&hidden).unwrap();
        write_pair(&hidden, "Deleted");

        let langs = LanguagePair::default();
        let flat = repo.list_pairs(&langs, false).unwrap();
        let names: Vec<&str> = flat.iter().map(|p| p.base_name()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);

        let deep = repo.list_pairs(&langs, true).unwrap();
        let names: Vec<&str> = deep.iter().map(|p| p.base_name()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }
}
