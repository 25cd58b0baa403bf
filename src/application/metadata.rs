//! Book metadata use case

use crate::application::open_pair::PairSession;
use crate::domain::metadata::{parse_tags, BookMetadata};
use crate::error::Result;

/// Fields to change; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct MetadataUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub lang: Option<String>,
    /// Comma-separated
    pub tags: Option<String>,
    pub description: Option<String>,
}

impl MetadataUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.lang.is_none()
            && self.tags.is_none()
            && self.description.is_none()
    }

    fn apply(&self, metadata: &mut BookMetadata) {
        if let Some(title) = &self.title {
            metadata.title = title.trim().to_string();
        }
        if let Some(author) = &self.author {
            metadata.author = author.trim().to_string();
        }
        if let Some(lang) = &self.lang {
            metadata.lang = lang.trim().to_string();
        }
        if let Some(tags) = &self.tags {
            metadata.tags = parse_tags(tags);
        }
        if let Some(description) = &self.description {
            metadata.description = description.trim().to_string();
        }
    }
}

/// Load the pair's metadata and, when `update` changes anything, save it
pub fn metadata(session: &PairSession, update: &MetadataUpdate) -> Result<BookMetadata> {
    let repository = session.repository();
    let mut metadata = repository.load_metadata(&session.paths);

    if !update.is_empty() {
        update.apply(&mut metadata);
        repository.save_metadata(&session.paths, &metadata)?;
        log::info!(
            "Saved metadata to {}",
            repository.metadata_path(&session.paths).display()
        );
    }

    Ok(metadata)
}
