//! Application layer - Use cases and orchestration

pub mod align;
pub mod correct;
pub mod export;
pub mod format;
pub mod highlight;
pub mod init;
pub mod manage_config;
pub mod metadata;
pub mod open_pair;
pub mod pairs;
pub mod search;
pub mod toc;

pub use export::ExportOptions;
pub use highlight::HighlightOptions;
pub use manage_config::ConfigService;
pub use metadata::MetadataUpdate;
pub use open_pair::PairSession;
