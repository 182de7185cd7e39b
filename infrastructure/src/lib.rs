//! Infrastructure layer for quizbot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: configuration loading, catalog files,
//! completion providers and the conversation log.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use catalog::{CatalogLoadError, TomlCatalogLoader};
pub use config::{
    ConfigLoader, ConfigValidationError, FileAzureOpenAiConfig, FileBehaviorConfig, FileBotConfig,
    FileChatConfig, FileConfig, FileGameConfig,
};
pub use logging::JsonlConversationLogger;
#[cfg(feature = "azure-openai")]
pub use providers::azure_openai::{AzureOpenAiGateway, AzureOpenAiSettings};
