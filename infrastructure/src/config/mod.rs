//! Configuration file loading for quizbot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZBOT_*` environment variables
//! 2. `AZURE_OPENAI_*` environment variables
//! 3. `--config <path>` specified file
//! 4. Project root: `./quizbot.toml` or `./.quizbot.toml`
//! 5. Global: `~/.config/quizbot/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAzureOpenAiConfig, FileBehaviorConfig, FileBotConfig,
    FileChatConfig, FileConfig, FileGameConfig,
};
pub use loader::ConfigLoader;
