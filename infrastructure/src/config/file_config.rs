//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use quizbot_application::BotMode;
use quizbot_domain::{DEFAULT_SYSTEM_PROMPT, GameMessages, GenerationParams, ResetKeywords};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("[{0}] reset_keywords cannot be empty")]
    EmptyResetKeywords(&'static str),

    #[error("temperature must be between 0 and 2, got {0}")]
    InvalidTemperature(f32),

    #[error("max_tokens cannot be 0")]
    ZeroMaxTokens,

    #[error("chat mode requires azure_openai.{0} (or the AZURE_OPENAI_{1} environment variable)")]
    MissingAzureSetting(&'static str, &'static str),
}

/// Raw bot configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBotConfig {
    /// Which engine answers messages
    pub mode: BotMode,
    /// JSONL file receiving one line per conversation turn
    pub conversation_log: Option<String>,
}

/// Raw behavior configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Timeout in seconds for API calls
    pub timeout_seconds: Option<u64>,
}

/// Raw chat configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Persona placed in the transcript's system entry
    pub system_prompt: String,
    pub reset_keywords: Vec<String>,
    /// Sampling settings sent with every request
    pub generation: GenerationParams,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            reset_keywords: ResetKeywords::chat_default().words().to_vec(),
            generation: GenerationParams::default(),
        }
    }
}

impl FileChatConfig {
    pub fn reset_keywords(&self) -> Result<ResetKeywords, ConfigValidationError> {
        ResetKeywords::try_new(self.reset_keywords.iter().cloned())
            .map_err(|_| ConfigValidationError::EmptyResetKeywords("chat"))
    }
}

/// Raw game configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Catalog file replacing the built-in table
    pub catalog: Option<String>,
    pub reset_keywords: Vec<String>,
    /// Reply wording
    pub messages: GameMessages,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            reset_keywords: ResetKeywords::game_default().words().to_vec(),
            messages: GameMessages::default(),
        }
    }
}

impl FileGameConfig {
    pub fn reset_keywords(&self) -> Result<ResetKeywords, ConfigValidationError> {
        ResetKeywords::try_new(self.reset_keywords.iter().cloned())
            .map_err(|_| ConfigValidationError::EmptyResetKeywords("game"))
    }
}

/// Raw Azure OpenAI connection settings
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAzureOpenAiConfig {
    /// e.g. `https://my-resource.openai.azure.com`
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub api_version: Option<String>,
    /// Deployment name
    pub model: Option<String>,
}

impl std::fmt::Debug for FileAzureOpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileAzureOpenAiConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_version", &self.api_version)
            .field("model", &self.model)
            .finish()
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub bot: FileBotConfig,
    pub behavior: FileBehaviorConfig,
    pub chat: FileChatConfig,
    pub game: FileGameConfig,
    pub azure_openai: FileAzureOpenAiConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Timeout of 0 seconds doesn't make sense
        if let Some(0) = self.behavior.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        self.chat.reset_keywords()?;
        self.game.reset_keywords()?;

        let generation = &self.chat.generation;
        if !(0.0..=2.0).contains(&generation.temperature) {
            return Err(ConfigValidationError::InvalidTemperature(
                generation.temperature,
            ));
        }
        if generation.max_tokens == 0 {
            return Err(ConfigValidationError::ZeroMaxTokens);
        }

        if self.bot.mode == BotMode::Chat {
            let azure = &self.azure_openai;
            let required = [
                (&azure.endpoint, "endpoint", "ENDPOINT"),
                (&azure.api_key, "api_key", "API_KEY"),
                (&azure.api_version, "api_version", "API_VERSION"),
                (&azure.model, "model", "MODEL"),
            ];
            for (value, field, env) in required {
                if value.as_deref().is_none_or(|v| v.trim().is_empty()) {
                    return Err(ConfigValidationError::MissingAzureSetting(field, env));
                }
            }
        }

        Ok(())
    }
}
