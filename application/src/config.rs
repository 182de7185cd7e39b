//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as which reply engine answers and API timeouts.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which engine answers incoming messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotMode {
    /// Forward messages to the completion API
    #[default]
    Chat,
    /// Play the guessing game
    Game,
}

impl std::fmt::Display for BotMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotMode::Chat => write!(f, "chat"),
            BotMode::Game => write!(f, "game"),
        }
    }
}

/// Application behavior configuration.
///
/// Controls runtime behavior of use cases like timeout limits for LLM API calls.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Maximum time to wait for an API response before timing out.
    pub timeout: Option<Duration>,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
        }
    }

    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
        }
    }
}
