//! Reset keyword sets

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Words that restart a conversation (Value Object)
///
/// Matching is exact and case-sensitive: `"Reset"` does not match `"reset"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResetKeywords(Vec<String>);

impl ResetKeywords {
    pub fn try_new<I, S>(words: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(DomainError::NoResetKeywords);
        }
        Ok(Self(words))
    }

    /// Keywords accepted by the chat companion
    pub fn chat_default() -> Self {
        Self(
            ["リセット", "初期化", "クリア", "reset", "clear"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }

    /// Keywords accepted by the guessing game
    pub fn game_default() -> Self {
        Self(["リセット", "reset"].into_iter().map(String::from).collect())
    }

    pub fn matches(&self, text: &str) -> bool {
        self.0.iter().any(|w| w == text)
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }
}
