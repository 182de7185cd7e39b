//! Question value object

use super::attribute::AttributeKey;
use serde::{Deserialize, Serialize};

/// A question asked during the guessing game (Value Object)
///
/// Each question narrows the candidate set on a single attribute.
/// Only answers listed in `options` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    key: AttributeKey,
    #[serde(rename = "question")]
    prompt: String,
    options: Vec<String>,
}

impl Question {
    pub fn new<I, S>(key: AttributeKey, prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key,
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Attribute the answer is compared against
    pub fn key(&self) -> AttributeKey {
        self.key
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Whether `answer` is one of the enumerated options (exact match)
    pub fn accepts(&self, answer: &str) -> bool {
        self.options.iter().any(|o| o == answer)
    }
}
