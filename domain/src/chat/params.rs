//! Generation parameters for completion requests

use serde::{Deserialize, Serialize};

/// Fixed sampling settings sent with every completion request (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Upper bound on reply length, in tokens
    pub max_tokens: u32,
    /// 0 = most deterministic, 1 = most varied
    pub temperature: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    /// Generation stops at the first of these sequences
    pub stop: Vec<String>,
    pub stream: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 1000,
            temperature: 0.5,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            stop: vec!["\n".to_string()],
            stream: false,
        }
    }
}
