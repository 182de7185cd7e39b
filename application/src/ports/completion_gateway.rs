//! Completion gateway port
//!
//! Defines the interface for sending a chat transcript to an LLM provider.

use async_trait::async_trait;
use quizbot_domain::{GenerationParams, Message};
use thiserror::Error;

/// Errors that can occur during completion gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Gateway not configured: {0}")]
    NotConfigured(String),
}

/// Gateway for chat completions
///
/// The provider API is stateless: every call carries the full transcript.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send `transcript` and return the assistant's reply text
    async fn complete(
        &self,
        transcript: &[Message],
        params: &GenerationParams,
    ) -> Result<String, GatewayError>;
}
