//! Handle Message use case
//!
//! Entry point for the transport layer: one inbound text message in,
//! the reply messages out.

use super::play_game::PlayGameUseCase;
use super::run_chat::{RunChatError, RunChatUseCase};
use crate::ports::completion_gateway::CompletionGateway;
use async_trait::async_trait;
use quizbot_domain::ConversationId;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Reply when the sender could not be identified
pub const UNKNOWN_SENDER_MESSAGE: &str = "ユーザー情報を取得できませんでした。";

/// Errors surfaced to the transport layer
#[derive(Error, Debug)]
pub enum HandleMessageError {
    #[error(transparent)]
    Chat(#[from] RunChatError),
}

/// Who sent an inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// An identified user; state is kept under this id
    User(ConversationId),
    /// A group, room or otherwise unidentified sender
    Anonymous,
}

/// One inbound text message, already authenticated and parsed
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub source: MessageSource,
    pub text: String,
}

impl InboundMessage {
    pub fn from_user(id: ConversationId, text: impl Into<String>) -> Self {
        Self {
            source: MessageSource::User(id),
            text: text.into(),
        }
    }

    pub fn anonymous(text: impl Into<String>) -> Self {
        Self {
            source: MessageSource::Anonymous,
            text: text.into(),
        }
    }
}

/// A reply engine that answers an identified conversation
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(
        &self,
        conversation: &ConversationId,
        text: &str,
    ) -> Result<String, HandleMessageError>;

    /// Text to show a conversation before its first message, if any
    async fn greeting(&self, _conversation: &ConversationId) -> Option<String> {
        None
    }
}

#[async_trait]
impl Responder for PlayGameUseCase {
    async fn respond(
        &self,
        conversation: &ConversationId,
        text: &str,
    ) -> Result<String, HandleMessageError> {
        Ok(self.execute(conversation, text).await.into_text())
    }

    async fn greeting(&self, conversation: &ConversationId) -> Option<String> {
        Some(self.current_prompt(conversation).await.into_text())
    }
}

#[async_trait]
impl<G: CompletionGateway + 'static> Responder for RunChatUseCase<G> {
    async fn respond(
        &self,
        conversation: &ConversationId,
        text: &str,
    ) -> Result<String, HandleMessageError> {
        Ok(self.execute(conversation, text).await?)
    }
}

/// Use case that dispatches inbound messages to the configured engine
pub struct HandleMessageUseCase {
    responder: Arc<dyn Responder>,
}

impl HandleMessageUseCase {
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self { responder }
    }

    /// Opening text for a conversation, when the engine has one
    pub async fn greeting(&self, conversation: &ConversationId) -> Option<String> {
        self.responder.greeting(conversation).await
    }

    /// Produce the reply messages for `message`, in send order
    pub async fn execute(&self, message: &InboundMessage) -> Result<Vec<String>, HandleMessageError> {
        match &message.source {
            MessageSource::User(id) => {
                debug!(conversation = %id, "Dispatching message");
                let reply = self.responder.respond(id, &message.text).await?;
                Ok(vec![reply])
            }
            MessageSource::Anonymous => {
                debug!("Message from unidentified sender");
                Ok(vec![
                    UNKNOWN_SENDER_MESSAGE.to_string(),
                    format!("メッセージ：{}", message.text),
                ])
            }
        }
    }
}
