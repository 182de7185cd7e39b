//! Run Chat use case
//!
//! Keeps a transcript per conversation and forwards it to the completion API.

use crate::config::BehaviorConfig;
use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::session_registry::SessionRegistry;
use quizbot_domain::{
    ConversationId, DEFAULT_SYSTEM_PROMPT, GenerationParams, ResetKeywords, Transcript,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Reply sent after a chat reset keyword
pub const CHAT_RESET_MESSAGE: &str = "チャットをリセットしました。";

/// Errors that can occur during a chat turn
#[derive(Error, Debug)]
pub enum RunChatError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),
}

/// Use case for the LLM-backed chat companion
pub struct RunChatUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    sessions: SessionRegistry<Transcript>,
    system_prompt: String,
    params: GenerationParams,
    reset_keywords: ResetKeywords,
    behavior: BehaviorConfig,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: CompletionGateway + 'static> RunChatUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            sessions: SessionRegistry::new(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            params: GenerationParams::default(),
            reset_keywords: ResetKeywords::chat_default(),
            behavior: BehaviorConfig::default(),
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_reset_keywords(mut self, keywords: ResetKeywords) -> Self {
        self.reset_keywords = keywords;
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Handle one user message and return the reply text
    pub async fn execute(
        &self,
        conversation: &ConversationId,
        text: &str,
    ) -> Result<String, RunChatError> {
        let session = self
            .sessions
            .get_or_insert_with(conversation, || Transcript::new(self.system_prompt.clone()));
        let mut transcript = session.lock().await;

        if self.reset_keywords.matches(text) {
            transcript.reset();
            info!(conversation = %conversation, "Chat transcript reset");
            self.logger.log(ConversationEvent::new(
                "chat_reset",
                serde_json::json!({ "conversation": conversation.as_str() }),
            ));
            return Ok(CHAT_RESET_MESSAGE.to_string());
        }

        transcript.add_user_message(text);
        debug!(
            conversation = %conversation,
            messages = transcript.len(),
            "Requesting completion"
        );

        let reply = match self.complete(&transcript).await {
            Ok(reply) => reply,
            Err(e) => {
                transcript.withdraw_user_message();
                warn!(conversation = %conversation, "Completion failed: {}", e);
                self.logger.log(ConversationEvent::new(
                    "chat_error",
                    serde_json::json!({
                        "conversation": conversation.as_str(),
                        "text": text,
                        "error": e.to_string(),
                    }),
                ));
                return Err(e.into());
            }
        };

        transcript.add_assistant_message(reply.clone());
        self.logger.log(ConversationEvent::new(
            "chat_turn",
            serde_json::json!({
                "conversation": conversation.as_str(),
                "text": text,
                "reply": &reply,
                "messages": transcript.len(),
            }),
        ));

        Ok(reply)
    }

    /// Number of entries currently held for a conversation
    pub async fn transcript_len(&self, conversation: &ConversationId) -> Option<usize> {
        if !self.sessions.contains(conversation) {
            return None;
        }
        let session = self
            .sessions
            .get_or_insert_with(conversation, || Transcript::new(self.system_prompt.clone()));
        let transcript = session.lock().await;
        Some(transcript.len())
    }

    async fn complete(&self, transcript: &Transcript) -> Result<String, GatewayError> {
        let request = self.gateway.complete(transcript.messages(), &self.params);
        match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|_| GatewayError::Timeout)?,
            None => request.await,
        }
    }
}
