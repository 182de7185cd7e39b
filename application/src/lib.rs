//! Application layer for quizbot
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod session_registry;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, BotMode};
pub use ports::{
    completion_gateway::{CompletionGateway, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
};
pub use session_registry::SessionRegistry;
pub use use_cases::handle_message::{
    HandleMessageError, HandleMessageUseCase, InboundMessage, MessageSource, Responder,
    UNKNOWN_SENDER_MESSAGE,
};
pub use use_cases::play_game::PlayGameUseCase;
pub use use_cases::run_chat::{CHAT_RESET_MESSAGE, RunChatError, RunChatUseCase};
