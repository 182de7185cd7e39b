//! Domain layer for quizbot
//!
//! This crate contains the core logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Guessing game
//!
//! A [`Catalog`] holds a fixed table of records and an ordered list of
//! questions. The [`CandidateFilter`] narrows a per-conversation
//! [`GameState`] with each answer until one, none, or no further
//! questions remain.
//!
//! ## Chat companion
//!
//! A [`Transcript`] of role-tagged messages is forwarded to a completion
//! API with fixed [`GenerationParams`].

pub mod chat;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use chat::{
    params::GenerationParams,
    transcript::{DEFAULT_SYSTEM_PROMPT, Message, Role, Transcript},
};
pub use core::{conversation::ConversationId, error::DomainError, keywords::ResetKeywords};
pub use game::{
    attribute::{AttributeKey, AttributeValue, parse_flag_answer},
    catalog::{Catalog, CatalogData},
    filter::{CandidateFilter, GameOutcome, GameReply},
    messages::{ExhaustedReport, GameMessages},
    question::Question,
    record::Record,
    state::GameState,
};
