//! Core domain concepts shared across all subdomains.
//!
//! - [`conversation::ConversationId`]: who a piece of state belongs to
//! - [`keywords::ResetKeywords`]: words that restart a conversation
//! - [`error::DomainError`]: domain-level errors

pub mod conversation;
pub mod error;
pub mod keywords;
