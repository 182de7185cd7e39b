//! Guessing game ("20 questions") domain.
//!
//! - [`catalog::Catalog`]: record table plus ordered question list
//! - [`filter::CandidateFilter`]: narrows candidates one answer at a time
//! - [`state::GameState`]: per-conversation progress

pub mod attribute;
pub mod catalog;
pub mod filter;
pub mod messages;
pub mod question;
pub mod record;
pub mod state;
