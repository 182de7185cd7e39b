//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod handle_message;
pub mod play_game;
pub mod run_chat;
