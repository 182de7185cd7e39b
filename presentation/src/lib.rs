//! Presentation layer for quizbot
//!
//! This crate contains the CLI definition, the console formatter
//! and the interactive REPL.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, ModeArg};
pub use output::console::ConsoleFormatter;
