//! Interactive chat module
//!
//! Provides a readline-based interface for talking to the bot.

mod repl;

pub use repl::ChatRepl;
