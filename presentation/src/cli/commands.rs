//! CLI command definitions

use clap::{Parser, ValueEnum};
use quizbot_application::BotMode;
use std::path::PathBuf;

/// Which engine answers messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// LLM-backed conversation partner
    Chat,
    /// Attribute-narrowing guessing game
    Game,
}

impl From<ModeArg> for BotMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Chat => BotMode::Chat,
            ModeArg::Game => BotMode::Game,
        }
    }
}

/// CLI arguments for quizbot
#[derive(Parser, Debug)]
#[command(name = "quizbot")]
#[command(author, version, about = "Conversational bot: a guessing game or an LLM chat companion")]
#[command(long_about = r#"
quizbot answers text messages with one of two engines.

  game  Asks a fixed sequence of questions and narrows a table of
        candidates until one remains.
  chat  Forwards the running conversation to Azure OpenAI and replies
        with the completion.

Send a reset keyword (リセット / reset) to start over.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quizbot.toml      Project-level config
3. ~/.config/quizbot/config.toml   Global config

Example:
  quizbot --mode game
  quizbot --mode game --user alice "くさ"
  quizbot --mode chat
"#)]
pub struct Cli {
    /// Send a single message, print the replies and exit
    pub message: Option<String>,

    /// Engine to run (overrides bot.mode)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Conversation id the messages belong to
    #[arg(short, long, value_name = "ID", default_value = "local")]
    pub user: String,

    /// Send messages without a sender id
    #[arg(long, conflicts_with = "user")]
    pub anonymous: bool,

    /// Catalog file for the guessing game (overrides game.catalog)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Append one JSON line per turn to this file
    #[arg(long, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the welcome banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
