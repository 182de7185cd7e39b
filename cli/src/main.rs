//! CLI entrypoint for quizbot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use quizbot_application::{
    BotMode, ConversationLogger, HandleMessageUseCase, InboundMessage, NoConversationLogger,
    PlayGameUseCase, Responder,
};
use quizbot_domain::{CandidateFilter, ConversationId};
use quizbot_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger, TomlCatalogLoader};
use quizbot_presentation::{ChatRepl, Cli};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting quizbot");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    // CLI flags take precedence over every config source
    if let Some(mode) = cli.mode {
        config.bot.mode = mode.into();
    }
    if let Some(path) = &cli.catalog {
        config.game.catalog = Some(path.display().to_string());
    }
    if let Some(path) = &cli.log_conversation {
        config.bot.conversation_log = Some(path.display().to_string());
    }

    config.validate().context("Invalid configuration")?;
    info!(mode = %config.bot.mode, "Configuration loaded");

    // === Dependency Injection ===
    let logger = conversation_logger(&config);
    let responder: Arc<dyn Responder> = match config.bot.mode {
        BotMode::Game => Arc::new(game_responder(&config, logger)?),
        BotMode::Chat => chat_responder(&config, logger)?,
    };
    let use_case = Arc::new(HandleMessageUseCase::new(responder));

    let conversation = if cli.anonymous {
        None
    } else {
        Some(ConversationId::try_new(cli.user.as_str()).context("Invalid --user")?)
    };

    // Single message mode
    if let Some(text) = cli.message {
        let message = match conversation {
            Some(id) => InboundMessage::from_user(id, text),
            None => InboundMessage::anonymous(text),
        };
        for reply in use_case.execute(&message).await? {
            println!("{}", reply);
        }
        return Ok(());
    }

    let mut repl = ChatRepl::new(use_case, config.bot.mode, conversation).with_quiet(cli.quiet);
    repl.run().await?;

    Ok(())
}

fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    let Some(path) = &config.bot.conversation_log else {
        return Arc::new(NoConversationLogger);
    };

    match JsonlConversationLogger::open(path) {
        Ok(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        Err(e) => {
            warn!("Could not open conversation log {}: {}", path, e);
            Arc::new(NoConversationLogger)
        }
    }
}

fn game_responder(
    config: &FileConfig,
    logger: Arc<dyn ConversationLogger>,
) -> Result<PlayGameUseCase> {
    let catalog = TomlCatalogLoader::load_or_builtin(config.game.catalog.as_deref())
        .context("Failed to load game catalog")?;
    info!(
        records = catalog.records().len(),
        questions = catalog.questions().len(),
        "Catalog ready"
    );

    let filter = CandidateFilter::new(Arc::new(catalog))
        .with_messages(config.game.messages.clone())
        .with_reset_keywords(config.game.reset_keywords()?);

    Ok(PlayGameUseCase::new(filter).with_logger(logger))
}

#[cfg(feature = "azure-openai")]
fn chat_responder(
    config: &FileConfig,
    logger: Arc<dyn ConversationLogger>,
) -> Result<Arc<dyn Responder>> {
    use quizbot_application::{BehaviorConfig, RunChatUseCase};
    use quizbot_infrastructure::{AzureOpenAiGateway, AzureOpenAiSettings};

    let behavior = BehaviorConfig::from_timeout_seconds(config.behavior.timeout_seconds);
    let settings = AzureOpenAiSettings::try_from(&config.azure_openai)?;
    let gateway = Arc::new(AzureOpenAiGateway::new(settings, behavior.timeout)?);

    let use_case = RunChatUseCase::new(gateway)
        .with_system_prompt(config.chat.system_prompt.clone())
        .with_params(config.chat.generation.clone())
        .with_reset_keywords(config.chat.reset_keywords()?)
        .with_behavior(behavior)
        .with_logger(logger);

    Ok(Arc::new(use_case))
}

#[cfg(not(feature = "azure-openai"))]
fn chat_responder(
    _config: &FileConfig,
    _logger: Arc<dyn ConversationLogger>,
) -> Result<Arc<dyn Responder>> {
    anyhow::bail!("chat mode requires quizbot to be built with the `azure-openai` feature")
}
