//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["quizbot.toml", ".quizbot.toml"];

/// Bare environment variables read for the Azure OpenAI connection
const AZURE_ENV_VARS: [&str; 4] = [
    "AZURE_OPENAI_ENDPOINT",
    "AZURE_OPENAI_API_KEY",
    "AZURE_OPENAI_API_VERSION",
    "AZURE_OPENAI_MODEL",
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `QUIZBOT_*` environment variables (`__` separates sections)
    /// 2. `AZURE_OPENAI_*` environment variables
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./quizbot.toml` or `./.quizbot.toml`
    /// 5. Global: `~/.config/quizbot/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load only default configuration plus the environment (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Figment::new().merge(Serialized::defaults(FileConfig::default())))
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment)
    }

    fn with_env(figment: Figment) -> Figment {
        figment
            .merge(Env::raw().only(&AZURE_ENV_VARS).map(|key| {
                key.as_str()
                    .to_ascii_lowercase()
                    .replacen("azure_openai_", "azure_openai.", 1)
                    .into()
            }))
            .merge(Env::prefixed("QUIZBOT_").split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/quizbot/config.toml` if set,
    /// otherwise falls back to `~/.config/quizbot/config.toml`
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quizbot").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     QUIZBOT_* and AZURE_OPENAI_*");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./quizbot.toml or ./.quizbot.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use quizbot_application::BotMode;

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("quizbot"));
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "quizbot.toml",
                r#"
                [bot]
                mode = "game"

                [game]
                reset_keywords = ["start"]
                "#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.bot.mode, BotMode::Game);
            assert_eq!(config.game.reset_keywords, vec!["start".to_string()]);
            // untouched sections keep defaults
            assert_eq!(config.chat.generation.max_tokens, 1000);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("quizbot.toml", "[behavior]\ntimeout_seconds = 10\n")?;
            jail.create_file("custom.toml", "[behavior]\ntimeout_seconds = 99\n")?;

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.behavior.timeout_seconds, Some(99));
            Ok(())
        });
    }

    #[test]
    fn test_azure_env_vars_fill_connection() {
        Jail::expect_with(|jail| {
            jail.set_env("AZURE_OPENAI_ENDPOINT", "https://example.openai.azure.com");
            jail.set_env("AZURE_OPENAI_API_KEY", "secret");
            jail.set_env("AZURE_OPENAI_API_VERSION", "2024-06-01");
            jail.set_env("AZURE_OPENAI_MODEL", "gpt-4o");

            let config = ConfigLoader::load_defaults().map_err(|e| *e)?;
            assert_eq!(
                config.azure_openai.endpoint.as_deref(),
                Some("https://example.openai.azure.com")
            );
            assert_eq!(config.azure_openai.api_key.as_deref(), Some("secret"));
            assert_eq!(config.azure_openai.model.as_deref(), Some("gpt-4o"));
            assert!(config.validate().is_ok());
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("quizbot.toml", "[bot]\nmode = \"chat\"\n")?;
            jail.set_env("QUIZBOT_BOT__MODE", "game");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.bot.mode, BotMode::Game);
            Ok(())
        });
    }
}
