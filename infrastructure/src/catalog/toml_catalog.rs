//! TOML catalog files
//!
//! A catalog file lists `[[records]]` and `[[questions]]`:
//!
//! ```toml
//! [[records]]
//! name = "ヒコザル"
//! type = ["ほのお"]
//! color = "あか"
//! evolution = true
//!
//! [[questions]]
//! key = "type"
//! question = "そのポケモンはどのタイプですか？"
//! options = ["くさ", "ほのお", "みず"]
//! ```

use quizbot_domain::{Catalog, CatalogData, DomainError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] DomainError),
}

/// Loads guessing-game catalogs from TOML
pub struct TomlCatalogLoader;

impl TomlCatalogLoader {
    /// Read and validate the catalog at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog, CatalogLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&content)?;
        info!(
            path = %path.display(),
            records = catalog.records().len(),
            questions = catalog.questions().len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate catalog text
    pub fn parse(content: &str) -> Result<Catalog, CatalogLoadError> {
        let data: CatalogData = toml::from_str(content)?;
        Ok(Catalog::try_from(data)?)
    }

    /// Load `path` if given, otherwise the built-in table
    pub fn load_or_builtin(path: Option<&str>) -> Result<Catalog, CatalogLoadError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Catalog::sinnoh_starters()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizbot_domain::{AttributeKey, CandidateFilter, GameOutcome};
    use std::sync::Arc;

    const FIRE_STARTERS: &str = r#"
[[records]]
name = "ヒコザル"
type = ["ほのお"]
color = "あか"
evolution = true

[[records]]
name = "ゴウカザル"
type = ["ほのお", "かくとう"]
color = "あか"
evolution = false

[[questions]]
key = "type"
question = "タイプは？"
options = ["ほのお", "かくとう"]

[[questions]]
key = "evolution"
question = "進化しますか？"
options = ["はい", "いいえ"]
"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = TomlCatalogLoader::parse(FIRE_STARTERS).unwrap();
        assert_eq!(catalog.records().len(), 2);
        assert_eq!(catalog.questions()[1].key(), AttributeKey::Evolution);
        assert!(catalog.records()[1].matches(AttributeKey::Type, "かくとう"));
        assert!(catalog.records()[0].matches(AttributeKey::Evolution, "はい"));
    }

    #[test]
    fn test_loaded_catalog_plays() {
        let catalog = TomlCatalogLoader::parse(FIRE_STARTERS).unwrap();
        let filter = CandidateFilter::new(Arc::new(catalog));
        let mut state = filter.new_game();

        let reply = filter.process_answer(&mut state, "ほのお");
        assert_eq!(reply.outcome, GameOutcome::Question { index: 1 });
        let reply = filter.process_answer(&mut state, "いいえ");
        assert_eq!(reply.text, "答えは ゴウカザル です！");
    }

    #[test]
    fn test_unknown_attribute_is_parse_error() {
        let content = r#"
[[questions]]
key = "speed"
question = "速い？"
options = ["はい"]
"#;
        let err = TomlCatalogLoader::parse(content).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse(_)));
    }

    #[test]
    fn test_duplicate_record_is_invalid() {
        let content = r#"
[[records]]
name = "A"
color = "あか"

[[records]]
name = "A"
color = "あお"
"#;
        let err = TomlCatalogLoader::parse(content).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::Invalid(DomainError::DuplicateRecord(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fire.toml");
        std::fs::write(&path, FIRE_STARTERS).unwrap();

        let catalog = TomlCatalogLoader::load(&path).unwrap();
        assert_eq!(catalog.records()[0].name(), "ヒコザル");
    }

    #[test]
    fn test_missing_file() {
        let err = TomlCatalogLoader::load("/nonexistent/catalog.toml").unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }

    #[test]
    fn test_builtin_fallback() {
        let catalog = TomlCatalogLoader::load_or_builtin(None).unwrap();
        assert_eq!(catalog.records().len(), 4);
    }
}
