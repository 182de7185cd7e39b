//! Catalog loading: guessing-game tables supplied as data files.

mod toml_catalog;

pub use toml_catalog::{CatalogLoadError, TomlCatalogLoader};
