//! Rhetool command implementations.

pub mod info_ops;
pub mod search_ops;
pub mod stats_ops;

use std::path::Path;

use rhetor_engine::config::{ConfigError, EngineConfig};
use rhetor_engine::matcher::SearchError;
use rhetor_engine::store::{MemoryCategoryStore, StoreError};
use rhetor_engine::synonyms::{NullThesaurus, StaticThesaurus, SynonymExpander, ThesaurusError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Thesaurus(#[from] ThesaurusError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Search(#[from] SearchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Invalid(String),
}

pub fn load_store(path: &Path) -> Result<MemoryCategoryStore, CliError> {
    Ok(MemoryCategoryStore::open(path)?)
}

pub fn load_config(path: Option<&Path>) -> Result<EngineConfig, CliError> {
    match path {
        Some(p) => {
            let toml_str = std::fs::read_to_string(p)?;
            Ok(EngineConfig::from_toml(&toml_str)?)
        }
        None => Ok(EngineConfig::default()),
    }
}

/// A missing thesaurus file degrades name search to literal tokens.
pub fn load_expander(
    path: Option<&Path>,
    threshold: f64,
) -> Result<Box<dyn SynonymExpander>, CliError> {
    match path {
        Some(p) => Ok(Box::new(StaticThesaurus::open(p, threshold)?)),
        None => Ok(Box::new(NullThesaurus)),
    }
}
