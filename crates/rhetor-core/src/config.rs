//! Engine configuration as an explicit value object.
//!
//! Defaults are embedded via `include_str!("default_config.toml")`.
//! There is no process-wide singleton: whoever needs a setting receives
//! the config (or its section) as an argument.

use serde::Deserialize;

pub const DEFAULT_CONFIG_TOML: &str = include_str!("default_config.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub synonyms: SynonymSettings,
    pub search: SearchSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynonymSettings {
    pub similarity_threshold: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub exact_name_tokens: bool,
}

impl EngineConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let t = self.synonyms.similarity_threshold;
        if !(0.0..=1.0).contains(&t) {
            return Err(ConfigError::InvalidValue {
                field: "synonyms.similarity_threshold",
                reason: format!("{t} is outside 0.0..=1.0"),
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_toml(DEFAULT_CONFIG_TOML).expect("embedded default config must be valid")
    }
}
