//! Public engine API — plain-data boundary over the core.
//!
//! Everything returned here is display-ready data: category names carry
//! spaces instead of underscores, and outcomes are typed variants rather
//! than exceptions. No markup is generated at this layer.

mod engine;
mod types;

pub use engine::RhetorEngine;
pub use types::{
    ClusterView, DimensionView, EngineError, ReplyOutcome, SearchPoll, SearchReply, TreeView,
};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn default_config_toml() -> &'static str {
    rhetor_core::config::DEFAULT_CONFIG_TOML
}

/// Load an engine config from a TOML file, falling back to the embedded
/// defaults when no path is given.
pub fn load_config_file(
    path: Option<&std::path::Path>,
) -> Result<rhetor_core::config::EngineConfig, EngineError> {
    use rhetor_core::config::EngineConfig;
    match path {
        Some(p) => {
            let toml_str = std::fs::read_to_string(p).map_err(|e| EngineError::Io {
                msg: format!("{}: {e}", p.display()),
            })?;
            Ok(EngineConfig::from_toml(&toml_str)?)
        }
        None => Ok(EngineConfig::default()),
    }
}
