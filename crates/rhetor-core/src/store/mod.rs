//! Category dictionary boundary.
//!
//! `CategoryStore` is the narrow query interface the matcher depends on;
//! any backing format is the store's concern. `MemoryCategoryStore` is an
//! in-memory implementation built from taxonomy records, used by tests
//! and the diagnostics CLI.

mod memory;

pub use memory::{InfoRecord, LatRecord, MemoryCategoryStore, TaxonomyFile};

use serde::{Deserialize, Serialize};

use crate::taxonomy::MatchTriple;

/// Unified error type for category store queries.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown {kind}: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Pattern text bound to a LAT. A present `revised` body always takes
/// precedence over `original` for display and search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatPatterns {
    pub revised: Option<String>,
    pub original: String,
}

impl LatPatterns {
    pub fn effective(&self) -> &str {
        self.revised.as_deref().unwrap_or(&self.original)
    }
}

/// Result of a category-name search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryMatches {
    /// Dimension-name matches as (cluster, dimension) pairs.
    pub dimensions: Vec<(String, String)>,
    /// LAT-name matches.
    pub lats: Vec<MatchTriple>,
}

/// One pattern-body search hit: the owning triple plus the body that
/// matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternHit {
    pub triple: MatchTriple,
    pub text: String,
}

/// Metadata for a cluster or dimension.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    pub help: String,
}

pub trait CategoryStore: Send + Sync {
    /// Pattern text for a LAT. `NotFound` if the LAT is unknown.
    fn patterns(&self, lat: &str) -> Result<LatPatterns, StoreError>;

    /// Regex search over category names. `exact` anchors the whole name;
    /// otherwise the pattern may match anywhere inside it. With
    /// `lat_names_only` the dimension-name scan is skipped. An empty
    /// result is a normal outcome, not an error.
    fn find_categories(
        &self,
        pattern: &str,
        lat_names_only: bool,
        exact: bool,
    ) -> Result<CategoryMatches, StoreError>;

    /// Lower-cased free-text search over stored pattern bodies. `exact`
    /// requires a full whitespace-delimited token match; otherwise any
    /// substring hit counts. Returns an empty vec when nothing matches.
    fn find_lats(&self, pattern: &str, exact: bool) -> Result<Vec<PatternHit>, StoreError>;

    fn cluster_info(&self, name: &str) -> Option<CategoryInfo>;

    fn dimension_info(&self, name: &str) -> Option<CategoryInfo>;
}
