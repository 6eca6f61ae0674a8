use serde::Serialize;

use rhetor_core::config::ConfigError;
use rhetor_core::matcher::{SearchError, SearchOutcome};
use rhetor_core::store::StoreError;
use rhetor_core::taxonomy::{to_display, CategoryTree};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("unknown {kind}: {name}")]
    NotFound { kind: String, name: String },
    #[error("empty query")]
    EmptyQuery,
}

impl From<StoreError> for EngineError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Io(io) => EngineError::Io { msg: io.to_string() },
            StoreError::NotFound { kind, name } => EngineError::NotFound {
                kind: kind.to_string(),
                name: to_display(&name),
            },
            StoreError::InvalidPattern(re) => EngineError::InvalidData {
                msg: re.to_string(),
            },
            StoreError::Parse(msg) => EngineError::InvalidData { msg },
        }
    }
}

impl From<SearchError> for EngineError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidQuery => EngineError::EmptyQuery,
            SearchError::Store(store) => store.into(),
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        EngineError::InvalidData { msg: e.to_string() }
    }
}

// ---------------------------------------------------------------------------
// Records (display-ready value types)
// ---------------------------------------------------------------------------

/// Category hierarchy with display names (spaces, not underscores).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreeView {
    pub clusters: Vec<ClusterView>,
}

impl TreeView {
    pub fn from_tree(tree: &CategoryTree) -> Self {
        tree_view(tree)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClusterView {
    pub name: String,
    pub dimensions: Vec<DimensionView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DimensionView {
    pub name: String,
    pub lats: Vec<String>,
}

/// Typed result of a completed search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyOutcome {
    Tree(TreeView),
    NoMatches,
    Failed(EngineError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReply {
    pub query: String,
    pub outcome: ReplyOutcome,
}

/// Non-blocking view of the pattern-search worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchPoll {
    Idle,
    InProgress,
    Done(SearchReply),
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

pub(super) fn tree_view(tree: &CategoryTree) -> TreeView {
    TreeView {
        clusters: tree
            .clusters()
            .iter()
            .map(|c| ClusterView {
                name: to_display(c.name()),
                dimensions: c
                    .dimensions()
                    .iter()
                    .map(|d| DimensionView {
                        name: to_display(d.name()),
                        lats: d.lats().iter().map(|l| to_display(l.name())).collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub(super) fn convert_outcome(result: Result<SearchOutcome, SearchError>) -> ReplyOutcome {
    match result {
        Ok(SearchOutcome::Tree(tree)) => ReplyOutcome::Tree(tree_view(&tree)),
        Ok(SearchOutcome::NoMatches) => ReplyOutcome::NoMatches,
        Err(e) => ReplyOutcome::Failed(e.into()),
    }
}
