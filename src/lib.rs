//! Rhetor engine — interactive boundary over the rhetor-core algorithms.
//!
//! The core is synchronous and shares no mutable state; this crate owns
//! the collaborators, dispatches long-running pattern searches onto a
//! worker thread with a poll-based completion API, and converts between
//! internal category names and human-facing text at the edge.

pub mod api;
mod async_worker;
pub mod trace_init;

pub use api::{
    ClusterView, DimensionView, EngineError, ReplyOutcome, RhetorEngine, SearchPoll, SearchReply,
    TreeView,
};
pub use rhetor_core::{config, matcher, stats, store, synonyms, taxonomy};
