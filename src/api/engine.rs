use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rhetor_core::config::EngineConfig;
use rhetor_core::matcher::CategoryMatcher;
use rhetor_core::store::{CategoryStore, LatPatterns};
use rhetor_core::synonyms::SynonymExpander;
use rhetor_core::taxonomy::to_internal;

use super::types::{convert_outcome, EngineError, SearchPoll, SearchReply};
use crate::async_worker::SearchWorker;

/// Engine facade over the store and synonym collaborators.
///
/// By-name search runs inline; by-pattern search is queued on the
/// worker and observed through `poll_pattern_search`. The caller's
/// control loop never blocks on a pattern scan.
pub struct RhetorEngine {
    store: Arc<dyn CategoryStore>,
    synonyms: Arc<dyn SynonymExpander>,
    config: EngineConfig,
    worker: SearchWorker,
    submitted: AtomicU64,
    delivered: AtomicU64,
}

impl RhetorEngine {
    pub fn new(
        store: Arc<dyn CategoryStore>,
        synonyms: Arc<dyn SynonymExpander>,
        config: EngineConfig,
    ) -> Arc<Self> {
        let worker = SearchWorker::new(
            Arc::clone(&store),
            Arc::clone(&synonyms),
            config.search.clone(),
        );
        Arc::new(Self {
            store,
            synonyms,
            config,
            worker,
            submitted: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Synchronous by-name search; name lookups touch only the name
    /// index and are interactive-safe.
    pub fn search_by_name(&self, query: &str) -> SearchReply {
        let matcher = CategoryMatcher::new(
            self.store.as_ref(),
            self.synonyms.as_ref(),
            &self.config.search,
        );
        SearchReply {
            query: query.to_string(),
            outcome: convert_outcome(matcher.search_by_name(query)),
        }
    }

    /// Queue a by-pattern search; a newer submission supersedes any
    /// in-flight one.
    pub fn submit_pattern_search(&self, query: &str) {
        let generation = self.worker.submit(query.to_string());
        self.submitted.store(generation, Ordering::SeqCst);
    }

    /// Non-blocking completion check. Results of superseded submissions
    /// are discarded on arrival.
    pub fn poll_pattern_search(&self) -> SearchPoll {
        while let Some(done) = self.worker.try_recv() {
            if done.generation != self.submitted.load(Ordering::SeqCst) {
                continue;
            }
            self.delivered.store(done.generation, Ordering::SeqCst);
            return SearchPoll::Done(SearchReply {
                query: done.query,
                outcome: convert_outcome(done.result),
            });
        }
        if self.submitted.load(Ordering::SeqCst) > self.delivered.load(Ordering::SeqCst) {
            SearchPoll::InProgress
        } else {
            SearchPoll::Idle
        }
    }

    /// Drop any in-flight pattern search. The scan itself is not
    /// interrupted; its result is discarded on arrival.
    pub fn cancel_pattern_search(&self) {
        let generation = self.worker.invalidate();
        self.submitted.store(generation, Ordering::SeqCst);
        self.delivered.store(generation, Ordering::SeqCst);
    }

    /// Pattern text bound to a LAT, looked up by display name.
    pub fn lat_patterns(&self, name: &str) -> Result<LatPatterns, EngineError> {
        let internal = to_internal(name.trim());
        Ok(self.store.patterns(&internal)?)
    }

    /// Help text for a cluster, looked up by display name.
    pub fn cluster_help(&self, name: &str) -> Result<String, EngineError> {
        let internal = to_internal(name.trim());
        self.store
            .cluster_info(&internal)
            .map(|info| info.help)
            .ok_or_else(|| EngineError::NotFound {
                kind: "cluster".into(),
                name: name.trim().to_string(),
            })
    }

    /// Help text for a dimension, looked up by display name.
    pub fn dimension_help(&self, name: &str) -> Result<String, EngineError> {
        let internal = to_internal(name.trim());
        self.store
            .dimension_info(&internal)
            .map(|info| info.help)
            .ok_or_else(|| EngineError::NotFound {
                kind: "dimension".into(),
                name: name.trim().to_string(),
            })
    }
}
