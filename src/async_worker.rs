use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use rhetor_core::config::SearchSettings;
use rhetor_core::matcher::{CategoryMatcher, SearchError, SearchOutcome};
use rhetor_core::store::CategoryStore;
use rhetor_core::synonyms::SynonymExpander;

// ---------------------------------------------------------------------------
// Work / Result types
// ---------------------------------------------------------------------------

pub(crate) struct SearchWork {
    pub query: String,
    pub generation: u64,
}

pub(crate) struct SearchDone {
    pub query: String,
    pub generation: u64,
    pub result: Result<SearchOutcome, SearchError>,
}

// ---------------------------------------------------------------------------
// SearchWorker
// ---------------------------------------------------------------------------

/// Worker thread for by-pattern searches, which scan every stored
/// pattern body and must stay off the interactive path. A generation
/// counter invalidates superseded requests: the worker drains its queue
/// to the latest item, skips stale work before the scan, and re-checks
/// after.
pub(crate) struct SearchWorker {
    work_tx: mpsc::Sender<SearchWork>,
    result_rx: Mutex<mpsc::Receiver<SearchDone>>,
    generation: Arc<AtomicU64>,
}

impl SearchWorker {
    pub fn new(
        store: Arc<dyn CategoryStore>,
        synonyms: Arc<dyn SynonymExpander>,
        settings: SearchSettings,
    ) -> Self {
        let generation = Arc::new(AtomicU64::new(0));
        let (work_tx, work_rx) = mpsc::channel::<SearchWork>();
        let (result_tx, result_rx) = mpsc::channel::<SearchDone>();
        {
            let generation = Arc::clone(&generation);
            thread::Builder::new()
                .name("rhetor-pattern-search".into())
                .spawn(move || {
                    pattern_worker(work_rx, result_tx, generation, store, synonyms, settings);
                })
                .expect("failed to spawn pattern-search worker");
        }
        Self {
            work_tx,
            result_rx: Mutex::new(result_rx),
            generation,
        }
    }

    /// Queue a search and return its generation number; any earlier
    /// in-flight request becomes stale.
    pub fn submit(&self, query: String) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = self.work_tx.send(SearchWork { query, generation });
        generation
    }

    /// Bump the generation so any in-flight result is dropped on arrival.
    pub fn invalidate(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn try_recv(&self) -> Option<SearchDone> {
        let rx = self.result_rx.lock().ok()?;
        rx.try_recv().ok()
    }
}

// ---------------------------------------------------------------------------
// Worker thread
// ---------------------------------------------------------------------------

fn pattern_worker(
    rx: mpsc::Receiver<SearchWork>,
    tx: mpsc::Sender<SearchDone>,
    generation: Arc<AtomicU64>,
    store: Arc<dyn CategoryStore>,
    synonyms: Arc<dyn SynonymExpander>,
    settings: SearchSettings,
) {
    let matcher = CategoryMatcher::new(store.as_ref(), synonyms.as_ref(), &settings);
    while let Ok(work) = rx.recv() {
        // Drain: if multiple work items queued, skip to latest
        let mut latest = work;
        while let Ok(newer) = rx.try_recv() {
            latest = newer;
        }

        // Check staleness before doing work
        if latest.generation != generation.load(Ordering::SeqCst) {
            continue;
        }

        tracing::debug!(query = %latest.query, "pattern search start");
        let result = matcher.search_by_pattern(&latest.query);

        // Check staleness after the scan
        if latest.generation != generation.load(Ordering::SeqCst) {
            continue;
        }

        let _ = tx.send(SearchDone {
            query: latest.query,
            generation: latest.generation,
            result,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_counter_invalidation() {
        let generation = Arc::new(AtomicU64::new(0));
        assert_eq!(generation.load(Ordering::SeqCst), 0);
        generation.fetch_add(1, Ordering::SeqCst);
        assert_eq!(generation.load(Ordering::SeqCst), 1);
        // Work with generation 0 is now stale
        assert_ne!(0u64, generation.load(Ordering::SeqCst));
    }
}
