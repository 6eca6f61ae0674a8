//! Per-unit category occurrence counters and frequency queries.
//!
//! A `StatAccumulator` is created empty per analysis unit (sentence,
//! paragraph, document) at tagging time, mutated by single-category
//! increments or by merging another unit's counts, and read-only after
//! aggregation.

mod aggregate;
#[cfg(test)]
mod tests;

pub use aggregate::{aggregate, Aggregation};

use std::collections::HashMap;

/// The three counter kinds share identical semantics; operations are
/// parameterized by kind rather than triplicated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CountKind {
    Cluster,
    Dimension,
    Lat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrequencyMethod {
    /// count / total whitespace-delimited word count of the accumulated
    /// text; 0 when the text is empty.
    Document,
    /// log10(1 + count).
    Log,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatAccumulator {
    clusters: HashMap<String, u32>,
    dimensions: HashMap<String, u32>,
    lats: HashMap<String, u32>,
    text: String,
}

impl StatAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: CountKind, name: &str) {
        let counter = self.counter_mut(kind);
        *counter.entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn add_cluster(&mut self, name: &str) {
        self.add(CountKind::Cluster, name);
    }

    pub fn add_dimension(&mut self, name: &str) {
        self.add(CountKind::Dimension, name);
    }

    pub fn add_lat(&mut self, name: &str) {
        self.add(CountKind::Lat, name);
    }

    /// Append a text span to the accumulated denominator text,
    /// space-separated.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }

    /// Add `other`'s counts into `self` and append its text. Counter
    /// merging is associative and commutative; the text concatenation is
    /// order-dependent but word-count-neutral. Each unit must be merged
    /// into at most one target exactly once, or its counts and text are
    /// double-counted.
    pub fn merge(&mut self, other: &StatAccumulator) {
        for kind in [CountKind::Cluster, CountKind::Dimension, CountKind::Lat] {
            let source = other.counter(kind).clone();
            let target = self.counter_mut(kind);
            for (name, count) in source {
                *target.entry(name).or_insert(0) += count;
            }
        }
        self.push_text(&other.text);
    }

    /// `None` if `name` was never recorded; recorded counts are always
    /// positive under increment-only semantics.
    pub fn count(&self, kind: CountKind, name: &str) -> Option<u32> {
        self.counter(kind).get(name).copied()
    }

    /// Mirrors `count`: `None` if the name was never recorded.
    pub fn frequency(&self, kind: CountKind, name: &str, method: FrequencyMethod) -> Option<f64> {
        let count = self.count(kind, name)?;
        Some(match method {
            FrequencyMethod::Document => {
                let words = self.word_count();
                if words == 0 {
                    0.0
                } else {
                    f64::from(count) / words as f64
                }
            }
            FrequencyMethod::Log => (1.0 + f64::from(count)).log10(),
        })
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
            && self.dimensions.is_empty()
            && self.lats.is_empty()
            && self.text.is_empty()
    }

    /// (name, count) pairs sorted by name, for deterministic display.
    pub fn entries(&self, kind: CountKind) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .counter(kind)
            .iter()
            .map(|(name, &count)| (name.as_str(), count))
            .collect();
        entries.sort_by_key(|&(name, _)| name);
        entries
    }

    fn counter(&self, kind: CountKind) -> &HashMap<String, u32> {
        match kind {
            CountKind::Cluster => &self.clusters,
            CountKind::Dimension => &self.dimensions,
            CountKind::Lat => &self.lats,
        }
    }

    fn counter_mut(&mut self, kind: CountKind) -> &mut HashMap<String, u32> {
        match kind {
            CountKind::Cluster => &mut self.clusters,
            CountKind::Dimension => &mut self.dimensions,
            CountKind::Lat => &mut self.lats,
        }
    }
}
