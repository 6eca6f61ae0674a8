//! Synonym expansion boundary.
//!
//! The matcher consumes synonym and word-form lookups as an external
//! capability. `StaticThesaurus` is a deterministic record-backed
//! implementation for tests and the CLI; a wordnet-style service plugs in
//! behind the same trait.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub trait SynonymExpander: Send + Sync {
    /// Close synonyms of `word`, restricted to senses whose similarity
    /// score exceeds the expander's threshold. May be empty.
    fn close_synonyms(&self, word: &str) -> BTreeSet<String>;

    /// Morphological word-form variants of `word`. May be empty.
    fn word_forms(&self, word: &str) -> BTreeSet<String>;
}

#[derive(Debug, thiserror::Error)]
pub enum ThesaurusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// One scored sense of a headword.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SenseRecord {
    pub word: String,
    pub similarity: f64,
}

/// One thesaurus entry: a headword, its scored senses, and its
/// inflectional forms.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThesaurusRecord {
    pub word: String,
    #[serde(default)]
    pub senses: Vec<SenseRecord>,
    #[serde(default)]
    pub forms: Vec<String>,
}

/// Record-backed expander. Lookups are case-insensitive; outputs are
/// lower-cased and ordered.
pub struct StaticThesaurus {
    entries: HashMap<String, ThesaurusRecord>,
    threshold: f64,
}

impl StaticThesaurus {
    pub fn new(records: Vec<ThesaurusRecord>, threshold: f64) -> Self {
        let entries = records
            .into_iter()
            .map(|r| (r.word.to_lowercase(), r))
            .collect();
        Self { entries, threshold }
    }

    pub fn from_json(json: &str, threshold: f64) -> Result<Self, ThesaurusError> {
        let records: Vec<ThesaurusRecord> =
            serde_json::from_str(json).map_err(|e| ThesaurusError::Parse(e.to_string()))?;
        Ok(Self::new(records, threshold))
    }

    pub fn open(path: &Path, threshold: f64) -> Result<Self, ThesaurusError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json, threshold)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SynonymExpander for StaticThesaurus {
    fn close_synonyms(&self, word: &str) -> BTreeSet<String> {
        self.entries
            .get(&word.to_lowercase())
            .map(|r| {
                r.senses
                    .iter()
                    .filter(|s| s.similarity >= self.threshold)
                    .map(|s| s.word.to_lowercase())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn word_forms(&self, word: &str) -> BTreeSet<String> {
        self.entries
            .get(&word.to_lowercase())
            .map(|r| r.forms.iter().map(|f| f.to_lowercase()).collect())
            .unwrap_or_default()
    }
}

/// Expander with no lexical resource behind it; every lookup is empty.
/// Useful when only pattern-text search is deployed.
pub struct NullThesaurus;

impl SynonymExpander for NullThesaurus {
    fn close_synonyms(&self, _word: &str) -> BTreeSet<String> {
        BTreeSet::new()
    }

    fn word_forms(&self, _word: &str) -> BTreeSet<String> {
        BTreeSet::new()
    }
}
