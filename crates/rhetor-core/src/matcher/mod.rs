//! Taxonomy search: query words or raw pattern text → category hierarchy.
//!
//! Two modes over the same store boundary. By-name search expands each
//! query token through the synonym expander and unions the per-token
//! match sets; by-pattern search scans stored pattern bodies and
//! intersects them. Both are synchronous; long-running pattern scans are
//! the caller's job to dispatch off the interactive path.


use std::collections::{BTreeSet, HashSet};

use crate::config::SearchSettings;
use crate::store::{CategoryStore, StoreError};
use crate::synonyms::SynonymExpander;
use crate::taxonomy::{CategoryTree, MatchTriple};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("empty query")]
    InvalidQuery,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A search result. An empty match set is a normal outcome, never an
/// empty-but-successful tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Tree(CategoryTree),
    NoMatches,
}

impl SearchOutcome {
    pub fn tree(&self) -> Option<&CategoryTree> {
        match self {
            SearchOutcome::Tree(tree) => Some(tree),
            SearchOutcome::NoMatches => None,
        }
    }

    pub fn is_no_matches(&self) -> bool {
        matches!(self, SearchOutcome::NoMatches)
    }
}

pub struct CategoryMatcher<'a> {
    store: &'a dyn CategoryStore,
    synonyms: &'a dyn SynonymExpander,
    settings: SearchSettings,
}

impl<'a> CategoryMatcher<'a> {
    pub fn new(
        store: &'a dyn CategoryStore,
        synonyms: &'a dyn SynonymExpander,
        settings: &SearchSettings,
    ) -> Self {
        Self {
            store,
            synonyms,
            settings: settings.clone(),
        }
    }

    /// By-name search: per token, expand to close synonyms plus word
    /// forms, match each candidate against LAT names, then union the
    /// per-token sets in first-seen order.
    pub fn search_by_name(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let tokens = tokenize(query)?;
        let mut combined = Vec::new();
        let mut seen = HashSet::new();
        for token in &tokens {
            for triple in self.name_matches(token)? {
                if seen.insert(triple.clone()) {
                    combined.push(triple);
                }
            }
        }
        Ok(outcome(combined))
    }

    /// By-pattern search: per token, scan stored pattern bodies, then
    /// intersect the per-token sets. A single token returns its own set.
    pub fn search_by_pattern(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let tokens = tokenize(query)?;
        let mut tokens = tokens.iter().map(|t| t.to_lowercase());

        let first = match tokens.next() {
            Some(t) => t,
            None => return Err(SearchError::InvalidQuery),
        };
        let mut result = self.pattern_matches(&first)?;
        for token in tokens {
            if result.is_empty() {
                break;
            }
            let set: HashSet<MatchTriple> = self.pattern_matches(&token)?.into_iter().collect();
            result.retain(|t| set.contains(t));
        }
        Ok(outcome(result))
    }

    fn name_matches(&self, token: &str) -> Result<Vec<MatchTriple>, SearchError> {
        let base = token.to_lowercase();
        let mut candidates: BTreeSet<String> = BTreeSet::new();
        candidates.insert(base.clone());
        candidates.extend(self.synonyms.close_synonyms(&base));
        for candidate in candidates.clone() {
            candidates.extend(self.synonyms.word_forms(&candidate));
        }

        let mut matches = Vec::new();
        let mut seen = HashSet::new();
        for candidate in &candidates {
            let pattern = self.name_pattern(candidate);
            let found = self.store.find_categories(&pattern, true, false)?;
            for triple in found.lats {
                if seen.insert(triple.clone()) {
                    matches.push(triple);
                }
            }
        }
        Ok(matches)
    }

    fn pattern_matches(&self, token: &str) -> Result<Vec<MatchTriple>, SearchError> {
        let hits = self.store.find_lats(token.trim(), false)?;
        let mut triples = Vec::new();
        let mut seen = HashSet::new();
        for hit in hits {
            if seen.insert(hit.triple.clone()) {
                triples.push(hit.triple);
            }
        }
        Ok(triples)
    }

    /// Name pattern for one candidate word. Stored names are capitalized
    /// compounds (`ThinkPositive_Happy`), so the default pattern requires
    /// an uppercase letter, underscore, or end-of-name after the
    /// candidate; consuming that boundary char is fine for a containment
    /// test. Exact-token mode requires the candidate to be a full
    /// underscore-separated segment instead.
    fn name_pattern(&self, candidate: &str) -> String {
        let compound = capitalize_compound(candidate);
        let escaped = regex::escape(&compound);
        if self.settings.exact_name_tokens {
            format!("(?:^|_){escaped}(?:_|$)")
        } else {
            format!("{escaped}(?:[A-Z_]|$)")
        }
    }
}

fn outcome(matches: Vec<MatchTriple>) -> SearchOutcome {
    if matches.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Tree(CategoryTree::from_matches(matches))
    }
}

fn tokenize(query: &str) -> Result<Vec<String>, SearchError> {
    let tokens: Vec<String> = query.split_whitespace().map(str::to_string).collect();
    if tokens.is_empty() {
        return Err(SearchError::InvalidQuery);
    }
    Ok(tokens)
}

/// "social group" → "SocialGroup": uppercase the first letter of each
/// word and join without separators, matching stored name casing.
fn capitalize_compound(candidate: &str) -> String {
    candidate
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
