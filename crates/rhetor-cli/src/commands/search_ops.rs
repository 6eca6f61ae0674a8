use std::collections::HashSet;

use rhetor_engine::config::SearchSettings;
use rhetor_engine::matcher::{CategoryMatcher, SearchOutcome};
use rhetor_engine::store::CategoryStore;
use rhetor_engine::synonyms::SynonymExpander;
use rhetor_engine::taxonomy::{CategoryTree, MatchTriple};
use rhetor_engine::TreeView;

use super::CliError;

/// By-name search. Returns whether anything matched.
pub fn by_name(
    store: &dyn CategoryStore,
    expander: &dyn SynonymExpander,
    settings: &SearchSettings,
    query: &str,
    json: bool,
) -> Result<bool, CliError> {
    let matcher = CategoryMatcher::new(store, expander, settings);
    report(matcher.search_by_name(query)?, json)
}

/// By-pattern search over stored pattern bodies. `exact` switches to
/// store-side full-token matching per query token.
pub fn by_pattern(
    store: &dyn CategoryStore,
    expander: &dyn SynonymExpander,
    settings: &SearchSettings,
    query: &str,
    exact: bool,
    json: bool,
) -> Result<bool, CliError> {
    let outcome = if exact {
        exact_pattern_search(store, query)?
    } else {
        let matcher = CategoryMatcher::new(store, expander, settings);
        matcher.search_by_pattern(query)?
    };
    report(outcome, json)
}

/// Token-level exact scan: each query token must be a full
/// whitespace-delimited token of a LAT's pattern body, intersected
/// across tokens like the substring mode.
fn exact_pattern_search(
    store: &dyn CategoryStore,
    query: &str,
) -> Result<SearchOutcome, CliError> {
    let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if tokens.is_empty() {
        return Err(CliError::Invalid("empty query".into()));
    }

    let mut result: Option<Vec<MatchTriple>> = None;
    for token in &tokens {
        let mut triples = Vec::new();
        let mut seen = HashSet::new();
        for hit in store.find_lats(token, true)? {
            if seen.insert(hit.triple.clone()) {
                triples.push(hit.triple);
            }
        }
        result = Some(match result {
            None => triples,
            Some(mut acc) => {
                let set: HashSet<MatchTriple> = triples.into_iter().collect();
                acc.retain(|t| set.contains(t));
                acc
            }
        });
    }

    let matches = result.unwrap_or_default();
    if matches.is_empty() {
        Ok(SearchOutcome::NoMatches)
    } else {
        Ok(SearchOutcome::Tree(CategoryTree::from_matches(matches)))
    }
}

fn report(outcome: SearchOutcome, json: bool) -> Result<bool, CliError> {
    match outcome {
        SearchOutcome::Tree(tree) => {
            let view = TreeView::from_tree(&tree);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&view)
                        .map_err(|e| CliError::Invalid(e.to_string()))?
                );
            } else {
                print_tree(&view);
            }
            Ok(true)
        }
        SearchOutcome::NoMatches => {
            if json {
                println!("{{\"clusters\": []}}");
            } else {
                println!("no matches");
            }
            Ok(false)
        }
    }
}

fn print_tree(view: &TreeView) {
    for cluster in &view.clusters {
        println!("{}", cluster.name);
        for dimension in &cluster.dimensions {
            println!("  {}", dimension.name);
            for lat in &dimension.lats {
                println!("    {lat}");
            }
        }
    }
}
