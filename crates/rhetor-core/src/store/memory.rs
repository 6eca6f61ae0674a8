use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CategoryInfo, CategoryMatches, CategoryStore, LatPatterns, PatternHit, StoreError};
use crate::taxonomy::MatchTriple;

/// One LAT record in a taxonomy file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LatRecord {
    pub cluster: String,
    pub dimension: String,
    pub lat: String,
    pub original: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised: Option<String>,
}

/// Cluster or dimension metadata record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InfoRecord {
    pub name: String,
    pub help: String,
}

/// JSON taxonomy file format consumed by `MemoryCategoryStore`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TaxonomyFile {
    pub lats: Vec<LatRecord>,
    #[serde(default)]
    pub clusters: Vec<InfoRecord>,
    #[serde(default)]
    pub dimensions: Vec<InfoRecord>,
}

#[derive(Debug)]
struct LatEntry {
    triple: MatchTriple,
    patterns: LatPatterns,
    /// Effective body lower-cased once at build time; `find_lats` scans
    /// this instead of lowering per query.
    body_lower: String,
}

/// In-memory category store with record insertion order preserved in all
/// search results.
#[derive(Debug)]
pub struct MemoryCategoryStore {
    lats: Vec<LatEntry>,
    by_lat: HashMap<String, usize>,
    clusters: HashMap<String, CategoryInfo>,
    dimensions: HashMap<String, CategoryInfo>,
}

impl MemoryCategoryStore {
    pub fn from_records(taxonomy: TaxonomyFile) -> Self {
        let mut lats = Vec::with_capacity(taxonomy.lats.len());
        let mut by_lat = HashMap::new();
        for record in taxonomy.lats {
            let patterns = LatPatterns {
                revised: record.revised,
                original: record.original,
            };
            let entry = LatEntry {
                triple: MatchTriple::new(record.cluster, record.dimension, record.lat),
                body_lower: patterns.effective().to_lowercase(),
                patterns,
            };
            by_lat.insert(entry.triple.lat.clone(), lats.len());
            lats.push(entry);
        }
        let clusters = taxonomy
            .clusters
            .into_iter()
            .map(|r| {
                (
                    r.name.clone(),
                    CategoryInfo {
                        name: r.name,
                        help: r.help,
                    },
                )
            })
            .collect();
        let dimensions = taxonomy
            .dimensions
            .into_iter()
            .map(|r| {
                (
                    r.name.clone(),
                    CategoryInfo {
                        name: r.name,
                        help: r.help,
                    },
                )
            })
            .collect();
        Self {
            lats,
            by_lat,
            clusters,
            dimensions,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let taxonomy: TaxonomyFile =
            serde_json::from_str(json).map_err(|e| StoreError::Parse(e.to_string()))?;
        Ok(Self::from_records(taxonomy))
    }

    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let json = fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            lats = store.lats.len(),
            "loaded taxonomy"
        );
        Ok(store)
    }

    /// Iterate over all triples in record order.
    pub fn iter(&self) -> impl Iterator<Item = &MatchTriple> {
        self.lats.iter().map(|e| &e.triple)
    }

    /// Returns (lat_count, cluster_count, dimension_count) over the
    /// stored records.
    pub fn stats(&self) -> (usize, usize, usize) {
        let mut clusters = std::collections::HashSet::new();
        let mut dimensions = std::collections::HashSet::new();
        for e in &self.lats {
            clusters.insert(e.triple.cluster.as_str());
            dimensions.insert((e.triple.cluster.as_str(), e.triple.dimension.as_str()));
        }
        (self.lats.len(), clusters.len(), dimensions.len())
    }
}

impl CategoryStore for MemoryCategoryStore {
    fn patterns(&self, lat: &str) -> Result<LatPatterns, StoreError> {
        self.by_lat
            .get(lat)
            .map(|&i| self.lats[i].patterns.clone())
            .ok_or_else(|| StoreError::NotFound {
                kind: "LAT",
                name: lat.to_string(),
            })
    }

    fn find_categories(
        &self,
        pattern: &str,
        lat_names_only: bool,
        exact: bool,
    ) -> Result<CategoryMatches, StoreError> {
        let re = if exact {
            regex::Regex::new(&format!("^(?:{pattern})$"))?
        } else {
            regex::Regex::new(pattern)?
        };

        let mut matches = CategoryMatches::default();
        let mut seen_lats = std::collections::HashSet::new();
        let mut seen_dims = std::collections::HashSet::new();
        for entry in &self.lats {
            if re.is_match(&entry.triple.lat) && seen_lats.insert(&entry.triple.lat) {
                matches.lats.push(entry.triple.clone());
            }
            if !lat_names_only && re.is_match(&entry.triple.dimension) {
                let pair = (entry.triple.cluster.clone(), entry.triple.dimension.clone());
                if seen_dims.insert(pair.clone()) {
                    matches.dimensions.push(pair);
                }
            }
        }
        Ok(matches)
    }

    fn find_lats(&self, pattern: &str, exact: bool) -> Result<Vec<PatternHit>, StoreError> {
        let needle = pattern.to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        let hits = self
            .lats
            .iter()
            .filter(|entry| {
                if exact {
                    entry.body_lower.split_whitespace().any(|tok| tok == needle)
                } else {
                    entry.body_lower.contains(&needle)
                }
            })
            .map(|entry| PatternHit {
                triple: entry.triple.clone(),
                text: entry.patterns.effective().to_string(),
            })
            .collect();
        Ok(hits)
    }

    fn cluster_info(&self, name: &str) -> Option<CategoryInfo> {
        self.clusters.get(name).cloned()
    }

    fn dimension_info(&self, name: &str) -> Option<CategoryInfo> {
        self.dimensions.get(name).cloned()
    }
}
