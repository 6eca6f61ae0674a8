//! Category taxonomy: three string-keyed levels, cluster ⊃ dimension ⊃ LAT.
//!
//! Names are opaque interned strings with `_` as the canonical word
//! separator; human-facing text uses spaces. `CategoryTree` preserves
//! first-seen insertion order at every level for deterministic display.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// One taxonomy lookup result: a (cluster, dimension, LAT) identifier tuple.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchTriple {
    pub cluster: String,
    pub dimension: String,
    pub lat: String,
}

impl MatchTriple {
    pub fn new(
        cluster: impl Into<String>,
        dimension: impl Into<String>,
        lat: impl Into<String>,
    ) -> Self {
        Self {
            cluster: cluster.into(),
            dimension: dimension.into(),
            lat: lat.into(),
        }
    }
}

/// Internal name → human-facing text (underscores become spaces).
pub fn to_display(name: &str) -> String {
    name.replace('_', " ")
}

/// Human-facing text → internal name (spaces become underscores).
pub fn to_internal(text: &str) -> String {
    text.replace(' ', "_")
}

// ---------------------------------------------------------------------------
// CategoryTree
// ---------------------------------------------------------------------------

/// Three-level match hierarchy built from a flattened triple list.
///
/// Built fresh per query and not mutated after being returned. Children
/// are Vec-backed so first-seen order survives into display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTree {
    clusters: Vec<ClusterNode>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClusterNode {
    name: String,
    dimensions: Vec<DimensionNode>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DimensionNode {
    name: String,
    lats: Vec<LatNode>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LatNode {
    name: String,
}

impl CategoryTree {
    /// Build a tree from triples in input order. Re-encountering an
    /// already-present triple is a no-op, so the build is idempotent.
    pub fn from_matches(matches: impl IntoIterator<Item = MatchTriple>) -> Self {
        let mut tree = Self::default();
        for triple in matches {
            tree.insert(&triple);
        }
        tree
    }

    fn insert(&mut self, triple: &MatchTriple) {
        let cluster = match self.clusters.iter().position(|c| c.name == triple.cluster) {
            Some(i) => &mut self.clusters[i],
            None => {
                self.clusters.push(ClusterNode {
                    name: triple.cluster.clone(),
                    dimensions: Vec::new(),
                });
                self.clusters.last_mut().unwrap()
            }
        };
        let dimension = match cluster
            .dimensions
            .iter()
            .position(|d| d.name == triple.dimension)
        {
            Some(i) => &mut cluster.dimensions[i],
            None => {
                cluster.dimensions.push(DimensionNode {
                    name: triple.dimension.clone(),
                    lats: Vec::new(),
                });
                cluster.dimensions.last_mut().unwrap()
            }
        };
        if !dimension.lats.iter().any(|l| l.name == triple.lat) {
            dimension.lats.push(LatNode {
                name: triple.lat.clone(),
            });
        }
    }

    pub fn clusters(&self) -> &[ClusterNode] {
        &self.clusters
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn contains(&self, triple: &MatchTriple) -> bool {
        self.clusters.iter().any(|c| {
            c.name == triple.cluster
                && c.dimensions.iter().any(|d| {
                    d.name == triple.dimension && d.lats.iter().any(|l| l.name == triple.lat)
                })
        })
    }

    /// Total number of LAT leaves.
    pub fn lat_count(&self) -> usize {
        self.clusters
            .iter()
            .flat_map(|c| &c.dimensions)
            .map(|d| d.lats.len())
            .sum()
    }
}

impl ClusterNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> &[DimensionNode] {
        &self.dimensions
    }
}

impl DimensionNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lats(&self) -> &[LatNode] {
        &self.lats
    }
}

impl LatNode {
    pub fn name(&self) -> &str {
        &self.name
    }
}
