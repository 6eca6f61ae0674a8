use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::StatAccumulator;

/// Aggregate of per-unit accumulators keyed by group, with a side table
/// of member unit ids per group. Group iteration follows first
/// appearance in the folded input.
#[derive(Clone, Debug, Default)]
pub struct Aggregation {
    order: Vec<String>,
    groups: HashMap<String, StatAccumulator>,
    members: HashMap<String, Vec<String>>,
}

impl Aggregation {
    pub fn get(&self, key: &str) -> Option<&StatAccumulator> {
        self.groups.get(key)
    }

    pub fn members(&self, key: &str) -> &[String] {
        self.members.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Iterate groups in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatAccumulator)> {
        self.order
            .iter()
            .filter_map(|key| self.groups.get(key).map(|acc| (key.as_str(), acc)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Fold an ordered sequence of (unit id, accumulator) pairs into one
/// accumulator per group key. Every unit creates or touches its group,
/// empty accumulators included. Units are consumed by value, so each
/// contributes exactly once.
pub fn aggregate<I, F>(units: I, mut key_of: F) -> Aggregation
where
    I: IntoIterator<Item = (String, StatAccumulator)>,
    F: FnMut(&str) -> String,
{
    let mut agg = Aggregation::default();
    for (unit, acc) in units {
        let key = key_of(&unit);
        let group = match agg.groups.entry(key.clone()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(v) => {
                agg.order.push(key.clone());
                v.insert(StatAccumulator::new())
            }
        };
        group.merge(&acc);
        agg.members.entry(key).or_default().push(unit);
    }
    agg
}
