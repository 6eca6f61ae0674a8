use proptest::prelude::*;

use super::*;

fn triple(cluster: &str, dimension: &str, lat: &str) -> MatchTriple {
    MatchTriple::new(cluster, dimension, lat)
}

#[test]
fn test_build_single_leaf_per_triple() {
    let tree = CategoryTree::from_matches([triple("C", "D", "L")]);
    assert_eq!(tree.clusters().len(), 1);
    assert_eq!(tree.clusters()[0].dimensions().len(), 1);
    assert_eq!(tree.clusters()[0].dimensions()[0].lats().len(), 1);
    assert!(tree.contains(&triple("C", "D", "L")));
}

#[test]
fn test_build_is_idempotent() {
    let once = CategoryTree::from_matches([triple("C", "D", "L")]);
    let twice = CategoryTree::from_matches([triple("C", "D", "L"), triple("C", "D", "L")]);
    assert_eq!(once, twice);
}

#[test]
fn test_insertion_order_preserved() {
    let tree = CategoryTree::from_matches([
        triple("B", "D2", "L3"),
        triple("A", "D1", "L1"),
        triple("B", "D2", "L2"),
        triple("A", "D3", "L4"),
    ]);
    let names: Vec<&str> = tree.clusters().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["B", "A"]);
    let b_lats: Vec<&str> = tree.clusters()[0].dimensions()[0]
        .lats()
        .iter()
        .map(|l| l.name())
        .collect();
    assert_eq!(b_lats, ["L3", "L2"]);
    let a_dims: Vec<&str> = tree.clusters()[1]
        .dimensions()
        .iter()
        .map(|d| d.name())
        .collect();
    assert_eq!(a_dims, ["D1", "D3"]);
}

#[test]
fn test_same_lat_name_under_different_dimensions() {
    let tree = CategoryTree::from_matches([triple("C", "D1", "L"), triple("C", "D2", "L")]);
    assert_eq!(tree.lat_count(), 2);
    assert!(tree.contains(&triple("C", "D1", "L")));
    assert!(tree.contains(&triple("C", "D2", "L")));
}

#[test]
fn test_empty_tree() {
    let tree = CategoryTree::from_matches([]);
    assert!(tree.is_empty());
    assert_eq!(tree.lat_count(), 0);
}

#[test]
fn test_display_transform() {
    assert_eq!(to_display("Think_Positive"), "Think Positive");
    assert_eq!(to_internal("Think Positive"), "Think_Positive");
}

proptest! {
    /// Internal names never contain spaces, so converting out to display
    /// text and back is lossless.
    #[test]
    fn prop_name_transform_round_trip(name in "[A-Za-z0-9_]{0,40}") {
        prop_assert_eq!(to_internal(&to_display(&name)), name);
    }
}
