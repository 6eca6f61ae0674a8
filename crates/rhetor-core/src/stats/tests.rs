use proptest::prelude::*;

use super::*;

const KINDS: [CountKind; 3] = [CountKind::Cluster, CountKind::Dimension, CountKind::Lat];

#[test]
fn test_count_increments() {
    let mut acc = StatAccumulator::new();
    acc.add_cluster("Emotion");
    acc.add_cluster("Emotion");
    acc.add_dimension("PositiveAffect");
    acc.add_lat("HappyTalk");
    assert_eq!(acc.count(CountKind::Cluster, "Emotion"), Some(2));
    assert_eq!(acc.count(CountKind::Dimension, "PositiveAffect"), Some(1));
    assert_eq!(acc.count(CountKind::Lat, "HappyTalk"), Some(1));
}

#[test]
fn test_count_absent_is_none() {
    let acc = StatAccumulator::new();
    assert_eq!(acc.count(CountKind::Cluster, "Emotion"), None);
}

#[test]
fn test_kinds_are_independent() {
    let mut acc = StatAccumulator::new();
    acc.add_cluster("Shared");
    assert_eq!(acc.count(CountKind::Cluster, "Shared"), Some(1));
    assert_eq!(acc.count(CountKind::Dimension, "Shared"), None);
    assert_eq!(acc.count(CountKind::Lat, "Shared"), None);
}

#[test]
fn test_document_frequency() {
    let mut acc = StatAccumulator::new();
    acc.push_text("one two three four");
    acc.add_lat("L");
    acc.add_lat("L");
    let f = acc
        .frequency(CountKind::Lat, "L", FrequencyMethod::Document)
        .unwrap();
    assert!((f - 0.5).abs() < 1e-12);
}

#[test]
fn test_document_frequency_empty_text_is_zero() {
    let mut acc = StatAccumulator::new();
    acc.add_cluster("X");
    let f = acc
        .frequency(CountKind::Cluster, "X", FrequencyMethod::Document)
        .unwrap();
    assert_eq!(f, 0.0);
}

#[test]
fn test_log_frequency() {
    let mut acc = StatAccumulator::new();
    for _ in 0..9 {
        acc.add_lat("L");
    }
    let f = acc
        .frequency(CountKind::Lat, "L", FrequencyMethod::Log)
        .unwrap();
    assert!((f - 1.0).abs() < 1e-12);
}

#[test]
fn test_frequency_absent_is_none() {
    let acc = StatAccumulator::new();
    assert_eq!(acc.frequency(CountKind::Lat, "L", FrequencyMethod::Log), None);
    assert_eq!(
        acc.frequency(CountKind::Lat, "L", FrequencyMethod::Document),
        None
    );
}

#[test]
fn test_merge_adds_counts_and_text() {
    let mut a = StatAccumulator::new();
    a.add_cluster("C");
    a.push_text("first span");
    let mut b = StatAccumulator::new();
    b.add_cluster("C");
    b.add_dimension("D");
    b.push_text("second span");

    a.merge(&b);
    assert_eq!(a.count(CountKind::Cluster, "C"), Some(2));
    assert_eq!(a.count(CountKind::Dimension, "D"), Some(1));
    assert_eq!(a.text(), "first span second span");
    assert_eq!(a.word_count(), 4);
}

#[test]
fn test_merge_empty_text_adds_no_separator() {
    let mut a = StatAccumulator::new();
    a.push_text("span");
    a.merge(&StatAccumulator::new());
    assert_eq!(a.text(), "span");
}

#[test]
fn test_entries_sorted() {
    let mut acc = StatAccumulator::new();
    acc.add_lat("B");
    acc.add_lat("A");
    acc.add_lat("B");
    assert_eq!(acc.entries(CountKind::Lat), [("A", 1), ("B", 2)]);
}

#[test]
fn test_aggregate_grouping() {
    let mut units = Vec::new();
    for unit in ["u1", "u2", "u3"] {
        let mut acc = StatAccumulator::new();
        acc.add_lat("L");
        units.push((unit.to_string(), acc));
    }
    let agg = aggregate(units, |unit| {
        if unit == "u3" { "p2" } else { "p1" }.to_string()
    });

    assert_eq!(agg.len(), 2);
    assert_eq!(agg.get("p1").unwrap().count(CountKind::Lat, "L"), Some(2));
    assert_eq!(agg.get("p2").unwrap().count(CountKind::Lat, "L"), Some(1));
    assert_eq!(agg.members("p1"), ["u1".to_string(), "u2".to_string()]);
    assert_eq!(agg.members("p2"), ["u3".to_string()]);
}

#[test]
fn test_aggregate_order_is_first_appearance() {
    let units = vec![
        ("u1".to_string(), StatAccumulator::new()),
        ("u2".to_string(), StatAccumulator::new()),
        ("u3".to_string(), StatAccumulator::new()),
    ];
    let agg = aggregate(units, |unit| {
        match unit {
            "u1" | "u3" => "z",
            _ => "a",
        }
        .to_string()
    });
    let order: Vec<&str> = agg.keys().collect();
    assert_eq!(order, ["z", "a"]);
}

#[test]
fn test_aggregate_empty_unit_still_creates_group() {
    let agg = aggregate(
        vec![("u1".to_string(), StatAccumulator::new())],
        |_| "p1".to_string(),
    );
    assert_eq!(agg.len(), 1);
    assert!(agg.get("p1").unwrap().is_empty());
    assert_eq!(agg.members("p1"), ["u1".to_string()]);
}

#[test]
fn test_aggregate_unknown_key_lookups() {
    let agg = aggregate(Vec::new(), |_: &str| String::new());
    assert!(agg.is_empty());
    assert!(agg.get("p1").is_none());
    assert!(agg.members("p1").is_empty());
}

// ---------------------------------------------------------------------------
// Property tests: counter algebra
// ---------------------------------------------------------------------------

/// (kind index, name index, text) triples make cheap arbitrary
/// accumulators over a small name alphabet so collisions actually occur.
fn arb_accumulator() -> impl Strategy<Value = StatAccumulator> {
    let step = (0usize..3, 0usize..4);
    (proptest::collection::vec(step, 0..20), "[a-c ]{0,12}").prop_map(|(steps, text)| {
        let mut acc = StatAccumulator::new();
        for (kind_idx, name_idx) in steps {
            let name = ["W", "X", "Y", "Z"][name_idx];
            acc.add(KINDS[kind_idx], name);
        }
        acc.push_text(text.trim());
        acc
    })
}

fn counters_equal(a: &StatAccumulator, b: &StatAccumulator) -> bool {
    KINDS.iter().all(|&kind| a.entries(kind) == b.entries(kind))
}

proptest! {
    #[test]
    fn prop_merge_associative(
        a in arb_accumulator(),
        b in arb_accumulator(),
        c in arb_accumulator(),
    ) {
        let mut left = a.clone();
        left.merge(&b);
        left.merge(&c);

        let mut bc = b.clone();
        bc.merge(&c);
        let mut right = a.clone();
        right.merge(&bc);

        // Space-separated concatenation is associative too, so the whole
        // accumulator matches, text included.
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_merge_commutative_on_counters(
        a in arb_accumulator(),
        b in arb_accumulator(),
    ) {
        let mut ab = a.clone();
        ab.merge(&b);
        let mut ba = b.clone();
        ba.merge(&a);
        prop_assert!(counters_equal(&ab, &ba));
        prop_assert_eq!(ab.word_count(), ba.word_count());
    }
}
