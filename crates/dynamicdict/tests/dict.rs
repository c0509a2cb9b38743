//! Integration tests for the dynamic dictionary
//!
//! Covers the missing-key protocol end to end:
//! - Derivation from the key, storage, and repeat lookups
//! - Behavior without a factory and with failing factories
//! - Merge, equality, ordering, and copy semantics

use dynamicdict::{DictError, DynamicDict, Factory};
use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn upper() -> Factory<String, String> {
    Factory::new("upper", |k: &String| k.to_uppercase())
}

#[rstest]
#[case("rust", "RUST")]
#[case("", "")]
#[case("Mixed Case", "MIXED CASE")]
fn test_derivation_uses_the_key(#[case] key: &str, #[case] expected: &str) {
    let mut dict = DynamicDict::with_factory(upper());

    assert_eq!(dict.resolve(key.to_string()).unwrap(), expected);
    assert_eq!(dict.get(key), Some(&expected.to_string()));
}

#[test]
fn test_counting_with_constant_factory() {
    let mut counts = DynamicDict::with_factory(Factory::new("zero", |_: &char| 0u32));

    for c in "abracadabra".chars() {
        *counts.resolve_mut(c).unwrap() += 1;
    }

    assert_eq!(counts.get(&'a'), Some(&5));
    assert_eq!(counts.get(&'b'), Some(&2));
    assert_eq!(counts.get(&'r'), Some(&2));

    // Keys appear in first-seen order.
    let keys: Vec<char> = counts.keys().copied().collect();
    assert_eq!(keys, vec!['a', 'b', 'r', 'c', 'd']);
}

#[test]
fn test_missing_key_without_factory() {
    let mut dict: DynamicDict<String, String> = DynamicDict::new();

    let err = dict.resolve("absent".to_string()).unwrap_err();
    assert_eq!(err, DictError::key_not_found("\"absent\""));
    assert_eq!(err.to_string(), "key not found: \"absent\"");
    assert!(dict.is_empty());
}

#[test]
fn test_failing_factory_propagates_and_stores_nothing() {
    let parse = Factory::try_new("parse", |k: &String| {
        k.parse::<i64>()
            .map_err(|e| DictError::factory_failed(e.to_string()))
    });
    let mut dict = DynamicDict::with_factory(parse);

    assert_eq!(dict.resolve("42".to_string()), Ok(&42));
    assert!(matches!(
        dict.resolve("not a number".to_string()),
        Err(DictError::FactoryFailed { .. })
    ));
    assert_eq!(dict.len(), 1);
}

#[test]
fn test_merge_right_side_wins_left_factory_survives() {
    let left = DynamicDict::with_factory_and_entries(
        upper(),
        [
            ("a".to_string(), "A".to_string()),
            ("b".to_string(), "old".to_string()),
        ],
    );
    let right: DynamicDict<String, String> = [
        ("b".to_string(), "B".to_string()),
        ("c".to_string(), "C".to_string()),
    ]
    .into_iter()
    .collect();

    let mut merged = &left | &right;

    assert_eq!(merged.get("b"), Some(&"B".to_string()));
    let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);

    // The merged dict still derives through the left operand's factory.
    assert_eq!(merged.resolve("d".to_string()), Ok(&"D".to_string()));
}

#[test]
fn test_equality_against_plain_map() {
    let mut dict = DynamicDict::with_factory(upper());
    dict.resolve("x".to_string()).unwrap();

    let map: IndexMap<String, String> = [("x".to_string(), "X".to_string())].into_iter().collect();
    assert_eq!(dict, map);

    let other: DynamicDict<String, String> = map.into_iter().collect();
    assert_eq!(dict, other);
}

#[test]
fn test_copy_shares_factory_not_entries() {
    let mut original = DynamicDict::with_factory(upper());
    original.resolve("a".to_string()).unwrap();

    let mut copy = original.clone();
    copy.resolve("b".to_string()).unwrap();
    copy.remove("a");

    assert_eq!(original.len(), 1);
    assert_eq!(original.get("a"), Some(&"A".to_string()));
    assert_eq!(copy.get("a"), None);
    assert_eq!(copy.get("b"), Some(&"B".to_string()));
}

#[test]
fn test_into_iterator_orders() {
    let dict: DynamicDict<i32, i32> = [(2, 20), (1, 10), (3, 30)].into_iter().collect();

    let borrowed: Vec<(i32, i32)> = (&dict).into_iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(borrowed, vec![(2, 20), (1, 10), (3, 30)]);

    let owned: Vec<(i32, i32)> = dict.into_iter().collect();
    assert_eq!(owned, vec![(2, 20), (1, 10), (3, 30)]);
}
