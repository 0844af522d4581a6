#![cfg(feature = "persistent")]
//! Property-based tests for TreeMap.
//!
//! These tests check the get/insert/remove laws and compare every map with
//! a `BTreeMap` built from the same entries.

use std::collections::BTreeMap;

use proptest::prelude::*;
use strata::persistent::TreeMap;
use strata::typeclass::Semigroup;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

fn arbitrary_entries(max_size: usize) -> impl Strategy<Value = Vec<(i16, i32)>> {
    prop::collection::vec((any::<i16>(), any::<i32>()), 0..max_size)
}

// =============================================================================
// Get-Insert Laws
// =============================================================================

proptest! {
    /// Law: get after insert returns the inserted value.
    #[test]
    fn prop_get_insert_law(entries in arbitrary_entries(30), key: i16, value: i32) {
        let map: TreeMap<i16, i32> = entries.into_iter().collect();
        let inserted = map.insert(key, value);
        prop_assert_eq!(inserted.get(&key), Some(&value));
    }

    /// Law: insert does not affect other keys.
    #[test]
    fn prop_get_insert_other_law(entries in arbitrary_entries(30), first: i16, second: i16, value: i32) {
        prop_assume!(first != second);
        let map: TreeMap<i16, i32> = entries.into_iter().collect();
        let inserted = map.insert(first, value);
        prop_assert_eq!(inserted.get(&second), map.get(&second));
    }

    /// Law: inserting twice under one key keeps the later value and one entry.
    #[test]
    fn prop_insert_insert_law(entries in arbitrary_entries(30), key: i16, first: i32, second: i32) {
        let map: TreeMap<i16, i32> = entries.into_iter().collect();
        let once = map.insert(key, second);
        let twice = map.insert(key, first).insert(key, second);
        prop_assert_eq!(twice.len(), once.len());
        prop_assert_eq!(twice, once);
    }
}

// =============================================================================
// Remove Laws
// =============================================================================

proptest! {
    /// Law: get after remove returns None.
    #[test]
    fn prop_get_remove_law(entries in arbitrary_entries(30), key: i16) {
        let map: TreeMap<i16, i32> = entries.into_iter().collect();
        let removed = map.remove(&key);
        prop_assert_eq!(removed.get(&key), None);
    }

    /// Law: remove after insert of a fresh key restores the map.
    #[test]
    fn prop_remove_insert_law(entries in arbitrary_entries(30), key: i16, value: i32) {
        let map: TreeMap<i16, i32> = entries.into_iter().collect();
        prop_assume!(!map.contains_key(&key));
        prop_assert_eq!(map.insert(key, value).remove(&key), map);
    }
}

// =============================================================================
// Model Laws
// =============================================================================

proptest! {
    /// Law: a map and a BTreeMap built from the same entries agree.
    #[test]
    fn prop_matches_btreemap(entries in arbitrary_entries(100)) {
        let map: TreeMap<i16, i32> = entries.iter().copied().collect();
        let model: BTreeMap<i16, i32> = entries.into_iter().collect();
        prop_assert_eq!(map.len(), model.len());
        prop_assert!(map.iter().eq(model.iter()));
    }

    /// Law: merge agrees with extending a BTreeMap.
    #[test]
    fn prop_merge_matches_btreemap(left in arbitrary_entries(50), right in arbitrary_entries(50)) {
        let merged = left.iter().copied().collect::<TreeMap<i16, i32>>()
            .combine(right.iter().copied().collect());
        let mut model: BTreeMap<i16, i32> = left.into_iter().collect();
        model.extend(right);
        prop_assert_eq!(merged.len(), model.len());
        prop_assert!(merged.iter().eq(model.iter()));
    }

    /// Law: the exact-size iterator reports the remaining count.
    #[test]
    fn prop_iterator_len(entries in arbitrary_entries(60)) {
        let map: TreeMap<i16, i32> = entries.into_iter().collect();
        let mut iterator = map.iter();
        let mut remaining = map.len();
        while iterator.next().is_some() {
            remaining -= 1;
            prop_assert_eq!(iterator.len(), remaining);
        }
        prop_assert_eq!(remaining, 0);
    }
}
