//! Property tests for the cardinality laws.

use super::*;
use proptest::prelude::*;
use safetypes_test::strategies::{int_vec, non_empty_text, text};

proptest! {
    #[test]
    fn prop_construction_requires_minimum(items in int_vec(0, 8)) {
        prop_assert_eq!(NonEmptyArray::from_vec(items.clone()).is_some(), !items.is_empty());
        prop_assert_eq!(MultiElementsArray::from_vec(items.clone()).is_some(), items.len() >= 2);
    }

    #[test]
    fn prop_removals_never_break_minimum(items in int_vec(2, 12), ops in prop::collection::vec(0usize..6, 0..20)) {
        let mut seq = MultiElementsArray::from_vec(items).unwrap();
        for op in ops {
            let before = seq.len();
            match op {
                0 => { seq.remove(0); }
                1 => { seq.remove(before - 1); }
                2 => { seq.pop(); }
                3 => { seq.remove_first(); }
                4 => { seq.remove_first_n(3); }
                _ => { seq.remove_last_n(3); }
            }
            prop_assert!(seq.len() >= 2);
            if before == 2 {
                prop_assert_eq!(seq.len(), 2);
            }
        }
    }

    #[test]
    fn prop_remove_matches_vec(items in int_vec(2, 12), index in 0usize..12) {
        let mut seq = NonEmptyArray::from_vec(items.clone()).unwrap();
        let mut expected = items;
        let removed = seq.remove(index);
        if index < expected.len() && expected.len() > 1 {
            prop_assert_eq!(removed, Some(expected.remove(index)));
        } else {
            prop_assert_eq!(removed, None);
        }
        prop_assert_eq!(seq.to_vec(), expected);
    }

    #[test]
    fn prop_remove_first_n_matches_drain(items in int_vec(2, 12), count in 0usize..16) {
        let mut seq = MultiElementsArray::from_vec(items.clone()).unwrap();
        let removed = seq.remove_first_n(count);
        prop_assert_eq!(removed, count.min(items.len() - 2));
        prop_assert_eq!(seq.to_vec(), items[removed..].to_vec());
    }

    #[test]
    fn prop_insert_matches_vec(items in int_vec(2, 8), index in 0usize..9, item in any::<i32>()) {
        let index = index.min(items.len());
        let mut seq = MultiElementsArray::from_vec(items.clone()).unwrap();
        let mut expected = items;
        seq.insert(index, item);
        expected.insert(index, item);
        prop_assert_eq!(seq.to_vec(), expected);
    }

    #[test]
    fn prop_reversed_twice_is_identity(items in int_vec(1, 12)) {
        let seq = NonEmptyArray::from_vec(items).unwrap();
        prop_assert_eq!(seq.clone().reversed().reversed(), seq);
    }

    #[test]
    fn prop_sort_matches_vec(items in int_vec(2, 12)) {
        let sorted = MultiElementsArray::from_vec(items.clone()).unwrap().sorted();
        let mut expected = items;
        expected.sort();
        prop_assert_eq!(sorted.to_vec(), expected);
    }

    #[test]
    fn prop_ordering_matches_vec(a in int_vec(1, 6), b in int_vec(1, 6)) {
        let left = NonEmptyArray::from_vec(a.clone()).unwrap();
        let right = NonEmptyArray::from_vec(b.clone()).unwrap();
        prop_assert_eq!(left.cmp(&right), a.cmp(&b));
    }

    #[test]
    fn prop_string_round_trip(s in non_empty_text()) {
        let text = NonEmptyString::new(&s).unwrap();
        prop_assert_eq!(text.as_string(), s.clone());
        prop_assert_eq!(text.into_string(), s);
    }

    #[test]
    fn prop_string_rejects_only_empty(s in text()) {
        prop_assert_eq!(NonEmptyString::new(&s).is_some(), !s.is_empty());
    }
}
