//! Tests for guarded mutations.

use super::*;

#[test]
fn test_remove_stops_at_minimum() {
    let mut items = one_two_three();
    assert_eq!(items.remove(2), Some(3));
    assert_eq!(items.remove(1), Some(2));
    assert_eq!(items.remove(0), None);
    assert_eq!(items.to_vec(), vec![1]);
}

#[test]
fn test_remove_from_prefix_refills_it() {
    let mut items = MultiElementsArray::new(1, 2, vec![3, 4]);
    assert_eq!(items.remove(0), Some(1));
    assert_eq!(items.to_vec(), vec![2, 3, 4]);
    assert_eq!(items.remove(1), Some(3));
    assert_eq!(items.to_vec(), vec![2, 4]);
    assert_eq!(items.remove(0), None);
}

#[test]
fn test_remove_out_of_bounds() {
    let mut items = one_two_three();
    assert_eq!(items.remove(3), None);
    assert_eq!(items.len(), 3);
}

#[test]
fn test_pop_at_minimum() {
    let mut pair = MultiElementsArray::new(1, 2, vec![]);
    assert_eq!(pair.count().value(), 2);
    assert_eq!(pair.pop(), None);
    assert_eq!(pair.to_vec(), vec![1, 2]);

    pair.push(3);
    assert_eq!(pair.pop(), Some(3));
}

#[test]
fn test_remove_first() {
    let mut items = one_two_three();
    assert_eq!(items.remove_first(), Some(1));
    assert_eq!(items.remove_first(), Some(2));
    assert_eq!(items.remove_first(), None);
    assert_eq!(items.first(), &3);
}

#[test]
fn test_remove_first_n_clamps() {
    let mut items = MultiElementsArray::from_vec(vec![1, 2, 3, 4, 5]).unwrap();
    assert_eq!(items.remove_first_n(1), 1);
    assert_eq!(items.to_vec(), vec![2, 3, 4, 5]);
    assert_eq!(items.remove_first_n(10), 2);
    assert_eq!(items.to_vec(), vec![4, 5]);
    assert_eq!(items.remove_first_n(1), 0);
    assert_eq!(items.to_vec(), vec![4, 5]);
}

#[test]
fn test_remove_first_n_past_prefix() {
    let mut items = MultiElementsArray::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(items.remove_first_n(3), 3);
    assert_eq!(items.to_vec(), vec![4, 5, 6]);
}

#[test]
fn test_remove_last_n_clamps() {
    let mut items = one_two_three();
    assert_eq!(items.remove_last_n(5), 2);
    assert_eq!(items.to_vec(), vec![1]);
    assert_eq!(items.remove_last_n(1), 0);
}

#[test]
fn test_insert() {
    let mut items = MultiElementsArray::new(1, 3, vec![]);
    items.insert(1, 2);
    assert_eq!(items.to_vec(), vec![1, 2, 3]);
    items.insert(0, 0);
    assert_eq!(items.to_vec(), vec![0, 1, 2, 3]);
    items.insert(4, 4);
    assert_eq!(items.to_vec(), vec![0, 1, 2, 3, 4]);
}

#[test]
#[should_panic(expected = "insertion index")]
fn test_insert_past_end_panics() {
    let mut items = one_two_three();
    items.insert(5, 9);
}

#[test]
fn test_in_place_updates() {
    let mut items = one_two_three();
    items[0] = 10;
    *items.last_mut() = 30;
    if let Some(middle) = items.get_mut(1) {
        *middle = 20;
    }
    for item in items.iter_mut() {
        *item += 1;
    }
    assert_eq!(items.to_vec(), vec![11, 21, 31]);
    *items.first_mut() = 0;
    assert_eq!(items.first(), &0);
}

#[test]
fn test_concatenation() {
    let items = one_two_three() + vec![4, 5];
    assert_eq!(items.len(), 5);

    let mut items = items;
    items += std::iter::once(6);
    items.extend([7, 8]);
    assert_eq!(items.to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8]);

    let grown = items + one_two_three();
    assert_eq!(grown.len(), 11);
}

#[test]
fn test_swap_across_prefix_and_tail() {
    let mut items = MultiElementsArray::new('a', 'b', vec!['c', 'd']);
    items.swap(0, 3);
    items.swap(2, 1);
    assert_eq!(items.to_vec(), vec!['d', 'c', 'b', 'a']);
}
