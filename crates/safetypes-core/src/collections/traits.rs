//! Capability trait shared by all minimum-length collections.

use std::cmp::Ordering;

use rand::Rng;

use crate::invariant::hold;
use crate::num::Positive;

/// A sequence that never holds fewer than [`MIN_LEN`](Self::MIN_LEN) elements.
///
/// Implementors supply indexed reads and a single reordering primitive,
/// [`swap`](Self::swap). Every other reordering operation (reverse, shuffle,
/// partition, sort) is built here on top of `swap`, so none of them can
/// change the length.
///
/// # Examples
///
/// ```
/// use safetypes_core::{GuardedSequence, NonEmptyArray};
///
/// let mut digits = NonEmptyArray::new(3, vec![1, 2]);
/// digits.sort();
/// assert_eq!(digits.to_vec(), vec![1, 2, 3]);
///
/// let split = digits.partition(|d| *d >= 2);
/// assert_eq!(split, 1);
/// assert_eq!(digits.count().value(), 3);
/// ```
pub trait GuardedSequence {
    /// Element type.
    type Item;

    /// The minimum number of elements, fixed by the type.
    const MIN_LEN: usize;

    /// Returns the number of elements, never less than `MIN_LEN`.
    fn len(&self) -> usize;

    /// Returns the element at `index`, if any.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    fn swap(&mut self, a: usize, b: usize);

    /// Always false.
    fn is_empty(&self) -> bool {
        false
    }

    /// Returns the length as a [`Positive`] count.
    fn count(&self) -> Positive<usize> {
        hold(Positive::new(self.len()), "len", "Positive")
    }

    /// Returns how many elements can be removed before reaching `MIN_LEN`.
    fn removable(&self) -> usize {
        self.len().saturating_sub(Self::MIN_LEN)
    }

    /// Returns true if no element can be removed.
    fn is_at_minimum(&self) -> bool {
        self.removable() == 0
    }

    /// Reverses the order of the elements in place.
    fn reverse(&mut self) {
        let len = self.len();
        for i in 0..len / 2 {
            self.swap(i, len - 1 - i);
        }
    }

    /// Shuffles the elements in place (Fisher-Yates).
    fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for i in (1..self.len()).rev() {
            let j = rng.random_range(0..=i);
            self.swap(i, j);
        }
    }

    /// Reorders the elements so that all elements matching the predicate
    /// come after all elements that do not.
    ///
    /// Returns the index of the first element of the second partition. The
    /// relative order inside each partition is not preserved.
    fn partition<P>(&mut self, mut belongs_in_second: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut flags: Vec<bool> = (0..self.len())
            .filter_map(|i| self.get(i))
            .map(&mut belongs_in_second)
            .collect();

        let (mut low, mut high) = (0, flags.len());
        loop {
            while low < high && !flags[low] {
                low += 1;
            }
            while low < high && flags[high - 1] {
                high -= 1;
            }
            if low >= high {
                return low;
            }
            self.swap(low, high - 1);
            flags.swap(low, high - 1);
            low += 1;
            high -= 1;
        }
    }

    /// Sorts the elements with a comparator. The sort is stable.
    fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let order = {
            let items: Vec<&Self::Item> = (0..self.len()).filter_map(|i| self.get(i)).collect();
            let mut order: Vec<usize> = (0..items.len()).collect();
            order.sort_by(|&a, &b| compare(items[a], items[b]));
            order
        };
        permute(self, &order);
    }

    /// Sorts the elements in ascending order. The sort is stable.
    fn sort(&mut self)
    where
        Self::Item: Ord,
    {
        self.sort_by(Ord::cmp);
    }

    /// Sorts the elements by the key extracted with `f`. The sort is stable.
    fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)));
    }

    /// Returns the sequence with its elements in reverse order.
    fn reversed(mut self) -> Self
    where
        Self: Sized,
    {
        self.reverse();
        self
    }

    /// Returns the sequence shuffled with `rng`.
    fn shuffled<R>(mut self, rng: &mut R) -> Self
    where
        Self: Sized,
        R: Rng + ?Sized,
    {
        self.shuffle(rng);
        self
    }

    /// Returns the sequence sorted in ascending order.
    fn sorted(mut self) -> Self
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.sort();
        self
    }

    /// Returns the sequence sorted with a comparator.
    fn sorted_by<F>(mut self, compare: F) -> Self
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.sort_by(compare);
        self
    }
}

/// Moves the element at `order[i]` to position `i`, using only swaps.
fn permute<S>(sequence: &mut S, order: &[usize])
where
    S: GuardedSequence + ?Sized,
{
    let mut placed = vec![false; order.len()];
    for start in 0..order.len() {
        if placed[start] {
            continue;
        }
        let mut slot = start;
        loop {
            placed[slot] = true;
            let source = order[slot];
            if source == start {
                break;
            }
            sequence.swap(slot, source);
            slot = source;
        }
    }
}
