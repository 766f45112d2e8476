//! MinVec - a vector with a guaranteed minimum length

use std::cmp::Ordering;
use std::fmt;
use std::iter::{Skip, Take};
use std::mem;
use std::ops::{Add, AddAssign, Index, IndexMut};

use rand::Rng;
use tracing::trace;

use super::iter::{IntoIter, Iter, IterMut};
use super::traits::GuardedSequence;
use crate::error::CardinalityError;
use crate::invariant::hold;
use crate::num::Positive;

/// A vector that always holds at least `MIN` elements.
///
/// The first `MIN` elements are stored in a fixed-size array and the rest in
/// an unconstrained tail, so the minimum is a property of the type's shape
/// rather than a check repeated on every read. Operations that would shrink
/// the vector below `MIN` return `None` (or clamp their count) and leave it
/// untouched.
///
/// Use the aliases [`NonEmptyArray`] (`MIN = 1`) and [`MultiElementsArray`]
/// (`MIN = 2`).
///
/// # Examples
///
/// ```
/// use safetypes_core::NonEmptyArray;
///
/// let mut items = NonEmptyArray::new(1, vec![2, 3]);
/// assert_eq!(items.remove(2), Some(3));
/// assert_eq!(items.remove(1), Some(2));
/// assert_eq!(items.remove(0), None);
/// assert_eq!(items.to_vec(), vec![1]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MinVec<T, const MIN: usize> {
    prefix: [T; MIN],
    tail: Vec<T>,
}

/// A sequence with at least one element.
pub type NonEmptyArray<T> = MinVec<T, 1>;

/// A sequence with at least two elements.
pub type MultiElementsArray<T> = MinVec<T, 2>;

impl<T, const MIN: usize> MinVec<T, MIN> {
    const NON_EMPTY: () = assert!(MIN > 0, "MinVec requires a minimum of at least one element");

    /// Creates a vector from its guaranteed prefix and a tail of any length.
    pub fn from_parts(prefix: [T; MIN], tail: Vec<T>) -> Self {
        let () = Self::NON_EMPTY;
        Self { prefix, tail }
    }

    /// Creates a vector from `items`, or `None` if there are fewer than `MIN`.
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        Self::try_from(items).ok()
    }

    /// Collects `iter`, or returns `None` if it yields fewer than `MIN` items.
    pub fn from_iter_checked<I>(iter: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec(iter.into_iter().collect())
    }

    /// Creates a vector holding `count` clones of `value`, or `None` if
    /// `count` is less than `MIN`.
    pub fn repeating(value: T, count: usize) -> Option<Self>
    where
        T: Clone,
    {
        if count < MIN {
            trace!(minimum = MIN, count, "rejected repeat count below minimum length");
            return None;
        }
        Self::from_vec(vec![value; count])
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        MIN + self.tail.len()
    }

    /// Returns the number of elements as a [`Positive`] count.
    #[inline]
    pub fn count(&self) -> Positive<usize> {
        hold(Positive::new(self.len()), "len", "Positive")
    }

    /// Always false.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the first element.
    #[inline]
    pub fn first(&self) -> &T {
        &self.prefix[0]
    }

    /// Returns a mutable reference to the first element.
    #[inline]
    pub fn first_mut(&mut self) -> &mut T {
        &mut self.prefix[0]
    }

    /// Returns the last element.
    #[inline]
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.prefix[MIN - 1])
    }

    /// Returns a mutable reference to the last element.
    pub fn last_mut(&mut self) -> &mut T {
        match self.tail.last_mut() {
            Some(last) => last,
            None => &mut self.prefix[MIN - 1],
        }
    }

    /// Returns the element at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < MIN {
            self.prefix.get(index)
        } else {
            self.tail.get(index - MIN)
        }
    }

    /// Returns a mutable reference to the element at `index`, if any.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < MIN {
            self.prefix.get_mut(index)
        } else {
            self.tail.get_mut(index - MIN)
        }
    }

    /// Returns the guaranteed prefix and the tail as two slices.
    ///
    /// Their concatenation is the whole sequence.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        (&self.prefix, &self.tail)
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.prefix, &self.tail)
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.prefix, &mut self.tail)
    }

    /// Copies the elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Converts into a `Vec` without cloning.
    pub fn into_vec(self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len());
        items.extend(self.prefix);
        items.extend(self.tail);
        items
    }

    /// Returns true if the sequence contains `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == item)
    }

    /// Returns the index of the first element matching the predicate.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Returns the index of the last element matching the predicate.
    pub fn rposition<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().rposition(|item| predicate(item))
    }

    /// Returns the last element matching the predicate.
    pub fn rfind<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().rev().find(|item| predicate(item))
    }

    /// Returns references to the elements matching the predicate.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).collect()
    }

    /// Iterates over at most the first `n` elements.
    pub fn prefix(&self, n: usize) -> Take<Iter<'_, T>> {
        self.iter().take(n)
    }

    /// Iterates over at most the last `n` elements.
    pub fn suffix(&self, n: usize) -> Skip<Iter<'_, T>> {
        self.iter().skip(self.len().saturating_sub(n))
    }

    /// Iterates over the elements after the first `n`.
    pub fn drop_first(&self, n: usize) -> Skip<Iter<'_, T>> {
        self.iter().skip(n)
    }

    /// Iterates over all but the last `n` elements.
    pub fn drop_last(&self, n: usize) -> Take<Iter<'_, T>> {
        self.iter().take(self.len().saturating_sub(n))
    }

    /// Returns the greatest element according to `compare`.
    ///
    /// If several elements are equally maximum, the last one is returned.
    pub fn max_by<F>(&self, mut compare: F) -> &T
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.iter()
            .skip(1)
            .fold(self.first(), |best, item| match compare(best, item) {
                Ordering::Greater => best,
                _ => item,
            })
    }

    /// Returns the least element according to `compare`.
    ///
    /// If several elements are equally minimum, the first one is returned.
    pub fn min_by<F>(&self, mut compare: F) -> &T
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.iter()
            .skip(1)
            .fold(self.first(), |best, item| match compare(best, item) {
                Ordering::Greater => item,
                _ => best,
            })
    }

    /// Returns the element with the greatest key.
    pub fn max_by_key<K, F>(&self, mut f: F) -> &T
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.max_by(|a, b| f(a).cmp(&f(b)))
    }

    /// Returns the element with the least key.
    pub fn min_by_key<K, F>(&self, mut f: F) -> &T
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.min_by(|a, b| f(a).cmp(&f(b)))
    }

    /// Returns the greatest element. Never fails, the sequence is not empty.
    pub fn max_element(&self) -> &T
    where
        T: Ord,
    {
        self.max_by(Ord::cmp)
    }

    /// Returns the least element. Never fails, the sequence is not empty.
    pub fn min_element(&self) -> &T
    where
        T: Ord,
    {
        self.min_by(Ord::cmp)
    }

    /// Returns a uniformly chosen element.
    pub fn random_element<R>(&self, rng: &mut R) -> &T
    where
        R: Rng + ?Sized,
    {
        let index = rng.random_range(0..self.len());
        &self[index]
    }

    /// Appends an element to the back.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.tail.push(item);
    }

    /// Inserts an element at `index`, shifting later elements right.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, item: T) {
        let len = self.len();
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );

        if index >= MIN {
            self.tail.insert(index - MIN, item);
            return;
        }

        // The last prefix element spills over into the tail.
        self.prefix[index..].rotate_right(1);
        let displaced = mem::replace(&mut self.prefix[index], item);
        self.tail.insert(0, displaced);
    }

    /// Removes and returns the element at `index`.
    ///
    /// Returns `None` without touching the sequence if it is already at its
    /// minimum length or `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if self.tail.is_empty() {
            trace!(minimum = MIN, index, "remove rejected: at minimum length");
            return None;
        }
        if index >= self.len() {
            trace!(len = self.len(), index, "remove rejected: index out of bounds");
            return None;
        }

        if index >= MIN {
            return Some(self.tail.remove(index - MIN));
        }

        // Pull the first tail element into the prefix to refill it.
        let incoming = self.tail.remove(0);
        self.prefix[index..].rotate_left(1);
        Some(mem::replace(&mut self.prefix[MIN - 1], incoming))
    }

    /// Removes and returns the first element, unless at minimum length.
    #[inline]
    pub fn remove_first(&mut self) -> Option<T> {
        self.remove(0)
    }

    /// Removes and returns the last element, unless at minimum length.
    pub fn pop(&mut self) -> Option<T> {
        let popped = self.tail.pop();
        if popped.is_none() {
            trace!(minimum = MIN, "pop rejected: at minimum length");
        }
        popped
    }

    /// Removes up to `count` elements from the front.
    ///
    /// The count is clamped so that at least `MIN` elements remain. Returns
    /// the number of elements actually removed.
    pub fn remove_first_n(&mut self, count: usize) -> usize {
        let removed = self.clamp_removal(count);
        if removed == 0 {
            return 0;
        }

        // Sequence is prefix ++ drained ++ tail; the new prefix is the MIN
        // elements starting at `removed`.
        let mut drained: Vec<T> = self.tail.drain(..removed).collect();
        for slot in 0..MIN {
            let source = removed + slot;
            if source < MIN {
                self.prefix.swap(slot, source);
            } else {
                mem::swap(&mut self.prefix[slot], &mut drained[source - MIN]);
            }
        }
        removed
    }

    /// Removes up to `count` elements from the back.
    ///
    /// The count is clamped so that at least `MIN` elements remain. Returns
    /// the number of elements actually removed.
    pub fn remove_last_n(&mut self, count: usize) -> usize {
        let removed = self.clamp_removal(count);
        self.tail.truncate(self.tail.len() - removed);
        removed
    }

    fn clamp_removal(&self, requested: usize) -> usize {
        let allowed = self.tail.len();
        if requested > allowed {
            trace!(requested, allowed, minimum = MIN, "removal count clamped");
            allowed
        } else {
            requested
        }
    }

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        let len = self.len();
        assert!(
            a < len && b < len,
            "swap indices ({a}, {b}) out of bounds for length {len}"
        );

        match (a < MIN, b < MIN) {
            (true, true) => self.prefix.swap(a, b),
            (false, false) => self.tail.swap(a - MIN, b - MIN),
            (true, false) => mem::swap(&mut self.prefix[a], &mut self.tail[b - MIN]),
            (false, true) => mem::swap(&mut self.prefix[b], &mut self.tail[a - MIN]),
        }
    }
}

impl<T> NonEmptyArray<T> {
    /// Creates a non-empty array from its first element and the rest.
    #[inline]
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self::from_parts([head], tail)
    }

    /// Creates a non-empty array holding a single element.
    #[inline]
    pub fn singleton(head: T) -> Self {
        Self::from_parts([head], Vec::new())
    }

    /// Returns the elements after the first.
    #[inline]
    pub fn tail(&self) -> &[T] {
        &self.tail
    }
}

impl<T> MultiElementsArray<T> {
    /// Creates an array from its first two elements and the rest.
    #[inline]
    pub fn new(first: T, second: T, tail: Vec<T>) -> Self {
        Self::from_parts([first, second], tail)
    }

    /// Returns the second element.
    #[inline]
    pub fn second(&self) -> &T {
        &self.prefix[1]
    }

    /// Narrows a non-empty array, or returns `None` if it has a single element.
    pub fn from_non_empty(items: NonEmptyArray<T>) -> Option<Self> {
        Self::try_from(items).ok()
    }

    /// Widens into a [`NonEmptyArray`]. Never fails.
    pub fn into_non_empty(self) -> NonEmptyArray<T> {
        self.into()
    }
}

impl<T> From<MultiElementsArray<T>> for NonEmptyArray<T> {
    fn from(items: MultiElementsArray<T>) -> Self {
        let [first, second] = items.prefix;
        let mut tail = Vec::with_capacity(items.tail.len() + 1);
        tail.push(second);
        tail.extend(items.tail);
        NonEmptyArray::from_parts([first], tail)
    }
}

impl<T> TryFrom<NonEmptyArray<T>> for MultiElementsArray<T> {
    type Error = CardinalityError<T>;

    fn try_from(items: NonEmptyArray<T>) -> Result<Self, Self::Error> {
        Self::try_from(items.into_vec())
    }
}

impl<T, const MIN: usize> TryFrom<Vec<T>> for MinVec<T, MIN> {
    type Error = CardinalityError<T>;

    fn try_from(mut items: Vec<T>) -> Result<Self, Self::Error> {
        if items.len() < MIN {
            trace!(minimum = MIN, actual = items.len(), "rejected sequence below minimum length");
            return Err(CardinalityError::new(MIN, items));
        }

        let tail = items.split_off(MIN);
        match <[T; MIN]>::try_from(items) {
            Ok(prefix) => Ok(Self::from_parts(prefix, tail)),
            Err(mut items) => {
                items.extend(tail);
                Err(CardinalityError::new(MIN, items))
            }
        }
    }
}

impl<T, const MIN: usize> From<MinVec<T, MIN>> for Vec<T> {
    fn from(items: MinVec<T, MIN>) -> Self {
        items.into_vec()
    }
}

impl<T, const MIN: usize> GuardedSequence for MinVec<T, MIN> {
    type Item = T;

    const MIN_LEN: usize = MIN;

    #[inline]
    fn len(&self) -> usize {
        MinVec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        MinVec::get(self, index)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        MinVec::swap(self, a, b);
    }
}

impl<T, const MIN: usize> Index<usize> for MinVec<T, MIN> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            ),
        }
    }
}

impl<T, const MIN: usize> IndexMut<usize> for MinVec<T, MIN> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T, const MIN: usize> IntoIterator for MinVec<T, MIN> {
    type Item = T;
    type IntoIter = IntoIter<T, MIN>;

    fn into_iter(self) -> IntoIter<T, MIN> {
        IntoIter::new(self.prefix, self.tail)
    }
}

impl<'a, T, const MIN: usize> IntoIterator for &'a MinVec<T, MIN> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, const MIN: usize> IntoIterator for &'a mut MinVec<T, MIN> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T, const MIN: usize> Extend<T> for MinVec<T, MIN> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tail.extend(iter);
    }
}

impl<T, const MIN: usize, I> Add<I> for MinVec<T, MIN>
where
    I: IntoIterator<Item = T>,
{
    type Output = Self;

    fn add(mut self, rhs: I) -> Self {
        self.extend(rhs);
        self
    }
}

impl<T, const MIN: usize, I> AddAssign<I> for MinVec<T, MIN>
where
    I: IntoIterator<Item = T>,
{
    fn add_assign(&mut self, rhs: I) {
        self.extend(rhs);
    }
}

impl<T: PartialOrd, const MIN: usize> PartialOrd for MinVec<T, MIN> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, const MIN: usize> Ord for MinVec<T, MIN> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: fmt::Debug, const MIN: usize> fmt::Debug for MinVec<T, MIN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, const MIN: usize> serde::Serialize for MinVec<T, MIN> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const MIN: usize> serde::Deserialize<'de> for MinVec<T, MIN>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(items).map_err(serde::de::Error::custom)
    }
}
