//! Iterators over minimum-length collections.
//!
//! All three walk the guaranteed prefix followed by the tail, so they are
//! exact-size and double-ended.

use std::iter::{Chain, FusedIterator};
use std::{array, slice, vec};

/// Borrowing iterator returned by [`MinVec::iter`](super::MinVec::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(prefix: &'a [T], tail: &'a [T]) -> Self {
        Self {
            inner: prefix.iter().chain(tail.iter()),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator returned by [`MinVec::iter_mut`](super::MinVec::iter_mut).
///
/// Elements can be replaced in place; the length cannot change.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: Chain<slice::IterMut<'a, T>, slice::IterMut<'a, T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(prefix: &'a mut [T], tail: &'a mut [T]) -> Self {
        Self {
            inner: prefix.iter_mut().chain(tail.iter_mut()),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator returned by `MinVec::into_iter`.
#[derive(Debug, Clone)]
pub struct IntoIter<T, const MIN: usize> {
    inner: Chain<array::IntoIter<T, MIN>, vec::IntoIter<T>>,
}

impl<T, const MIN: usize> IntoIter<T, MIN> {
    pub(crate) fn new(prefix: [T; MIN], tail: Vec<T>) -> Self {
        Self {
            inner: prefix.into_iter().chain(tail),
        }
    }
}

impl<T, const MIN: usize> Iterator for IntoIter<T, MIN> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, const MIN: usize> DoubleEndedIterator for IntoIter<T, MIN> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T, const MIN: usize> ExactSizeIterator for IntoIter<T, MIN> {}

impl<T, const MIN: usize> FusedIterator for IntoIter<T, MIN> {}
