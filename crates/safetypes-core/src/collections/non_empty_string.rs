//! NonEmptyString - text with at least one character

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Deref, DerefMut};
use std::str::FromStr;

use tracing::trace;

use super::grapheme::Grapheme;
use super::min_vec::NonEmptyArray;
use super::traits::GuardedSequence;
use crate::error::{DomainError, Result};

/// A string of at least one character.
///
/// Stored as a [`NonEmptyArray<Grapheme>`], one extended grapheme cluster
/// per element, so every collection operation is available through `Deref`
/// and none of them can empty the string or split a user-perceived
/// character.
///
/// Equality, ordering and hashing follow the text, not the segmentation.
///
/// # Examples
///
/// ```
/// use safetypes_core::NonEmptyString;
///
/// let mut greeting = NonEmptyString::new("hi").unwrap();
/// greeting += " there";
/// assert_eq!(greeting.to_string(), "hi there");
/// assert_eq!(greeting.first(), "h");
///
/// let accented = NonEmptyString::new("e\u{301}").unwrap();
/// assert_eq!(accented.len(), 1);
///
/// assert!(NonEmptyString::new("").is_none());
/// ```
#[derive(Clone)]
pub struct NonEmptyString {
    graphemes: NonEmptyArray<Grapheme>,
}

impl NonEmptyString {
    /// Creates a string from `text`, or `None` if `text` is empty.
    pub fn new(text: &str) -> Option<Self> {
        let graphemes = NonEmptyArray::from_iter_checked(Grapheme::split(text));
        if graphemes.is_none() {
            trace!("rejected empty string");
        }
        graphemes.map(Self::from_graphemes)
    }

    /// Creates a string from a non-empty sequence of graphemes. Never fails.
    #[inline]
    pub fn from_graphemes(graphemes: NonEmptyArray<Grapheme>) -> Self {
        Self { graphemes }
    }

    /// Returns the underlying graphemes.
    #[inline]
    pub fn as_graphemes(&self) -> &NonEmptyArray<Grapheme> {
        &self.graphemes
    }

    /// Consumes the wrapper and returns the graphemes.
    #[inline]
    pub fn into_graphemes(self) -> NonEmptyArray<Grapheme> {
        self.graphemes
    }

    /// Iterates over the Unicode scalar values of the text.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.graphemes.iter().flat_map(|g| g.chars())
    }

    /// Returns the text as an owned `String`.
    pub fn as_string(&self) -> String {
        self.graphemes.iter().map(Grapheme::as_str).collect()
    }

    /// Consumes the wrapper and returns the text.
    pub fn into_string(self) -> String {
        self.as_string()
    }

    /// Appends `text`, re-segmenting where it meets the current last
    /// grapheme so a leading combining mark attaches to it.
    fn append_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let joined = format!("{}{}", self.graphemes.last(), text);
        let mut clusters = Grapheme::split(&joined);
        if let Some(first) = clusters.next() {
            *self.graphemes.last_mut() = first;
        }
        self.graphemes.extend(clusters);
    }
}

impl Deref for NonEmptyString {
    type Target = NonEmptyArray<Grapheme>;

    #[inline]
    fn deref(&self) -> &NonEmptyArray<Grapheme> {
        &self.graphemes
    }
}

impl DerefMut for NonEmptyString {
    #[inline]
    fn deref_mut(&mut self) -> &mut NonEmptyArray<Grapheme> {
        &mut self.graphemes
    }
}

impl GuardedSequence for NonEmptyString {
    type Item = Grapheme;

    const MIN_LEN: usize = 1;

    #[inline]
    fn len(&self) -> usize {
        self.graphemes.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&Grapheme> {
        self.graphemes.get(index)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.graphemes.swap(a, b);
    }
}

impl From<NonEmptyArray<Grapheme>> for NonEmptyString {
    fn from(graphemes: NonEmptyArray<Grapheme>) -> Self {
        Self::from_graphemes(graphemes)
    }
}

impl From<NonEmptyString> for String {
    fn from(text: NonEmptyString) -> Self {
        text.into_string()
    }
}

impl FromStr for NonEmptyString {
    type Err = DomainError;

    fn from_str(text: &str) -> Result<Self> {
        Self::new(text).ok_or(DomainError::EmptyString)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = DomainError;

    fn try_from(text: &str) -> Result<Self> {
        text.parse()
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = DomainError;

    fn try_from(text: String) -> Result<Self> {
        text.parse()
    }
}

impl PartialEq for NonEmptyString {
    fn eq(&self, other: &Self) -> bool {
        self.chars().eq(other.chars())
    }
}

impl Eq for NonEmptyString {}

impl PartialOrd for NonEmptyString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NonEmptyString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chars().cmp(other.chars())
    }
}

impl Hash for NonEmptyString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.chars() {
            c.hash(state);
        }
        state.write_u8(0xff);
    }
}

impl PartialEq<str> for NonEmptyString {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl PartialEq<&str> for NonEmptyString {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<NonEmptyString> for str {
    fn eq(&self, other: &NonEmptyString) -> bool {
        *other == *self
    }
}

impl PartialEq<NonEmptyString> for &str {
    fn eq(&self, other: &NonEmptyString) -> bool {
        *other == **self
    }
}

impl Extend<Grapheme> for NonEmptyString {
    fn extend<I: IntoIterator<Item = Grapheme>>(&mut self, iter: I) {
        self.graphemes.extend(iter);
    }
}

impl Add<&str> for NonEmptyString {
    type Output = NonEmptyString;

    fn add(mut self, rhs: &str) -> NonEmptyString {
        self += rhs;
        self
    }
}

impl Add<&NonEmptyString> for NonEmptyString {
    type Output = NonEmptyString;

    fn add(mut self, rhs: &NonEmptyString) -> NonEmptyString {
        self += rhs;
        self
    }
}

impl AddAssign<&str> for NonEmptyString {
    fn add_assign(&mut self, rhs: &str) {
        self.append_text(rhs);
    }
}

impl AddAssign<&NonEmptyString> for NonEmptyString {
    fn add_assign(&mut self, rhs: &NonEmptyString) {
        self.append_text(&rhs.as_string());
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.graphemes
            .iter()
            .try_for_each(|g| f.write_str(g.as_str()))
    }
}

impl fmt::Debug for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NonEmptyString")
            .field(&self.as_string())
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NonEmptyString {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.as_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NonEmptyString {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
