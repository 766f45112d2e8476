//! Grapheme - one user-perceived character

use std::fmt;
use std::ops::Deref;

use unicode_segmentation::UnicodeSegmentation;

/// A single extended grapheme cluster, such as `"e\u{301}"` or a ZWJ emoji
/// sequence.
///
/// This is the element type of [`NonEmptyString`](super::NonEmptyString),
/// so removing or reordering elements never splits a combining mark from
/// its base.
///
/// # Examples
///
/// ```
/// use safetypes_core::collections::Grapheme;
///
/// let accented = Grapheme::new("e\u{301}").unwrap();
/// assert_eq!(accented.chars().count(), 2);
/// assert!(Grapheme::new("ab").is_none());
/// assert!(Grapheme::new("").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grapheme(Box<str>);

impl Grapheme {
    /// Wraps `text` if it is exactly one extended grapheme cluster.
    pub fn new(text: &str) -> Option<Self> {
        let mut clusters = text.graphemes(true);
        match (clusters.next(), clusters.next()) {
            (Some(cluster), None) => Some(Self::from_cluster(cluster)),
            _ => None,
        }
    }

    /// Caller guarantees `cluster` came out of a grapheme segmentation.
    pub(crate) fn from_cluster(cluster: &str) -> Self {
        Self(cluster.into())
    }

    /// Splits `text` into clusters.
    pub(crate) fn split(text: &str) -> impl Iterator<Item = Grapheme> + '_ {
        text.graphemes(true).map(Self::from_cluster)
    }

    /// Returns the cluster as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Grapheme {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Grapheme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<char> for Grapheme {
    fn from(c: char) -> Self {
        Self(c.to_string().into_boxed_str())
    }
}

impl From<Grapheme> for String {
    fn from(grapheme: Grapheme) -> Self {
        grapheme.0.into_string()
    }
}

impl PartialEq<str> for Grapheme {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Grapheme {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Grapheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Grapheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
