//! Error types for SafeTypes

use thiserror::Error;

/// Error returned when a raw value cannot be wrapped in a constrained type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The value does not satisfy the predicate of the numeric domain.
    #[error("{value} is not a valid {domain} value (expected {predicate})")]
    OutOfDomain {
        domain: &'static str,
        predicate: &'static str,
        value: String,
    },

    /// An empty string was given where at least one character is required.
    #[error("string must contain at least one character")]
    EmptyString,
}

impl DomainError {
    pub(crate) fn out_of_domain(
        domain: &'static str,
        predicate: &'static str,
        value: impl ToString,
    ) -> Self {
        DomainError::OutOfDomain {
            domain,
            predicate,
            value: value.to_string(),
        }
    }
}

/// Error returned when a sequence is shorter than a collection's minimum.
///
/// The rejected elements are kept so the caller can recover them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected at least {minimum} elements, got {}", .rejected.len())]
pub struct CardinalityError<T> {
    minimum: usize,
    rejected: Vec<T>,
}

impl<T> CardinalityError<T> {
    pub(crate) fn new(minimum: usize, rejected: Vec<T>) -> Self {
        Self { minimum, rejected }
    }

    /// Returns the minimum length the target collection requires.
    pub fn minimum(&self) -> usize {
        self.minimum
    }

    /// Returns the number of elements that were supplied.
    pub fn actual(&self) -> usize {
        self.rejected.len()
    }

    /// Gives back the rejected elements.
    pub fn into_inner(self) -> Vec<T> {
        self.rejected
    }
}

/// Result type alias for SafeTypes conversions
pub type Result<T> = std::result::Result<T, DomainError>;
