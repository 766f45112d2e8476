//! SafeTypes - value types that keep their invariants
//!
//! Illegal states are rejected at construction and can never be reached by
//! a later operation.
//!
//! # Example
//!
//! ```rust
//! use safetypes::prelude::*;
//!
//! let price = Positive::new(12u32).unwrap();
//! let quantity = Positive::new(3u32).unwrap();
//! assert_eq!(price * quantity, 36);
//!
//! let mut queue = non_empty_array!["first", "second"];
//! assert_eq!(queue.remove_first(), Some("first"));
//! assert_eq!(queue.remove_first(), None);
//! assert_eq!(queue.first(), &"second");
//! ```

// Numeric domains
pub use safetypes_core::num::{
    MinusOneToOne, Negative, NonNegative, NonPositive, NonZero, Number, Positive, ZeroToOne,
};

// Minimum-length collections
pub use safetypes_core::collections::{
    Grapheme, GuardedSequence, IntoIter, Iter, IterMut, MinVec, MultiElementsArray,
    NonEmptyArray, NonEmptyString,
};
pub use safetypes_core::{multi_elements_array, non_empty_array};

// Errors
pub use safetypes_core::error::{CardinalityError, DomainError};

// Configuration
pub use safetypes_config::{ConfigError, EnvironmentMode, SafeTypesConfig};

pub mod prelude {
    pub use super::{
        MinusOneToOne, Negative, NonNegative, NonPositive, NonZero, Positive, ZeroToOne,
    };
    pub use super::{GuardedSequence, MultiElementsArray, NonEmptyArray, NonEmptyString};
    pub use super::{multi_elements_array, non_empty_array};
}
