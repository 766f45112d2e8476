//! Shared test fixtures for SafeTypes crates.
//!
//! This crate provides raw values, seeded generators and proptest
//! strategies. It does NOT depend on `safetypes-core`, which uses it as a
//! dev-dependency.
//!
//! - [`numbers`] - boundary values around 0, 1 and -1
//! - [`rng`] - reproducible random number generators
//! - [`strategies`] - proptest strategies for sequences and text
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! safetypes-test = { workspace = true }
//! ```

pub mod numbers;
pub mod rng;
pub mod strategies;

pub use rng::{seeded_rng, TEST_SEED};
