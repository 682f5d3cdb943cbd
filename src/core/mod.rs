//! Core data structures for statkit
//!
//! Holds the [`Sample`] container and the crate-wide error type.

pub mod error;
pub mod sample;

pub use error::{Error, Result};
pub use sample::Sample;
