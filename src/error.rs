//! Errors returned by positional operations.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a positional operation was refused.
///
/// Every variant is a precondition violation detected before the list is
/// touched, so a failed call leaves the list exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Read, write or remove on a list with no elements.
    #[error("index {index} is out of range: the list is empty")]
    Empty { index: usize },
    /// The position lies outside `0..len` (or `0..=len` for insertion).
    #[error("index {index} is out of range for a list of length {len}")]
    OutOfRange { index: usize, len: usize },
    /// A level generator asked for more levels than the sentinel can hold.
    #[error("level {level} exceeds the sentinel capacity of {capacity} levels")]
    LevelCapacity { level: usize, capacity: usize },
    /// A [`Config`](crate::Config) failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
