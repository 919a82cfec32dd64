//! Library error types.

use thiserror::Error;

/// Errors returned when constructing matrices from raw elements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The supplied element count doesn't form a square matrix.
    #[error("element count {0} is not a perfect square")]
    InvalidElementCount(usize),
}
