//! Unified error types for tiled range construction and queries
//!
//! This module provides a centralized error handling system for the tiled
//! range engine. Every failure is a local precondition violation detected
//! synchronously at the call site; there are no retries and no partial
//! failures, so the taxonomy stays small:
//!
//! - **[`InvalidRangeError`]**: malformed axis boundaries or range setup
//! - **[`OutOfRangeError`]**: a query for a coordinate the range does not
//!   include
//! - **[`InvalidPermutationError`]**: a mapping that is not a bijection on
//!   the axis slots
//!
//! # Examples
//!
//! ```
//! use tilrso_range::error::{InvalidRangeError, RangeError};
//! use tilrso_range::AxisRange;
//!
//! let err = AxisRange::new(vec![5]).unwrap_err();
//! assert!(matches!(err, InvalidRangeError::TooFewBoundaries { got: 1 }));
//!
//! // Module-level errors convert into the top-level `RangeError`
//! let top: RangeError = err.into();
//! assert!(matches!(top, RangeError::InvalidRange(_)));
//! ```

use thiserror::Error;

/// Top-level error type for all tiled range operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Malformed boundaries or range construction input
    #[error("Invalid range: {0}")]
    InvalidRange(#[from] InvalidRangeError),

    /// Query for a coordinate outside the range
    #[error("Out of range: {0}")]
    OutOfRange(#[from] OutOfRangeError),

    /// Axis mapping that is not a bijection
    #[error("Invalid permutation: {0}")]
    InvalidPermutation(#[from] InvalidPermutationError),
}

/// Errors raised while constructing an axis range or a tiled range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRangeError {
    #[error("An axis range needs at least 2 tile boundaries, got {got}")]
    TooFewBoundaries { got: usize },

    #[error(
        "Tile boundaries must be strictly increasing: boundary {index} is {value}, previous boundary is {prev}"
    )]
    NotIncreasing {
        index: usize,
        prev: usize,
        value: usize,
    },

    #[error("Uniform blocking needs a nonzero extent")]
    ZeroExtent,

    #[error("Uniform blocking needs a nonzero block size")]
    ZeroBlock,

    #[error("A tiled range needs at least one axis")]
    NoAxes,

    #[error("Dimension order covers {order} axes but {axes} axis ranges were given")]
    OrderRankMismatch { order: usize, axes: usize },
}

/// Errors raised by ordinal and boundary queries on coordinates the range
/// does not include
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutOfRangeError {
    #[error("Tile index {index:?} is outside tiles {start:?}..{finish:?}")]
    Tile {
        index: Vec<usize>,
        start: Vec<usize>,
        finish: Vec<usize>,
    },

    #[error("Element index {index:?} is outside elements {start:?}..{finish:?}")]
    Element {
        index: Vec<usize>,
        start: Vec<usize>,
        finish: Vec<usize>,
    },

    #[error("Coordinate has rank {got}, expected {expected}")]
    RankMismatch { got: usize, expected: usize },
}

/// Errors raised while validating a permutation of axis slots
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPermutationError {
    #[error("Image {image:?} is not a bijection on 0..{rank}: slot {slot} appears more than once")]
    DuplicateSlot {
        image: Vec<usize>,
        rank: usize,
        slot: usize,
    },

    #[error("Image {image:?} maps outside 0..{rank}: found slot {slot}")]
    SlotOutOfBounds {
        image: Vec<usize>,
        rank: usize,
        slot: usize,
    },

    #[error("Permutation covers {perm} axes, expected {expected}")]
    RankMismatch { perm: usize, expected: usize },
}

/// Result type alias for tiled range operations
pub type RangeResult<T> = Result<T, RangeError>;
