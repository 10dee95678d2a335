//! Core type aliases for the tiled range engine.

use smallvec::SmallVec;

/// Type alias for an axis slot index.
///
/// Zero-indexed (0 is the first axis).
pub type Axis = usize;

/// Type alias for the number of dimensions of a range or coordinate.
pub type Rank = usize;

/// Type alias for a linear tile or element position within a range.
///
/// Ordinals are dense: a range with `n` tiles maps its tile coordinates onto
/// exactly `0..n`, and likewise for elements.
pub type Ordinal = usize;

/// Per-axis scalar storage using SmallVec to avoid heap allocation for
/// common ranks.
///
/// Optimized for ranges with up to 6 dimensions; automatically falls back to
/// heap allocation for higher ranks. Used for coordinate components, ordinal
/// weights, and dimension-order tables.
pub type AxisVec = SmallVec<[usize; 6]>;
