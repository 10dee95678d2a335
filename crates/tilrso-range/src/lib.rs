//! # tilrso-range
//!
//! Tiled range and index addressing engine for the TilRSo distributed array
//! stack.
//!
//! This crate defines the block-tiled index spaces that distributed arrays
//! and contraction planning are built on:
//!
//! - **Axis ranges** ([`AxisRange`]) with per-dimension tile boundaries
//! - **Tagged coordinates** ([`TileIndex`], [`ElementIndex`]) that never mix
//! - **Traversal policy** ([`DimOrder`]) injected at construction
//! - **Tiled ranges** ([`TiledRange`]) with ordinal queries, containment
//!   tests, tile boundary lookup, and permutation
//! - **Carry-increment iteration** ([`IndexIter`]) over tiles and elements
//!
//! ## Core Principles
//!
//! ### Exact Addressing
//!
//! `ordinal` is a bijection between the coordinates a range includes and
//! `0..ntiles()` (or `0..nelems()`). Out-of-range queries fail with a typed
//! error; nothing is clamped or silently corrected, since a wrong ordinal
//! corrupts communication patterns downstream.
//!
//! ### Allocation-Free Hot Paths
//!
//! Containment, ordinal computation, element lookup, and iterator stepping
//! perform no heap allocation. Coordinates live in fixed-capacity storage up
//! to rank 6.
//!
//! ### Immutable Once Built
//!
//! A [`TiledRange`] never changes after construction; [`TiledRange::permute`]
//! returns a new range. Shared references and iterators stay valid across
//! threads for as long as the range lives.
//!
//! ## Quick Start
//!
//! ```
//! use tilrso_range::{AxisRange, DimOrder, TileIndex, TiledRange};
//!
//! // A 4x4 matrix split into 2x2 blocks
//! let axis = AxisRange::new(vec![0, 2, 4]).unwrap();
//! let range = TiledRange::new(vec![axis.clone(), axis], DimOrder::RowMajor).unwrap();
//!
//! assert_eq!(range.ntiles(), 4);
//! assert_eq!(range.nelems(), 16);
//! assert_eq!(range.tile_ordinal(&TileIndex::from([1, 0])).unwrap(), 2);
//! ```
//!
//! ## Iterating Tiles and Elements
//!
//! ```
//! use tilrso_range::{AxisRange, DimOrder, TiledRange};
//!
//! let rows = AxisRange::uniform(6, 2).unwrap();
//! let cols = AxisRange::uniform(6, 3).unwrap();
//! let range = TiledRange::new(vec![rows, cols], DimOrder::RowMajor).unwrap();
//!
//! // Walk every tile and look up its element bounds
//! for t in range.tiles() {
//!     let tile = range.tile_bounds(&t).unwrap();
//!     assert_eq!(tile.volume(), 6);
//! }
//! ```
//!
//! ## Permuting Axes
//!
//! ```
//! use tilrso_range::{AxisRange, DimOrder, Permutation, TiledRange};
//!
//! let rows = AxisRange::uniform(4, 2).unwrap();
//! let cols = AxisRange::uniform(9, 3).unwrap();
//! let range = TiledRange::new(vec![rows, cols], DimOrder::RowMajor).unwrap();
//!
//! let perm = Permutation::new([1, 0]).unwrap();
//! let transposed = range.permute(&perm).unwrap();
//! assert_eq!(transposed.permute(&perm.inverse()).unwrap(), range);
//! ```
//!
//! ## Error Handling
//!
//! Operations return typed errors from [`error`]:
//!
//! ```
//! use tilrso_range::{AxisRange, error::InvalidRangeError};
//!
//! assert!(matches!(
//!     AxisRange::new(vec![5]).unwrap_err(),
//!     InvalidRangeError::TooFewBoundaries { got: 1 }
//! ));
//! ```
//!
//! ## Features
//!
//! - `serde`: serialization support on coordinates, permutations, axis
//!   ranges, and tiled ranges; deserialization re-validates and rebuilds
//!   derived fields
//! - `tracing`: debug events on range construction and permutation

#![deny(warnings)]

pub mod axis;
pub mod coordinate;
pub mod error;
pub mod iterators;
pub mod order;
pub mod permutation;
pub mod tiled;
pub mod types;

#[cfg(test)]
mod property_tests;

pub use axis::AxisRange;
pub use coordinate::{Coord, ElementIndex, ElementTag, TileIndex, TileTag};
pub use error::{
    InvalidPermutationError, InvalidRangeError, OutOfRangeError, RangeError, RangeResult,
};
pub use iterators::{ElementIter, IndexIter, TileIter};
pub use order::DimOrder;
pub use permutation::Permutation;
pub use tiled::{Tile, TiledRange};
pub use types::{Axis, AxisVec, Ordinal, Rank};
