//! The N-dimensional tiled range.
//!
//! A [`TiledRange`] composes one [`AxisRange`] per dimension with a
//! [`DimOrder`] policy into the full addressing contract of a block-tiled
//! index space: containment tests, coordinate-to-ordinal conversion, element
//! to tile lookup, tile boundary queries, axis permutation, and iteration.
//!
//! Construction runs a single pass over the dimension order that derives the
//! per-axis ordinal weights (the weight of an axis is the product of the
//! tile counts, or element extents, of every axis that varies faster), the
//! tile and element bounds, and the total counts. The same pass runs again
//! whenever the axes change, which only happens through [`permute`] and
//! produces a new range; a constructed `TiledRange` itself never mutates and
//! can be shared freely across threads.
//!
//! [`permute`]: TiledRange::permute
//!
//! # Examples
//!
//! ```
//! use tilrso_range::{AxisRange, DimOrder, ElementIndex, TileIndex, TiledRange};
//!
//! // A 4x4 matrix in 2x2 blocks
//! let axis = AxisRange::new(vec![0, 2, 4]).unwrap();
//! let range = TiledRange::new(vec![axis.clone(), axis], DimOrder::RowMajor).unwrap();
//!
//! assert_eq!(range.ntiles(), 4);
//! assert_eq!(range.nelems(), 16);
//!
//! // Ordinals linearize tile coordinates in dimension-order
//! let t = TileIndex::from([1, 0]);
//! assert_eq!(range.tile_ordinal(&t).unwrap(), 2);
//!
//! // Element to owning tile
//! let e = ElementIndex::from([3, 1]);
//! assert_eq!(range.find(&e), Some(t));
//! ```

use std::fmt;

use smallvec::smallvec;

use crate::axis::AxisRange;
use crate::coordinate::{ElementIndex, TileIndex};
use crate::error::{InvalidPermutationError, InvalidRangeError, OutOfRangeError, RangeResult};
use crate::iterators::{ElementIter, IndexIter, TileIter};
use crate::order::DimOrder;
use crate::permutation::Permutation;
use crate::types::{AxisVec, Ordinal, Rank};

/// A DIM-dimensional tiled index space.
///
/// Owns its axis ranges and all derived fields by value. Every query path is
/// allocation-free; queries returning a coordinate allocate only their
/// result.
#[derive(Debug, Clone)]
pub struct TiledRange {
    axes: Vec<AxisRange>,
    order: DimOrder,

    // Derived by `new`, rebuilt on permutation, never stale
    order_table: AxisVec,
    tile_weights: AxisVec,
    element_weights: AxisVec,
    start_tile: TileIndex,
    finish_tile: TileIndex,
    start_element: ElementIndex,
    finish_element: ElementIndex,
    ntiles: Ordinal,
    nelems: Ordinal,
}

impl TiledRange {
    /// Create a tiled range from one axis range per dimension and a
    /// traversal order.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidRangeError`] when no axes are given or a custom
    /// order does not cover the rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilrso_range::{AxisRange, DimOrder, TiledRange};
    ///
    /// let rows = AxisRange::new(vec![0, 2, 4]).unwrap();
    /// let cols = AxisRange::new(vec![0, 3, 6, 9]).unwrap();
    /// let range = TiledRange::new(vec![rows, cols], DimOrder::RowMajor).unwrap();
    ///
    /// assert_eq!(range.rank(), 2);
    /// assert_eq!(range.ntiles(), 6);
    /// assert_eq!(range.nelems(), 36);
    /// ```
    pub fn new(axes: impl IntoIterator<Item = AxisRange>, order: DimOrder) -> RangeResult<Self> {
        let axes: Vec<AxisRange> = axes.into_iter().collect();
        let rank = axes.len();
        if rank == 0 {
            return Err(InvalidRangeError::NoAxes.into());
        }
        let order_table = order.significance(rank)?;

        let mut tile_weights: AxisVec = smallvec![0; rank];
        let mut element_weights: AxisVec = smallvec![0; rank];
        let mut tile_weight = 1;
        let mut element_weight = 1;
        for &d in &order_table {
            tile_weights[d] = tile_weight;
            tile_weight *= axes[d].ntiles();
            element_weights[d] = element_weight;
            element_weight *= axes[d].extent();
        }
        let ntiles = tile_weight;
        let nelems = element_weight;

        let start_tile = TileIndex::new(axes.iter().map(|a| a.start_tile()));
        let finish_tile = TileIndex::new(axes.iter().map(|a| a.finish_tile()));
        let start_element = ElementIndex::new(axes.iter().map(|a| a.start_element()));
        let finish_element = ElementIndex::new(axes.iter().map(|a| a.finish_element()));

        #[cfg(feature = "tracing")]
        tracing::debug!(rank, ntiles, nelems, "constructed tiled range");

        Ok(Self {
            axes,
            order,
            order_table,
            tile_weights,
            element_weights,
            start_tile,
            finish_tile,
            start_element,
            finish_element,
            ntiles,
            nelems,
        })
    }

    /// Number of dimensions.
    pub fn rank(&self) -> Rank {
        self.axes.len()
    }

    /// The traversal order this range was built with.
    pub fn order(&self) -> &DimOrder {
        &self.order
    }

    /// The per-dimension axis ranges.
    pub fn axes(&self) -> &[AxisRange] {
        &self.axes
    }

    /// One axis range, `None` when the axis is out of bounds.
    pub fn axis(&self, axis: usize) -> Option<&AxisRange> {
        self.axes.get(axis)
    }

    /// Total number of tiles.
    pub fn ntiles(&self) -> Ordinal {
        self.ntiles
    }

    /// Total number of elements.
    pub fn nelems(&self) -> Ordinal {
        self.nelems
    }

    /// Tile coordinate bounds, first tile in every dimension.
    pub fn start_tile(&self) -> &TileIndex {
        &self.start_tile
    }

    /// Tile coordinate bounds, one past the last tile in every dimension.
    pub fn finish_tile(&self) -> &TileIndex {
        &self.finish_tile
    }

    /// Element coordinate bounds, first element in every dimension.
    pub fn start_element(&self) -> &ElementIndex {
        &self.start_element
    }

    /// Element coordinate bounds, one past the last element in every
    /// dimension.
    pub fn finish_element(&self) -> &ElementIndex {
        &self.finish_element
    }

    /// True when the tile coordinate lies within the range.
    pub fn includes_tile(&self, tile: &TileIndex) -> bool {
        tile.rank() == self.rank()
            && self
                .axes
                .iter()
                .zip(tile.components())
                .all(|(axis, &t)| axis.includes_tile(t))
    }

    /// True when the element coordinate lies within the range.
    pub fn includes_element(&self, element: &ElementIndex) -> bool {
        element.rank() == self.rank()
            && self
                .axes
                .iter()
                .zip(element.components())
                .all(|(axis, &e)| axis.includes_element(e))
    }

    /// Linear position of a tile coordinate in `0..ntiles()`, following the
    /// traversal order.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRangeError`] when the coordinate is not included in
    /// the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilrso_range::{AxisRange, DimOrder, TileIndex, TiledRange};
    ///
    /// let axis = AxisRange::new(vec![0, 2, 4]).unwrap();
    /// let range = TiledRange::new(vec![axis.clone(), axis], DimOrder::RowMajor).unwrap();
    ///
    /// assert_eq!(range.tile_ordinal(&TileIndex::from([1, 0])).unwrap(), 2);
    /// assert!(range.tile_ordinal(&TileIndex::from([2, 0])).is_err());
    /// ```
    pub fn tile_ordinal(&self, tile: &TileIndex) -> RangeResult<Ordinal> {
        if tile.rank() != self.rank() {
            return Err(OutOfRangeError::RankMismatch {
                got: tile.rank(),
                expected: self.rank(),
            }
            .into());
        }
        if !self.includes_tile(tile) {
            return Err(OutOfRangeError::Tile {
                index: tile.components().to_vec(),
                start: self.start_tile.components().to_vec(),
                finish: self.finish_tile.components().to_vec(),
            }
            .into());
        }
        let relative = tile - &self.start_tile;
        Ok(relative
            .components()
            .iter()
            .zip(self.tile_weights.iter())
            .map(|(c, w)| c * w)
            .sum())
    }

    /// Linear position of an element coordinate in `0..nelems()`, following
    /// the traversal order.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRangeError`] when the coordinate is not included in
    /// the range.
    pub fn element_ordinal(&self, element: &ElementIndex) -> RangeResult<Ordinal> {
        if element.rank() != self.rank() {
            return Err(OutOfRangeError::RankMismatch {
                got: element.rank(),
                expected: self.rank(),
            }
            .into());
        }
        if !self.includes_element(element) {
            return Err(OutOfRangeError::Element {
                index: element.components().to_vec(),
                start: self.start_element.components().to_vec(),
                finish: self.finish_element.components().to_vec(),
            }
            .into());
        }
        let relative = element - &self.start_element;
        Ok(relative
            .components()
            .iter()
            .zip(self.element_weights.iter())
            .map(|(c, w)| c * w)
            .sum())
    }

    /// The tile containing an element coordinate, `None` when the element is
    /// outside the range.
    ///
    /// Per-axis binary search, O(rank log ntiles).
    pub fn find(&self, element: &ElementIndex) -> Option<TileIndex> {
        if element.rank() != self.rank() {
            return None;
        }
        let mut tile = TileIndex::zeros(self.rank());
        for (d, axis) in self.axes.iter().enumerate() {
            tile[d] = axis.find(element[d])?;
        }
        if self.includes_tile(&tile) {
            Some(tile)
        } else {
            None
        }
    }

    /// Number of elements in one tile.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRangeError`] when the tile coordinate is not
    /// included in the range.
    pub fn tile_volume(&self, tile: &TileIndex) -> RangeResult<usize> {
        self.check_tile(tile)?;
        Ok(self
            .axes
            .iter()
            .zip(tile.components())
            .map(|(axis, &t)| {
                axis.tile_extent(t)
                    .expect("containment check passed but tile extent failed")
            })
            .product())
    }

    /// Element bounds of one tile, as a [`Tile`] view that can iterate its
    /// own elements.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRangeError`] when the tile coordinate is not
    /// included in the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilrso_range::{AxisRange, DimOrder, ElementIndex, TileIndex, TiledRange};
    ///
    /// let axis = AxisRange::new(vec![0, 2, 4]).unwrap();
    /// let range = TiledRange::new(vec![axis.clone(), axis], DimOrder::RowMajor).unwrap();
    ///
    /// let tile = range.tile_bounds(&TileIndex::from([1, 0])).unwrap();
    /// assert_eq!(tile.start(), &ElementIndex::from([2, 0]));
    /// assert_eq!(tile.finish(), &ElementIndex::from([4, 2]));
    /// assert_eq!(tile.volume(), 4);
    /// ```
    pub fn tile_bounds(&self, tile: &TileIndex) -> RangeResult<Tile> {
        self.check_tile(tile)?;
        let start = ElementIndex::new(self.axes.iter().zip(tile.components()).map(|(axis, &t)| {
            axis.tile_start(t)
                .expect("containment check passed but tile start failed")
        }));
        let finish = ElementIndex::new(self.axes.iter().zip(tile.components()).map(|(axis, &t)| {
            axis.tile_finish(t)
                .expect("containment check passed but tile finish failed")
        }));
        Ok(Tile {
            index: tile.clone(),
            start,
            finish,
            order: self.order_table.clone(),
        })
    }

    /// Reorder the axes by a permutation, returning the reordered range.
    ///
    /// Axis `i` of this range becomes axis `perm.image()[i]` of the result.
    /// All derived fields of the result are recomputed from the reordered
    /// axes; this range is left untouched. The represented set of tiles and
    /// elements is unchanged, only their axis order differs.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidPermutationError::RankMismatch`] when the
    /// permutation does not cover the rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilrso_range::{AxisRange, DimOrder, Permutation, TiledRange};
    ///
    /// let rows = AxisRange::new(vec![0, 2, 4]).unwrap();
    /// let cols = AxisRange::new(vec![0, 3, 6, 9]).unwrap();
    /// let range = TiledRange::new(vec![rows.clone(), cols.clone()], DimOrder::RowMajor).unwrap();
    ///
    /// let swap = Permutation::new([1, 0]).unwrap();
    /// let swapped = range.permute(&swap).unwrap();
    /// assert_eq!(swapped.axes(), &[cols, rows]);
    ///
    /// // Applying the inverse restores the original range
    /// assert_eq!(swapped.permute(&swap.inverse()).unwrap(), range);
    /// ```
    pub fn permute(&self, perm: &Permutation) -> RangeResult<Self> {
        if perm.rank() != self.rank() {
            return Err(InvalidPermutationError::RankMismatch {
                perm: perm.rank(),
                expected: self.rank(),
            }
            .into());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(%perm, "permuting tiled range");

        let axes = perm.apply_slice(&self.axes)?;
        Self::new(axes, self.order.clone())
    }

    /// Iterator over all tile coordinates, in traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilrso_range::{AxisRange, DimOrder, TileIndex, TiledRange};
    ///
    /// let axis = AxisRange::new(vec![0, 2, 4]).unwrap();
    /// let range = TiledRange::new(vec![axis.clone(), axis], DimOrder::RowMajor).unwrap();
    ///
    /// let tiles: Vec<_> = range.tiles().collect();
    /// assert_eq!(tiles.len(), range.ntiles());
    /// assert_eq!(tiles[2], TileIndex::from([1, 0]));
    /// ```
    pub fn tiles(&self) -> TileIter<'_> {
        IndexIter::new(&self.start_tile, &self.finish_tile, &self.order_table)
    }

    /// Iterator over all element coordinates, in traversal order.
    pub fn elements(&self) -> ElementIter<'_> {
        IndexIter::new(&self.start_element, &self.finish_element, &self.order_table)
    }

    fn check_tile(&self, tile: &TileIndex) -> RangeResult<()> {
        if tile.rank() != self.rank() {
            return Err(OutOfRangeError::RankMismatch {
                got: tile.rank(),
                expected: self.rank(),
            }
            .into());
        }
        if !self.includes_tile(tile) {
            return Err(OutOfRangeError::Tile {
                index: tile.components().to_vec(),
                start: self.start_tile.components().to_vec(),
                finish: self.finish_tile.components().to_vec(),
            }
            .into());
        }
        Ok(())
    }
}

/// Ranges are equal when their axis ranges are equal pairwise and they share
/// a traversal order; all other fields are derived from those.
impl PartialEq for TiledRange {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.axes == other.axes && self.order == other.order
    }
}

impl Eq for TiledRange {}

impl fmt::Display for TiledRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TiledRange(tiles {}..{}, elements {}..{}, ntiles={}, nelems={})",
            self.start_tile,
            self.finish_tile,
            self.start_element,
            self.finish_element,
            self.ntiles,
            self.nelems
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TiledRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("TiledRange", 2)?;
        state.serialize_field("axes", &self.axes)?;
        state.serialize_field("order", &self.order)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TiledRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            axes: Vec<AxisRange>,
            order: DimOrder,
        }
        let raw = Raw::deserialize(deserializer)?;
        TiledRange::new(raw.axes, raw.order).map_err(serde::de::Error::custom)
    }
}

/// Element bounds of one tile within a tiled range.
///
/// A value snapshot: it holds the owning tile index, the half-open element
/// bounds, and the traversal order, so it can outlive the range it was taken
/// from and iterate its own elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    index: TileIndex,
    start: ElementIndex,
    finish: ElementIndex,
    order: AxisVec,
}

impl Tile {
    /// The tile coordinate these bounds belong to.
    pub fn index(&self) -> &TileIndex {
        &self.index
    }

    /// First element of the tile in every dimension.
    pub fn start(&self) -> &ElementIndex {
        &self.start
    }

    /// One past the last element of the tile in every dimension.
    pub fn finish(&self) -> &ElementIndex {
        &self.finish
    }

    /// Number of elements in the tile.
    pub fn volume(&self) -> usize {
        self.start
            .components()
            .iter()
            .zip(self.finish.components())
            .map(|(s, f)| f - s)
            .product()
    }

    /// Iterator over the element coordinates of this tile, in traversal
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilrso_range::{AxisRange, DimOrder, TileIndex, TiledRange};
    ///
    /// let axis = AxisRange::new(vec![0, 2, 4]).unwrap();
    /// let range = TiledRange::new(vec![axis.clone(), axis], DimOrder::RowMajor).unwrap();
    ///
    /// let tile = range.tile_bounds(&TileIndex::from([0, 1])).unwrap();
    /// let elements: Vec<_> = tile.elements().collect();
    /// assert_eq!(elements.len(), tile.volume());
    /// ```
    pub fn elements(&self) -> ElementIter<'_> {
        IndexIter::new(&self.start, &self.finish, &self.order)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tile(index={}, elements {}..{}, volume={})",
            self.index,
            self.start,
            self.finish,
            self.volume()
        )
    }
}
