//! One-dimensional tiled axis ranges.
//!
//! An [`AxisRange`] partitions a contiguous span of element positions into
//! tiles by an ordered list of boundaries: `n + 1` boundaries define `n`
//! tiles, tile `t` covering elements `[boundaries[t], boundaries[t + 1])`.
//! The boundary list is validated once at construction and immutable
//! afterwards; every query reads it directly, in O(1) or O(log ntiles), with
//! no allocation.
//!
//! # Examples
//!
//! ```
//! use tilrso_range::AxisRange;
//!
//! // Elements 0..4 split into two tiles of two
//! let axis = AxisRange::new(vec![0, 2, 4]).unwrap();
//! assert_eq!(axis.ntiles(), 2);
//! assert_eq!(axis.extent(), 4);
//! assert_eq!(axis.tile_start(1), Some(2));
//! assert_eq!(axis.find(3), Some(1));
//! ```

use std::fmt;

use crate::error::InvalidRangeError;

/// Tile and element boundaries of a single dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AxisRange {
    boundaries: Vec<usize>,
}

impl AxisRange {
    /// Create an axis range from an ordered boundary list.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidRangeError`] when fewer than 2 boundaries are
    /// given or the list is not strictly increasing.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilrso_range::AxisRange;
    ///
    /// assert!(AxisRange::new(vec![0, 3, 7, 10]).is_ok());
    /// assert!(AxisRange::new(vec![5]).is_err());
    /// assert!(AxisRange::new(vec![0, 4, 4]).is_err());
    /// ```
    pub fn new(boundaries: impl Into<Vec<usize>>) -> Result<Self, InvalidRangeError> {
        let boundaries = boundaries.into();
        if boundaries.len() < 2 {
            return Err(InvalidRangeError::TooFewBoundaries {
                got: boundaries.len(),
            });
        }
        for i in 1..boundaries.len() {
            if boundaries[i] <= boundaries[i - 1] {
                return Err(InvalidRangeError::NotIncreasing {
                    index: i,
                    prev: boundaries[i - 1],
                    value: boundaries[i],
                });
            }
        }
        Ok(Self { boundaries })
    }

    /// Create an axis range covering `0..extent` in tiles of `block`
    /// elements, keeping a trailing partial tile when `block` does not
    /// divide `extent`.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidRangeError`] when `extent` or `block` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilrso_range::AxisRange;
    ///
    /// let even = AxisRange::uniform(4, 2).unwrap();
    /// assert_eq!(even, AxisRange::new(vec![0, 2, 4]).unwrap());
    ///
    /// let ragged = AxisRange::uniform(5, 2).unwrap();
    /// assert_eq!(ragged.boundaries(), &[0, 2, 4, 5]);
    /// assert_eq!(ragged.tile_extent(2), Some(1));
    /// ```
    pub fn uniform(extent: usize, block: usize) -> Result<Self, InvalidRangeError> {
        if extent == 0 {
            return Err(InvalidRangeError::ZeroExtent);
        }
        if block == 0 {
            return Err(InvalidRangeError::ZeroBlock);
        }
        let mut boundaries: Vec<usize> = (0..extent).step_by(block).collect();
        boundaries.push(extent);
        Ok(Self { boundaries })
    }

    /// The boundary list, strictly increasing, `ntiles() + 1` entries.
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Number of tiles along this axis.
    pub fn ntiles(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Total number of elements along this axis.
    pub fn extent(&self) -> usize {
        self.finish_element() - self.start_element()
    }

    /// First element position.
    pub fn start_element(&self) -> usize {
        self.boundaries[0]
    }

    /// One past the last element position.
    pub fn finish_element(&self) -> usize {
        self.boundaries[self.boundaries.len() - 1]
    }

    /// First tile position, always 0.
    pub fn start_tile(&self) -> usize {
        0
    }

    /// One past the last tile position.
    pub fn finish_tile(&self) -> usize {
        self.ntiles()
    }

    /// First element of one tile, `None` when the tile is out of bounds.
    pub fn tile_start(&self, tile: usize) -> Option<usize> {
        if self.includes_tile(tile) {
            Some(self.boundaries[tile])
        } else {
            None
        }
    }

    /// One past the last element of one tile, `None` when the tile is out of
    /// bounds.
    pub fn tile_finish(&self, tile: usize) -> Option<usize> {
        if self.includes_tile(tile) {
            Some(self.boundaries[tile + 1])
        } else {
            None
        }
    }

    /// Number of elements in one tile, `None` when the tile is out of
    /// bounds.
    pub fn tile_extent(&self, tile: usize) -> Option<usize> {
        if self.includes_tile(tile) {
            Some(self.boundaries[tile + 1] - self.boundaries[tile])
        } else {
            None
        }
    }

    /// True when the element position lies on this axis.
    pub fn includes_element(&self, element: usize) -> bool {
        element >= self.start_element() && element < self.finish_element()
    }

    /// True when the tile position lies on this axis.
    pub fn includes_tile(&self, tile: usize) -> bool {
        tile < self.ntiles()
    }

    /// The tile containing an element position, `None` when the element is
    /// outside the axis.
    ///
    /// Binary search over the boundary list, O(log ntiles).
    ///
    /// # Examples
    ///
    /// ```
    /// use tilrso_range::AxisRange;
    ///
    /// let axis = AxisRange::new(vec![0, 3, 7, 10]).unwrap();
    /// assert_eq!(axis.find(0), Some(0));
    /// assert_eq!(axis.find(6), Some(1));
    /// assert_eq!(axis.find(9), Some(2));
    /// assert_eq!(axis.find(10), None);
    /// ```
    pub fn find(&self, element: usize) -> Option<usize> {
        if !self.includes_element(element) {
            return None;
        }
        Some(self.boundaries.partition_point(|&b| b <= element) - 1)
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) in {} tiles",
            self.start_element(),
            self.finish_element(),
            self.ntiles()
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AxisRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.boundaries.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AxisRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let boundaries = Vec::<usize>::deserialize(deserializer)?;
        AxisRange::new(boundaries).map_err(serde::de::Error::custom)
    }
}
