//! Tagged tile and element coordinates.
//!
//! A [`Coord`] is an ordered tuple of non-negative integers naming one
//! position in a DIM-dimensional index space. The kind parameter tags the
//! coordinate as either a tile position ([`TileIndex`]) or an element
//! position ([`ElementIndex`]); the two kinds share arithmetic and ordering
//! through the generic impl but never convert into one another, so a tile
//! index can not be passed where an element index is expected.
//!
//! Coordinates are totally ordered (lexicographic) and hashable, so they can
//! key tile payload storage directly.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use tilrso_range::{ElementIndex, TileIndex};
//!
//! let t = TileIndex::from([1, 0]);
//! assert_eq!(t.rank(), 2);
//! assert_eq!(t[0], 1);
//!
//! // Usable as a map key
//! let mut payloads: HashMap<TileIndex, Vec<f64>> = HashMap::new();
//! payloads.insert(t.clone(), vec![0.0; 4]);
//! assert!(payloads.contains_key(&t));
//!
//! // Component-wise subtraction stays within one kind
//! let e = ElementIndex::from([3, 5]);
//! let origin = ElementIndex::from([2, 4]);
//! assert_eq!(&e - &origin, ElementIndex::from([1, 1]));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut, Sub};

use crate::types::{AxisVec, Rank};

/// Kind marker for tile coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileTag;

/// Kind marker for element coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementTag;

/// A DIM-dimensional coordinate tagged with its kind.
///
/// The kind parameter `K` is a zero-sized marker ([`TileTag`] or
/// [`ElementTag`]); it exists only in the type, never in memory, so a
/// `Coord<K>` is exactly its components.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "", transparent))]
pub struct Coord<K> {
    components: AxisVec,
    #[cfg_attr(feature = "serde", serde(skip))]
    _kind: PhantomData<K>,
}

/// Coordinate of a tile within a tiled range.
pub type TileIndex = Coord<TileTag>;

/// Coordinate of an element within a tiled range.
pub type ElementIndex = Coord<ElementTag>;

impl<K> Coord<K> {
    /// Create a coordinate from its components.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilrso_range::TileIndex;
    ///
    /// let t = TileIndex::new([0, 1, 2]);
    /// assert_eq!(t.components(), &[0, 1, 2]);
    /// ```
    pub fn new(components: impl IntoIterator<Item = usize>) -> Self {
        Self {
            components: components.into_iter().collect(),
            _kind: PhantomData,
        }
    }

    /// Create the all-zero coordinate of the given rank.
    pub fn zeros(rank: Rank) -> Self {
        Self {
            components: std::iter::repeat(0).take(rank).collect(),
            _kind: PhantomData,
        }
    }

    /// The number of dimensions of this coordinate.
    pub fn rank(&self) -> Rank {
        self.components.len()
    }

    /// The components as a slice, slowest axis first.
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Component along one axis, `None` when the axis is out of bounds.
    pub fn get(&self, axis: usize) -> Option<usize> {
        self.components.get(axis).copied()
    }
}

impl<K> Index<usize> for Coord<K> {
    type Output = usize;

    fn index(&self, axis: usize) -> &usize {
        &self.components[axis]
    }
}

impl<K> IndexMut<usize> for Coord<K> {
    fn index_mut(&mut self, axis: usize) -> &mut usize {
        &mut self.components[axis]
    }
}

impl<K, const N: usize> From<[usize; N]> for Coord<K> {
    fn from(components: [usize; N]) -> Self {
        Self::new(components)
    }
}

impl<K> From<&[usize]> for Coord<K> {
    fn from(components: &[usize]) -> Self {
        Self::new(components.iter().copied())
    }
}

/// Component-wise subtraction.
///
/// Each component of `rhs` must not exceed the matching component of the
/// left operand; ordinal computation subtracts a range's start coordinate
/// only after a containment check has established this.
impl<K> Sub for &Coord<K> {
    type Output = Coord<K>;

    fn sub(self, rhs: Self) -> Coord<K> {
        debug_assert_eq!(self.rank(), rhs.rank());
        Coord {
            components: self
                .components
                .iter()
                .zip(rhs.components.iter())
                .map(|(a, b)| a - b)
                .collect(),
            _kind: PhantomData,
        }
    }
}

impl<K> fmt::Display for Coord<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    #[test]
    fn test_construction_and_access() {
        let t = TileIndex::new([3, 1, 4]);
        assert_eq!(t.rank(), 3);
        assert_eq!(t[0], 3);
        assert_eq!(t[2], 4);
        assert_eq!(t.get(2), Some(4));
        assert_eq!(t.get(3), None);

        let z = ElementIndex::zeros(2);
        assert_eq!(z.components(), &[0, 0]);
    }

    #[test]
    fn test_subtraction() {
        let a = ElementIndex::from([5, 7]);
        let b = ElementIndex::from([2, 3]);
        assert_eq!(&a - &b, ElementIndex::from([3, 4]));
    }

    #[test]
    fn test_lexicographic_ordering() {
        let a = TileIndex::from([0, 9]);
        let b = TileIndex::from([1, 0]);
        assert!(a < b);
        assert!(TileIndex::from([1, 0]) < TileIndex::from([1, 1]));
    }

    #[test]
    fn test_equal_coords_hash_equal() {
        let a = TileIndex::from([1, 2]);
        let b = TileIndex::from([1, 2]);
        assert_eq!(a, b);

        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_mutation_through_index() {
        let mut t = TileIndex::zeros(2);
        t[1] = 5;
        assert_eq!(t, TileIndex::from([0, 5]));
    }

    #[test]
    fn test_display() {
        assert_eq!(TileIndex::from([1, 0]).to_string(), "(1, 0)");
        assert_eq!(ElementIndex::from([7]).to_string(), "(7)");
    }
}
