//! Permutations of axis slots.
//!
//! A [`Permutation`] is a bijection on the axis slots `{0, …, rank-1}`. The
//! convention, used everywhere in this crate, is **old slot to new slot**:
//! applying a permutation `p` to an array-like value `a` produces `b` with
//! `b[p[i]] = a[i]`. The same convention reorders the axis ranges of a tiled
//! range and the components of a coordinate.
//!
//! # Examples
//!
//! ```
//! use tilrso_range::{Permutation, TileIndex};
//!
//! // Sends slot 0 to slot 2, slot 1 to slot 0, slot 2 to slot 1
//! let p = Permutation::new([2, 0, 1]).unwrap();
//!
//! let coord = TileIndex::from([10, 20, 30]);
//! let permuted = p.apply_coord(&coord).unwrap();
//! assert_eq!(permuted, TileIndex::from([20, 30, 10]));
//!
//! // Inverse undoes the reordering
//! let back = p.inverse().apply_coord(&permuted).unwrap();
//! assert_eq!(back, coord);
//! ```

use std::fmt;

use crate::coordinate::Coord;
use crate::error::InvalidPermutationError;
use crate::types::{AxisVec, Rank};

/// An invertible reindexing of axis slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    image: AxisVec,
}

impl Permutation {
    /// Create a permutation from its image table, where slot `i` of the
    /// input is sent to slot `image[i]` of the output.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidPermutationError`] when the table maps outside
    /// `0..rank` or repeats a destination slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilrso_range::Permutation;
    ///
    /// let p = Permutation::new([1, 0]).unwrap();
    /// assert_eq!(p.image(), &[1, 0]);
    ///
    /// assert!(Permutation::new([0, 0]).is_err());
    /// assert!(Permutation::new([0, 2]).is_err());
    /// ```
    pub fn new(
        image: impl IntoIterator<Item = usize>,
    ) -> Result<Self, InvalidPermutationError> {
        let image: AxisVec = image.into_iter().collect();
        let rank = image.len();

        let mut seen: AxisVec = std::iter::repeat(0).take(rank).collect();
        for &slot in &image {
            if slot >= rank {
                return Err(InvalidPermutationError::SlotOutOfBounds {
                    image: image.to_vec(),
                    rank,
                    slot,
                });
            }
            if seen[slot] != 0 {
                return Err(InvalidPermutationError::DuplicateSlot {
                    image: image.to_vec(),
                    rank,
                    slot,
                });
            }
            seen[slot] = 1;
        }

        Ok(Self { image })
    }

    /// The identity permutation on `rank` slots.
    pub fn identity(rank: Rank) -> Self {
        Self {
            image: (0..rank).collect(),
        }
    }

    /// Number of axis slots covered.
    pub fn rank(&self) -> Rank {
        self.image.len()
    }

    /// The image table: slot `i` of the input goes to slot `image()[i]`.
    pub fn image(&self) -> &[usize] {
        &self.image
    }

    /// True when this permutation leaves every slot in place.
    pub fn is_identity(&self) -> bool {
        self.image.iter().enumerate().all(|(i, &s)| i == s)
    }

    /// The inverse permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilrso_range::Permutation;
    ///
    /// let p = Permutation::new([2, 0, 1]).unwrap();
    /// assert_eq!(p.inverse().image(), &[1, 2, 0]);
    /// assert!(p.compose(&p.inverse()).unwrap().is_identity());
    /// ```
    pub fn inverse(&self) -> Self {
        let mut image: AxisVec = std::iter::repeat(0).take(self.rank()).collect();
        for (i, &slot) in self.image.iter().enumerate() {
            image[slot] = i;
        }
        Self { image }
    }

    /// Compose with another permutation of the same rank: the result applies
    /// `self` first, then `other`.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidPermutationError::RankMismatch`] when the ranks
    /// differ.
    pub fn compose(&self, other: &Self) -> Result<Self, InvalidPermutationError> {
        if other.rank() != self.rank() {
            return Err(InvalidPermutationError::RankMismatch {
                perm: other.rank(),
                expected: self.rank(),
            });
        }
        Ok(Self {
            image: self.image.iter().map(|&s| other.image[s]).collect(),
        })
    }

    /// Apply to a slice, returning the reordered values.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidPermutationError::RankMismatch`] when the slice
    /// length differs from the permutation rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilrso_range::Permutation;
    ///
    /// let p = Permutation::new([2, 0, 1]).unwrap();
    /// assert_eq!(p.apply_slice(&['a', 'b', 'c']).unwrap(), vec!['b', 'c', 'a']);
    /// ```
    pub fn apply_slice<T: Clone>(&self, input: &[T]) -> Result<Vec<T>, InvalidPermutationError> {
        if input.len() != self.rank() {
            return Err(InvalidPermutationError::RankMismatch {
                perm: self.rank(),
                expected: input.len(),
            });
        }
        let mut output = input.to_vec();
        for (i, &slot) in self.image.iter().enumerate() {
            output[slot] = input[i].clone();
        }
        Ok(output)
    }

    /// Apply to a coordinate, preserving its kind.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidPermutationError::RankMismatch`] when the
    /// coordinate rank differs from the permutation rank.
    pub fn apply_coord<K>(&self, coord: &Coord<K>) -> Result<Coord<K>, InvalidPermutationError> {
        if coord.rank() != self.rank() {
            return Err(InvalidPermutationError::RankMismatch {
                perm: self.rank(),
                expected: coord.rank(),
            });
        }
        let mut output = Coord::zeros(self.rank());
        for (i, &slot) in self.image.iter().enumerate() {
            output[slot] = coord[i];
        }
        Ok(output)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, s) in self.image.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}->{}", i, s)?;
        }
        write!(f, "}}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Permutation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.image.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Permutation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let image = Vec::<usize>::deserialize(deserializer)?;
        Permutation::new(image).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::ElementIndex;

    #[test]
    fn test_rejects_non_bijections() {
        assert!(matches!(
            Permutation::new([0, 0]).unwrap_err(),
            InvalidPermutationError::DuplicateSlot { slot: 0, .. }
        ));
        assert!(matches!(
            Permutation::new([0, 3]).unwrap_err(),
            InvalidPermutationError::SlotOutOfBounds { slot: 3, .. }
        ));
    }

    #[test]
    fn test_identity() {
        let id = Permutation::identity(3);
        assert!(id.is_identity());
        assert_eq!(id.apply_slice(&[7, 8, 9]).unwrap(), vec![7, 8, 9]);
    }

    #[test]
    fn test_apply_convention() {
        // b[p[i]] = a[i]
        let p = Permutation::new([2, 0, 1]).unwrap();
        let out = p.apply_slice(&[10, 20, 30]).unwrap();
        assert_eq!(out[2], 10);
        assert_eq!(out[0], 20);
        assert_eq!(out[1], 30);
    }

    #[test]
    fn test_inverse_round_trip() {
        let p = Permutation::new([1, 2, 0]).unwrap();
        let data = [4, 5, 6];
        let there = p.apply_slice(&data).unwrap();
        let back = p.inverse().apply_slice(&there).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_compose_order() {
        let p = Permutation::new([1, 0]).unwrap();
        let q = Permutation::new([1, 0]).unwrap();
        assert!(p.compose(&q).unwrap().is_identity());

        let r = Permutation::identity(3);
        assert!(p.compose(&r).is_err());
    }

    #[test]
    fn test_apply_coord_preserves_kind() {
        let p = Permutation::new([1, 0]).unwrap();
        let e = ElementIndex::from([3, 9]);
        assert_eq!(p.apply_coord(&e).unwrap(), ElementIndex::from([9, 3]));

        let short = ElementIndex::from([1]);
        assert!(p.apply_coord(&short).is_err());
    }

    #[test]
    fn test_display() {
        let p = Permutation::new([1, 0]).unwrap();
        assert_eq!(p.to_string(), "{0->1, 1->0}");
    }
}
