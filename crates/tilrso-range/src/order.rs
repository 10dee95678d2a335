//! Dimension-order policy for ordinal computation and iteration.
//!
//! A [`DimOrder`] names which axis varies fastest when coordinates are
//! linearized or iterated. It is an explicit constructor argument of
//! [`crate::TiledRange`], never process-wide state, so two ranges in the
//! same program can traverse in different orders.

use crate::error::InvalidRangeError;
use crate::permutation::Permutation;
use crate::types::{AxisVec, Rank};

/// Axis traversal order used for ordinal weights and iteration.
///
/// # Examples
///
/// ```
/// use tilrso_range::DimOrder;
///
/// // Last axis varies fastest, as in C arrays
/// let row = DimOrder::RowMajor.significance(3).unwrap();
/// assert_eq!(&row[..], &[2, 1, 0]);
///
/// // First axis varies fastest, as in Fortran arrays
/// let col = DimOrder::ColumnMajor.significance(3).unwrap();
/// assert_eq!(&col[..], &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DimOrder {
    /// Last axis varies fastest.
    #[default]
    RowMajor,
    /// First axis varies fastest.
    ColumnMajor,
    /// Explicit significance table: slot `k` of the permutation image holds
    /// the axis that varies `k`-th fastest.
    Custom(Permutation),
}

impl DimOrder {
    /// Resolve the policy into a significance table for `rank` axes, listing
    /// axis slots from fastest-varying to slowest.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidRangeError::OrderRankMismatch`] when a custom
    /// order covers a different number of axes.
    pub fn significance(&self, rank: Rank) -> Result<AxisVec, InvalidRangeError> {
        match self {
            DimOrder::RowMajor => Ok((0..rank).rev().collect()),
            DimOrder::ColumnMajor => Ok((0..rank).collect()),
            DimOrder::Custom(perm) => {
                if perm.rank() != rank {
                    return Err(InvalidRangeError::OrderRankMismatch {
                        order: perm.rank(),
                        axes: rank,
                    });
                }
                Ok(perm.image().iter().copied().collect())
            }
        }
    }
}
