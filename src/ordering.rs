//! Sum-based ordering of matrices.
//!
//! Matrices compared here are ranked by [`SquareMatrix::sum_of_elements`]
//! only. Shape and individual cells are ignored, so two matrices
//! with different contents (or even different sides) can compare equal:
//!
//! ```
//! use square_matrix::{ordering, SquareMatrix};
//!
//! let a = SquareMatrix::from_flat([0, 1, 2, 3]).unwrap();
//! let b = SquareMatrix::from_flat([1, 1, 1, 3]).unwrap();
//! let c = SquareMatrix::from_flat([6]).unwrap();
//! assert!(ordering::sum_eq(&a, &b));
//! assert!(ordering::sum_eq(&a, &c));
//! assert_ne!(a, b); // structural equality still tells them apart
//! ```
//!
//! [`sum_cmp`] and the functions built on it report
//! [`Ordering::Less`] whenever the sides differ, regardless of the sums.
//! This is likely a defect inherited from earlier behavior but callers
//! may depend on it. [`SumOrdered`] does not have this quirk.

use crate::matrix::SquareMatrix;
use std::cmp::Ordering;

/// Compare by element sum.
///
/// Returns [`Ordering::Less`] if the sides differ.
///
/// ```
/// use std::cmp::Ordering;
/// use square_matrix::{ordering::sum_cmp, SquareMatrix};
///
/// let big = SquareMatrix::from_flat([100]).unwrap();
/// let small = SquareMatrix::from_flat([0, 0, 0, 1]).unwrap();
/// assert_eq!(sum_cmp(&big, &small), Ordering::Less);
/// assert_eq!(sum_cmp(&small, &big), Ordering::Less);
/// ```
pub fn sum_cmp(a: &SquareMatrix, b: &SquareMatrix) -> Ordering {
    if a.side() != b.side() {
        return Ordering::Less;
    }
    a.sum_of_elements().cmp(&b.sum_of_elements())
}

/// `true` if the sums are equal, whatever the sides.
pub fn sum_eq(a: &SquareMatrix, b: &SquareMatrix) -> bool {
    a.sum_of_elements() == b.sum_of_elements()
}

/// `true` if the sums differ, whatever the sides.
pub fn sum_ne(a: &SquareMatrix, b: &SquareMatrix) -> bool {
    !sum_eq(a, b)
}

/// `true` if the sides match and `a` has the larger sum.
pub fn sum_gt(a: &SquareMatrix, b: &SquareMatrix) -> bool {
    sum_cmp(a, b) == Ordering::Greater
}

/// `true` if the sides match and the sum of `a` is not smaller.
/// Always `false` for different sides.
pub fn sum_ge(a: &SquareMatrix, b: &SquareMatrix) -> bool {
    sum_cmp(a, b) != Ordering::Less
}

/// `true` if `a` has the smaller sum, or if the sides differ.
pub fn sum_lt(a: &SquareMatrix, b: &SquareMatrix) -> bool {
    sum_cmp(a, b) == Ordering::Less
}

/// `true` if the sum of `a` is not larger.
/// Always `true` for different sides.
pub fn sum_le(a: &SquareMatrix, b: &SquareMatrix) -> bool {
    sum_cmp(a, b) != Ordering::Greater
}

/// `true` if the cells sum to zero.
pub fn is_zero_sum(m: &SquareMatrix) -> bool {
    m.sum_of_elements() == 0
}

/// `true` if the cells sum to one.
pub fn is_unit_sum(m: &SquareMatrix) -> bool {
    m.sum_of_elements() == 1
}

/// Borrowing wrapper that orders matrices by element sum.
///
/// Unlike [`sum_cmp`], sides are ignored entirely, which keeps
/// [`PartialEq`] and [`Ord`] consistent.
///
/// ```
/// use square_matrix::{ordering::SumOrdered, SquareMatrix};
///
/// let matrices = vec![
///     SquareMatrix::from_flat([5, 5, 5, 5]).unwrap(),
///     SquareMatrix::from_flat([1]).unwrap(),
///     SquareMatrix::from_flat([0, 0, 0, 3]).unwrap(),
/// ];
/// let mut sorted: Vec<_> = matrices.iter().map(SumOrdered).collect();
/// sorted.sort();
/// let sums: Vec<_> = sorted.iter().map(|m| m.0.sum_of_elements()).collect();
/// assert_eq!(sums, vec![1, 3, 20]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SumOrdered<'a>(pub &'a SquareMatrix);

impl PartialEq for SumOrdered<'_> {
    fn eq(&self, other: &Self) -> bool {
        sum_eq(self.0, other.0)
    }
}

impl Eq for SumOrdered<'_> {}

impl PartialOrd for SumOrdered<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SumOrdered<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.sum_of_elements().cmp(&other.0.sum_of_elements())
    }
}
