use crate::error::MatrixError;
use serde::{Deserialize, Serialize};

/// The side length of a [`SquareMatrix`](crate::SquareMatrix).
///
/// This is a newtype wrapper for [`usize`](std::primitive::usize).
/// A side is never zero.
///
/// # Examples
///
/// ```
/// let side = square_matrix::Side::try_from(3).unwrap();
/// assert_eq!(side, 3);
/// assert_eq!(side.num_elements(), 9);
/// assert!(square_matrix::Side::try_from(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize")]
#[repr(transparent)]
pub struct Side(usize);

impl Side {
    fn validate<F>(&self, f: F) -> Result<(), MatrixError>
    where
        F: std::ops::FnOnce(String) -> MatrixError,
    {
        if self.0 == 0 {
            Err(f("side must be >= 1, got: 0".to_string()))
        } else {
            Ok(())
        }
    }

    /// The side of a grid holding `len` elements.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidShape`] if `len` is zero or
    /// not a perfect square.
    ///
    /// ```
    /// use square_matrix::Side;
    /// assert_eq!(Side::from_len(16).unwrap(), 4);
    /// assert!(Side::from_len(15).is_err());
    /// ```
    pub fn from_len(len: usize) -> Result<Self, MatrixError> {
        let mut side = (len as f64).sqrt() as usize;
        // Correct for rounding in the float square root
        while side > 0 && side * side > len {
            side -= 1;
        }
        while (side + 1) * (side + 1) <= len {
            side += 1;
        }
        if side * side != len {
            let msg = format!("{len} elements cannot form a square grid");
            return Err(MatrixError::InvalidShape(msg));
        }
        Self::try_from(side)
    }

    /// Total number of cells, `side * side`.
    pub fn num_elements(&self) -> usize {
        self.0 * self.0
    }
}

impl TryFrom<usize> for Side {
    type Error = MatrixError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        let rv = Self(value);
        rv.validate(MatrixError::InvalidShape)?;
        Ok(rv)
    }
}

impl From<Side> for usize {
    fn from(value: Side) -> usize {
        value.0
    }
}

impl PartialEq<usize> for Side {
    fn eq(&self, other: &usize) -> bool {
        self.0.eq(other)
    }
}

impl PartialEq<Side> for usize {
    fn eq(&self, other: &Side) -> bool {
        self.eq(&other.0)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
