use thiserror::Error;

/// Error type for this crate.
///
/// # Example
///
/// Three elements cannot be reshaped into a square grid.
///
/// ```
/// let rv = square_matrix::SquareMatrix::from_flat(vec![1, 2, 3]);
/// assert!(matches!(rv, Err(square_matrix::MatrixError::InvalidShape(_))));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatrixError {
    /// The input cannot form a non-empty square grid.
    #[error("invalid shape: {0}")]
    InvalidShape(String),
    /// A binary operation received matrices with different sides.
    #[error("dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch {
        /// Side of the left operand
        left: usize,
        /// Side of the right operand
        right: usize,
    },
    /// A fingerprint was requested for a matrix with a zero cell.
    #[error("division by zero at row {row}, column {column}")]
    DivideByZero {
        /// Row of the first zero cell
        row: usize,
        /// Column of the first zero cell
        column: usize,
    },
    /// A random fill range is empty.
    #[error("invalid element range: [{min}, {max})")]
    InvalidRange {
        /// Inclusive lower bound
        min: i64,
        /// Exclusive upper bound
        max: i64,
    },
    /// An operation code is not recognized.
    #[error("unknown operation: {0:?}")]
    UnknownOperation(String),
    #[error(transparent)]
    /// Errors coming from `serde_yaml`.
    YamlError(#[from] serde_yaml::Error),
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    #[error(transparent)]
    /// Errors coming from `serde_json`.
    JsonError(#[from] serde_json::Error),
}
