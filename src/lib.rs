//! # Integer square matrices
//!
//! [`SquareMatrix`] is a square grid of `i64` with element-wise
//! arithmetic, matrix multiplication, a text layout and a
//! fallible [`fingerprint`](SquareMatrix::fingerprint).
//!
//! ## Equality
//!
//! `==` on [`SquareMatrix`] is structural.
//! Comparisons by element sum, which ignore cell positions and shape,
//! are in [`ordering`].
//!
//! ## Loading
//!
//! Matrices are read from YAML (or JSON, with the `json` feature)
//! as a sequence of rows:
//!
//! ```
//! let yaml = "
//! - [1, 2]
//! - [3, 4]
//! ";
//! let m = square_matrix::loads(yaml).unwrap();
//! assert_eq!(m.sum_of_elements(), 10);
//! print!("{m}");
//! ```

#![warn(rustdoc::broken_intra_doc_links)]

mod error;
mod io;
mod matrix;
mod operation;
pub mod ordering;
mod placeholder;
mod range;
mod side;

use std::io::Read;

pub use error::MatrixError;
pub use matrix::{add, multiply, subtract, Element, SquareMatrix};
pub use operation::{Comparison, Operation};
pub use range::ElementRange;
pub use side::Side;

/// Build a [`SquareMatrix`] from a YAML string slice.
///
/// # Errors
///
/// Returns [`MatrixError`] if the input is not valid YAML
/// or does not describe a non-empty square grid.
pub fn loads(yaml: &str) -> Result<SquareMatrix, MatrixError> {
    SquareMatrix::new_from_str(yaml)
}

/// Build a [`SquareMatrix`] from a type implementing [`Read`]
/// with YAML contents.
///
/// # Errors
///
/// Same as [`loads`].
pub fn load<T: Read>(reader: T) -> Result<SquareMatrix, MatrixError> {
    SquareMatrix::new_from_reader(reader)
}

/// Build a [`SquareMatrix`] from a JSON string slice.
///
/// # Errors
///
/// Returns [`MatrixError`] if the input is not valid JSON
/// or does not describe a non-empty square grid.
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn loads_json(json: &str) -> Result<SquareMatrix, MatrixError> {
    SquareMatrix::new_from_json_str(json)
}

/// Build a [`SquareMatrix`] from a type implementing [`Read`]
/// with JSON contents.
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn load_json<T: Read>(reader: T) -> Result<SquareMatrix, MatrixError> {
    SquareMatrix::new_from_json_reader(reader)
}
