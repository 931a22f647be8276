use crate::error::MatrixError;
use crate::range::ElementRange;
use crate::side::Side;
use serde::{Deserialize, Serialize};

/// The type of a matrix cell.
pub type Element = i64;

/// A square grid of signed integers.
///
/// Cells are stored row-major.
///
/// # Equality
///
/// The derived [`PartialEq`] is structural: two matrices
/// are equal when they have the same side and the same cells.
/// Comparisons by element sum live in [`ordering`](crate::ordering).
///
/// # Thread safety
///
/// [`SquareMatrix::random_fill`] is the only operation that mutates
/// a matrix after construction. It takes `&mut self`, so sharing a
/// matrix across threads while filling it requires external
/// synchronization such as a `Mutex`.
///
/// # Examples
///
/// ```
/// use square_matrix::SquareMatrix;
///
/// let a = SquareMatrix::from_flat(vec![1, 2, 3, 4]).unwrap();
/// let b = SquareMatrix::from_flat(vec![5, 6, 7, 8]).unwrap();
/// assert_eq!(a.add(&b).unwrap().to_grid(), vec![vec![6, 8], vec![10, 12]]);
/// assert_eq!(a.multiply(&b).unwrap().to_grid(), vec![vec![19, 22], vec![43, 50]]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Element>>", into = "Vec<Vec<Element>>")]
pub struct SquareMatrix {
    data: Vec<Element>,
    side: Side,
}

// Construction
impl SquareMatrix {
    /// A matrix with all cells set to zero.
    pub fn zeros(side: Side) -> Self {
        Self {
            data: vec![0; side.num_elements()],
            side,
        }
    }

    /// Wrap a grid given as a list of rows.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidShape`] if the grid is empty or
    /// any row length differs from the number of rows.
    pub fn from_grid(grid: Vec<Vec<Element>>) -> Result<Self, MatrixError> {
        let side = Side::try_from(grid.len())?;
        if let Some((index, row)) = grid
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != grid.len())
        {
            let msg = format!(
                "row {index} has {} elements, expected {}",
                row.len(),
                grid.len()
            );
            log::debug!("rejecting grid: {msg}");
            return Err(MatrixError::InvalidShape(msg));
        }
        Ok(Self {
            data: grid.into_iter().flatten().collect(),
            side,
        })
    }

    /// Reshape a flat sequence into a square grid, row-major.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidShape`] if the number of values is
    /// zero or not a perfect square.
    ///
    /// ```
    /// use square_matrix::{MatrixError, SquareMatrix};
    ///
    /// let m = SquareMatrix::from_flat([0, 1, 2, 3]).unwrap();
    /// assert_eq!(m.side(), 2);
    /// assert_eq!(m.row(1), &[2, 3]);
    /// assert!(matches!(
    ///     SquareMatrix::from_flat([1, 2, 3]),
    ///     Err(MatrixError::InvalidShape(_))
    /// ));
    /// ```
    pub fn from_flat<V: Into<Vec<Element>>>(values: V) -> Result<Self, MatrixError> {
        let data = values.into();
        let side = Side::from_len(data.len()).map_err(|e| {
            log::debug!("rejecting flat input of length {}", data.len());
            e
        })?;
        Ok(Self { data, side })
    }

    /// A new matrix filled from the thread-local random number generator.
    pub fn random(side: Side, range: ElementRange) -> Self {
        Self::random_with(&mut rand::thread_rng(), side, range)
    }

    /// A new matrix filled from `rng`.
    pub fn random_with<R: rand::Rng + ?Sized>(
        rng: &mut R,
        side: Side,
        range: ElementRange,
    ) -> Self {
        let mut rv = Self::zeros(side);
        rv.random_fill_with(rng, side, range);
        rv
    }

    /// Replace the whole grid with a new `side x side` grid of random
    /// cells drawn uniformly from `range`.
    ///
    /// The result is not reproducible; use
    /// [`SquareMatrix::random_fill_with`] with a seeded generator
    /// when that matters.
    pub fn random_fill(&mut self, side: Side, range: ElementRange) {
        self.random_fill_with(&mut rand::thread_rng(), side, range)
    }

    /// Same as [`SquareMatrix::random_fill`], drawing from `rng`.
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use square_matrix::{ElementRange, Side, SquareMatrix};
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut m = SquareMatrix::zeros(Side::try_from(1).unwrap());
    /// m.random_fill_with(&mut rng, Side::try_from(3).unwrap(), ElementRange::default());
    /// assert_eq!(m.side(), 3);
    /// assert!(m.as_slice().iter().all(|x| (-10..10).contains(x)));
    /// ```
    pub fn random_fill_with<R: rand::Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        side: Side,
        range: ElementRange,
    ) {
        log::trace!(
            "random fill: side = {side}, range = [{}, {})",
            range.min(),
            range.max()
        );
        self.data.clear();
        self.data.extend((0..side.num_elements()).map(|_| range.sample(&mut *rng)));
        self.side = side;
    }
}

// Queries
impl SquareMatrix {
    /// The number of rows, which equals the number of columns.
    pub fn side(&self) -> usize {
        self.side.into()
    }

    pub(crate) fn typed_side(&self) -> Side {
        self.side
    }

    /// Sum of all cells, with wrapping arithmetic.
    pub fn sum_of_elements(&self) -> Element {
        self.data.iter().fold(0, |acc, &x| acc.wrapping_add(x))
    }

    /// A single integer summarizing all cells.
    ///
    /// Starting from the first cell, each cell in row-major order
    /// updates the value as `h = h * cell + h % cell`, with
    /// wrapping arithmetic.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DivideByZero`] for the first cell equal to zero.
    ///
    /// ```
    /// use square_matrix::{MatrixError, SquareMatrix};
    ///
    /// let m = SquareMatrix::from_flat([0, 1, 2, 3]).unwrap();
    /// assert!(matches!(
    ///     m.fingerprint(),
    ///     Err(MatrixError::DivideByZero { row: 0, column: 0 })
    /// ));
    /// ```
    pub fn fingerprint(&self) -> Result<Element, MatrixError> {
        let side = self.side();
        let mut hash = self.data[0];
        for (index, &cell) in self.data.iter().enumerate() {
            if cell == 0 {
                return Err(MatrixError::DivideByZero {
                    row: index / side,
                    column: index % side,
                });
            }
            hash = hash.wrapping_mul(cell).wrapping_add(hash.wrapping_rem(cell));
        }
        Ok(hash)
    }

    /// Text layout of the grid, one line per row.
    ///
    /// Cells in `0..=9` get two leading spaces and all
    /// other values get one.
    ///
    /// ```
    /// let m = square_matrix::SquareMatrix::from_flat([1, -2, 10, 3]).unwrap();
    /// assert_eq!(m.render(), "  1 -2\n 10  3\n");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Get the cell at `(row, column)`.
    ///
    /// # Panics
    ///
    /// If either index is out of range.
    pub fn get(&self, row: usize, column: usize) -> Element {
        self.data[self.offset(row, column)]
    }

    fn offset(&self, row: usize, column: usize) -> usize {
        let side = self.side();
        assert!(
            row < side && column < side,
            "out of bounds access to a {side}x{side} matrix: {{row:{row}, column:{column}}}"
        );
        row * side + column
    }

    /// The cells of one row, left to right.
    ///
    /// # Panics
    ///
    /// If `row` is out of range.
    pub fn row(&self, row: usize) -> &[Element] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.side()]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Element> {
        self.data.chunks(self.side())
    }

    /// All cells, row-major.
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    /// Copy the cells out as a list of rows.
    pub fn to_grid(&self) -> Vec<Vec<Element>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

// Arithmetic
impl SquareMatrix {
    fn check_sides(&self, other: &Self) -> Result<(), MatrixError> {
        if self.side != other.side {
            log::debug!("dimension mismatch: {} vs {}", self.side, other.side);
            Err(MatrixError::DimensionMismatch {
                left: self.side(),
                right: other.side(),
            })
        } else {
            Ok(())
        }
    }

    fn zip_with<F>(&self, other: &Self, f: F) -> Result<Self, MatrixError>
    where
        F: Fn(Element, Element) -> Element,
    {
        self.check_sides(other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            side: self.side,
        })
    }

    /// Element-wise sum, with wrapping arithmetic.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if the sides differ.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.zip_with(other, Element::wrapping_add)
    }

    /// Element-wise difference, with wrapping arithmetic.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if the sides differ.
    pub fn subtract(&self, other: &Self) -> Result<Self, MatrixError> {
        self.zip_with(other, Element::wrapping_sub)
    }

    /// Matrix product, `self * other`, with wrapping arithmetic.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if the sides differ.
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_sides(other)?;
        let side = self.side();
        let mut rv = Self::zeros(self.side);
        for row in 0..side {
            let lhs = self.row(row);
            for column in 0..side {
                let value = lhs
                    .iter()
                    .enumerate()
                    .map(|(k, &a)| a.wrapping_mul(other.data[k * side + column]))
                    .fold(0, Element::wrapping_add);
                rv.data[row * side + column] = value;
            }
        }
        Ok(rv)
    }
}

/// Element-wise sum of `a` and `b`.
///
/// See [`SquareMatrix::add`].
pub fn add(a: &SquareMatrix, b: &SquareMatrix) -> Result<SquareMatrix, MatrixError> {
    a.add(b)
}

/// Element-wise difference of `a` and `b`.
///
/// See [`SquareMatrix::subtract`].
pub fn subtract(a: &SquareMatrix, b: &SquareMatrix) -> Result<SquareMatrix, MatrixError> {
    a.subtract(b)
}

/// Matrix product of `a` and `b`.
///
/// See [`SquareMatrix::multiply`].
pub fn multiply(a: &SquareMatrix, b: &SquareMatrix) -> Result<SquareMatrix, MatrixError> {
    a.multiply(b)
}

impl std::fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for value in row {
                if (0..=9).contains(value) {
                    write!(f, "  {value}")?;
                } else {
                    write!(f, " {value}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<Element>>> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(value: Vec<Vec<Element>>) -> Result<Self, Self::Error> {
        Self::from_grid(value)
    }
}

impl TryFrom<Vec<Element>> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(value: Vec<Element>) -> Result<Self, Self::Error> {
        Self::from_flat(value)
    }
}

impl TryFrom<&[Element]> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(value: &[Element]) -> Result<Self, Self::Error> {
        Self::from_flat(value)
    }
}

impl From<SquareMatrix> for Vec<Vec<Element>> {
    fn from(value: SquareMatrix) -> Self {
        value.to_grid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn side(n: usize) -> Side {
        Side::try_from(n).unwrap()
    }

    #[test]
    fn from_grid_ragged() {
        let grid = vec![vec![1, 2], vec![3]];
        assert!(matches!(
            SquareMatrix::from_grid(grid),
            Err(MatrixError::InvalidShape(_))
        ));
    }

    #[test]
    fn from_grid_not_square() {
        let grid = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert!(SquareMatrix::from_grid(grid).is_err());
    }

    #[test]
    fn from_grid_empty() {
        assert!(SquareMatrix::from_grid(vec![]).is_err());
    }

    #[test]
    fn from_flat_empty() {
        assert!(SquareMatrix::from_flat(Vec::<Element>::new()).is_err());
    }

    #[test]
    fn grid_and_flat_agree() {
        let a = SquareMatrix::from_grid(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        let b = SquareMatrix::from_flat((1..=9).collect::<Vec<_>>()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get(2, 0), 7);
    }

    #[test]
    fn random_fill_replaces_contents() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(54321);
        let mut m = SquareMatrix::from_flat([100, 100, 100, 100]).unwrap();
        m.random_fill_with(&mut rng, side(4), ElementRange::default());
        assert_eq!(m.side(), 4);
        assert_eq!(m.as_slice().len(), 16);
        assert!(m.as_slice().iter().all(|x| (-10..10).contains(x)));
    }

    #[test]
    fn seeded_fill_is_reproducible() {
        let range = ElementRange::new(-100, 100).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let a = SquareMatrix::random_with(&mut rng, side(5), range);
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let b = SquareMatrix::random_with(&mut rng, side(5), range);
        assert_eq!(a, b);
    }

    #[test]
    fn thread_rng_fill() {
        let m = SquareMatrix::random(side(3), ElementRange::new(1, 2).unwrap());
        assert_eq!(m.sum_of_elements(), 9);
    }

    #[test]
    fn fingerprint_by_hand() {
        // h = 2
        // cell 2: h = 2 * 2 + 2 % 2 = 4
        // cell 3: h = 4 * 3 + 4 % 3 = 13
        // cell -1: h = 13 * -1 + 13 % -1 = -13
        // cell 5: h = -13 * 5 + -13 % 5 = -65 + -3 = -68
        let m = SquareMatrix::from_flat([2, 3, -1, 5]).unwrap();
        assert_eq!(m.fingerprint().unwrap(), -68);
    }

    #[test]
    fn fingerprint_zero_not_first() {
        let m = SquareMatrix::from_flat([1, 2, 3, 4, 5, 6, 7, 0, 9]).unwrap();
        assert!(matches!(
            m.fingerprint(),
            Err(MatrixError::DivideByZero { row: 2, column: 1 })
        ));
    }

    #[test]
    fn fingerprint_does_not_overflow() {
        let m = SquareMatrix::from_flat([Element::MIN, -1, Element::MAX, -1]).unwrap();
        assert!(m.fingerprint().is_ok());
    }

    #[test]
    fn render_padding() {
        let m = SquareMatrix::from_flat([0, 9, 10, -1]).unwrap();
        assert_eq!(m.render(), "  0  9\n 10 -1\n");
        assert_eq!(format!("{m}"), m.render());
    }

    #[test]
    fn subtract_values() {
        let a = SquareMatrix::from_flat([1, 2, 3, 4]).unwrap();
        let b = SquareMatrix::from_flat([5, 6, 7, 8]).unwrap();
        assert_eq!(a.subtract(&b).unwrap().as_slice(), &[-4, -4, -4, -4]);
    }

    #[test]
    fn multiply_identity() {
        let a = SquareMatrix::from_flat((1..=9).collect::<Vec<_>>()).unwrap();
        let identity = SquareMatrix::from_flat([1, 0, 0, 0, 1, 0, 0, 0, 1]).unwrap();
        assert_eq!(a.multiply(&identity).unwrap(), a);
        assert_eq!(identity.multiply(&a).unwrap(), a);
    }

    #[test]
    fn mismatched_sides() {
        let a = SquareMatrix::zeros(side(2));
        let b = SquareMatrix::zeros(side(3));
        for rv in [a.add(&b), a.subtract(&b), a.multiply(&b)] {
            assert!(matches!(
                rv,
                Err(MatrixError::DimensionMismatch { left: 2, right: 3 })
            ));
        }
    }

    #[test]
    fn rows_in_order() {
        let m = SquareMatrix::from_flat([1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert_eq!(m.row(0), &[1, 2, 3]);
        assert_eq!(m.row(2), &[7, 8, 9]);
    }

    #[test]
    #[should_panic(expected = "out of bounds access to a 2x2 matrix")]
    fn row_out_of_bounds() {
        let m = SquareMatrix::zeros(side(2));
        let _ = m.row(2);
    }

    #[test]
    fn add_wraps_on_overflow() {
        let a = SquareMatrix::from_flat([Element::MAX]).unwrap();
        let b = SquareMatrix::from_flat([1]).unwrap();
        assert_eq!(a.add(&b).unwrap().get(0, 0), Element::MIN);
    }

    #[test]
    fn subtract_wraps_on_overflow() {
        let a = SquareMatrix::from_flat([Element::MIN, 0, 0, Element::MAX]).unwrap();
        let b = SquareMatrix::from_flat([1, 0, 0, -1]).unwrap();
        let c = a.subtract(&b).unwrap();
        assert_eq!(c.as_slice(), &[Element::MAX, 0, 0, Element::MIN]);
    }

    #[test]
    fn multiply_wraps_on_overflow() {
        let a = SquareMatrix::from_flat([Element::MAX, Element::MAX, 0, 0]).unwrap();
        let b = SquareMatrix::from_flat([2, 0, 1, 0]).unwrap();
        // MAX * 2 + MAX * 1 wraps to MAX - 2
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.as_slice(), &[Element::MAX - 2, 0, 0, 0]);
    }

    #[test]
    fn sum_wraps_on_overflow() {
        let m = SquareMatrix::from_flat([Element::MAX, 1, 0, 0]).unwrap();
        assert_eq!(m.sum_of_elements(), Element::MIN);
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds() {
        let m = SquareMatrix::zeros(side(2));
        let _ = m.get(0, 2);
    }
}
