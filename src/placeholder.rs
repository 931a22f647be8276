//! Stand-ins for the determinant and the inverse.
//!
//! Neither function computes the named mathematical result.
//! Both only return random values with the documented shape.

use crate::matrix::{Element, SquareMatrix};
use crate::range::ElementRange;

impl SquareMatrix {
    /// A random integer in `[-25, 25)`.
    ///
    /// This is **not** the determinant of `self`.
    ///
    /// ```
    /// use rand::SeedableRng;
    ///
    /// let m = square_matrix::SquareMatrix::from_flat([1, 0, 0, 1]).unwrap();
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    /// assert!((-25..25).contains(&m.random_determinant(&mut rng)));
    /// ```
    pub fn random_determinant<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Element {
        rng.gen_range(-25..25)
    }

    /// A randomly filled matrix with the side of `self`, cells
    /// drawn from [`ElementRange::default`].
    ///
    /// This is **not** the inverse of `self`.
    pub fn random_inverse<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> SquareMatrix {
        SquareMatrix::random_with(rng, self.typed_side(), ElementRange::default())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn determinant_range() {
        let m = SquareMatrix::from_flat((1..=9).collect::<Vec<_>>()).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(2024);
        for _ in 0..500 {
            assert!((-25..25).contains(&m.random_determinant(&mut rng)));
        }
    }

    #[test]
    fn inverse_keeps_side() {
        let m = SquareMatrix::from_flat((1..=16).collect::<Vec<_>>()).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(99);
        let inv = m.random_inverse(&mut rng);
        assert_eq!(inv.side(), 4);
        assert!(inv.as_slice().iter().all(|x| (-10..10).contains(x)));
    }
}
