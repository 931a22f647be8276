use crate::error::MatrixError;
use crate::matrix::Element;

/// Half-open interval `[min, max)` that random cells are drawn from.
///
/// The default is `[-10, 10)`.
///
/// ```
/// use square_matrix::ElementRange;
///
/// let range = ElementRange::default();
/// assert_eq!(range.min(), -10);
/// assert_eq!(range.max(), 10);
/// assert!(ElementRange::new(5, 5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementRange {
    min: Element,
    max: Element,
}

impl ElementRange {
    /// # Errors
    ///
    /// [`MatrixError::InvalidRange`] if `min >= max`.
    pub fn new(min: Element, max: Element) -> Result<Self, MatrixError> {
        if min >= max {
            Err(MatrixError::InvalidRange { min, max })
        } else {
            Ok(Self { min, max })
        }
    }

    /// Inclusive lower bound
    pub fn min(&self) -> Element {
        self.min
    }

    /// Exclusive upper bound
    pub fn max(&self) -> Element {
        self.max
    }

    pub(crate) fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Element {
        rng.gen_range(self.min..self.max)
    }
}

impl Default for ElementRange {
    fn default() -> Self {
        Self { min: -10, max: 10 }
    }
}

impl TryFrom<std::ops::Range<Element>> for ElementRange {
    type Error = MatrixError;

    fn try_from(value: std::ops::Range<Element>) -> Result<Self, Self::Error> {
        Self::new(value.start, value.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn empty_and_reversed_ranges() {
        assert!(matches!(
            ElementRange::new(3, 3),
            Err(MatrixError::InvalidRange { min: 3, max: 3 })
        ));
        assert!(ElementRange::try_from(4..-4).is_err());
    }

    #[test]
    fn samples_stay_in_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(101);
        let range = ElementRange::try_from(-2..3).unwrap();
        for _ in 0..1000 {
            let x = range.sample(&mut rng);
            assert!((-2..3).contains(&x));
        }
    }

    #[test]
    fn single_value_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        let range = ElementRange::new(7, 8).unwrap();
        assert!((0..10).all(|_| range.sample(&mut rng) == 7));
    }
}
