use crate::error::MatrixError;
use crate::matrix::SquareMatrix;
use crate::ordering;

/// An arithmetic operation on two matrices.
///
/// Parsed from the codes `+`, `-` and `*`.
///
/// ```
/// use square_matrix::{Operation, SquareMatrix};
///
/// let a = SquareMatrix::from_flat([1, 2, 3, 4]).unwrap();
/// let b = SquareMatrix::from_flat([5, 6, 7, 8]).unwrap();
/// let op: Operation = "*".parse().unwrap();
/// assert_eq!(op.apply(&a, &b).unwrap().as_slice(), &[19, 22, 43, 50]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
}

impl Operation {
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if the sides differ.
    pub fn apply(
        &self,
        a: &SquareMatrix,
        b: &SquareMatrix,
    ) -> Result<SquareMatrix, MatrixError> {
        match self {
            Operation::Add => a.add(b),
            Operation::Subtract => a.subtract(b),
            Operation::Multiply => a.multiply(b),
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "*" => Ok(Operation::Multiply),
            other => Err(MatrixError::UnknownOperation(other.to_string())),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
        };
        write!(f, "{code}")
    }
}

/// A sum-based comparison between two matrices.
///
/// Parsed from the codes `>`, `>=`, `<`, `<=`, `==` and `!=`.
/// Evaluation follows [`ordering`](crate::ordering).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl Comparison {
    /// Compare `a` with `b` by element sum.
    pub fn evaluate(&self, a: &SquareMatrix, b: &SquareMatrix) -> bool {
        match self {
            Comparison::Greater => ordering::sum_gt(a, b),
            Comparison::GreaterOrEqual => ordering::sum_ge(a, b),
            Comparison::Less => ordering::sum_lt(a, b),
            Comparison::LessOrEqual => ordering::sum_le(a, b),
            Comparison::Equal => ordering::sum_eq(a, b),
            Comparison::NotEqual => ordering::sum_ne(a, b),
        }
    }
}

impl std::str::FromStr for Comparison {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            ">" => Ok(Comparison::Greater),
            ">=" => Ok(Comparison::GreaterOrEqual),
            "<" => Ok(Comparison::Less),
            "<=" => Ok(Comparison::LessOrEqual),
            "==" => Ok(Comparison::Equal),
            "!=" => Ok(Comparison::NotEqual),
            other => Err(MatrixError::UnknownOperation(other.to_string())),
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Comparison::Greater => ">",
            Comparison::GreaterOrEqual => ">=",
            Comparison::Less => "<",
            Comparison::LessOrEqual => "<=",
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
        };
        write!(f, "{code}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes() {
        for code in ["+", "-", "*"] {
            let op: Operation = code.parse().unwrap();
            assert_eq!(op.to_string(), code);
        }
        for code in [">", ">=", "<", "<=", "==", "!="] {
            let cmp: Comparison = code.parse().unwrap();
            assert_eq!(cmp.to_string(), code);
        }
    }

    #[test]
    fn parse_trims_input_line() {
        assert_eq!(" <=\n".parse::<Comparison>().unwrap(), Comparison::LessOrEqual);
    }

    #[test]
    fn unknown_codes() {
        assert!(matches!(
            "/".parse::<Operation>(),
            Err(MatrixError::UnknownOperation(code)) if code == "/"
        ));
        assert!("=>".parse::<Comparison>().is_err());
        assert!("0".parse::<Operation>().is_err());
    }

    #[test]
    fn less_or_equal_is_not_less() {
        let a = SquareMatrix::from_flat([0, 1, 2, 3]).unwrap();
        let b = SquareMatrix::from_flat([3, 2, 1, 0]).unwrap();
        assert!(Comparison::LessOrEqual.evaluate(&a, &b));
        assert!(!Comparison::Less.evaluate(&a, &b));
    }
}
