//! Shape-checked containers of expressions.
//!
//! [`Vector`] and [`Matrix`] hold expressions but never simplify them. Element-wise operations
//! build new, unsimplified expression trees; apply a simplifier to the entries with
//! [`Vector::map`] or [`ExpressionField::simplify_vector`](crate::ExpressionField).

use crate::{error::DimensionMismatch, expr::{self, Expr}, primitive::DEFAULT_RADIX};
use std::fmt::{self, Display, Formatter};

/// A column vector of expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    elements: Vec<Expr>,
}

impl Vector {
    /// Creates a vector containing the given elements, in order.
    pub fn new(elements: impl IntoIterator<Item = Expr>) -> Self {
        Self { elements: elements.into_iter().collect() }
    }

    /// Returns the number of elements in the vector.
    pub fn dimension(&self) -> usize {
        self.elements.len()
    }

    /// Returns the elements of the vector.
    pub fn elements(&self) -> &[Expr] {
        &self.elements
    }

    /// Consumes the vector, returning its elements.
    pub fn into_elements(self) -> Vec<Expr> {
        self.elements
    }

    /// Adds two vectors element-wise, returning a vector of [`Expr::Add`]s.
    ///
    /// Returns an error if the vectors have different dimensions.
    pub fn add(&self, other: &Vector) -> Result<Vector, DimensionMismatch> {
        if self.dimension() != other.dimension() {
            return Err(DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }

        Ok(Self::new(
            self.elements.iter()
                .zip(other.elements.iter())
                .map(|(lhs, rhs)| expr::add(lhs.clone(), rhs.clone())),
        ))
    }

    /// Applies the given function to every element of the vector.
    pub fn map(&self, f: impl FnMut(&Expr) -> Expr) -> Vector {
        Self::new(self.elements.iter().map(f))
    }

    /// Multiplies every element of the vector by the given scalar, returning a vector of
    /// [`Expr::Mul`]s with the scalar on the left.
    pub fn multiply(&self, scalar: &Expr) -> Vector {
        self.map(|element| expr::multiply(scalar.clone(), element.clone()))
    }

    pub(crate) fn fmt_radix(&self, f: &mut Formatter<'_>, radix: u32) -> fmt::Result {
        write!(f, "(")?;
        let mut iter = self.elements.iter();
        if let Some(element) = iter.next() {
            element.fmt_radix(f, radix)?;
            for element in iter {
                write!(f, ", ")?;
                element.fmt_radix(f, radix)?;
            }
        }
        write!(f, ")^T")
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, DEFAULT_RADIX)
    }
}

impl FromIterator<Expr> for Vector {
    fn from_iter<I: IntoIterator<Item = Expr>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// A matrix of expressions, stored as a list of columns.
///
/// All columns of a matrix have the same height. This is checked when the matrix is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Matrix {
    columns: Vec<Vector>,
    height: usize,
}

impl Matrix {
    /// Creates a matrix from the given columns.
    ///
    /// The height of the matrix is the dimension of the first column, or 0 if there are no
    /// columns. Returns an error if any column has a different dimension.
    pub fn new(columns: impl IntoIterator<Item = Vector>) -> Result<Self, DimensionMismatch> {
        let columns = columns.into_iter().collect::<Vec<_>>();
        let height = columns.first().map(Vector::dimension).unwrap_or(0);

        if let Some(column) = columns.iter().find(|column| column.dimension() != height) {
            return Err(DimensionMismatch {
                expected: height,
                found: column.dimension(),
            });
        }

        Ok(Self { columns, height })
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows, i.e. the dimension of every column.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the columns of the matrix.
    pub fn columns(&self) -> &[Vector] {
        &self.columns
    }

    /// Returns the column at the given index, if it exists.
    pub fn column(&self, idx: usize) -> Option<&Vector> {
        self.columns.get(idx)
    }

    pub(crate) fn fmt_radix(&self, f: &mut Formatter<'_>, radix: u32) -> fmt::Result {
        write!(f, "(")?;
        let mut iter = self.columns.iter();
        if let Some(column) = iter.next() {
            column.fmt_radix(f, radix)?;
            for column in iter {
                write!(f, ", ")?;
                column.fmt_radix(f, radix)?;
            }
        }
        write!(f, ")")
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, DEFAULT_RADIX)
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{add, integer, multiply, symbol};
    use pretty_assertions::assert_eq;
    use super::*;

    fn ints(values: &[i64]) -> Vector {
        values.iter().map(|&n| integer(n)).collect()
    }

    #[test]
    fn add_vectors() {
        let sum = ints(&[1, 2]).add(&ints(&[3, 4])).unwrap();
        assert_eq!(sum, Vector::new([
            add(integer(1), integer(3)),
            add(integer(2), integer(4)),
        ]));
    }

    #[test]
    fn add_incompatible_vectors() {
        let err = ints(&[1, 2, 3]).add(&ints(&[1, 2])).unwrap_err();
        assert_eq!(err, DimensionMismatch { expected: 3, found: 2 });
    }

    #[test]
    fn add_does_not_mutate() {
        let lhs = ints(&[1, 2]);
        let rhs = ints(&[3, 4]);
        let _ = lhs.add(&rhs).unwrap();
        assert_eq!(lhs, ints(&[1, 2]));
        assert_eq!(rhs, ints(&[3, 4]));
    }

    #[test]
    fn scalar_multiply() {
        let product = ints(&[1, 2]).multiply(&symbol("k"));
        assert_eq!(product, Vector::new([
            multiply(symbol("k"), integer(1)),
            multiply(symbol("k"), integer(2)),
        ]));
    }

    #[test]
    fn map_elements() {
        let mapped = ints(&[1, 2, 3]).map(|e| add(e.clone(), e.clone()));
        assert_eq!(mapped.dimension(), 3);
        assert_eq!(mapped.elements()[2], add(integer(3), integer(3)));
    }

    #[test]
    fn matrix_shape() {
        let m = Matrix::new([ints(&[1, 2, 3]), ints(&[4, 5, 6])]).unwrap();
        assert_eq!(m.width(), 2);
        assert_eq!(m.height(), 3);
        assert_eq!(m.column(1), Some(&ints(&[4, 5, 6])));
        assert_eq!(m.column(2), None);
        assert_eq!(m.to_string(), "((1, 2, 3)^T, (4, 5, 6)^T)");
    }

    #[test]
    fn matrix_mismatched_columns() {
        let err = Matrix::new([ints(&[1, 2]), ints(&[3, 4]), ints(&[5])]).unwrap_err();
        assert_eq!(err, DimensionMismatch { expected: 2, found: 1 });
    }

    #[test]
    fn empty_matrix() {
        let m = Matrix::new(Vec::new()).unwrap();
        assert_eq!(m.width(), 0);
        assert_eq!(m.height(), 0);
        assert_eq!(m.to_string(), "()");
    }

    #[test]
    fn vector_display() {
        assert_eq!(ints(&[7, -1]).to_string(), "(7, -1)^T");
    }
}
