//! A module for working with square matrices over unbounded integers.

use std::{fmt, ops::Mul};

use itertools::Itertools;
use num_bigint::BigUint;
use num_rational::Ratio;
use num_traits::{One, Zero};

use crate::error::Error;

/// A numerator and denominator pair reconstructed from a matrix's row sums.
///
/// The pair is stored exactly as the two row sums, without reduction. Matrices derived from the
/// identity by child operations always encode fractions in lowest terms, so no reduction is ever
/// necessary for them.
pub type Fraction = Ratio<BigUint>;

/// An immutable square matrix of non-negative, arbitrary-precision integers.
///
/// The matrix is the node type of a mediant tree: the identity is the root and each child
/// operation folds a row sum into one column, producing a new value. Row sums grow exponentially
/// with tree depth, which is why elements are [`BigUint`]s rather than fixed-width integers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix {
    /// The number of rows (equal to the number of columns).
    order: usize,
    /// The elements in row-major order.
    elements: Vec<BigUint>,
}

impl Matrix {
    /// Creates the identity matrix of the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::matrix::Matrix;
    ///
    /// let matrix = Matrix::identity(2);
    /// assert_eq!(matrix, Matrix::from_elements(vec![1u8, 0, 0, 1]).unwrap());
    /// ```
    pub fn identity(order: usize) -> Self {
        let mut elements = vec![BigUint::zero(); order * order];
        for i in 0..order {
            elements[i * order + i] = BigUint::one();
        }

        Self { order, elements }
    }

    /// Creates a matrix from elements in row-major order.
    ///
    /// Fails if the element count is not a perfect square.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::matrix::Matrix;
    ///
    /// assert!(Matrix::from_elements(vec![1u8, 0, 1, 1]).is_ok());
    /// assert!(Matrix::from_elements(vec![1u8, 0, 1]).is_err());
    /// ```
    pub fn from_elements<I, T>(elements: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<BigUint>,
    {
        let elements: Vec<BigUint> = elements.into_iter().map(Into::into).collect();
        let order = square_order(elements.len()).ok_or(Error::InvalidElementCount(elements.len()))?;

        Ok(Self { order, elements })
    }

    /// Returns the order of the matrix (the number of rows and columns).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns a reference to the element at the given row and column.
    ///
    /// # Panics
    ///
    /// Panics if the row or column is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> &BigUint {
        assert!(column < self.order, "column index out of bounds");
        &self.elements[row * self.order + column]
    }

    /// Returns the elements of a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if the row is out of bounds.
    pub fn row(&self, row: usize) -> &[BigUint] {
        &self.elements[row * self.order..(row + 1) * self.order]
    }

    /// Returns the sum of the elements in a row.
    ///
    /// # Panics
    ///
    /// Panics if the row is out of bounds.
    pub fn row_sum(&self, row: usize) -> BigUint {
        self.row(row).iter().sum()
    }

    /// Returns the child matrix for the given target column: each row's entry in that column
    /// becomes the row's total sum, all other entries are unchanged.
    ///
    /// This is the generalized mediant step. It is algebraically equivalent to multiplying on the
    /// right by [`Matrix::generator`] for the same column.
    ///
    /// # Panics
    ///
    /// Panics if the column is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::matrix::Matrix;
    ///
    /// let child = Matrix::identity(2).child(0);
    /// assert_eq!(child, Matrix::from_elements(vec![1u8, 0, 1, 1]).unwrap());
    /// ```
    pub fn child(&self, column: usize) -> Self {
        assert!(column < self.order, "column index out of bounds");

        let mut elements = self.elements.clone();
        for row in 0..self.order {
            elements[row * self.order + column] = self.row_sum(row);
        }

        Self {
            order: self.order,
            elements,
        }
    }

    /// Returns the left child, accumulating row sums into the first column.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::matrix::Matrix;
    ///
    /// let left = Matrix::identity(2).left_child();
    /// assert_eq!(left, Matrix::from_elements(vec![1u8, 0, 1, 1]).unwrap());
    /// ```
    pub fn left_child(&self) -> Self {
        self.child(0)
    }

    /// Returns the right child, accumulating row sums into the last column.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::matrix::Matrix;
    ///
    /// let right = Matrix::identity(2).right_child();
    /// assert_eq!(right, Matrix::from_elements(vec![1u8, 1, 0, 1]).unwrap());
    /// ```
    pub fn right_child(&self) -> Self {
        self.child(self.order - 1)
    }

    /// Returns the middle child, accumulating row sums into the middle column.
    ///
    /// Only meaningful for odd orders (the ternary, order 3 tree); for even orders the "middle"
    /// column is `order / 2`.
    pub fn middle_child(&self) -> Self {
        self.child(self.order / 2)
    }

    /// Returns the generator matrix for the given order and column: the identity with the target
    /// column replaced by ones.
    ///
    /// Multiplying a matrix on the right by a generator is equivalent to calling
    /// [`Matrix::child`] with the same column, so a sequence of child calls can be replayed as a
    /// matrix product.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::matrix::Matrix;
    ///
    /// let left = Matrix::generator(2, 0);
    /// assert_eq!(Matrix::identity(2).left_child(), &Matrix::identity(2) * &left);
    /// ```
    pub fn generator(order: usize, column: usize) -> Self {
        assert!(column < order, "column index out of bounds");

        let mut generator = Self::identity(order);
        for row in 0..order {
            generator.elements[row * order + column] = BigUint::one();
        }

        generator
    }

    /// Returns the fraction encoded by two rows: the sums of `row_a` and `row_b` as numerator and
    /// denominator.
    ///
    /// The pair is returned exactly as computed, without reduction. For the order 2 tree the
    /// fraction is `(row 0, row 1)`; for order 3 the two encoded fractions are `(row 0, row 1)`
    /// and `(row 1, row 2)`.
    ///
    /// # Panics
    ///
    /// Panics if either row is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::matrix::Matrix;
    ///
    /// // The root of the Stern-Brocot tree encodes 1/1.
    /// let fraction = Matrix::identity(2).fraction(0, 1);
    /// assert_eq!((fraction.numer().to_string(), fraction.denom().to_string()), ("1".into(), "1".into()));
    /// ```
    pub fn fraction(&self, row_a: usize, row_b: usize) -> Fraction {
        Ratio::new_raw(self.row_sum(row_a), self.row_sum(row_b))
    }
}

//
// Trait implementations
//

impl Mul for &Matrix {
    type Output = Matrix;

    /// Standard matrix product.
    ///
    /// # Panics
    ///
    /// Panics if the orders don't match.
    fn mul(self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.order, rhs.order, "matrix orders must match");

        let n = self.order;
        let mut elements = vec![BigUint::zero(); n * n];

        for i in 0..n {
            for j in 0..n {
                let mut sum = BigUint::zero();
                for k in 0..n {
                    sum += self.get(i, k) * rhs.get(k, j);
                }
                elements[i * n + j] = sum;
            }
        }

        Matrix { order: n, elements }
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.order {
            writeln!(f, "[{}]", self.row(row).iter().join(" "))?;
        }

        Ok(())
    }
}

//
// Helpers
//

/// Returns the order for an element count, or `None` if the count isn't a perfect square.
fn square_order(count: usize) -> Option<usize> {
    let order = (count as f64).sqrt().round() as usize;
    (order * order == count).then_some(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(elements: Vec<u32>) -> Matrix {
        Matrix::from_elements(elements).unwrap()
    }

    #[test]
    fn identity_is_idempotent() {
        assert_eq!(Matrix::identity(2), Matrix::identity(2));
        assert_eq!(Matrix::identity(3), Matrix::identity(3));
    }

    #[test]
    fn from_elements_rejects_non_square_counts() {
        for count in [2, 3, 5, 7, 8] {
            assert_eq!(
                Matrix::from_elements(vec![1u32; count]),
                Err(Error::InvalidElementCount(count))
            );
        }
    }

    #[test]
    fn from_elements_accepts_square_counts() {
        for order in [1usize, 2, 3, 4] {
            let matrix = matrix(vec![1; order * order]);
            assert_eq!(matrix.order(), order);
        }
    }

    #[test]
    fn root_fraction_is_one_over_one() {
        let fraction = Matrix::identity(2).fraction(0, 1);

        assert_eq!(fraction, Ratio::new_raw(1u32.into(), 1u32.into()));
    }

    #[test]
    fn left_then_right_yields_two_thirds() {
        // The worked example: I -> left -> right encodes 2/3.
        let m0 = Matrix::identity(2);
        let m1 = m0.left_child();
        let m2 = m1.right_child();

        assert_eq!(m1, matrix(vec![1, 0, 1, 1]));
        assert_eq!(m2, matrix(vec![1, 1, 1, 2]));
        assert_eq!(m2.fraction(0, 1), Ratio::new_raw(2u32.into(), 3u32.into()));
    }

    #[test]
    fn left_and_right_children_differ() {
        let mut current = Matrix::identity(2);

        // Rows of identity-derived matrices are never degenerate, so the children always differ.
        for _ in 0..5 {
            assert_ne!(current.left_child(), current.right_child());
            current = current.left_child();
        }
    }

    #[test]
    fn children_match_generator_products() {
        // Replay L, L, R, L, R both as child calls and as a generator product.
        let left = Matrix::generator(2, 0);
        let right = Matrix::generator(2, 1);
        let sequence = [0usize, 0, 1, 0, 1];

        let mut by_children = Matrix::identity(2);
        let mut by_product = Matrix::identity(2);

        for column in sequence {
            by_children = by_children.child(column);
            by_product = &by_product * if column == 0 { &left } else { &right };
        }

        assert_eq!(by_children, by_product);
    }

    #[test]
    fn ternary_children() {
        let root = Matrix::identity(3);

        assert_eq!(root.left_child(), matrix(vec![1, 0, 0, 1, 1, 0, 1, 0, 1]));
        assert_eq!(root.middle_child(), matrix(vec![1, 1, 0, 0, 1, 0, 0, 1, 1]));
        assert_eq!(root.right_child(), matrix(vec![1, 0, 1, 0, 1, 1, 0, 0, 1]));
    }

    #[test]
    fn ternary_fractions() {
        // The order 3 root encodes 1/1 twice, over the two adjacent row pairs.
        let root = Matrix::identity(3);

        assert_eq!(root.fraction(0, 1), Ratio::new_raw(1u32.into(), 1u32.into()));
        assert_eq!(root.fraction(1, 2), Ratio::new_raw(1u32.into(), 1u32.into()));
    }

    #[test]
    fn fractions_are_unreduced_row_sums() {
        // An arbitrary matrix with a common factor between the row sums.
        let matrix = matrix(vec![2, 2, 1, 1]);

        let fraction = matrix.fraction(0, 1);
        assert_eq!(fraction.numer(), &BigUint::from(4u32));
        assert_eq!(fraction.denom(), &BigUint::from(2u32));
    }

    #[test]
    fn row_sums() {
        let matrix = matrix(vec![1, 2, 3, 4]);

        assert_eq!(matrix.row_sum(0), BigUint::from(3u32));
        assert_eq!(matrix.row_sum(1), BigUint::from(7u32));
    }

    #[test]
    fn multiplication() {
        let a = matrix(vec![1, 1, 0, 1]);
        let b = matrix(vec![1, 0, 1, 1]);

        assert_eq!(&a * &b, matrix(vec![2, 1, 1, 1]));
        assert_eq!(&b * &a, matrix(vec![1, 1, 1, 2]));
    }

    #[test]
    fn multiplication_by_identity() {
        let matrix = matrix(vec![1, 2, 3, 4]);

        assert_eq!(&matrix * &Matrix::identity(2), matrix);
        assert_eq!(&Matrix::identity(2) * &matrix, matrix);
    }

    #[test]
    #[should_panic(expected = "column index out of bounds")]
    fn child_column_out_of_bounds() {
        Matrix::identity(2).child(2);
    }

    #[test]
    fn display() {
        let matrix = matrix(vec![1, 1, 1, 2]);

        assert_eq!(matrix.to_string(), "[1 1]\n[1 2]\n");
    }
}
