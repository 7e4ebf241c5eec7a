//! Heap-allocated row-major matrix with runtime dimensions.

use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// Dynamically-sized matrix backed by a flat row-major `Vec<T>`.
///
/// The shape is `[rows, cols]` and element `(r, c)` lives at index
/// `r * cols + c` of the backing buffer. Element-wise bulk operations treat
/// the buffer as a plain slice via [`Matrix::as_slice`] /
/// [`Matrix::as_mut_slice`].
///
/// # Example
///
/// ```
/// use incgamma::Matrix;
///
/// let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(m[(0, 1)], 2.0);
/// assert_eq!(m.shape(), [2, 2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix filled with `value`.
    ///
    /// ```
    /// use incgamma::Matrix;
    /// let m = Matrix::fill(2, 3, 7.0_f64);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix from a closure over `(row, col)`.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for r in 0..nrows {
            for c in 0..ncols {
                data.push(f(r, c));
            }
        }
        Self { data, nrows, ncols }
    }
}

impl<T> Matrix<T> {
    /// Create a matrix from a flat row-major `Vec`.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "matrix data length {} does not match {}x{}",
            data.len(),
            nrows,
            ncols
        );
        Self { data, nrows, ncols }
    }

    /// Create a matrix from a flat row-major slice.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(nrows, ncols, row_major.to_vec())
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Shape as `[rows, cols]`.
    pub fn shape(&self) -> [usize; 2] {
        [self.nrows, self.ncols]
    }

    /// Total element count (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Backing buffer in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable backing buffer in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix, returning the row-major backing `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &T {
        assert!(r < self.nrows && c < self.ncols, "index ({r}, {c}) out of bounds");
        &self.data[r * self.ncols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        assert!(r < self.nrows && c < self.ncols, "index ({r}, {c}) out of bounds");
        &mut self.data[r * self.ncols + c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_layout() {
        let m = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn constructors() {
        let z = Matrix::<f64>::zeros(2, 2);
        assert_eq!(z.as_slice(), &[0.0; 4]);

        let f = Matrix::from_fn(2, 2, |r, c| (r * 10 + c) as f64);
        assert_eq!(f.as_slice(), &[0.0, 1.0, 10.0, 11.0]);

        assert_eq!(Matrix::fill(1, 2, 3.0_f64).shape(), [1, 2]);
    }

    #[test]
    #[should_panic]
    fn from_vec_length_mismatch_panics() {
        let _ = Matrix::from_vec(2, 2, vec![1.0_f64, 2.0, 3.0]);
    }
}
