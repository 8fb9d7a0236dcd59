//! Matrix type for 2D numeric data.

use std::fmt;

use log::trace;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::kernels;
use crate::error::{MatrixError, Result};
use crate::functional;
use crate::random;

/// A 2D matrix of `f64` values (row-major storage).
///
/// Element `(i, j)` lives at flat offset `i * cols + j`. A matrix always has
/// at least one row and one column, and its buffer always holds exactly
/// `rows * cols` values. Operations never mutate their operands; each one
/// returns a freshly allocated matrix.
///
/// # Examples
///
/// ```
/// use dense_matrix::Matrix;
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).expect("rows have equal length");
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).expect("rows have equal length");
/// let c = a.add(&b).expect("both matrices are 2x2");
/// assert_eq!(c.shape(), (2, 2));
/// assert_eq!(c.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix"))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Unvalidated wire form; checked on the way in by `TryFrom`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for Matrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Matrix::from_vec(raw.rows, raw.cols, raw.data)
    }
}

/// Validates a shape and returns its element count.
fn check_dims(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::ZeroDimension { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(MatrixError::ShapeOverflow { rows, cols })
}

impl Matrix {
    /// Creates a new matrix from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns a shape error if either dimension is zero, `rows * cols`
    /// overflows, or the data length doesn't match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != check_dims(rows, cols)? {
            return Err(MatrixError::DataLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from a sequence of rows.
    ///
    /// The column count is taken from the first row; every other row must
    /// have the same length.
    ///
    /// # Errors
    ///
    /// Returns a shape error if there are no rows, the first row is empty,
    /// or the rows are ragged.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    ///
    /// assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or_else(|| MatrixError::empty_input("no rows"))?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(MatrixError::empty_input("first row has no columns"));
        }

        let mut data = Vec::with_capacity(check_dims(rows.len(), cols)?);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Creates an `m x 1` column matrix from `m` values.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `values` is empty.
    pub fn from_column(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(MatrixError::empty_input("column vector"));
        }
        Ok(Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        })
    }

    /// Creates a matrix with every element set to `value`.
    ///
    /// # Errors
    ///
    /// Returns a shape error if either dimension is zero or `rows * cols`
    /// overflows.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self> {
        let len = check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![value; len],
        })
    }

    /// Creates a matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns a shape error if either dimension is zero or `rows * cols`
    /// overflows.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, 0.0)
    }

    /// Creates a matrix of ones.
    ///
    /// # Errors
    ///
    /// Returns a shape error if either dimension is zero or `rows * cols`
    /// overflows.
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, 1.0)
    }

    /// Creates an `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `n` is zero or `n * n` overflows.
    pub fn eye(n: usize) -> Result<Self> {
        let mut data = vec![0.0; check_dims(n, n)?];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Ok(Self {
            rows: n,
            cols: n,
            data,
        })
    }

    /// Creates a matrix of independent standard normal samples
    /// (mean 0, standard deviation 1).
    ///
    /// `Some(seed)` makes the result reproducible; `None` seeds from OS
    /// entropy.
    ///
    /// # Errors
    ///
    /// Returns a shape error if either dimension is zero or `rows * cols`
    /// overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let a = Matrix::random_normal(4, 3, Some(42)).unwrap();
    /// let b = Matrix::random_normal(4, 3, Some(42)).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn random_normal(rows: usize, cols: usize, seed: Option<u64>) -> Result<Self> {
        Self::random_normal_with(rows, cols, &mut random::rng_from_seed(seed))
    }

    /// Creates a matrix of standard normal samples drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns a shape error if either dimension is zero or `rows * cols`
    /// overflows.
    pub fn random_normal_with<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let len = check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: random::standard_normal(len, rng),
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Gets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns an index error if `row` or `col` is out of range.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[self.offset(row, col)])
    }

    /// Gets element at a flat row-major offset.
    ///
    /// # Errors
    ///
    /// Returns an index error if `index >= rows * cols`.
    pub fn get_flat(&self, index: usize) -> Result<f64> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| MatrixError::index_out_of_bounds(index, self.data.len()))
    }

    /// Returns a row as a contiguous slice.
    ///
    /// # Errors
    ///
    /// Returns an index error if `row_idx` is out of range.
    pub fn row(&self, row_idx: usize) -> Result<&[f64]> {
        if row_idx >= self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                row: row_idx,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let start = row_idx * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Returns a column as a new vector.
    ///
    /// # Errors
    ///
    /// Returns an index error if `col_idx` is out of range.
    pub fn column(&self, col_idx: usize) -> Result<Vec<f64>> {
        if col_idx >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row: 0,
                col: col_idx,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self
            .data
            .iter()
            .skip(col_idx)
            .step_by(self.cols)
            .copied()
            .collect())
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    fn check_same_shape(&self, other: &Self, op: &'static str) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Self, op: &'static str, f: F) -> Result<Self>
    where
        F: Fn(f64, f64) -> f64 + Copy,
    {
        self.check_same_shape(other, op)?;
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data: kernels::zip_with(&self.data, &other.data, self.cols, f),
        })
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns a shape error if dimensions don't match.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns a shape error if dimensions don't match.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    /// Hadamard (element-wise) product.
    ///
    /// # Errors
    ///
    /// Returns a shape error if dimensions don't match.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "mul", |a, b| a * b)
    }

    /// Applies `f` to every element.
    #[must_use]
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Self {
        self.map(|x| scalar * x)
    }

    /// Element-wise sigmoid, 1 / (1 + exp(-x)).
    #[must_use]
    pub fn sigmoid(&self) -> Self {
        self.map(functional::sigmoid)
    }

    /// Element-wise sigmoid derivative, σ(x)(1 − σ(x)).
    #[must_use]
    pub fn sigmoid_prime(&self) -> Self {
        self.map(functional::sigmoid_prime)
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            data: kernels::transpose(&self.data, self.rows, self.cols),
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// The right operand is transposed first so that every output element
    /// is a dot product of two contiguous rows.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `self.n_cols() != other.n_rows()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// let c = a.dot(&b).unwrap();
    /// assert_eq!(c.shape(), (3, 3));
    /// assert_eq!(c.as_slice(), &[9.0, 12.0, 15.0, 19.0, 26.0, 33.0, 29.0, 40.0, 51.0]);
    /// ```
    pub fn dot(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrixError::InnerDimension {
                left: self.shape(),
                right: other.shape(),
            });
        }
        trace!(
            "dot: {}x{} * {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );

        let other_t = other.transpose();
        Ok(Self {
            rows: self.rows,
            cols: other.cols,
            data: kernels::matmul_transposed(&self.data, &other_t.data, self.cols),
        })
    }
}

impl fmt::Display for Matrix {
    /// One row per line, values separated by a space. A precision, if
    /// given, applies to every value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks_exact(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{value:.p$}")?,
                    None => write!(f, "{value}")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
