//! Error types for matrix operations.
//!
//! Every fallible operation returns [`MatrixError`]. Errors fall into two
//! kinds, reported by [`MatrixError::kind`]: shape errors (operands or
//! inputs that cannot form a valid matrix) and index errors (element
//! access outside the matrix).

use thiserror::Error;

/// Broad classification of a [`MatrixError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Incompatible or malformed shape.
    Shape,
    /// Element access out of range.
    Index,
}

/// Main error type for matrix operations.
///
/// # Examples
///
/// ```
/// use dense_matrix::error::{ErrorKind, MatrixError};
///
/// let err = MatrixError::DimensionMismatch {
///     op: "add",
///     left: (2, 2),
///     right: (3, 2),
/// };
/// assert_eq!(err.kind(), ErrorKind::Shape);
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Input sequence had nothing in it.
    #[error("empty input: {context}")]
    EmptyInput {
        /// What was empty
        context: &'static str,
    },

    /// Requested shape has a zero dimension.
    #[error("invalid shape {rows}x{cols}: rows and cols must be positive")]
    ZeroDimension {
        /// Requested rows
        rows: usize,
        /// Requested cols
        cols: usize,
    },

    /// rows * cols does not fit in `usize`.
    #[error("invalid shape {rows}x{cols}: element count overflows usize")]
    ShapeOverflow {
        /// Requested rows
        rows: usize,
        /// Requested cols
        cols: usize,
    },

    /// A row's length differs from the first row's.
    #[error("ragged rows: row {row} has {actual} values, expected {expected}")]
    RaggedRows {
        /// Offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Flat buffer length does not equal rows * cols.
    #[error("data length {len} does not match shape {rows}x{cols}")]
    DataLength {
        /// Requested rows
        rows: usize,
        /// Requested cols
        cols: usize,
        /// Buffer length supplied
        len: usize,
    },

    /// Operand shapes are incompatible for an element-wise operation.
    #[error(
        "dimension mismatch in {op}: left is {}x{}, right is {}x{}",
        left.0, left.1, right.0, right.1
    )]
    DimensionMismatch {
        /// Operation name
        op: &'static str,
        /// Left operand (rows, cols)
        left: (usize, usize),
        /// Right operand (rows, cols)
        right: (usize, usize),
    },

    /// Inner dimensions disagree for matrix multiplication.
    #[error(
        "inner dimension mismatch in dot: left is {}x{}, right is {}x{}",
        left.0, left.1, right.0, right.1
    )]
    InnerDimension {
        /// Left operand (rows, cols)
        left: (usize, usize),
        /// Right operand (rows, cols)
        right: (usize, usize),
    },

    /// (row, col) access outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested col
        col: usize,
        /// Matrix rows
        rows: usize,
        /// Matrix cols
        cols: usize,
    },

    /// Flat index outside the backing buffer.
    #[error("index {index} out of bounds (len={len})")]
    FlatIndexOutOfBounds {
        /// Requested flat index
        index: usize,
        /// Buffer length
        len: usize,
    },
}

impl MatrixError {
    /// Returns the broad kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatrixError::EmptyInput { .. }
            | MatrixError::ZeroDimension { .. }
            | MatrixError::ShapeOverflow { .. }
            | MatrixError::RaggedRows { .. }
            | MatrixError::DataLength { .. }
            | MatrixError::DimensionMismatch { .. }
            | MatrixError::InnerDimension { .. } => ErrorKind::Shape,
            MatrixError::IndexOutOfBounds { .. } | MatrixError::FlatIndexOutOfBounds { .. } => {
                ErrorKind::Index
            }
        }
    }

    /// True for shape errors.
    #[must_use]
    pub fn is_shape_error(&self) -> bool {
        self.kind() == ErrorKind::Shape
    }

    /// True for index errors.
    #[must_use]
    pub fn is_index_error(&self) -> bool {
        self.kind() == ErrorKind::Index
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &'static str) -> Self {
        Self::EmptyInput { context }
    }

    /// Create a flat index out of bounds error
    #[must_use]
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::FlatIndexOutOfBounds { index, len }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MatrixError::DimensionMismatch {
            op: "sub",
            left: (100, 10),
            right: (100, 5),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("dimension mismatch in sub"));
        assert!(msg.contains("100x10"));
        assert!(msg.contains("100x5"));
    }

    #[test]
    fn test_inner_dimension_display() {
        let err = MatrixError::InnerDimension {
            left: (2, 3),
            right: (2, 2),
        };
        assert!(err.to_string().contains("2x3"));
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_ragged_rows_display() {
        let err = MatrixError::RaggedRows {
            row: 2,
            expected: 3,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "ragged rows: row 2 has 1 values, expected 3"
        );
    }

    #[test]
    fn test_shape_kinds() {
        let errs = [
            MatrixError::empty_input("rows"),
            MatrixError::ZeroDimension { rows: 0, cols: 3 },
            MatrixError::ShapeOverflow {
                rows: usize::MAX,
                cols: 2,
            },
            MatrixError::DataLength {
                rows: 2,
                cols: 2,
                len: 3,
            },
        ];
        for err in &errs {
            assert!(err.is_shape_error(), "{err} should be a shape error");
            assert!(!err.is_index_error());
        }
    }

    #[test]
    fn test_index_kinds() {
        let err = MatrixError::IndexOutOfBounds {
            row: 5,
            col: 0,
            rows: 2,
            cols: 2,
        };
        assert!(err.is_index_error());
        assert!(err.to_string().contains("(5, 0)"));

        let err = MatrixError::index_out_of_bounds(9, 6);
        assert_eq!(err.kind(), ErrorKind::Index);
        assert_eq!(err.to_string(), "index 9 out of bounds (len=6)");
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(MatrixError::empty_input("vector"));
        assert_eq!(err.to_string(), "empty input: vector");
    }
}
