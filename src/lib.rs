//! Dense row-major matrices of `f64`.
//!
//! The crate is one data structure, [`Matrix`], plus the operations a small
//! neural network needs from it: element-wise add/sub/Hadamard product,
//! scalar scaling, transpose, matrix multiplication and the sigmoid family.
//! Every operation allocates its result and leaves its operands untouched.
//!
//! # Quick Start
//!
//! ```
//! use dense_matrix::prelude::*;
//!
//! let x = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]])?;
//! let w = Matrix::random_normal(2, 4, Some(7))?;
//!
//! // Forward pass of a single dense layer.
//! let z = x.dot(&w)?;
//! let a = z.sigmoid();
//! assert_eq!(a.shape(), (3, 4));
//! assert!(a.as_slice().iter().all(|&v| v > 0.0 && v < 1.0));
//!
//! // Shapes are checked, not assumed.
//! let err = x.add(&w).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Shape);
//! # Ok::<(), MatrixError>(())
//! ```
//!
//! # Performance notes
//!
//! - Element-wise binary operations on matrices wider than
//!   [`ROW_CHUNK_THRESHOLD`] columns walk one row slice at a time;
//!   narrower matrices are processed in one flat pass.
//! - [`Matrix::dot`] transposes its right operand first so both inputs are
//!   read with stride-1 access.
//!
//! # Modules
//!
//! - [`primitives`]: the [`Matrix`] type
//! - [`error`]: [`MatrixError`] and [`ErrorKind`]
//! - [`functional`]: scalar activation functions
//! - [`random`]: seeded and injectable random sources

pub mod error;
pub mod functional;
pub mod prelude;
pub mod primitives;
pub mod random;

pub use error::{ErrorKind, MatrixError, Result};
pub use primitives::{Matrix, ROW_CHUNK_THRESHOLD};
