//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use dense_matrix::prelude::*;
//! ```

pub use crate::error::{ErrorKind, MatrixError, Result};
pub use crate::primitives::{Matrix, ROW_CHUNK_THRESHOLD};
