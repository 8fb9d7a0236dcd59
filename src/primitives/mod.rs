//! Core compute primitive (Matrix).
//!
//! `kernels` holds the slice loops; `matrix` wraps them behind a
//! shape-checked API.

mod kernels;
mod matrix;

pub use kernels::ROW_CHUNK_THRESHOLD;
pub use matrix::Matrix;
