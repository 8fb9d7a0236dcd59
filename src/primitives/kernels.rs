//! Slice-level loops behind the [`Matrix`](super::Matrix) operations.
//!
//! Everything here works on flat row-major buffers. Shape validation is the
//! caller's job; these functions only assume that paired slices have equal
//! length and that `cols` divides that length.

use log::trace;

/// Column count above which element-wise binary operations walk the
/// buffers one row slice at a time instead of in a single flat pass.
pub const ROW_CHUNK_THRESHOLD: usize = 15;

/// Loop shape used for an element-wise binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ZipStrategy {
    /// One pass over the whole buffer.
    Flat,
    /// One pass per contiguous row slice.
    RowChunked,
}

impl ZipStrategy {
    pub(crate) fn for_cols(cols: usize) -> Self {
        if cols > ROW_CHUNK_THRESHOLD {
            Self::RowChunked
        } else {
            Self::Flat
        }
    }
}

/// Combines `a` and `b` element by element into a fresh buffer.
pub(crate) fn zip_with<F>(a: &[f64], b: &[f64], cols: usize, op: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64 + Copy,
{
    debug_assert_eq!(a.len(), b.len());
    debug_assert!(cols > 0 && a.len() % cols == 0);

    let mut out = vec![0.0; a.len()];
    let strategy = ZipStrategy::for_cols(cols);
    trace!("zip_with: {strategy:?} over {} elements, {cols} cols", a.len());

    match strategy {
        ZipStrategy::RowChunked => {
            let rows = a
                .chunks_exact(cols)
                .zip(b.chunks_exact(cols))
                .zip(out.chunks_exact_mut(cols));
            for ((row_a, row_b), row_out) in rows {
                zip_slice(row_a, row_b, row_out, op);
            }
        }
        ZipStrategy::Flat => zip_slice(a, b, &mut out, op),
    }
    out
}

#[inline]
fn zip_slice<F>(a: &[f64], b: &[f64], out: &mut [f64], op: F)
where
    F: Fn(f64, f64) -> f64,
{
    for ((&x, &y), z) in a.iter().zip(b).zip(out.iter_mut()) {
        *z = op(x, y);
    }
}

/// Dot product of two equal-length slices, accumulated left to right.
#[inline]
#[must_use]
pub(crate) fn dot_slice(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(0.0, |acc, (&x, &y)| acc + x * y)
}

/// Transposes a `rows x cols` buffer into a `cols x rows` buffer.
///
/// Destination rows are produced in order by scanning one source column at
/// a time, so the output is written front to back.
pub(crate) fn transpose(src: &[f64], rows: usize, cols: usize) -> Vec<f64> {
    debug_assert_eq!(src.len(), rows * cols);
    let mut dst = Vec::with_capacity(src.len());
    for j in 0..cols {
        for i in 0..rows {
            dst.push(src[i * cols + j]);
        }
    }
    dst
}

/// Multiplies `a` (`? x inner`) by a right operand given in transposed
/// form `b_t` (`? x inner`). Every output element is the dot product of
/// two contiguous rows.
pub(crate) fn matmul_transposed(a: &[f64], b_t: &[f64], inner: usize) -> Vec<f64> {
    debug_assert!(inner > 0);
    let out_cols = b_t.len() / inner;
    let mut out = Vec::with_capacity((a.len() / inner) * out_cols);
    for row_a in a.chunks_exact(inner) {
        for row_b in b_t.chunks_exact(inner) {
            out.push(dot_slice(row_a, row_b));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_threshold() {
        assert_eq!(ZipStrategy::for_cols(1), ZipStrategy::Flat);
        assert_eq!(ZipStrategy::for_cols(14), ZipStrategy::Flat);
        assert_eq!(ZipStrategy::for_cols(15), ZipStrategy::Flat);
        assert_eq!(ZipStrategy::for_cols(16), ZipStrategy::RowChunked);
        assert_eq!(ZipStrategy::for_cols(1000), ZipStrategy::RowChunked);
    }

    #[test]
    fn test_zip_with_strategies_agree() {
        // Same 4x32 buffer read as 32 cols (row-chunked) and as 8 cols (flat).
        let a: Vec<f64> = (0..128).map(|i| f64::from(i) * 0.25 - 3.0).collect();
        let b: Vec<f64> = (0..128).map(|i| (f64::from(i) * 0.7).sin()).collect();
        let wide = zip_with(&a, &b, 32, |x, y| x + y);
        let narrow = zip_with(&a, &b, 8, |x, y| x + y);
        assert_eq!(wide, narrow);
    }

    #[test]
    fn test_dot_slice() {
        assert_eq!(dot_slice(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(dot_slice(&[], &[]), 0.0);
    }

    #[test]
    fn test_dot_slice_left_to_right() {
        // 1e16 + 1 rounds back to 1e16 before the -1e16 term is added.
        let a = [1e16, 1.0, -1e16];
        let b = [1.0, 1.0, 1.0];
        assert_eq!(dot_slice(&a, &b), 0.0);
    }

    #[test]
    fn test_transpose_buffer() {
        let src = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(transpose(&src, 2, 3), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(transpose(&src, 1, 6), src.to_vec());
    }

    #[test]
    fn test_matmul_transposed() {
        // [[1,2],[3,4]] * [[5,6],[7,8]], right side passed as [[5,7],[6,8]]
        let out = matmul_transposed(&[1.0, 2.0, 3.0, 4.0], &[5.0, 7.0, 6.0, 8.0], 2);
        assert_eq!(out, vec![19.0, 22.0, 43.0, 50.0]);
    }
}
