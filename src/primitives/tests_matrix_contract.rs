// =========================================================================
// FALSIFY-MX: Matrix primitives contract
//
// Each test states one algebraic law the Matrix operations must obey and
// tries to break it. Fixed-input versions first, proptest versions below.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

fn wave(rows: usize, cols: usize, seed: u32) -> Matrix {
    let data: Vec<f64> = (0..rows * cols)
        .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
        .collect();
    Matrix::from_vec(rows, cols, data).expect("valid")
}

/// FALSIFY-MX-001: Transpose involution: (A^T)^T = A
#[test]
fn falsify_mx_001_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a.transpose().transpose();
    assert_eq!(att, a, "FALSIFIED MX-001: (A^T)^T != A");
}

/// FALSIFY-MX-002: Transpose swaps shape: (m×n)^T = (n×m)
#[test]
fn falsify_mx_002_transpose_swaps_shape() {
    let a = Matrix::zeros(3, 5).expect("valid");
    let at = a.transpose();
    assert_eq!(
        at.shape(),
        (5, 3),
        "FALSIFIED MX-002: transpose shape={:?}, expected (5,3)",
        at.shape()
    );
}

/// FALSIFY-MX-003: Dot shape: (m×k) * (k×n) = (m×n)
#[test]
fn falsify_mx_003_dot_shape() {
    let a = Matrix::ones(2, 3).expect("valid");
    let b = Matrix::ones(3, 4).expect("valid");
    let c = a.dot(&b).expect("compatible dims");
    assert_eq!(
        c.shape(),
        (2, 4),
        "FALSIFIED MX-003: (2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );
    assert!(c.as_slice().iter().all(|&v| v == 3.0));
}

/// FALSIFY-MX-004: Identity dot: A * I = I * A = A
#[test]
fn falsify_mx_004_identity_dot() {
    let a = Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
        .expect("valid");
    let eye = Matrix::eye(3).expect("valid");
    assert_eq!(a.dot(&eye).expect("compatible dims"), a, "FALSIFIED MX-004: A*I != A");
    assert_eq!(eye.dot(&a).expect("compatible dims"), a, "FALSIFIED MX-004: I*A != A");
}

/// FALSIFY-MX-005: (AB)^T = B^T A^T
#[test]
fn falsify_mx_005_dot_transpose() {
    let a = wave(3, 4, 1);
    let b = wave(4, 2, 2);
    let lhs = a.dot(&b).expect("compatible").transpose();
    let rhs = b.transpose().dot(&a.transpose()).expect("compatible");
    assert_eq!(lhs.shape(), rhs.shape());
    for (x, y) in lhs.as_slice().iter().zip(rhs.as_slice()) {
        assert!((x - y).abs() < 1e-9, "FALSIFIED MX-005: {x} != {y}");
    }
}

/// FALSIFY-MX-006: Dot matches the textbook triple loop exactly
/// (same left-to-right accumulation order).
#[test]
fn falsify_mx_006_dot_matches_naive() {
    let a = wave(5, 7, 3);
    let b = wave(7, 4, 4);
    let c = a.dot(&b).expect("compatible");
    for i in 0..5 {
        for j in 0..4 {
            let mut sum = 0.0;
            for k in 0..7 {
                sum += a.get(i, k).expect("in range") * b.get(k, j).expect("in range");
            }
            assert_eq!(
                c.get(i, j).expect("in range"),
                sum,
                "FALSIFIED MX-006: C[{i},{j}]"
            );
        }
    }
}

/// FALSIFY-MX-007: A + B - B = A on integer-valued data (exact in f64)
#[test]
fn falsify_mx_007_add_sub_inverse() {
    let a = Matrix::from_vec(2, 20, (0..40).map(f64::from).collect()).expect("valid");
    let b = Matrix::filled(2, 20, 7.0).expect("valid");
    let back = a.add(&b).expect("same shape").sub(&b).expect("same shape");
    assert_eq!(back, a, "FALSIFIED MX-007: A + B - B != A");
}

/// FALSIFY-MX-008: Sigmoid range (0,1), derivative range (0, 0.25]
#[test]
fn falsify_mx_008_sigmoid_ranges() {
    let a = wave(6, 6, 5).scale(3.0);
    for &s in a.sigmoid().as_slice() {
        assert!(s > 0.0 && s < 1.0, "FALSIFIED MX-008: sigmoid={s}");
    }
    for &d in a.sigmoid_prime().as_slice() {
        assert!(d > 0.0 && d <= 0.25, "FALSIFIED MX-008: sigmoid'={d}");
    }
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-MX-001-prop: Transpose involution for random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_001_prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = wave(rows, cols, seed);
            let at = a.transpose();
            prop_assert_eq!(at.shape(), (cols, rows));
            for i in 0..rows {
                for j in 0..cols {
                    prop_assert_eq!(at.get(j, i), a.get(i, j));
                }
            }
            prop_assert_eq!(at.transpose(), a, "FALSIFIED MX-001-prop");
        }
    }

    /// FALSIFY-MX-009-prop: Flat and row-chunked loops agree around the
    /// width threshold
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(40))]

        #[test]
        fn falsify_mx_009_prop_threshold_equivalence(
            rows in 1..=6usize,
            cols in 12..=20usize,
            seed in 0..500u32,
        ) {
            let a = wave(rows, cols, seed);
            let b = wave(rows, cols, seed + 17);
            let sum = a.add(&b).expect("same shape");
            let diff = a.sub(&b).expect("same shape");
            let prod = a.mul(&b).expect("same shape");
            for k in 0..rows * cols {
                let (x, y) = (a.as_slice()[k], b.as_slice()[k]);
                prop_assert_eq!(sum.as_slice()[k], x + y);
                prop_assert_eq!(diff.as_slice()[k], x - y);
                prop_assert_eq!(prod.as_slice()[k], x * y);
            }
        }
    }

    /// FALSIFY-MX-010-prop: Any shape disagreement is rejected
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(40))]

        #[test]
        fn falsify_mx_010_prop_shape_mismatch_rejected(
            r1 in 1..=5usize,
            c1 in 1..=5usize,
            r2 in 1..=5usize,
            c2 in 1..=5usize,
        ) {
            prop_assume!(r1 != r2 || c1 != c2);
            let a = Matrix::ones(r1, c1).expect("valid");
            let b = Matrix::ones(r2, c2).expect("valid");
            prop_assert!(a.add(&b).is_err());
            prop_assert!(a.sub(&b).is_err());
            prop_assert!(a.mul(&b).is_err());
            prop_assert_eq!(a.dot(&b).is_ok(), c1 == r2);
        }
    }

    /// FALSIFY-MX-004-prop: Identity dot for random square matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_004_prop_identity_dot(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = wave(n, n, seed);
            let eye = Matrix::eye(n).expect("valid");
            prop_assert_eq!(a.dot(&eye).expect("compatible"), a);
        }
    }
}
