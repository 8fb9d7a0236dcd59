//! Scalar activation functions applied element-wise by
//! [`Matrix::sigmoid`](crate::Matrix::sigmoid) and
//! [`Matrix::sigmoid_prime`](crate::Matrix::sigmoid_prime).

/// Scalar sigmoid: σ(x) = 1 / (1 + exp(-x))
#[inline]
#[must_use]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid: σ(x) · (1 − σ(x))
///
/// σ is evaluated independently for each factor.
#[inline]
#[must_use]
pub fn sigmoid_prime(x: f64) -> f64 {
    sigmoid(x) * (1.0 - sigmoid(x))
}
