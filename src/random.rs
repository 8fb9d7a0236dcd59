//! Random fills for matrix constructors.
//!
//! Callers either pass their own [`rand::Rng`] or a `seed: Option<u64>`:
//! `Some(s)` gives a reproducible [`StdRng`], `None` seeds from OS entropy.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Builds the generator for an optional seed.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => {
            debug!("random source seeded with {s}");
            StdRng::seed_from_u64(s)
        }
        None => {
            debug!("random source seeded from entropy");
            StdRng::from_entropy()
        }
    }
}

/// Draws `len` independent samples from N(0, 1).
pub fn standard_normal<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<f64> {
    StandardNormal.sample_iter(rng).take(len).collect()
}
