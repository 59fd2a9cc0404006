// src/nn/init.rs
// Leaf constructors for parameter initialization.

use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Draws a leaf from `U(low, high)`.
///
/// Layers default to `U(-1, 1)` for weights, so pass the range explicitly
/// only when you want something else.
///
/// Panics if `low >= high`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> Value {
    let distribution = Uniform::new(low, high);
    Value::new(distribution.sample(rng))
}

/// Draws a leaf from `N(mean, std_dev^2)`.
///
/// Panics if `std_dev` is negative or not finite.
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> Value {
    let distribution =
        Normal::new(mean, std_dev).expect("standard deviation must be finite and non-negative");
    Value::new(distribution.sample(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = uniform(&mut rng, -1.0, 1.0);
            assert!(v.data() >= -1.0 && v.data() < 1.0);
            assert!(v.is_leaf());
            assert_eq!(v.grad(), 0.0);
        }
    }

    #[test]
    fn test_normal_produces_finite_leaves() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = normal(&mut rng, 0.0, 0.5);
            assert!(v.data().is_finite());
            assert!(v.is_leaf());
        }
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        assert_eq!(
            uniform(&mut rng_a, -1.0, 1.0).data(),
            uniform(&mut rng_b, -1.0, 1.0).data()
        );
    }
}
