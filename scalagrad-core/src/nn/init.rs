use num_traits::Float;
use rand::Rng;
use rand_distr::uniform::SampleUniform;
use rand_distr::{Distribution, Uniform};

use crate::value::Value;

/// Creates a leaf node drawn uniformly from `[low, high)`.
///
/// The generator is an explicit handle rather than process-global state, so a
/// seeded `StdRng` makes parameter initialization fully reproducible.
pub fn uniform<T, R>(rng: &mut R, low: T, high: T) -> Value<T>
where
    T: Float + SampleUniform,
    R: Rng + ?Sized,
{
    Value::new(Uniform::new(low, high).sample(rng))
}

/// Creates a leaf node drawn uniformly from `(-1, 1)`, the default
/// initialization for weights and biases.
pub fn uniform_symmetric<T, R>(rng: &mut R) -> Value<T>
where
    T: Float + SampleUniform,
    R: Rng + ?Sized,
{
    uniform(rng, -T::one(), T::one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_symmetric_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let leaf: crate::Value<f64> = uniform_symmetric(&mut rng);
            assert!(leaf.data() > -1.0 && leaf.data() < 1.0);
            assert!(leaf.is_leaf());
        }
    }

    #[test]
    fn test_uniform_is_deterministic_under_a_fixed_seed() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let a: crate::Value<f64> = uniform(&mut rng_a, -1.0, 1.0);
            let b: crate::Value<f64> = uniform(&mut rng_b, -1.0, 1.0);
            assert_eq!(a.data(), b.data());
        }
    }
}
