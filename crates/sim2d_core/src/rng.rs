//! Seeded random number generation
//!
//! A deterministic RNG for reproducible simulation runs: the same seed
//! always yields the same sequence. A seed of 0 means "pick a seed from
//! entropy"; the chosen seed is still queryable so a run can be replayed.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng};

/// A seeded random number generator
#[derive(Debug)]
pub struct SeededRng {
    seed: u64,
    rng: StdRng,
}

impl SeededRng {
    /// Create a generator from a seed; 0 seeds from entropy
    pub fn new(seed: u64) -> Self {
        let seed = if seed == 0 { rand::random() } else { seed };
        debug!("rng created with seed {}", seed);
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this generator was created or last reseeded with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Reseed the generator, restarting its sequence; 0 seeds from entropy
    pub fn set_seed(&mut self, seed: u64) {
        let seed = if seed == 0 { rand::random() } else { seed };
        self.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Random integer in `[min, max]`, both inclusive
    ///
    /// Reversed bounds are swapped rather than rejected.
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        self.rng.gen_range(min..=max)
    }

    /// Random float in `[min, max)`
    ///
    /// Reversed bounds are swapped; equal bounds return the bound.
    pub fn random_float(&mut self, min: f32, max: f32) -> f32 {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        if min == max {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Random double in `[min, max)`
    ///
    /// Same bound handling as [`random_float`](Self::random_float).
    pub fn random_double(&mut self, min: f64, max: f64) -> f64 {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        if min == max {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Random boolean, true with the given probability
    ///
    /// The probability is clamped to `[0, 1]`.
    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRng::new(42);
        let mut b = SeededRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.random_int(0, 1000), b.random_int(0, 1000));
        }
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut rng = SeededRng::new(7);
        let first: Vec<i32> = (0..8).map(|_| rng.random_int(0, 100)).collect();
        rng.set_seed(7);
        let second: Vec<i32> = (0..8).map(|_| rng.random_int(0, 100)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_seed_picks_one() {
        let rng = SeededRng::new(0);
        assert_ne!(rng.seed(), 0);
    }

    #[test]
    fn test_int_range_inclusive() {
        let mut rng = SeededRng::new(1);
        for _ in 0..100 {
            let v = rng.random_int(3, 5);
            assert!((3..=5).contains(&v));
        }
        // Degenerate range
        assert_eq!(rng.random_int(4, 4), 4);
    }

    #[test]
    fn test_int_range_swapped_bounds() {
        let mut rng = SeededRng::new(1);
        for _ in 0..100 {
            let v = rng.random_int(5, 3);
            assert!((3..=5).contains(&v));
        }
    }

    #[test]
    fn test_float_range() {
        let mut rng = SeededRng::new(2);
        for _ in 0..100 {
            let v = rng.random_float(-1.0, 1.0);
            assert!((-1.0..1.0).contains(&v));
        }
        assert_eq!(rng.random_float(2.0, 2.0), 2.0);
    }

    #[test]
    fn test_double_range() {
        let mut rng = SeededRng::new(5);
        for _ in 0..100 {
            let v = rng.random_double(3.0, 9.0);
            assert!((3.0..9.0).contains(&v));
        }
        assert_eq!(rng.random_double(2.0, 2.0), 2.0);
        // Reversed bounds are swapped
        assert!((3.0..9.0).contains(&rng.random_double(9.0, 3.0)));
    }

    #[test]
    fn test_bool_probability_extremes() {
        let mut rng = SeededRng::new(3);
        for _ in 0..32 {
            assert!(rng.random_bool(1.0));
            assert!(!rng.random_bool(0.0));
        }
        // Out-of-range probabilities are clamped, not rejected
        assert!(rng.random_bool(2.0));
        assert!(!rng.random_bool(-1.0));
    }
}
