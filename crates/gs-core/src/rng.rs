//! Injectable uniform random sources
//!
//! The outcome generator never reaches for a global RNG. Production code passes
//! a seeded or OS-seeded ChaCha stream; tests pass a [`ScriptedSource`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::symbols::Symbol;

/// Uniform random source over [0, 1)
pub trait RandomSource {
    /// Next value in [0, 1)
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for ChaCha8Rng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl RandomSource for StdRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// ChaCha stream, seeded when `seed` is given, OS-seeded otherwise
pub fn chacha_source(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_os_rng(),
    }
}

/// Replays a fixed list of unit values, cycling when exhausted
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<f64>,
    position: usize,
}

impl ScriptedSource {
    /// Create from raw unit values (clamped into [0, 1))
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Values that make the generator draw exactly `symbols`, in order
    pub fn for_symbols(symbols: &[Symbol]) -> Self {
        let n = Symbol::ALL.len() as f64;
        Self::new(
            symbols
                .iter()
                .map(|s| (s.index() as f64 + 0.5) / n)
                .collect(),
        )
    }

    /// Number of values consumed so far
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.position % self.values.len()];
        self.position += 1;
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_chacha_repeatable() {
        let mut a = chacha_source(Some(42));
        let mut b = chacha_source(Some(42));
        for _ in 0..16 {
            let (x, y) = (a.next_unit(), b.next_unit());
            assert_eq!(x, y);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut src = ScriptedSource::new(vec![0.1, 0.2]);
        assert_eq!(src.next_unit(), 0.1);
        assert_eq!(src.next_unit(), 0.2);
        assert_eq!(src.next_unit(), 0.1);
        assert_eq!(src.consumed(), 3);
    }

    #[test]
    fn test_scripted_clamps_out_of_range() {
        let mut src = ScriptedSource::new(vec![1.0, -0.5]);
        assert!(src.next_unit() < 1.0);
        assert_eq!(src.next_unit(), 0.0);
    }

    #[test]
    fn test_empty_scripted_yields_zero() {
        let mut src = ScriptedSource::default();
        assert_eq!(src.next_unit(), 0.0);
    }
}
