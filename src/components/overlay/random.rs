//! Random number sources for particle spawning.
//!
//! The browser build draws from `Math.random`; tests use a seeded xorshift
//! generator so particle runs are reproducible.

/// A source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
	fn next_f64(&mut self) -> f64;

	/// Uniform value in `[min, max)`.
	fn range(&mut self, min: f64, max: f64) -> f64 {
		self.next_f64() * (max - min) + min
	}
}

/// Backed by the host's `Math.random`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
	fn next_f64(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// Deterministic xorshift64 generator.
#[derive(Clone, Debug)]
pub struct SeededRandom {
	state: u64,
}

impl SeededRandom {
	pub fn new(seed: u64) -> Self {
		// xorshift never leaves the zero state
		Self {
			state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
		}
	}

	fn next_u64(&mut self) -> u64 {
		let mut x = self.state;
		x ^= x << 13;
		x ^= x >> 7;
		x ^= x << 17;
		self.state = x;
		x
	}
}

impl RandomSource for SeededRandom {
	fn next_f64(&mut self) -> f64 {
		// Top 53 bits map exactly onto the f64 mantissa.
		(self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn seeded_values_stay_in_unit_interval() {
		let mut rng = SeededRandom::new(7);
		for _ in 0..10_000 {
			let v = rng.next_f64();
			assert!((0.0..1.0).contains(&v), "value {v} out of range");
		}
	}

	#[test]
	fn range_respects_bounds() {
		let mut rng = SeededRandom::new(42);
		for _ in 0..10_000 {
			let v = rng.range(-0.25, 0.25);
			assert!((-0.25..0.25).contains(&v));
		}
	}

	#[test]
	fn same_seed_same_sequence() {
		let mut a = SeededRandom::new(3);
		let mut b = SeededRandom::new(3);
		for _ in 0..100 {
			assert_eq!(a.next_f64(), b.next_f64());
		}
	}

	#[test]
	fn zero_seed_is_usable() {
		let mut rng = SeededRandom::new(0);
		let first = rng.next_f64();
		let second = rng.next_f64();
		assert_ne!(first, second);
	}
}
