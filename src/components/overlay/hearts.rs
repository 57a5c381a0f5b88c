//! Floating hearts drifting up through the viewport.
//!
//! The pool is allocated once. Hearts that float off the top are recycled
//! below the bottom edge, so the visual density stays stable and the per-frame
//! cost is proportional to the pool size.

use super::random::RandomSource;
use super::theme::HeartStyle;

/// A single floating heart.
#[derive(Clone, Debug)]
pub struct Heart {
	pub x: f64,
	pub y: f64,
	/// Horizontal drift per frame
	pub vx: f64,
	/// Upward speed per frame (positive moves toward the top)
	pub vy: f64,
	pub size: f64,
	pub rot: f64,
	pub vr: f64,
	pub alpha: f64,
}

/// Fixed-size pool of hearts.
pub struct HeartField {
	hearts: Vec<Heart>,
	style: HeartStyle,
	width: f64,
	height: f64,
}

impl HeartField {
	pub fn new(style: HeartStyle, width: f64, height: f64, rng: &mut impl RandomSource) -> Self {
		let hearts = (0..style.count)
			.map(|_| Heart {
				size: style.size.sample(rng),
				x: rng.range(0.0, width),
				y: height + style.spawn_depth.sample(rng),
				vy: style.rise.sample(rng),
				vx: style.drift.sample(rng),
				rot: style.tilt.sample(rng),
				vr: style.spin.sample(rng),
				alpha: style.opacity.sample(rng),
			})
			.collect();

		Self {
			hearts,
			style,
			width,
			height,
		}
	}

	pub fn hearts(&self) -> &[Heart] {
		&self.hearts
	}

	pub fn len(&self) -> usize {
		self.hearts.len()
	}

	/// Advance every heart by one frame. Returns how many were recycled.
	pub fn update(&mut self, rng: &mut impl RandomSource) -> usize {
		let mut recycled = 0;
		for h in &mut self.hearts {
			h.x += h.vx;
			h.y -= h.vy;
			h.rot += h.vr;

			// Drift and spin carry over so a heart keeps its character.
			if h.y < -self.style.top_margin {
				h.y = self.height + self.style.recycle_depth.sample(rng);
				h.x = rng.range(0.0, self.width);
				h.vy = self.style.rise.sample(rng);
				recycled += 1;
			}
		}
		recycled
	}

	/// Track new viewport bounds. Positions are left as they are; hearts pick
	/// up the new bounds the next time they recycle.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::overlay::random::SeededRandom;

	fn field(seed: u64) -> (HeartField, SeededRandom) {
		let mut rng = SeededRandom::new(seed);
		let field = HeartField::new(HeartStyle::default(), 800.0, 600.0, &mut rng);
		(field, rng)
	}

	#[test]
	fn spawns_below_the_bottom_edge() {
		let (field, _) = field(1);
		assert_eq!(field.len(), 28);
		for h in field.hearts() {
			assert!(h.y >= 620.0 && h.y <= 800.0, "spawned at y={}", h.y);
			assert!((0.0..800.0).contains(&h.x));
			assert!((10.0..22.0).contains(&h.size));
		}
	}

	#[test]
	fn pool_size_never_changes() {
		let (mut field, mut rng) = field(2);
		for _ in 0..5_000 {
			field.update(&mut rng);
			assert_eq!(field.len(), 28);
		}
	}

	#[test]
	fn integrates_one_step() {
		let (mut field, mut rng) = field(3);
		let before = field.hearts()[0].clone();
		field.update(&mut rng);
		let after = &field.hearts()[0];
		assert_eq!(after.x, before.x + before.vx);
		assert_eq!(after.y, before.y - before.vy);
		assert_eq!(after.rot, before.rot + before.vr);
	}

	#[test]
	fn recycles_past_the_top_margin_in_the_same_step() {
		let (mut field, mut rng) = field(4);
		let h = &mut field.hearts[0];
		h.y = -79.5;
		h.vy = 1.0;
		let (vx, vr) = (h.vx, h.vr);

		let recycled = field.update(&mut rng);

		assert!(recycled >= 1);
		let h = &field.hearts()[0];
		assert!(h.y >= 660.0 && h.y <= 820.0, "recycled to y={}", h.y);
		assert!((0.0..800.0).contains(&h.x));
		assert!(HeartStyle::default().rise.contains(h.vy));
		assert_eq!(h.vx, vx);
		assert_eq!(h.vr, vr);
	}

	#[test]
	fn heart_just_inside_the_margin_is_kept() {
		let (mut field, mut rng) = field(5);
		let h = &mut field.hearts[0];
		h.y = -78.0;
		h.vy = 1.0;
		field.update(&mut rng);
		assert_eq!(field.hearts()[0].y, -79.0);
	}

	#[test]
	fn recycling_uses_resized_bounds() {
		let (mut field, mut rng) = field(6);
		field.resize(300.0, 200.0);
		field.hearts[0].y = -100.0;
		field.update(&mut rng);
		let h = &field.hearts()[0];
		assert!(h.y >= 260.0 && h.y <= 420.0);
		assert!((0.0..300.0).contains(&h.x));
	}
}
