//! Confetti bursts with gravity and fade-out.

use std::f64::consts::PI;

use super::random::RandomSource;
use super::theme::ConfettiStyle;

/// A single piece of confetti.
#[derive(Clone, Debug)]
pub struct ConfettiPiece {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Gravity added to `vy` each frame
	pub g: f64,
	pub w: f64,
	pub h: f64,
	pub rot: f64,
	pub vr: f64,
	/// Frames left to live
	pub life: u32,
}

/// The live confetti set. Grows with each burst, shrinks as pieces expire.
pub struct Confetti {
	pieces: Vec<ConfettiPiece>,
	style: ConfettiStyle,
	width: f64,
	height: f64,
}

impl Confetti {
	pub fn new(style: ConfettiStyle, width: f64, height: f64) -> Self {
		Self {
			pieces: Vec::new(),
			style,
			width,
			height,
		}
	}

	pub fn pieces(&self) -> &[ConfettiPiece] {
		&self.pieces
	}

	pub fn len(&self) -> usize {
		self.pieces.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pieces.is_empty()
	}

	pub fn style(&self) -> &ConfettiStyle {
		&self.style
	}

	/// Spawn `count` pieces in a jittered cluster around the centre of the
	/// upper third of the viewport.
	pub fn burst(&mut self, count: usize, rng: &mut impl RandomSource) {
		let (cx, cy) = (self.width / 2.0, self.height / 3.0);
		let s = &self.style;

		self.pieces.reserve(count);
		for _ in 0..count {
			self.pieces.push(ConfettiPiece {
				x: cx + rng.range(-s.jitter_x, s.jitter_x),
				y: cy + rng.range(-s.jitter_y, s.jitter_y),
				vx: s.velocity_x.sample(rng),
				vy: s.velocity_y.sample(rng),
				g: s.gravity.sample(rng),
				w: s.width.sample(rng),
				h: s.height.sample(rng),
				rot: rng.range(0.0, PI),
				vr: s.spin.sample(rng),
				life: s.life.sample(rng) as u32,
			});
		}
	}

	/// Advance every piece by one frame and drop the ones that expired or
	/// fell past the bottom margin.
	pub fn update(&mut self) {
		let floor = self.height + self.style.bottom_margin;
		self.pieces.retain_mut(|p| {
			p.x += p.vx;
			p.y += p.vy;
			p.vy += p.g;
			p.rot += p.vr;
			p.life = p.life.saturating_sub(1);

			p.life > 0 && p.y <= floor
		});
	}

	/// Opacity for a piece, fading over the last `fade_frames` of its life.
	pub fn alpha(&self, piece: &ConfettiPiece) -> f64 {
		(piece.life as f64 / self.style.fade_frames).min(1.0)
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::overlay::random::SeededRandom;

	fn confetti() -> (Confetti, SeededRandom) {
		(
			Confetti::new(ConfettiStyle::default(), 900.0, 600.0),
			SeededRandom::new(11),
		)
	}

	#[test]
	fn burst_adds_exactly_count() {
		let (mut c, mut rng) = confetti();
		c.burst(17, &mut rng);
		assert_eq!(c.len(), 17);
		c.burst(5, &mut rng);
		assert_eq!(c.len(), 22);
	}

	#[test]
	fn burst_spawns_around_upper_third() {
		let (mut c, mut rng) = confetti();
		c.burst(200, &mut rng);
		for p in c.pieces() {
			assert!((420.0..=480.0).contains(&p.x));
			assert!((190.0..=210.0).contains(&p.y));
			assert!(p.vy < 0.0, "pieces start moving up");
			assert!((70..120).contains(&p.life));
		}
	}

	#[test]
	fn gravity_accumulates_into_velocity() {
		let (mut c, mut rng) = confetti();
		c.burst(1, &mut rng);
		let before = c.pieces()[0].clone();
		c.update();
		let after = &c.pieces()[0];
		assert_eq!(after.y, before.y + before.vy);
		assert_eq!(after.vy, before.vy + before.g);
		assert_eq!(after.life, before.life - 1);
	}

	#[test]
	fn alpha_fades_only_near_the_end() {
		let (mut c, mut rng) = confetti();
		c.burst(1, &mut rng);
		let mut p = c.pieces()[0].clone();
		p.life = 90;
		assert_eq!(c.alpha(&p), 1.0);
		p.life = 30;
		assert_eq!(c.alpha(&p), 0.5);
	}

	#[test]
	fn expired_pieces_are_removed() {
		let (mut c, mut rng) = confetti();
		c.burst(3, &mut rng);
		c.pieces[1].life = 1;
		c.update();
		assert_eq!(c.len(), 2);
	}

	#[test]
	fn pieces_below_the_floor_are_removed() {
		let (mut c, mut rng) = confetti();
		c.burst(3, &mut rng);
		c.pieces[0].y = 700.0;
		c.pieces[0].vy = 0.0;
		c.update();
		assert_eq!(c.len(), 2);
	}

	#[test]
	fn double_burst_drains_to_zero() {
		let (mut c, mut rng) = confetti();
		c.burst(140, &mut rng);
		c.burst(140, &mut rng);
		assert_eq!(c.len(), 280);

		// Longest life is under 120 frames.
		for _ in 0..120 {
			c.update();
		}
		assert!(c.is_empty());
	}
}
