//! Visual theming for the overlay particles.
//!
//! Provides the colour type, gradient/glow paints, and the tunable spawn
//! parameters for hearts and confetti.

use serde::Deserialize;

use super::random::RandomSource;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Closed-open interval a particle attribute is drawn from.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Spread {
	pub min: f64,
	pub max: f64,
}

impl Spread {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Symmetric interval around zero.
	pub const fn around_zero(half: f64) -> Self {
		Self {
			min: -half,
			max: half,
		}
	}

	pub fn sample(&self, rng: &mut impl RandomSource) -> f64 {
		rng.range(self.min, self.max)
	}

	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value <= self.max
	}
}

/// Fill and glow for one particle kind.
#[derive(Clone, Debug)]
pub struct Paint {
	/// Gradient colour at the top-left corner of the shape
	pub gradient_start: Color,
	/// Gradient colour at the bottom-right corner
	pub gradient_end: Color,
	pub glow: Color,
	/// Shadow blur radius in CSS pixels
	pub glow_blur: f64,
}

/// Floating heart pool configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeartStyle {
	/// Fixed pool size
	pub count: usize,
	pub size: Spread,
	/// Upward speed per frame
	pub rise: Spread,
	/// Horizontal drift per frame
	pub drift: Spread,
	pub tilt: Spread,
	/// Rotation velocity per frame (radians)
	pub spin: Spread,
	pub opacity: Spread,
	/// Distance below the bottom edge for the initial spawn
	pub spawn_depth: Spread,
	/// Distance below the bottom edge when a heart is recycled
	pub recycle_depth: Spread,
	/// How far past the top edge a heart travels before recycling
	pub top_margin: f64,
}

impl Default for HeartStyle {
	fn default() -> Self {
		Self {
			count: 28,
			size: Spread::new(10.0, 22.0),
			rise: Spread::new(0.35, 1.1),
			drift: Spread::around_zero(0.25),
			tilt: Spread::around_zero(0.8),
			spin: Spread::around_zero(0.006),
			opacity: Spread::new(0.35, 0.75),
			spawn_depth: Spread::new(20.0, 200.0),
			recycle_depth: Spread::new(60.0, 220.0),
			top_margin: 80.0,
		}
	}
}

/// Confetti burst configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfettiStyle {
	/// Pieces per burst
	pub burst_size: usize,
	/// Bursts fired per celebration trigger
	pub bursts_per_trigger: usize,
	pub jitter_x: f64,
	pub jitter_y: f64,
	pub velocity_x: Spread,
	pub velocity_y: Spread,
	/// Downward acceleration added to vy every frame
	pub gravity: Spread,
	pub width: Spread,
	pub height: Spread,
	pub spin: Spread,
	/// Lifetime in frames
	pub life: Spread,
	/// Remaining frames at which fading starts
	pub fade_frames: f64,
	/// How far past the bottom edge a piece may fall before removal
	pub bottom_margin: f64,
}

impl Default for ConfettiStyle {
	fn default() -> Self {
		Self {
			burst_size: 140,
			bursts_per_trigger: 2,
			jitter_x: 30.0,
			jitter_y: 10.0,
			velocity_x: Spread::around_zero(4.2),
			velocity_y: Spread::new(-6.8, -2.4),
			gravity: Spread::new(0.08, 0.14),
			width: Spread::new(6.0, 10.0),
			height: Spread::new(10.0, 16.0),
			spin: Spread::around_zero(0.2),
			life: Spread::new(70.0, 120.0),
			fade_frames: 60.0,
			bottom_margin: 80.0,
		}
	}
}

/// Complete overlay theme.
#[derive(Clone, Debug)]
pub struct OverlayTheme {
	pub hearts: Paint,
	pub confetti: Paint,
}

impl OverlayTheme {
	/// Pink-to-cyan neon look (default)
	pub fn neon() -> Self {
		Self {
			hearts: Paint {
				gradient_start: Color::rgba(255, 79, 216, 0.95),
				gradient_end: Color::rgba(110, 243, 255, 0.85),
				glow: Color::rgba(255, 79, 216, 0.35),
				glow_blur: 18.0,
			},
			confetti: Paint {
				gradient_start: Color::rgba(255, 79, 216, 0.95),
				gradient_end: Color::rgba(110, 243, 255, 0.9),
				glow: Color::rgb(255, 255, 255).with_alpha(0.15),
				glow_blur: 10.0,
			},
		}
	}
}

impl Default for OverlayTheme {
	fn default() -> Self {
		Self::neon()
	}
}
