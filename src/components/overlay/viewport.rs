//! Viewport geometry for the overlay canvas.
//!
//! Particle coordinates live in CSS pixels. The canvas backing store is scaled
//! by the device pixel ratio and the context transform maps CSS pixels back
//! onto it, so high-density screens stay sharp without touching the simulation.

/// Size of the visible area plus its pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// CSS pixels
	pub width: f64,
	/// CSS pixels
	pub height: f64,
	pub dpr: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64, dpr: f64) -> Self {
		// Some embedded browsers report 0 before layout.
		let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
		Self { width, height, dpr }
	}

	/// Backing store size in device pixels.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.width * self.dpr).round() as u32,
			(self.height * self.dpr).round() as u32,
		)
	}

	/// Arguments for `setTransform(a, b, c, d, e, f)`.
	pub fn transform(&self) -> [f64; 6] {
		[self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0]
	}

	/// Read the current window dimensions.
	pub fn from_window(window: &web_sys::Window) -> Option<Self> {
		Some(Self::new(
			window.inner_width().ok()?.as_f64()?,
			window.inner_height().ok()?.as_f64()?,
			window.device_pixel_ratio(),
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn backing_store_scales_with_density() {
		let v = Viewport::new(390.0, 844.0, 3.0);
		assert_eq!(v.backing_size(), (1170, 2532));
		assert_eq!(v.transform(), [3.0, 0.0, 0.0, 3.0, 0.0, 0.0]);
	}

	#[test]
	fn invalid_density_falls_back_to_one() {
		assert_eq!(Viewport::new(10.0, 10.0, 0.0).dpr, 1.0);
		assert_eq!(Viewport::new(10.0, 10.0, f64::NAN).dpr, 1.0);
	}

	#[test]
	fn fractional_density_rounds_backing_store() {
		let v = Viewport::new(1001.0, 500.0, 1.25);
		assert_eq!(v.backing_size(), (1251, 625));
	}
}
