//! Canvas rendering for the overlay particles.
//!
//! Hearts and confetti share the same paint convention: a diagonal two-colour
//! linear gradient spanning the shape plus a soft shadow glow. Each particle is
//! drawn in its own saved context so transforms and alpha never leak.

use web_sys::CanvasRenderingContext2d;

use super::confetti::Confetti;
use super::hearts::HeartField;
use super::theme::Paint;
use super::viewport::Viewport;

/// One cubic bezier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cubic {
	pub c1: (f64, f64),
	pub c2: (f64, f64),
	pub to: (f64, f64),
}

/// Closed heart outline in local coordinates, two mirrored lobes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartPath {
	pub start: (f64, f64),
	pub curves: [Cubic; 4],
}

/// Heart outline for a glyph of size `s`, centred on the x axis.
pub fn heart_path(s: f64) -> HeartPath {
	HeartPath {
		start: (0.0, s / 4.0),
		curves: [
			Cubic {
				c1: (0.0, -s / 2.0),
				c2: (-s, -s / 2.0),
				to: (-s, s / 6.0),
			},
			Cubic {
				c1: (-s, s),
				c2: (0.0, s * 1.15),
				to: (0.0, s * 1.45),
			},
			Cubic {
				c1: (0.0, s * 1.15),
				c2: (s, s),
				to: (s, s / 6.0),
			},
			Cubic {
				c1: (s, -s / 2.0),
				c2: (0.0, -s / 2.0),
				to: (0.0, s / 4.0),
			},
		],
	}
}

/// Wipe the whole viewport.
pub fn clear(ctx: &CanvasRenderingContext2d, viewport: &Viewport) {
	ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
}

/// Apply `paint` as fill and shadow for a shape spanning `(-hw, -hh)..(hw, hh)`.
fn apply_paint(ctx: &CanvasRenderingContext2d, paint: &Paint, hw: f64, hh: f64) {
	let gradient = ctx.create_linear_gradient(-hw, -hh, hw, hh);
	let _ = gradient.add_color_stop(0.0, &paint.gradient_start.to_css());
	let _ = gradient.add_color_stop(1.0, &paint.gradient_end.to_css());

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.set_shadow_color(&paint.glow.to_css());
	ctx.set_shadow_blur(paint.glow_blur);
}

pub fn draw_hearts(ctx: &CanvasRenderingContext2d, field: &HeartField, paint: &Paint) {
	for h in field.hearts() {
		ctx.save();
		let _ = ctx.translate(h.x, h.y);
		let _ = ctx.rotate(h.rot);
		ctx.set_global_alpha(h.alpha);

		let path = heart_path(h.size);
		ctx.begin_path();
		ctx.move_to(path.start.0, path.start.1);
		for c in &path.curves {
			ctx.bezier_curve_to(c.c1.0, c.c1.1, c.c2.0, c.c2.1, c.to.0, c.to.1);
		}

		apply_paint(ctx, paint, h.size, h.size);
		ctx.fill();
		ctx.restore();
	}
}

pub fn draw_confetti(ctx: &CanvasRenderingContext2d, confetti: &Confetti, paint: &Paint) {
	for p in confetti.pieces() {
		ctx.save();
		let _ = ctx.translate(p.x, p.y);
		let _ = ctx.rotate(p.rot);
		ctx.set_global_alpha(confetti.alpha(p));

		apply_paint(ctx, paint, p.w, p.h);
		ctx.fill_rect(-p.w / 2.0, -p.h / 2.0, p.w, p.h);
		ctx.restore();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn points(path: &HeartPath) -> Vec<(f64, f64)> {
		let mut pts = vec![path.start];
		for c in &path.curves {
			pts.extend([c.c1, c.c2, c.to]);
		}
		pts
	}

	#[test]
	fn heart_outline_is_closed() {
		let path = heart_path(16.0);
		assert_eq!(path.curves[3].to, path.start);
	}

	#[test]
	fn heart_outline_is_mirror_symmetric() {
		let path = heart_path(10.0);
		let pts = points(&path);
		for &(x, y) in &pts {
			assert!(
				pts.iter().any(|&(mx, my)| mx == -x && my == y),
				"no mirror for ({x}, {y})"
			);
		}
	}

	#[test]
	fn heart_outline_fits_its_size() {
		let s = 22.0;
		for (x, y) in points(&heart_path(s)) {
			assert!(x.abs() <= s);
			assert!((-s / 2.0..=s * 1.45).contains(&y));
		}
	}
}
