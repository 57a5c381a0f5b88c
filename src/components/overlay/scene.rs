//! Overlay scene: particle state plus the frame dispatcher that drives it.
//!
//! The hearts layer runs every frame and owns clearing the canvas. The
//! confetti layer goes idle once the last piece is gone and is woken again by
//! the next burst.

use web_sys::CanvasRenderingContext2d;

use super::confetti::Confetti;
use super::frame::{Activity, FrameDispatcher, LayerId};
use super::hearts::HeartField;
use super::random::RandomSource;
use super::render;
use super::theme::{ConfettiStyle, HeartStyle, OverlayTheme};
use super::viewport::Viewport;

/// Everything a layer touches during a frame.
pub struct Stage<R> {
	pub hearts: HeartField,
	pub confetti: Confetti,
	pub rng: R,
	pub viewport: Viewport,
	pub theme: OverlayTheme,
	/// Absent when there is nothing to paint on (tests, failed setup).
	pub surface: Option<CanvasRenderingContext2d>,
}

fn hearts_layer<R: RandomSource>(stage: &mut Stage<R>) -> Activity {
	stage.hearts.update(&mut stage.rng);
	if let Some(ctx) = &stage.surface {
		render::clear(ctx, &stage.viewport);
		render::draw_hearts(ctx, &stage.hearts, &stage.theme.hearts);
	}
	Activity::Running
}

fn confetti_layer<R: RandomSource>(stage: &mut Stage<R>) -> Activity {
	if stage.confetti.is_empty() {
		return Activity::Idle;
	}
	stage.confetti.update();
	if let Some(ctx) = &stage.surface {
		render::draw_confetti(ctx, &stage.confetti, &stage.theme.confetti);
	}
	if stage.confetti.is_empty() {
		log::debug!("love-quiz: confetti settled");
		Activity::Idle
	} else {
		Activity::Running
	}
}

/// Particle overlay with a defined draw order: hearts, then confetti.
pub struct Overlay<R> {
	pub stage: Stage<R>,
	dispatcher: FrameDispatcher<Stage<R>>,
	confetti_id: LayerId,
}

impl<R: RandomSource + 'static> Overlay<R> {
	pub fn new(
		hearts: HeartStyle,
		confetti: ConfettiStyle,
		theme: OverlayTheme,
		viewport: Viewport,
		mut rng: R,
		surface: Option<CanvasRenderingContext2d>,
	) -> Self {
		let stage = Stage {
			hearts: HeartField::new(hearts, viewport.width, viewport.height, &mut rng),
			confetti: Confetti::new(confetti, viewport.width, viewport.height),
			rng,
			viewport,
			theme,
			surface,
		};

		log::debug!("love-quiz: {} hearts in the pool", stage.hearts.len());

		let mut dispatcher = FrameDispatcher::new();
		dispatcher.register("hearts", hearts_layer::<R>);
		let confetti_id = dispatcher.register("confetti", confetti_layer::<R>);

		Self {
			stage,
			dispatcher,
			confetti_id,
		}
	}

	/// Advance and paint one frame.
	pub fn tick(&mut self) {
		self.dispatcher.tick(&mut self.stage);
	}

	/// Spawn `count` confetti pieces and make sure the confetti layer runs.
	pub fn burst(&mut self, count: usize) {
		let stage = &mut self.stage;
		stage.confetti.burst(count, &mut stage.rng);
		self.dispatcher.wake(self.confetti_id);
		log::debug!(
			"love-quiz: burst of {count}, {} pieces live",
			stage.confetti.len()
		);
	}

	/// The configured celebration: several full-size bursts at once.
	pub fn celebrate(&mut self) {
		let style = self.stage.confetti.style();
		let (size, bursts) = (style.burst_size, style.bursts_per_trigger);
		if self.confetti_running() {
			log::debug!("love-quiz: celebrating over confetti still in flight");
		}
		for _ in 0..bursts {
			self.burst(size);
		}
	}

	pub fn confetti_running(&self) -> bool {
		self.dispatcher.is_active(self.confetti_id)
	}

	pub fn resize(&mut self, viewport: Viewport) {
		self.stage.viewport = viewport;
		self.stage.hearts.resize(viewport.width, viewport.height);
		self.stage.confetti.resize(viewport.width, viewport.height);
	}
}
