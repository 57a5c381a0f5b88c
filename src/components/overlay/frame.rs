//! Single per-frame dispatcher for the overlay layers.
//!
//! Every registered layer is invoked once per tick, in registration order, so
//! later layers always draw on top of earlier ones. A layer that reports
//! [`Activity::Idle`] is skipped on subsequent ticks until it is woken again.

/// What a layer wants after running for a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
	/// Keep calling this layer every frame.
	Running,
	/// Nothing left to animate; skip until woken.
	Idle,
}

/// Handle to a registered layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerId(usize);

type LayerFn<C> = Box<dyn FnMut(&mut C) -> Activity>;

struct Layer<C> {
	name: &'static str,
	active: bool,
	run: LayerFn<C>,
}

/// Ordered list of per-frame callbacks sharing a context `C`.
pub struct FrameDispatcher<C> {
	layers: Vec<Layer<C>>,
}

impl<C> Default for FrameDispatcher<C> {
	fn default() -> Self {
		Self { layers: Vec::new() }
	}
}

impl<C> FrameDispatcher<C> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a layer. It starts active.
	pub fn register(
		&mut self,
		name: &'static str,
		run: impl FnMut(&mut C) -> Activity + 'static,
	) -> LayerId {
		self.layers.push(Layer {
			name,
			active: true,
			run: Box::new(run),
		});
		LayerId(self.layers.len() - 1)
	}

	/// Resume an idle layer on the next tick.
	pub fn wake(&mut self, id: LayerId) {
		if let Some(layer) = self.layers.get_mut(id.0) {
			if !layer.active {
				log::debug!("love-quiz: waking layer {}", layer.name);
			}
			layer.active = true;
		}
	}

	pub fn is_active(&self, id: LayerId) -> bool {
		self.layers.get(id.0).is_some_and(|l| l.active)
	}

	/// Run every active layer once, in order. Returns how many ran.
	pub fn tick(&mut self, ctx: &mut C) -> usize {
		let mut ran = 0;
		for layer in self.layers.iter_mut().filter(|l| l.active) {
			ran += 1;
			if (layer.run)(ctx) == Activity::Idle {
				layer.active = false;
			}
		}
		ran
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn layers_run_in_registration_order() {
		let mut d = FrameDispatcher::<Vec<&str>>::new();
		d.register("back", |log| {
			log.push("back");
			Activity::Running
		});
		d.register("front", |log| {
			log.push("front");
			Activity::Running
		});

		let mut log = Vec::new();
		d.tick(&mut log);
		d.tick(&mut log);
		assert_eq!(log, vec!["back", "front", "back", "front"]);
	}

	#[test]
	fn idle_layer_is_skipped_until_woken() {
		let mut d = FrameDispatcher::<u32>::new();
		let id = d.register("countdown", |n| {
			*n = n.saturating_sub(1);
			if *n == 0 { Activity::Idle } else { Activity::Running }
		});

		let mut n = 2;
		assert_eq!(d.tick(&mut n), 1);
		assert_eq!(d.tick(&mut n), 1);
		assert!(!d.is_active(id));
		assert_eq!(d.tick(&mut n), 0);

		n = 1;
		d.wake(id);
		assert!(d.is_active(id));
		assert_eq!(d.tick(&mut n), 1);
		assert!(!d.is_active(id));
	}
}
