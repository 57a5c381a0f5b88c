//! The fixed screen sequence and the navigator walking through it.

/// One screen of the quiz, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Screen {
	Intro,
	Q1,
	Q2,
	Q3,
	Q4,
	Q5,
	Q6,
	Final,
}

impl Screen {
	pub const ALL: [Screen; 8] = [
		Screen::Intro,
		Screen::Q1,
		Screen::Q2,
		Screen::Q3,
		Screen::Q4,
		Screen::Q5,
		Screen::Q6,
		Screen::Final,
	];

	pub fn name(self) -> &'static str {
		match self {
			Screen::Intro => "intro",
			Screen::Q1 => "q1",
			Screen::Q2 => "q2",
			Screen::Q3 => "q3",
			Screen::Q4 => "q4",
			Screen::Q5 => "q5",
			Screen::Q6 => "q6",
			Screen::Final => "final",
		}
	}

	pub fn from_name(name: &str) -> Option<Screen> {
		Self::ALL.into_iter().find(|s| s.name() == name)
	}

	/// Position in the sequence.
	pub fn index(self) -> usize {
		self as usize
	}

	pub fn first() -> Screen {
		Self::ALL[0]
	}

	pub fn last() -> Screen {
		Self::ALL[Self::ALL.len() - 1]
	}
}

/// Progress through the sequence, derived from the current screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
	/// Bar fill in `[0, 100]`
	pub percent: f64,
	/// 1-based step shown to the user
	pub step: usize,
	pub total: usize,
}

impl Progress {
	pub fn of(screen: Screen) -> Self {
		let total = Screen::ALL.len();
		let index = screen.index();
		let percent = index as f64 / (total - 1) as f64 * 100.0;
		Self {
			percent: percent.clamp(0.0, 100.0),
			step: (index + 1).max(1),
			total,
		}
	}

	/// CSS width for the progress fill.
	pub fn width_css(&self) -> String {
		format!("{}%", self.percent)
	}

	/// "step / total" label.
	pub fn label(&self) -> String {
		format!("{} / {}", self.step, self.total)
	}
}

/// Tracks the active screen. Exactly one screen is active at any time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
	current: Screen,
	/// Bumped on every show, including re-showing the active screen; the view
	/// scrolls to the top whenever it changes.
	scroll_requests: u32,
}

impl Default for Navigator {
	fn default() -> Self {
		Self {
			current: Screen::first(),
			scroll_requests: 0,
		}
	}
}

impl Navigator {
	pub fn current(&self) -> Screen {
		self.current
	}

	pub fn is_active(&self, screen: Screen) -> bool {
		self.current == screen
	}

	pub fn progress(&self) -> Progress {
		Progress::of(self.current)
	}

	pub fn scroll_requests(&self) -> u32 {
		self.scroll_requests
	}

	/// Activate `screen` and request a scroll to the top.
	pub fn show(&mut self, screen: Screen) {
		self.current = screen;
		self.scroll_requests = self.scroll_requests.wrapping_add(1);
	}

	/// The screen after the current one, saturating at the last.
	pub fn following(&self) -> Screen {
		let next = (self.current.index() + 1).min(Screen::ALL.len() - 1);
		Screen::ALL[next]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn names_round_trip_through_the_sequence() {
		for screen in Screen::ALL {
			assert_eq!(Screen::from_name(screen.name()), Some(screen));
		}
		assert_eq!(Screen::from_name("q7"), None);
	}

	#[test]
	fn show_activates_exactly_one_screen() {
		for screen in Screen::ALL {
			let mut nav = Navigator::default();
			nav.show(screen);
			let active: Vec<_> = Screen::ALL.into_iter().filter(|&s| nav.is_active(s)).collect();
			assert_eq!(active, vec![screen]);
			assert!((0.0..=100.0).contains(&nav.progress().percent));
		}
	}

	#[test]
	fn progress_runs_from_zero_to_full() {
		let mut nav = Navigator::default();
		assert_eq!(nav.progress().percent, 0.0);
		assert_eq!(nav.progress().label(), "1 / 8");

		let mut last = -1.0;
		for _ in 0..Screen::ALL.len() {
			let pct = nav.progress().percent;
			assert!(pct >= last);
			last = pct;
			nav.show(nav.following());
		}
		assert_eq!(nav.current(), Screen::Final);
		assert_eq!(nav.progress().percent, 100.0);
		assert_eq!(nav.progress().label(), "8 / 8");
	}

	#[test]
	fn second_screen_progress_is_one_seventh() {
		let p = Progress::of(Screen::Q1);
		assert!((p.percent - 100.0 / 7.0).abs() < 1e-9);
		assert_eq!(p.step, 2);
	}

	#[test]
	fn following_the_end_reshows_the_last_screen() {
		let mut nav = Navigator::default();
		nav.show(Screen::Final);
		let requests = nav.scroll_requests();
		nav.show(nav.following());
		assert_eq!(nav.current(), Screen::Final);
		assert_eq!(nav.scroll_requests(), requests + 1);
	}
}
