//! Quiz state machine.
//!
//! Holds the navigator, per-option answer markers, the error modal, and the
//! card shake, plus the deferred actions that pace the feedback. All changes
//! go through methods here; the view only reads.
//!
//! Per screen the flow is `unanswered → correct → (delay) advance`, or
//! `unanswered → wrong → modal open → modal closed → unanswered`.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::content::Answer;
use super::screens::{Navigator, Progress, Screen};
use super::timers::Timers;

/// Feedback pacing, in milliseconds.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuizTiming {
	/// Delay between marking a correct answer and moving on
	pub advance_delay_ms: f64,
	/// How long the card shakes after a wrong answer
	pub shake_ms: f64,
	/// How long a wrong answer stays marked
	pub wrong_mark_ms: f64,
}

impl Default for QuizTiming {
	fn default() -> Self {
		Self {
			advance_delay_ms: 420.0,
			shake_ms: 420.0,
			wrong_mark_ms: 650.0,
		}
	}
}

/// Identifies one option on one screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId {
	pub screen: Screen,
	pub index: usize,
}

/// Visual answered-state of an option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mark {
	#[default]
	Unmarked,
	Correct,
	Wrong,
}

impl Mark {
	pub fn class(self) -> &'static str {
		match self {
			Mark::Unmarked => "opt",
			Mark::Correct => "opt correct",
			Mark::Wrong => "opt wrong",
		}
	}
}

/// Result of selecting an option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
	Correct,
	Wrong,
	/// The option is not on the active screen, or this screen is already
	/// waiting to advance.
	Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerKey {
	Advance,
	ClearShake,
	ClearWrong(OptionId),
}

/// Whole-quiz state. One instance per mounted quiz.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizState {
	nav: Navigator,
	marks: BTreeMap<OptionId, Mark>,
	modal_open: bool,
	shaking: bool,
	timers: Timers<TimerKey, Screen>,
	timing: QuizTiming,
}

impl Default for QuizState {
	fn default() -> Self {
		Self::new(QuizTiming::default())
	}
}

impl QuizState {
	pub fn new(timing: QuizTiming) -> Self {
		Self {
			nav: Navigator::default(),
			marks: BTreeMap::new(),
			modal_open: false,
			shaking: false,
			timers: Timers::default(),
			timing,
		}
	}

	pub fn current(&self) -> Screen {
		self.nav.current()
	}

	pub fn is_active(&self, screen: Screen) -> bool {
		self.nav.is_active(screen)
	}

	pub fn progress(&self) -> Progress {
		self.nav.progress()
	}

	pub fn scroll_requests(&self) -> u32 {
		self.nav.scroll_requests()
	}

	pub fn mark(&self, option: OptionId) -> Mark {
		self.marks.get(&option).copied().unwrap_or_default()
	}

	pub fn modal_open(&self) -> bool {
		self.modal_open
	}

	pub fn shaking(&self) -> bool {
		self.shaking
	}

	/// Activate `screen`. Leaving a screen cancels its pending feedback and
	/// clears the wrong markers those timers would have cleared.
	pub fn show(&mut self, screen: Screen) {
		let previous = self.nav.current();
		if previous != screen {
			self.timers.cancel_scope(previous);
			self.marks
				.retain(|option, mark| option.screen != previous || *mark != Mark::Wrong);
		}
		self.nav.show(screen);
		log::debug!("love-quiz: showing {}", screen.name());
	}

	/// Activate a screen by name; unknown names are ignored.
	pub fn show_screen(&mut self, name: &str) -> bool {
		match Screen::from_name(name) {
			Some(screen) => {
				self.show(screen);
				true
			}
			None => false,
		}
	}

	pub fn next_screen(&mut self) {
		self.show(self.nav.following());
	}

	/// Start button on the intro screen.
	pub fn start(&mut self) {
		self.show(Screen::Q1);
	}

	/// Restart button: clear every marker and return to the first screen.
	pub fn restart(&mut self) {
		for option in self.marks.keys() {
			self.timers.cancel(TimerKey::ClearWrong(*option));
		}
		self.marks.clear();
		self.show(Screen::first());
	}

	/// Handle a click on `option`, tagged `answer`, at `now_ms`.
	pub fn select(&mut self, option: OptionId, answer: Answer, now_ms: f64) -> Selection {
		let screen = self.nav.current();
		if option.screen != screen || self.timers.is_pending(TimerKey::Advance) {
			return Selection::Ignored;
		}

		match answer {
			Answer::Correct => {
				self.marks.insert(option, Mark::Correct);
				self.timers.schedule(
					TimerKey::Advance,
					Some(screen),
					now_ms,
					self.timing.advance_delay_ms,
				);
				Selection::Correct
			}
			Answer::Wrong => {
				self.marks.insert(option, Mark::Wrong);
				self.modal_open = true;
				self.shaking = true;
				self.timers
					.schedule(TimerKey::ClearShake, None, now_ms, self.timing.shake_ms);
				self.timers.schedule(
					TimerKey::ClearWrong(option),
					Some(screen),
					now_ms,
					self.timing.wrong_mark_ms,
				);
				Selection::Wrong
			}
		}
	}

	pub fn close_modal(&mut self) {
		self.modal_open = false;
	}

	/// Click on the modal: only a click on the scrim itself dismisses it.
	pub fn scrim_click(&mut self, on_scrim: bool) {
		if on_scrim {
			self.close_modal();
		}
	}

	pub fn has_due(&self, now_ms: f64) -> bool {
		self.timers.has_due(now_ms)
	}

	/// Run every deferred action due at `now_ms`. Returns how many ran.
	pub fn poll(&mut self, now_ms: f64) -> usize {
		let due = self.timers.take_due(now_ms);
		for key in &due {
			match *key {
				TimerKey::Advance => self.next_screen(),
				TimerKey::ClearShake => self.shaking = false,
				TimerKey::ClearWrong(option) => {
					if self.mark(option) == Mark::Wrong {
						self.marks.remove(&option);
					}
				}
			}
		}
		due.len()
	}

	pub fn screen_class(&self, screen: Screen) -> &'static str {
		if self.is_active(screen) {
			"screen active"
		} else {
			"screen"
		}
	}

	pub fn card_class(&self) -> &'static str {
		if self.shaking { "card shake" } else { "card" }
	}

	pub fn modal_class(&self) -> &'static str {
		if self.modal_open {
			"modal show"
		} else {
			"modal"
		}
	}
}
