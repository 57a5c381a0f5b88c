//! Quiz copy. Fixed at build time.

use super::screens::Screen;

/// Correctness tag carried by each option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
	Correct,
	Wrong,
}

impl Answer {
	/// Only the exact tag `correct` counts; anything else is wrong.
	pub fn from_tag(tag: &str) -> Answer {
		if tag == "correct" {
			Answer::Correct
		} else {
			Answer::Wrong
		}
	}

	pub fn tag(self) -> &'static str {
		match self {
			Answer::Correct => "correct",
			Answer::Wrong => "wrong",
		}
	}
}

/// One selectable option.
#[derive(Clone, Copy, Debug)]
pub struct Choice {
	pub label: &'static str,
	pub answer: Answer,
}

/// A question screen.
#[derive(Clone, Copy, Debug)]
pub struct Question {
	pub screen: Screen,
	pub prompt: &'static str,
	pub choices: &'static [Choice],
}

const fn right(label: &'static str) -> Choice {
	Choice {
		label,
		answer: Answer::Correct,
	}
}

const fn wrong(label: &'static str) -> Choice {
	Choice {
		label,
		answer: Answer::Wrong,
	}
}

pub const INTRO_TITLE: &str = "A tiny quiz about us";
pub const INTRO_BODY: &str = "Six questions. Pick the right answer to move on. No pressure… okay, a little pressure.";
pub const START_LABEL: &str = "Start";

pub const FINAL_TITLE: &str = "You passed!";
pub const FINAL_BODY: &str = "Every answer right. Will you be my valentine?";
pub const CONFETTI_LABEL: &str = "Yes! 🎉";
pub const RESTART_LABEL: &str = "Play again";

pub const WRONG_TITLE: &str = "Hmm, not quite";
pub const WRONG_BODY: &str = "That one's wrong. Try again?";
pub const TRY_AGAIN_LABEL: &str = "Try again";

pub const QUESTIONS: [Question; 6] = [
	Question {
		screen: Screen::Q1,
		prompt: "Where did we first meet?",
		choices: &[
			wrong("At the airport"),
			right("At a friend's birthday"),
			wrong("In a bookshop"),
		],
	},
	Question {
		screen: Screen::Q2,
		prompt: "What did we eat on our first date?",
		choices: &[right("Ramen"), wrong("Pizza"), wrong("Tacos")],
	},
	Question {
		screen: Screen::Q3,
		prompt: "Which song is ours?",
		choices: &[
			wrong("Never Gonna Give You Up"),
			wrong("Happy Birthday"),
			right("The one we sang in the car"),
		],
	},
	Question {
		screen: Screen::Q4,
		prompt: "What's my favourite way to spend Sunday?",
		choices: &[
			right("Pancakes and a long walk"),
			wrong("Doing taxes"),
			wrong("Cleaning the garage"),
		],
	},
	Question {
		screen: Screen::Q5,
		prompt: "Who says \"I love you\" first every morning?",
		choices: &[wrong("Nobody"), right("We race for it"), wrong("The cat")],
	},
	Question {
		screen: Screen::Q6,
		prompt: "How much do I love you?",
		choices: &[
			wrong("A little"),
			wrong("Sometimes"),
			right("More than all the hearts on this screen"),
		],
	},
];

/// The question shown on `screen`, if it is a question screen.
pub fn question(screen: Screen) -> Option<&'static Question> {
	QUESTIONS.iter().find(|q| q.screen == screen)
}
