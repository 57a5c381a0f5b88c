//! Optional tuning read from the host page.
//!
//! Quiz content is fixed; only pacing and particle parameters can be adjusted
//! through a `<script id="quiz-config" type="application/json">` element.
//! Every field is optional and falls back to the built-in default.

use serde::Deserialize;

use crate::components::overlay::{ConfettiStyle, HeartStyle};
use crate::components::quiz::QuizTiming;

/// Id of the script element holding the JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "quiz-config";

/// Complete app tuning.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuizConfig {
	pub timing: QuizTiming,
	pub hearts: HeartStyle,
	pub confetti: ConfettiStyle,
}

impl QuizConfig {
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}
