//! love-quiz: a single-page love quiz with floating hearts and confetti.
//!
//! This crate provides a WASM-based quiz widget that walks through a fixed
//! sequence of screens, checks multiple-choice answers, and animates a
//! particle overlay on a canvas above the page.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;

pub use components::overlay::{OverlayCanvas, OverlayError};
pub use components::quiz::{QuizCard, QuizState, Screen};
pub use config::QuizConfig;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("love-quiz: logging initialized");
}

/// Load tuning overrides from a script element with id="quiz-config".
/// Missing element means defaults; malformed JSON is logged and ignored.
fn load_config() -> QuizConfig {
	let Some(json_text) = read_config_text() else {
		return QuizConfig::default();
	};

	match QuizConfig::from_json(&json_text) {
		Ok(config) => {
			info!("love-quiz: loaded tuning overrides");
			config
		}
		Err(e) => {
			warn!("love-quiz: failed to parse quiz config: {}", e);
			QuizConfig::default()
		}
	}
}

fn read_config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(config::CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Renders the quiz card with the particle overlay above it.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();
	let state = RwSignal::new(QuizState::new(config.timing));
	let celebrations = RwSignal::new(0u32);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="A tiny quiz about us" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="quiz-app">
			<QuizCard state=state celebrations=celebrations />
		</div>
		<OverlayCanvas
			celebrations=celebrations
			hearts=config.hearts
			confetti=config.confetti
		/>
	}
}
