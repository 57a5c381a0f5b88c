//! Browser tests using wasm_bindgen_test
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use love_quiz::components::overlay::Viewport;
use love_quiz::components::overlay::random::{BrowserRandom, RandomSource};
use love_quiz::components::quiz::{Answer, OptionId, QuizState, Screen};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_random_stays_in_range() {
	let mut rng = BrowserRandom;
	for _ in 0..1_000 {
		let v = rng.range(60.0, 220.0);
		assert!((60.0..220.0).contains(&v));
	}
}

#[wasm_bindgen_test]
fn viewport_matches_the_window() {
	let window = web_sys::window().expect("window");
	let viewport = Viewport::from_window(&window).expect("viewport");
	assert!(viewport.width > 0.0);
	assert!(viewport.dpr > 0.0);

	let canvas: HtmlCanvasElement = window
		.document()
		.expect("document")
		.create_element("canvas")
		.expect("canvas")
		.dyn_into()
		.expect("canvas element");
	let (w, h) = viewport.backing_size();
	canvas.set_width(w);
	canvas.set_height(h);
	assert_eq!(canvas.width(), w);
	assert_eq!(canvas.height(), h);
}

#[wasm_bindgen_test]
fn frame_loop_schedules_in_the_browser() {
	assert!(love_quiz::components::clock::every_frame(|_| {}));
}

#[wasm_bindgen_test]
fn quiz_timers_follow_the_page_clock() {
	let now = love_quiz::components::clock::now_ms();
	let mut quiz = QuizState::default();
	quiz.start();
	quiz.select(OptionId { screen: Screen::Q1, index: 1 }, Answer::Correct, now);
	assert_eq!(quiz.poll(now), 0);
	assert_eq!(quiz.poll(now + 420.0), 1);
	assert_eq!(quiz.current(), Screen::Q2);
}
