//! Monotonic millisecond clock and the animation-frame loop built on it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// `performance.now()`, or 0 outside a browser.
pub fn now_ms() -> f64 {
	web_sys::window()
		.and_then(|w| w.performance())
		.map(|p| p.now())
		.unwrap_or(0.0)
}

/// Call `on_frame` with [`now_ms`] on every animation frame for the life of
/// the page. Returns `false` when there is no window to schedule on.
pub fn every_frame(mut on_frame: impl FnMut(f64) + 'static) -> bool {
	let Some(window) = web_sys::window() else {
		return false;
	};

	let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame_inner = frame.clone();
	*frame.borrow_mut() = Some(Closure::new(move || {
		on_frame(now_ms());
		if let (Some(win), Some(cb)) = (web_sys::window(), frame_inner.borrow().as_ref()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let Some(ref cb) = *frame.borrow() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
	true
}
