//! Failures while attaching the overlay to the page.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Error type for overlay surface setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
	/// No global `window` (not running in a browser)
	#[error("no window available")]
	NoWindow,
	/// The canvas did not hand out a 2D context
	#[error("canvas has no 2d context")]
	NoContext,
	/// A JavaScript call threw
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for OverlayError {
	fn from(value: JsValue) -> Self {
		OverlayError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
