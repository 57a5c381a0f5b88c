//! Leptos component wrapping the overlay canvas.
//!
//! The component creates a fixed, click-through canvas over the page, keeps it
//! sized to the window at device resolution, and runs the overlay's frame
//! dispatcher from [`clock::every_frame`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::error::OverlayError;
use super::random::BrowserRandom;
use super::scene::Overlay;
use super::theme::{ConfettiStyle, HeartStyle, OverlayTheme};
use super::viewport::Viewport;
use crate::components::clock;

/// Size the backing store for `viewport` and reset the transform so drawing
/// happens in CSS pixels. Resizing a canvas clears its context state, so the
/// transform is always reapplied from scratch.
fn fit_canvas(
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	viewport: &Viewport,
) -> Result<(), OverlayError> {
	let (bw, bh) = viewport.backing_size();
	canvas.set_width(bw);
	canvas.set_height(bh);

	let style = web_sys::HtmlElement::style(canvas);
	style.set_property("width", &format!("{}px", viewport.width))?;
	style.set_property("height", &format!("{}px", viewport.height))?;

	let [a, b, c, d, e, f] = viewport.transform();
	ctx.set_transform(a, b, c, d, e, f)?;
	Ok(())
}

fn attach(
	window: &Window,
	canvas: &HtmlCanvasElement,
) -> Result<(CanvasRenderingContext2d, Viewport), OverlayError> {
	let viewport = Viewport::from_window(window).ok_or(OverlayError::NoWindow)?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(OverlayError::NoContext)?
		.dyn_into()
		.map_err(|_| OverlayError::NoContext)?;
	fit_canvas(canvas, &ctx, &viewport)?;
	Ok((ctx, viewport))
}

/// Fullscreen particle overlay: floating hearts forever, confetti on demand.
///
/// Every increment of `celebrations` fires the configured confetti bursts.
#[component]
pub fn OverlayCanvas(
	#[prop(into)] celebrations: Signal<u32>,
	#[prop(default = HeartStyle::default())] hearts: HeartStyle,
	#[prop(default = ConfettiStyle::default())] confetti: ConfettiStyle,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let overlay: Rc<RefCell<Option<Overlay<BrowserRandom>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (overlay_init, resize_cb_init) = (overlay.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			log::warn!("love-quiz: {}", OverlayError::NoWindow);
			return;
		};

		// The quiz keeps its own frame loop, so a broken canvas is not fatal.
		let (ctx, viewport) = match attach(&window, &canvas) {
			Ok(attached) => attached,
			Err(e) => {
				log::warn!("love-quiz: overlay disabled: {e}");
				return;
			}
		};

		*overlay_init.borrow_mut() = Some(Overlay::new(
			hearts.clone(),
			confetti.clone(),
			OverlayTheme::default(),
			viewport,
			BrowserRandom,
			Some(ctx.clone()),
		));
		log::info!(
			"love-quiz: overlay attached at {}x{} (dpr {})",
			viewport.width,
			viewport.height,
			viewport.dpr
		);

		let (overlay_resize, canvas_resize) = (overlay_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(viewport) = web_sys::window().as_ref().and_then(Viewport::from_window)
			else {
				return;
			};
			if let Err(e) = fit_canvas(&canvas_resize, &ctx, &viewport) {
				log::warn!("love-quiz: resize failed: {e}");
			}
			if let Some(ref mut o) = *overlay_resize.borrow_mut() {
				o.resize(viewport);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let overlay_anim = overlay_init.clone();
		clock::every_frame(move |_| {
			if let Some(ref mut o) = *overlay_anim.borrow_mut() {
				o.tick();
			}
		});
	});

	let seen = Rc::new(Cell::new(celebrations.get_untracked()));
	let overlay_burst = overlay.clone();
	Effect::new(move |_| {
		let requested = celebrations.get();
		if let Some(ref mut o) = *overlay_burst.borrow_mut() {
			while seen.get() < requested {
				o.celebrate();
				seen.set(seen.get() + 1);
			}
		} else {
			seen.set(requested);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="overlay-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; pointer-events: none; z-index: 50;"
		/>
	}
}
