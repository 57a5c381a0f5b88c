//! Leptos view for the quiz: progress bar, screen card, and error modal.
//!
//! Everything visible is derived from the shared [`QuizState`] signal; event
//! handlers only call state methods. Deferred feedback is driven by
//! [`pump_timers`] from the card's own animation-frame loop.

use leptos::html::Audio;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollToOptions};

use super::content::{self, Answer, Question};
use super::screens::Screen;
use super::state::{OptionId, QuizState, Selection};
use crate::components::clock;

type Swallow = StoredValue<Closure<dyn FnMut(JsValue)>, LocalStorage>;

/// Fire any quiz timers due at `now_ms`. Only touches the signal when
/// something is actually due, so idle frames do not re-render the view.
fn pump_timers(state: RwSignal<QuizState>, now_ms: f64) {
	if state.with_untracked(|q| q.has_due(now_ms)) {
		state.update(|q| {
			q.poll(now_ms);
		});
	}
}

/// Rewind and play the feedback cue. Playback is best effort: autoplay
/// blocks and missing media are swallowed.
fn play_cue(audio: NodeRef<Audio>, swallow: Swallow) {
	let Some(audio) = audio.get_untracked() else {
		return;
	};
	audio.set_current_time(0.0);
	match audio.play() {
		Ok(promise) => swallow.with_value(|cb| {
			let _ = promise.catch(cb);
		}),
		Err(e) => log::debug!("love-quiz: feedback sound failed: {e:?}"),
	}
}

/// Answer tag of the clicked option, read back from its `data-answer`.
fn answer_of(ev: &MouseEvent) -> Answer {
	let tag = ev
		.current_target()
		.and_then(|t| t.dyn_into::<Element>().ok())
		.and_then(|el| el.get_attribute("data-answer"))
		.unwrap_or_default();
	Answer::from_tag(&tag)
}

fn scroll_to_top() {
	let Some(window) = web_sys::window() else {
		return;
	};
	let opts = ScrollToOptions::new();
	opts.set_top(0.0);
	opts.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&opts);
}

fn question_body(
	question: &'static Question,
	state: RwSignal<QuizState>,
	audio: NodeRef<Audio>,
	swallow: Swallow,
) -> impl IntoView {
	let choices = question
		.choices
		.iter()
		.enumerate()
		.map(|(index, choice)| {
			let id = OptionId {
				screen: question.screen,
				index,
			};
			let on_click = move |ev: MouseEvent| {
				play_cue(audio, swallow);
				let answer = answer_of(&ev);
				let outcome = state.try_update(|q| q.select(id, answer, clock::now_ms()));
				if outcome == Some(Selection::Ignored) {
					log::debug!("love-quiz: ignored click on {id:?}");
				}
			};
			view! {
				<button
					type="button"
					class=move || state.with(|q| q.mark(id).class())
					data-answer=choice.answer.tag()
					on:click=on_click
				>
					{choice.label}
				</button>
			}
		})
		.collect_view();

	view! {
		<h2 class="prompt">{question.prompt}</h2>
		<div class="options">{choices}</div>
	}
}

fn screen_body(
	screen: Screen,
	state: RwSignal<QuizState>,
	celebrations: RwSignal<u32>,
	audio: NodeRef<Audio>,
	swallow: Swallow,
) -> AnyView {
	match screen {
		Screen::Intro => view! {
			<h1>{content::INTRO_TITLE}</h1>
			<p>{content::INTRO_BODY}</p>
			<button type="button" class="btn" on:click=move |_| state.update(|q| q.start())>
				{content::START_LABEL}
			</button>
		}
		.into_any(),
		Screen::Final => view! {
			<h1>{content::FINAL_TITLE}</h1>
			<p>{content::FINAL_BODY}</p>
			<button
				type="button"
				class="btn"
				on:click=move |_| celebrations.update(|n| *n += 1)
			>
				{content::CONFETTI_LABEL}
			</button>
			<button type="button" class="btn ghost" on:click=move |_| state.update(|q| q.restart())>
				{content::RESTART_LABEL}
			</button>
		}
		.into_any(),
		_ => match content::question(screen) {
			Some(question) => question_body(question, state, audio, swallow).into_any(),
			None => ().into_any(),
		},
	}
}

/// The quiz card with its progress bar and the wrong-answer modal.
///
/// `celebrations` is bumped when the user hits the confetti button on the
/// final screen. `sound` is the URL of the short feedback cue.
#[component]
pub fn QuizCard(
	state: RwSignal<QuizState>,
	celebrations: RwSignal<u32>,
	#[prop(default = "pop.mp3")] sound: &'static str,
) -> impl IntoView {
	let audio_ref = NodeRef::<Audio>::new();
	let swallow: Swallow = StoredValue::new_local(Closure::new(|e: JsValue| {
		log::debug!("love-quiz: feedback sound rejected: {e:?}");
	}));

	let scroll_requests = Memo::new(move |_| state.with(|q| q.scroll_requests()));
	Effect::new(move |_| {
		scroll_requests.track();
		scroll_to_top();
	});

	Effect::new(move |_| {
		if !clock::every_frame(move |now_ms| pump_timers(state, now_ms)) {
			log::warn!("love-quiz: no window, quiz feedback timers are stopped");
		}
	});

	let screens = Screen::ALL
		.into_iter()
		.map(|screen| {
			view! {
				<section
					class=move || state.with(|q| q.screen_class(screen))
					data-screen=screen.name()
					hidden=move || !state.with(|q| q.is_active(screen))
				>
					{screen_body(screen, state, celebrations, audio_ref, swallow)}
				</section>
			}
		})
		.collect_view();

	let modal_hidden = move || if state.with(|q| q.modal_open()) { "false" } else { "true" };
	let on_scrim = move |ev: MouseEvent| {
		let on_scrim = ev.target().is_some() && ev.target() == ev.current_target();
		state.update(|q| q.scrim_click(on_scrim));
	};

	view! {
		<div class="progress">
			<div
				class="progress-fill"
				style:width=move || state.with(|q| q.progress().width_css())
			></div>
		</div>
		<span class="progress-text">{move || state.with(|q| q.progress().label())}</span>

		<main id="card" class=move || state.with(|q| q.card_class())>
			{screens}
		</main>

		<div
			id="wrongModal"
			class=move || state.with(|q| q.modal_class())
			aria-hidden=modal_hidden
			on:click=on_scrim
		>
			<div class="modal-box" role="dialog">
				<h2>{content::WRONG_TITLE}</h2>
				<p>{content::WRONG_BODY}</p>
				<button type="button" class="btn" on:click=move |_| state.update(|q| q.close_modal())>
					{content::TRY_AGAIN_LABEL}
				</button>
			</div>
		</div>

		<audio node_ref=audio_ref src=sound preload="auto"></audio>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::quiz::state::Mark;
	use pretty_assertions::assert_eq;

	#[test]
	fn pumping_the_signal_advances_without_any_overlay() {
		let owner = Owner::new();
		owner.with(|| {
			let state = RwSignal::new(QuizState::default());
			state.update(|q| q.start());
			let option = OptionId {
				screen: Screen::Q1,
				index: 1,
			};
			state.update(|q| {
				q.select(option, Answer::Correct, 0.0);
			});

			pump_timers(state, 100.0);
			assert_eq!(state.with_untracked(|q| q.current()), Screen::Q1);
			assert_eq!(state.with_untracked(|q| q.mark(option)), Mark::Correct);

			pump_timers(state, 420.0);
			assert_eq!(state.with_untracked(|q| q.current()), Screen::Q2);
		});
	}
}
