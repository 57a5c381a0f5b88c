//! The quiz: eight fixed screens, answer checking, and feedback pacing.

mod component;
pub mod content;
pub mod screens;
pub mod state;
mod timers;

pub use component::QuizCard;
pub use content::Answer;
pub use screens::{Progress, Screen};
pub use state::{Mark, OptionId, QuizState, QuizTiming, Selection};
