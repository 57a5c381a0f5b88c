//! Decorative particle overlay.
//!
//! Draws on a fullscreen canvas layered above the quiz:
//! - A fixed pool of hearts drifting upward, recycled at the top edge
//! - Confetti bursts with gravity and fade-out, idle when none are live
//! - A single frame dispatcher giving hearts-then-confetti draw order
//!
//! # Example
//!
//! ```ignore
//! let (celebrations, set_celebrations) = signal(0u32);
//!
//! view! { <OverlayCanvas celebrations=celebrations /> }
//! // later: set_celebrations.update(|n| *n += 1);
//! ```

mod component;
mod confetti;
pub mod error;
mod frame;
mod hearts;
pub mod random;
mod render;
mod scene;
pub mod theme;
mod viewport;

pub use component::OverlayCanvas;
pub use error::OverlayError;
pub use theme::{ConfettiStyle, HeartStyle, OverlayTheme};
pub use viewport::Viewport;
