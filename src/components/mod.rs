//! UI components: the quiz card and the particle overlay above it.

pub mod clock;
pub mod overlay;
pub mod quiz;
