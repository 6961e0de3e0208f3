// Utilities and helpers

pub mod easing;
pub mod helpers;

pub use easing::{ease_in_out, Timeline};
pub use helpers::{hex_color, wrap_text, FadeContext};
