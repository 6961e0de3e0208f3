// SpellPixel Library
// A terminal showcase built around a shifting drop-down navigation

// Core infrastructure - app state, events, compiled settings
pub mod core;

// Configuration - runtime YAML loading and validation
pub mod config;
pub mod config_validation;

// Content - one provider per navigation tab
pub mod content;

// Effects - particle background and timed text reveals
pub mod effects;

// Rendering - scene composition
pub mod render;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use config::AppConfig;
pub use core::{App, AppEvent, AppSettings, EventHandler};
pub use render::render_scene;
