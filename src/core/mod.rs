// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod app;
pub mod app_config;
pub mod events;

pub use app::App;
pub use app_config::AppSettings;
pub use events::{AppEvent, EventHandler};
