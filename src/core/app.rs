// Application State
// Main application state management and lifecycle

use anyhow::{Context, Result};
use std::time::{Duration, Instant};

use ratatui::layout::Size;
use spellpixel_components::{RectRegistry, ShiftTabsManager, TabContent};

use super::{AppEvent, AppSettings};
use crate::config::AppConfig;
use crate::constants::PHASE_FADE_MS;
use crate::content::content_for;
use crate::effects::{BlurTextReveal, ParticleField, PressureText};

/// Main application state
pub struct App {
    /// Compiled-in settings (from build.rs)
    pub settings: AppSettings,

    /// Runtime configuration (from config.yaml)
    pub config: AppConfig,

    /// Element geometry published by each render pass
    pub registry: RectRegistry,

    /// The shifting drop-down navigation
    pub nav: ShiftTabsManager,

    /// Content provider per tab, indexed by tab position
    pub contents: Vec<Box<dyn TabContent>>,

    /// Background particle field
    pub particles: ParticleField,

    /// Early-phase tagline reveal
    pub tagline: BlurTextReveal,

    /// Late-phase headline
    pub headline: PressureText,

    /// Last known pointer position
    pub pointer: Option<(u16, u16)>,

    /// Startup instant driving the timed phases
    pub started: Instant,

    /// Whether the application should exit
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let settings = AppSettings::default();
        let mut registry = RectRegistry::new();

        let nav = ShiftTabsManager::from_config(&mut registry, &config.navigation)
            .context("Invalid navigation configuration")?;
        let contents = config
            .navigation
            .tabs
            .iter()
            .map(|tab| content_for(&tab.name))
            .collect();

        let effects = &settings.effects;
        let particles = ParticleField::new(
            effects.particle_count,
            effects.particle_drift,
            effects.pointer_repel,
            &effects.particle_palette,
        );
        let tagline = BlurTextReveal::new(
            &config.application.tagline,
            Duration::from_millis(effects.word_delay_ms),
            Duration::from_millis(effects.tagline_hide_ms),
            Duration::from_millis(PHASE_FADE_MS),
        );
        let headline = PressureText::new(
            &config.application.headline,
            Duration::from_millis(effects.title_show_ms),
            Duration::from_millis(PHASE_FADE_MS),
        );

        Ok(Self {
            settings,
            config,
            registry,
            nav,
            contents,
            particles,
            tagline,
            headline,
            pointer: None,
            started: Instant::now(),
            should_quit: false,
        })
    }

    /// Advance the time-driven effects by one tick
    pub fn tick(&mut self, size: Size) {
        self.particles.step(size.width, size.height, self.pointer);
    }

    /// Apply one application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.should_quit = true,
            AppEvent::PointerMoved(x, y) => {
                self.pointer = Some((x, y));
                self.nav.pointer_moved(x, y, &self.registry);
            }
            AppEvent::Click(x, y) => {
                self.pointer = Some((x, y));
                self.nav.click(x, y, &self.registry);
            }
            AppEvent::CloseOverlay => self.nav.close(),
            AppEvent::Resize | AppEvent::None => {}
        }
    }

    /// Post-draw bookkeeping for the navigation animations
    pub fn after_render(&mut self, now: Instant) {
        self.nav.after_render(&self.registry, now);
    }

    /// The content the overlay should show, while open or fading out
    pub fn visible_content(&self) -> Option<&dyn TabContent> {
        let id = self.nav.visible_tab()?;
        self.contents.get(id.index()).map(|c| c.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn app() -> App {
        App::new(AppConfig::default()).unwrap()
    }

    /// Publish the rects a draw would have produced
    fn lay_out(app: &mut App) {
        let mut x = 40;
        for tab in app.nav.tabs().descriptors() {
            app.registry.update(tab.handle, Rect { x, y: 1, width: 12, height: 1 });
            x += 13;
        }
        app.registry.update(
            app.nav.panel().handle(),
            Rect { x: 40, y: 3, width: 48, height: 8 },
        );
    }

    #[test]
    fn test_one_content_provider_per_tab() {
        let app = app();
        assert_eq!(app.contents.len(), app.nav.tabs().descriptors().len());
    }

    #[test]
    fn test_pointer_events_drive_the_navigation() {
        let mut app = app();
        lay_out(&mut app);

        app.handle_event(AppEvent::PointerMoved(45, 1));
        assert_eq!(app.pointer, Some((45, 1)));
        assert!(app.nav.is_visible());
        assert!(app.visible_content().is_some());

        app.handle_event(AppEvent::CloseOverlay);
        app.after_render(Instant::now() + Duration::from_secs(1));
        assert!(!app.nav.is_visible());
        assert!(app.visible_content().is_none());
    }

    #[test]
    fn test_quit_event_sets_flag() {
        let mut app = app();
        assert!(!app.should_quit);
        app.handle_event(AppEvent::Quit);
        assert!(app.should_quit);
    }
}
