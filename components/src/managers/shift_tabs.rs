// Shift Tabs Manager
// Owns the selection machine, the indicator positioner, and the animation
// clocks for the shifting drop-down, and maps pointer events onto them.
// Rendering stays in the elements; the manager only derives the values the
// render pass samples.

use std::time::{Duration, Instant};

use serde::Deserialize;
use thiserror::Error;

use crate::core::{
    IndicatorPositioner, RectMetrics, RectRegistry, SelectionMachine, SelectionState,
    SlideDirection, TabId,
};
use crate::elements::{OverlayPanel, ShiftTabs};
use crate::utilities::Timeline;

/// Entrance/indicator animation length
pub const SLIDE_DURATION: Duration = Duration::from_millis(250);
/// Exit fade length
pub const FADE_DURATION: Duration = Duration::from_millis(250);
/// Overlay panel width when the config does not specify one
pub const DEFAULT_PANEL_WIDTH: u16 = 48;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Navigation configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct NavConfigYaml {
    /// Overlay panel width in cells (optional)
    pub panel_width: Option<u16>,
    /// List of tabs, in display order
    pub tabs: Vec<NavTabYaml>,
}

/// Tab configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct NavTabYaml {
    /// Tab ID; must equal its 1-based position in the list
    pub id: u8,
    /// Tab display name
    pub name: String,
}

/// Navigation configuration errors
#[derive(Debug, Error)]
pub enum NavConfigError {
    #[error("navigation needs at least one tab")]
    Empty,
    #[error("tab ids must be contiguous from 1: position {index} has id {found}")]
    NonContiguous { index: usize, found: u8 },
}

/// Check the id invariant: contiguous, strictly increasing, starting at 1.
/// Direction computation relies on this ordering.
pub fn validate_nav_config(config: &NavConfigYaml) -> Result<(), NavConfigError> {
    if config.tabs.is_empty() {
        return Err(NavConfigError::Empty);
    }
    for (index, tab) in config.tabs.iter().enumerate() {
        if tab.id as usize != index + 1 {
            return Err(NavConfigError::NonContiguous { index, found: tab.id });
        }
    }
    Ok(())
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                         Shift Tabs Manager - drop-down orchestration                           │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Entrance animation of the currently open tab
#[derive(Debug, Clone, Copy)]
struct Entrance {
    direction: Option<SlideDirection>,
    timeline: Timeline,
}

/// Exit fade of the last open tab after the overlay closed
#[derive(Debug, Clone, Copy)]
struct Closing {
    id: TabId,
    timeline: Timeline,
}

pub struct ShiftTabsManager {
    tabs: ShiftTabs,
    panel: OverlayPanel,
    machine: SelectionMachine,
    positioner: IndicatorPositioner,
    panel_width: u16,
    entrance: Option<Entrance>,
    closing: Option<Closing>,
    /// Previous nub offset while it glides to the freshly measured one
    nub_from: Option<(u16, Timeline)>,
}

impl ShiftTabsManager {
    /// Build directly from titles
    pub fn new(registry: &mut RectRegistry, titles: &[String], panel_width: u16) -> Self {
        let tabs = ShiftTabs::new(registry, titles);
        let panel = OverlayPanel::new(registry);
        let machine = SelectionMachine::new(tabs.ids());
        Self {
            tabs,
            panel,
            machine,
            positioner: IndicatorPositioner::new(),
            panel_width,
            entrance: None,
            closing: None,
            nub_from: None,
        }
    }

    /// Build from a validated YAML configuration
    pub fn from_config(
        registry: &mut RectRegistry,
        config: &NavConfigYaml,
    ) -> Result<Self, NavConfigError> {
        validate_nav_config(config)?;
        let titles: Vec<String> = config.tabs.iter().map(|t| t.name.clone()).collect();
        Ok(Self::new(
            registry,
            &titles,
            config.panel_width.unwrap_or(DEFAULT_PANEL_WIDTH),
        ))
    }

    // ── Event input ──────────────────────────────────────────────────────

    /// Pointer moved to a cell. Over a tab opens/switches; anywhere else
    /// inside the bar+panel region keeps the overlay; outside closes it.
    pub fn pointer_moved(&mut self, x: u16, y: u16, registry: &RectRegistry) {
        if let Some(id) = self.tabs.hit_test(x, y, registry) {
            self.apply_selection(Some(id));
        } else if self.machine.is_open() && !self.region_contains(x, y, registry) {
            self.apply_selection(None);
        }
    }

    /// Click behaves exactly like hover: there is no separate commit step
    pub fn click(&mut self, x: u16, y: u16, registry: &RectRegistry) {
        if let Some(id) = self.tabs.hit_test(x, y, registry) {
            self.apply_selection(Some(id));
        }
    }

    /// Close the overlay (keyboard escape hatch)
    pub fn close(&mut self) {
        self.apply_selection(None);
    }

    fn apply_selection(&mut self, target: Option<TabId>) {
        let previous = self.machine.selected();
        if !self.machine.select(target) {
            return;
        }

        match self.machine.selected() {
            Some(_) => {
                self.closing = None;
                self.entrance = Some(Entrance {
                    direction: self.machine.direction(),
                    timeline: Timeline::new(SLIDE_DURATION),
                });
                self.positioner.mark_pending();
            }
            None => {
                self.entrance = None;
                self.closing = previous.map(|id| Closing {
                    id,
                    timeline: Timeline::new(FADE_DURATION),
                });
            }
        }
    }

    /// The hover region that keeps the overlay open: the bounding box of the
    /// tab pills and the panel, which also covers the bridge rows between
    fn region_contains(&self, x: u16, y: u16, registry: &RectRegistry) -> bool {
        let mut region: Option<RectMetrics> = None;
        let mut extend = |metrics: Option<RectMetrics>| {
            if let Some(m) = metrics.filter(|m| m.width > 0) {
                region = Some(region.map_or(m, |r| r.union(&m)));
            }
        };
        for tab in self.tabs.descriptors() {
            extend(registry.get_metrics(tab.handle));
        }
        extend(registry.get_metrics(self.panel.handle()));

        region.is_some_and(|r| r.contains(x, y))
    }

    // ── Post-render bookkeeping ──────────────────────────────────────────

    /// Run after a draw: expire finished animations and take the pending
    /// indicator measurement against the freshly published rects. Called
    /// once per frame so a burst of selection changes only ever measures the
    /// final selection.
    pub fn after_render(&mut self, registry: &RectRegistry, now: Instant) {
        if self.closing.is_some_and(|c| c.timeline.is_complete_at(now)) {
            self.closing = None;
        }
        if self.entrance.is_some_and(|e| e.timeline.is_complete_at(now)) {
            self.entrance = None;
        }
        if self.nub_from.is_some_and(|(_, t)| t.is_complete_at(now)) {
            self.nub_from = None;
        }

        if !self.positioner.is_pending() {
            return;
        }
        let Some(id) = self.machine.selected() else {
            return;
        };
        let Some(tab_handle) = self.tabs.handle_of(id) else {
            return;
        };

        let previous = self.positioner.left();
        if self.positioner.measure(registry, tab_handle, self.panel.handle()) {
            let target = self.positioner.left();
            if let (Some(from), Some(to)) = (previous, target) {
                if from != to {
                    self.nub_from = Some((from, Timeline::starting_at(now, SLIDE_DURATION)));
                }
            }
        }
    }

    // ── Values sampled by the render pass ────────────────────────────────

    /// Whether the panel should be drawn (open, or still fading out)
    pub fn is_visible(&self) -> bool {
        self.machine.is_open() || self.closing.is_some()
    }

    /// The tab whose content the panel shows right now
    pub fn visible_tab(&self) -> Option<TabId> {
        self.machine.selected().or(self.closing.map(|c| c.id))
    }

    /// Horizontal entrance offset in cells for the panel interior.
    /// Sign follows the direction mapping: a switch toward a smaller id
    /// enters from the left (negative), toward a larger id from the right
    /// (positive); opening from closed does not slide at all.
    pub fn slide_cols(&self, interior_width: u16, now: Instant) -> i32 {
        if self.closing.is_some() {
            return 0;
        }
        let Some(entrance) = self.entrance else {
            return 0;
        };
        let Some(direction) = entrance.direction else {
            return 0;
        };
        let remaining = (1.0 - entrance.timeline.eased_at(now)) * interior_width as f32;
        let cols = remaining.round() as i32;
        match direction {
            SlideDirection::Left => cols,
            SlideDirection::Right => -cols,
        }
    }

    /// Current panel opacity: entrance fades in, exit fades out
    pub fn fade_level(&self, now: Instant) -> f32 {
        if let Some(closing) = self.closing {
            return 1.0 - closing.timeline.eased_at(now);
        }
        match self.entrance {
            Some(entrance) => entrance.timeline.eased_at(now),
            None => 1.0,
        }
    }

    /// Nub offset relative to the panel's left edge, gliding between
    /// measured positions
    pub fn nub_left(&self, now: Instant) -> Option<u16> {
        let target = self.positioner.left()?;
        match self.nub_from {
            Some((from, timeline)) => {
                let t = timeline.eased_at(now);
                let value = from as f32 + (target as f32 - from as f32) * t;
                Some(value.round() as u16)
            }
            None => Some(target),
        }
    }

    pub fn selection(&self) -> SelectionState {
        self.machine.state()
    }

    pub fn tabs(&self) -> &ShiftTabs {
        &self.tabs
    }

    pub fn panel(&self) -> &OverlayPanel {
        &self.panel
    }

    pub fn panel_width(&self) -> u16 {
        self.panel_width
    }
}
