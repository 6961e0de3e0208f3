// Indicator Positioner
// Computes the nub's horizontal offset from measured geometry: the active
// tab's center expressed in the overlay panel's local coordinate space.

use super::rect_handle::{RectHandle, RectRegistry};

/// Derives the indicator ("nub") offset from registered rectangles.
///
/// The measurement is a pure read of the registry and runs once per committed
/// selection change, after the following render pass has refreshed the rects.
/// If either element has not been laid out yet the previous offset is kept
/// unchanged; this is deliberate fail-soft behavior, not an error.
#[derive(Debug, Clone, Default)]
pub struct IndicatorPositioner {
    /// Column offset of the nub center, relative to the panel's left edge
    left: Option<u16>,
    /// Set when a selection change awaits its post-render measurement
    pending: bool,
}

impl IndicatorPositioner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last published offset, if any selection has ever been measured
    pub fn left(&self) -> Option<u16> {
        self.left
    }

    /// Flag that the next render pass should be followed by a measurement
    pub fn mark_pending(&mut self) {
        self.pending = true;
    }

    /// Whether a measurement is outstanding
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending flag and measure the active tab against the panel.
    /// Returns true when a new offset was published.
    pub fn measure(
        &mut self,
        registry: &RectRegistry,
        tab: RectHandle,
        panel: RectHandle,
    ) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;

        // Elements register with an empty rect before their first render, so
        // a zero-width rect means "not laid out yet" just like a missing one.
        let measured = |m: crate::core::RectMetrics| (m.width > 0).then_some(m);
        let (tab_metrics, panel_metrics) = match (
            registry.get_metrics(tab).and_then(measured),
            registry.get_metrics(panel).and_then(measured),
        ) {
            (Some(t), Some(p)) => (t, p),
            // Keep the previous offset untouched
            _ => return false,
        };

        self.left = Some(tab_metrics.center_x().saturating_sub(panel_metrics.x));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn test_offset_is_tab_center_in_panel_space() {
        let mut registry = RectRegistry::new();
        let tab = registry.register(None, Rect { x: 30, y: 1, width: 10, height: 1 });
        let panel = registry.register(None, Rect { x: 22, y: 3, width: 48, height: 8 });

        let mut positioner = IndicatorPositioner::new();
        positioner.mark_pending();
        assert!(positioner.measure(&registry, tab, panel));
        // tab center = 30 + 10/2 = 35; panel left = 22
        assert_eq!(positioner.left(), Some(13));
    }

    #[test]
    fn test_missing_element_keeps_previous_offset() {
        let mut registry = RectRegistry::new();
        let tab = registry.register(None, Rect { x: 30, y: 1, width: 10, height: 1 });
        let panel = registry.register(None, Rect { x: 22, y: 3, width: 48, height: 8 });

        let mut positioner = IndicatorPositioner::new();
        positioner.mark_pending();
        positioner.measure(&registry, tab, panel);
        assert_eq!(positioner.left(), Some(13));

        registry.unregister(tab);
        positioner.mark_pending();
        assert!(!positioner.measure(&registry, tab, panel));
        assert_eq!(positioner.left(), Some(13));
    }

    #[test]
    fn test_measurement_runs_at_most_once_per_change() {
        let mut registry = RectRegistry::new();
        let tab = registry.register(None, Rect { x: 4, y: 1, width: 6, height: 1 });
        let panel = registry.register(None, Rect { x: 0, y: 3, width: 20, height: 5 });

        let mut positioner = IndicatorPositioner::new();
        positioner.mark_pending();
        assert!(positioner.measure(&registry, tab, panel));
        // No new pending flag: a repeated render measures nothing
        assert!(!positioner.measure(&registry, tab, panel));
    }

    #[test]
    fn test_tab_left_of_panel_saturates() {
        let mut registry = RectRegistry::new();
        let tab = registry.register(None, Rect { x: 0, y: 1, width: 2, height: 1 });
        let panel = registry.register(None, Rect { x: 40, y: 3, width: 48, height: 8 });

        let mut positioner = IndicatorPositioner::new();
        positioner.mark_pending();
        positioner.measure(&registry, tab, panel);
        assert_eq!(positioner.left(), Some(0));
    }
}
