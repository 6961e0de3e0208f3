// Shift Tabs
// The interactive tab bar of the shifting drop-down: one pill per tab, a
// chevron that flips while its tab is open, and per-tab rects registered for
// hit testing and indicator measurement.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::core::{RectHandle, RectRegistry, SelectionState, TabId};
use crate::utilities::{hex_color, FadeContext};

/// Chevron shown on every pill; flips while the tab is open
const CHEVRON_DOWN: &str = "∨";
const CHEVRON_UP: &str = "∧";

/// Gap between pills, in cells
const PILL_GAP: u16 = 1;

/// One selectable entry: stable id, display title, and the rect handle the
/// widget hands back at construction so geometry consumers never do string
/// lookups
#[derive(Debug, Clone)]
pub struct TabDescriptor {
    pub id: TabId,
    pub title: String,
    pub handle: RectHandle,
}

impl TabDescriptor {
    /// Rendered pill width: one space of padding either side, title, chevron
    fn pill_width(&self) -> u16 {
        self.title.chars().count() as u16 + 4
    }
}

/// The tab bar widget. Construction assigns contiguous ids (index + 1) in
/// title order and registers one rect handle per tab.
#[derive(Debug, Clone)]
pub struct ShiftTabs {
    tabs: Vec<TabDescriptor>,
}

impl ShiftTabs {
    pub fn new(registry: &mut RectRegistry, titles: &[String]) -> Self {
        let tabs = titles
            .iter()
            .enumerate()
            .map(|(index, title)| TabDescriptor {
                id: TabId::from_index(index),
                title: title.clone(),
                handle: registry.register(None, Rect::default()),
            })
            .collect();
        Self { tabs }
    }

    pub fn descriptors(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    /// Ids in registry order
    pub fn ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id).collect()
    }

    /// Rect handle for a tab id
    pub fn handle_of(&self, id: TabId) -> Option<RectHandle> {
        self.tabs.iter().find(|t| t.id == id).map(|t| t.handle)
    }

    /// Total bar width including gaps
    pub fn total_width(&self) -> u16 {
        let pills: u16 = self.tabs.iter().map(|t| t.pill_width()).sum();
        let gaps = PILL_GAP * self.tabs.len().saturating_sub(1) as u16;
        pills + gaps
    }

    /// Pill rects laid out left to right within `area`
    fn layout(&self, area: Rect) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(self.tabs.len());
        let mut x = area.x;
        for tab in &self.tabs {
            let width = tab.pill_width().min(area.width.saturating_sub(x - area.x));
            rects.push(Rect { x, y: area.y, width, height: 1 });
            x += tab.pill_width() + PILL_GAP;
        }
        rects
    }

    /// Map a cell coordinate to the tab under it, using the rects published
    /// during the last render
    pub fn hit_test(&self, x: u16, y: u16, registry: &RectRegistry) -> Option<TabId> {
        self.tabs
            .iter()
            .find(|t| {
                registry
                    .get_metrics(t.handle)
                    .is_some_and(|m| m.width > 0 && m.contains(x, y))
            })
            .map(|t| t.id)
    }

    /// Render the bar and publish each pill's rect to the registry
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        registry: &mut RectRegistry,
        selection: SelectionState,
        fade: FadeContext,
    ) {
        for (tab, pill) in self.tabs.iter().zip(self.layout(area)) {
            registry.update(tab.handle, pill);
            if pill.width == 0 || pill.y >= buf.area.bottom() {
                continue;
            }

            let selected = selection.selected == Some(tab.id);
            let style = if selected {
                Style::default()
                    .fg(hex_color(0xf5f5f5))
                    .bg(hex_color(0x262626))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(hex_color(0xa3a3a3))
            };
            let style = fade.fade_style(style);

            let chevron = if selected { CHEVRON_UP } else { CHEVRON_DOWN };
            let text = format!(" {} {} ", tab.title, chevron);
            buf.set_stringn(pill.x, pill.y, &text, pill.width as usize, style);
        }
    }
}
