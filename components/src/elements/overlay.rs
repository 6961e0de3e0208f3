// Overlay Panel
// The shared content panel of the shifting drop-down. Exactly one tab's
// content is rendered at a time; the entrance slides horizontally by the
// transition direction and the exit fades in place. The nub marker sits on
// the top border at the offset published by the indicator positioner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::core::{RectHandle, RectRegistry};
use crate::utilities::{hex_color, FadeContext};

/// Panel backdrop (near-black, matches the page gradient)
const PANEL_BG: u32 = 0x171717;
/// Border tone (neutral-600)
const PANEL_BORDER: u32 = 0x525252;

/// A renderable content unit for one tab. The panel treats it as opaque: it
/// only asks for a height and hands over a buffer region.
pub trait TabContent {
    /// Draw the content into `area` of `buf`
    fn render(&self, area: Rect, buf: &mut Buffer);

    /// Rows the content needs at the given width
    fn height_hint(&self, width: u16) -> u16;
}

/// The overlay panel element. Holds the rect handle it registered at mount,
/// which the indicator positioner measures against.
#[derive(Debug, Clone)]
pub struct OverlayPanel {
    handle: RectHandle,
}

impl OverlayPanel {
    pub fn new(registry: &mut RectRegistry) -> Self {
        Self {
            handle: registry.register(None, Rect::default()),
        }
    }

    pub fn handle(&self) -> RectHandle {
        self.handle
    }

    /// Render the panel: border, the active tab's content blitted at the
    /// slide offset, and the nub. Publishes the panel rect to the registry.
    ///
    /// `slide_cols` is the horizontal entrance offset in cells (positive
    /// enters from the right, negative from the left, zero fades in place);
    /// `fade` is the current opacity of the whole panel.
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        registry: &mut RectRegistry,
        content: &dyn TabContent,
        slide_cols: i32,
        fade: FadeContext,
        nub_left: Option<u16>,
    ) {
        registry.update(self.handle, area);
        if area.width < 3 || area.height < 3 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(fade.fade_style(Style::default().fg(hex_color(PANEL_BORDER))))
            .style(fade.fade_style(Style::default().bg(hex_color(PANEL_BG))));
        let interior = block.inner(area);
        block.render(area, buf);

        self.blit_content(interior, buf, content, slide_cols, fade);

        if let Some(left) = nub_left {
            self.render_nub(area, buf, left, fade);
        }
    }

    /// Draw the content into a scratch buffer and copy it into the interior
    /// shifted by `slide_cols`, clipping at the panel edges. Drawing to a
    /// scratch keeps the slide from bleeding outside the panel and guarantees
    /// nothing of a previous tab survives the swap.
    fn blit_content(
        &self,
        interior: Rect,
        buf: &mut Buffer,
        content: &dyn TabContent,
        slide_cols: i32,
        fade: FadeContext,
    ) {
        let scratch_area = Rect {
            x: 0,
            y: 0,
            width: interior.width,
            height: interior.height,
        };
        let mut scratch = Buffer::empty(scratch_area);
        scratch.set_style(scratch_area, Style::default().bg(hex_color(PANEL_BG)));
        content.render(scratch_area, &mut scratch);

        for row in 0..interior.height {
            for col in 0..interior.width {
                let target_col = col as i32 + slide_cols;
                if target_col < 0 || target_col >= interior.width as i32 {
                    continue;
                }
                let Some(src) = scratch.cell((col, row)) else {
                    continue;
                };
                let src = src.clone();
                let position = (interior.x + target_col as u16, interior.y + row);
                if let Some(dst) = buf.cell_mut(position) {
                    *dst = src;
                    dst.fg = fade.fade_color(dst.fg);
                    dst.bg = fade.fade_color(dst.bg);
                }
            }
        }
    }

    /// The directional marker on the top border, centered under the active tab
    fn render_nub(&self, area: Rect, buf: &mut Buffer, left: u16, fade: FadeContext) {
        let col = area.x + left.clamp(1, area.width - 2);
        if let Some(cell) = buf.cell_mut((col, area.y)) {
            cell.set_symbol("▲");
            cell.fg = fade.fade_color(hex_color(PANEL_BORDER));
        }
    }
}
