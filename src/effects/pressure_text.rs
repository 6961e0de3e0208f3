// Pressure Text
// The late-phase headline. Character weight follows pointer proximity, a
// cell-grid stand-in for a variable-font "pressure" effect.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use spellpixel_components::FadeContext;

const DIM: Color = Color::Rgb(0x52, 0x52, 0x52);
const MID: Color = Color::Rgb(0xa3, 0xa3, 0xa3);
const HEAVY: Color = Color::Rgb(0xf5, 0xf5, 0xf5);

/// Pointer influence radius in cells
const RADIUS: f32 = 12.0;

#[derive(Debug, Clone)]
pub struct PressureText {
    text: String,
    show_after: Duration,
    fade: Duration,
}

impl PressureText {
    pub fn new(text: &str, show_after: Duration, fade: Duration) -> Self {
        Self {
            text: text.to_string(),
            show_after,
            fade,
        }
    }

    /// Fade-in level: 0.0 before the reveal, then a linear ramp up
    fn level(&self, elapsed: Duration) -> f32 {
        match elapsed.checked_sub(self.show_after) {
            None => 0.0,
            Some(since) if since >= self.fade => 1.0,
            Some(since) => since.as_secs_f32() / self.fade.as_secs_f32(),
        }
    }

    pub fn is_visible(&self, elapsed: Duration) -> bool {
        self.level(elapsed) > 0.0
    }

    /// Emphasis of the character at column `x`, 0.0 far from the pointer
    /// up to 1.0 right under it
    fn weight(x: u16, row: u16, pointer: Option<(u16, u16)>) -> f32 {
        let Some((px, py)) = pointer else {
            return 0.5;
        };
        let dx = x as f32 - px as f32;
        // Rows count double; cells are taller than wide
        let dy = (row as f32 - py as f32) * 2.0;
        let dist = (dx * dx + dy * dy).sqrt();
        (1.0 - dist / RADIUS).clamp(0.0, 1.0)
    }

    fn style_for(weight: f32) -> Style {
        if weight > 0.66 {
            Style::default().fg(HEAVY).add_modifier(Modifier::BOLD)
        } else if weight > 0.33 {
            Style::default().fg(MID)
        } else {
            Style::default().fg(DIM)
        }
    }

    /// Draw the headline centered on the given row
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        row: u16,
        elapsed: Duration,
        pointer: Option<(u16, u16)>,
    ) {
        let level = self.level(elapsed);
        if level == 0.0 || row >= area.y + area.height {
            return;
        }
        let fade = FadeContext::new(level);

        let width = self.text.chars().count() as u16;
        let start = area.x + area.width.saturating_sub(width) / 2;

        for (offset, ch) in self.text.chars().enumerate() {
            let x = start + offset as u16;
            if x >= area.x + area.width {
                break;
            }
            let style = Self::style_for(Self::weight(x, row, pointer));
            if let Some(cell) = buf.cell_mut((x, row)) {
                cell.set_char(ch);
                cell.set_style(fade.fade_style(style));
            }
        }
    }
}
