// Tab Content Providers
// One renderable per navigation tab, consumed by the overlay panel

pub mod insights;
pub mod portfolio;
pub mod services;

pub use insights::InsightsContent;
pub use portfolio::PortfolioContent;
pub use services::ServicesContent;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use spellpixel_components::TabContent;

/// Map a configured tab name to its content provider. Unknown names get a
/// plain placeholder so a custom config still renders something.
pub fn content_for(name: &str) -> Box<dyn TabContent> {
    match name.to_lowercase().as_str() {
        "services" => Box::new(ServicesContent),
        "portfolio" => Box::new(PortfolioContent),
        "insights" => Box::new(InsightsContent),
        _ => Box::new(PlainContent { title: name.to_string() }),
    }
}

/// Fallback content for tabs without a dedicated provider
pub struct PlainContent {
    title: String,
}

impl TabContent for PlainContent {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_stringn(
            area.x,
            area.y,
            &self.title,
            area.width as usize,
            Style::default().fg(Color::Rgb(0xf5, 0xf5, 0xf5)),
        );
        if area.height > 1 {
            buf.set_stringn(
                area.x,
                area.y + 1,
                "Nothing here yet.",
                area.width as usize,
                Style::default().fg(Color::Rgb(0xa3, 0xa3, 0xa3)),
            );
        }
    }

    fn height_hint(&self, _width: u16) -> u16 {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tab_gets_placeholder() {
        let content = content_for("Careers");
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        content.render(area, &mut buf);

        let row: String = (0..7)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect();
        assert_eq!(row, "Careers");
    }

    #[test]
    fn test_known_names_are_case_insensitive() {
        // Each provider advertises a nonzero height
        for name in ["Services", "PORTFOLIO", "insights"] {
            assert!(content_for(name).height_hint(44) > 2);
        }
    }
}
