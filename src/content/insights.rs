// Insights Tab Content
// Two short article cards with wrapped teaser text

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use spellpixel_components::{wrap_text, TabContent};

const ARTICLES: &[(&str, &str)] = &[
    (
        "Motion with intent",
        "Animation should explain state, not decorate it. A panel that slides \
         from the side you came from tells you where you are.",
    ),
    (
        "Terminal-first design",
        "Cells are a coarse canvas, and that constraint is the point: every \
         glyph you place has to earn its spot.",
    ),
];

pub struct InsightsContent;

impl InsightsContent {
    fn card_lines(width: u16) -> Vec<(String, Style)> {
        let title_style = Style::default()
            .fg(Color::Rgb(0xf5, 0xf5, 0xf5))
            .add_modifier(Modifier::BOLD);
        let body_style = Style::default().fg(Color::Rgb(0xa3, 0xa3, 0xa3));
        let spacer = (String::new(), body_style);

        let mut lines = Vec::new();
        for (index, (title, body)) in ARTICLES.iter().enumerate() {
            if index > 0 {
                lines.push(spacer.clone());
            }
            lines.push((title.to_string(), title_style));
            for line in wrap_text(body, width.max(1) as usize) {
                lines.push((line, body_style));
            }
        }
        lines
    }
}

impl TabContent for InsightsContent {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        for (row, (line, style)) in Self::card_lines(area.width).iter().enumerate() {
            let y = area.y + row as u16;
            if y >= area.y + area.height {
                break;
            }
            buf.set_stringn(area.x, y, line, area.width as usize, *style);
        }
    }

    fn height_hint(&self, width: u16) -> u16 {
        Self::card_lines(width).len() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_titles_present() {
        let lines = InsightsContent::card_lines(44);
        let titles: Vec<&str> = lines.iter().map(|(l, _)| l.as_str()).collect();
        assert!(titles.contains(&"Motion with intent"));
        assert!(titles.contains(&"Terminal-first design"));
    }

    #[test]
    fn test_body_wraps_to_width() {
        for (line, _) in InsightsContent::card_lines(30) {
            assert!(line.chars().count() <= 30, "line too wide: {line:?}");
        }
    }

    #[test]
    fn test_height_hint_matches_rendered_lines() {
        let area = Rect::new(0, 0, 44, 30);
        let mut buf = Buffer::empty(area);
        InsightsContent.render(area, &mut buf);

        let hint = InsightsContent.height_hint(44);
        // The row just past the hint stays untouched
        let next_row: String = (0..44)
            .filter_map(|x| buf.cell((x, hint)).map(|c| c.symbol().to_string()))
            .collect();
        assert_eq!(next_row.trim(), "");
    }
}
