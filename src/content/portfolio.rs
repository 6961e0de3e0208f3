// Portfolio Tab Content
// A small grid of recent project tiles

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use spellpixel_components::TabContent;

const PROJECTS: &[(&str, &str)] = &[
    ("◈", "Nightfall"),
    ("◉", "Emberline"),
    ("▣", "Halcyon"),
    ("◬", "Driftwood"),
    ("✦", "Lumen"),
    ("❖", "Northwind"),
];

const GRID_COLUMNS: usize = 3;

pub struct PortfolioContent;

impl TabContent for PortfolioContent {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

        for (index, (glyph, name)) in PROJECTS.iter().enumerate() {
            let column = columns[index % GRID_COLUMNS];
            // Two rows per tile: glyph row, name row, then a blank spacer
            let y = area.y + (index / GRID_COLUMNS) as u16 * 3;
            if column.width == 0 || y + 1 >= area.y + area.height {
                continue;
            }
            buf.set_stringn(
                column.x,
                y,
                *glyph,
                column.width as usize,
                Style::default()
                    .fg(Color::Rgb(0x87, 0xce, 0xfa))
                    .add_modifier(Modifier::BOLD),
            );
            buf.set_stringn(
                column.x,
                y + 1,
                *name,
                column.width as usize,
                Style::default().fg(Color::Rgb(0xa3, 0xa3, 0xa3)),
            );
        }
    }

    fn height_hint(&self, _width: u16) -> u16 {
        let rows = PROJECTS.len().div_ceil(GRID_COLUMNS) as u16;
        rows * 3 - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.x..area.x + area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_tiles_fill_two_grid_rows() {
        let area = Rect::new(0, 0, 45, 6);
        let mut buf = Buffer::empty(area);
        PortfolioContent.render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("Nightfall"));
        assert!(row_text(&buf, 1).contains("Halcyon"));
        assert!(row_text(&buf, 4).contains("Driftwood"));
        assert!(row_text(&buf, 4).contains("Northwind"));
    }

    #[test]
    fn test_height_hint_matches_grid() {
        // Two tile rows of glyph + name with one spacer between
        assert_eq!(PortfolioContent.height_hint(45), 5);
    }
}
