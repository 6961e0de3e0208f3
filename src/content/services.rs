// Services Tab Content
// Three service columns: what the studio does, at a glance

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use spellpixel_components::TabContent;

const COLUMNS: &[(&str, &[&str])] = &[
    ("Web Dev", &["Websites", "Web Apps", "E-commerce", "SEO"]),
    ("Design", &["Logos", "Brand Kits", "Illustration"]),
    ("Video", &["Short-form", "Motion", "Color Grade"]),
];

pub struct ServicesContent;

impl TabContent for ServicesContent {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

        for (column, (heading, items)) in columns.iter().zip(COLUMNS) {
            if column.width == 0 || column.height == 0 {
                continue;
            }
            buf.set_stringn(
                column.x,
                column.y,
                *heading,
                column.width as usize,
                Style::default()
                    .fg(Color::Rgb(0xf5, 0xf5, 0xf5))
                    .add_modifier(Modifier::BOLD),
            );
            // One blank row under the heading
            for (row, item) in items.iter().enumerate() {
                let y = column.y + 2 + row as u16;
                if y >= column.y + column.height {
                    break;
                }
                buf.set_stringn(
                    column.x,
                    y,
                    *item,
                    column.width as usize,
                    Style::default().fg(Color::Rgb(0xa3, 0xa3, 0xa3)),
                );
            }
        }
    }

    fn height_hint(&self, _width: u16) -> u16 {
        let deepest = COLUMNS.iter().map(|(_, items)| items.len()).max().unwrap_or(0);
        2 + deepest as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        ServicesContent.render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.x..area.x + area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_all_three_headings_on_first_row() {
        let buf = rendered(Rect::new(0, 0, 45, 6));
        let top = row_text(&buf, 0);
        assert!(top.contains("Web Dev"));
        assert!(top.contains("Design"));
        assert!(top.contains("Video"));
    }

    #[test]
    fn test_height_hint_covers_longest_column() {
        // Heading + blank + 4 items for Web Dev
        assert_eq!(ServicesContent.height_hint(45), 6);
    }
}
