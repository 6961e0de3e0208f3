// Scene Composition
// One pass over the frame buffer, back to front: backdrop, particles, the
// timed text phases, chrome, and finally the navigation in the top-right.

use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;
use spellpixel_components::{hex_color, FadeContext};

use crate::constants::{BRIDGE_ROWS, NAV_MARGIN_RIGHT, NAV_TOP};
use crate::core::App;

const BACKDROP: u32 = 0x0a0a0a;
const CHROME_FG: u32 = 0xa3a3a3;
const TITLE_FG: u32 = 0xf5f5f5;

pub fn render_scene(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let now = Instant::now();
    let elapsed = app.started.elapsed();
    let buf = frame.buffer_mut();

    buf.set_style(area, Style::default().bg(hex_color(BACKDROP)));
    app.particles.render(area, buf);

    // Both phases share the same centered row; the tagline is gone before
    // the headline arrives
    let text_row = area.y + area.height / 3;
    app.tagline.render(area, buf, text_row, elapsed);
    app.headline.render(area, buf, text_row, elapsed, app.pointer);

    render_chrome(app, area, buf);
    render_nav(app, area, buf, now);
}

/// Brand mark top-left and the status line on the bottom row
fn render_chrome(app: &App, area: Rect, buf: &mut Buffer) {
    if area.height < 2 {
        return;
    }
    buf.set_stringn(
        area.x + NAV_MARGIN_RIGHT,
        area.y + NAV_TOP,
        &app.config.application.title,
        area.width as usize,
        Style::default()
            .fg(hex_color(TITLE_FG))
            .add_modifier(Modifier::BOLD),
    );
    buf.set_stringn(
        area.x,
        area.y + area.height - 1,
        &app.config.application.status_bar.default_text,
        area.width as usize,
        Style::default().fg(hex_color(CHROME_FG)),
    );
}

/// Tab bar in the top-right, overlay panel below it when open
fn render_nav(app: &mut App, area: Rect, buf: &mut Buffer, now: Instant) {
    if area.height <= NAV_TOP + 1 {
        return;
    }

    let bar_width = app.nav.tabs().total_width().min(area.width);
    let bar_x = (area.x + area.width)
        .saturating_sub(bar_width + NAV_MARGIN_RIGHT)
        .max(area.x);
    let bar_area = Rect {
        x: bar_x,
        y: area.y + NAV_TOP,
        width: bar_width,
        height: 1,
    };
    app.nav.tabs().render(
        bar_area,
        buf,
        &mut app.registry,
        app.nav.selection(),
        FadeContext::opaque(),
    );

    let Some(id) = app.nav.visible_tab() else {
        return;
    };
    let Some(content) = app.contents.get(id.index()) else {
        return;
    };

    let panel_width = app
        .nav
        .panel_width()
        .min(area.width.saturating_sub(NAV_MARGIN_RIGHT));
    let interior = panel_width.saturating_sub(2);
    let panel_y = bar_area.y + 1 + BRIDGE_ROWS;
    // Keep the status row free
    let max_height = (area.y + area.height).saturating_sub(panel_y + 1);
    let panel_area = Rect {
        x: (area.x + area.width)
            .saturating_sub(panel_width + NAV_MARGIN_RIGHT)
            .max(area.x),
        y: panel_y,
        width: panel_width,
        height: (content.height_hint(interior) + 2).min(max_height),
    };

    let slide = app.nav.slide_cols(interior, now);
    let fade = FadeContext::new(app.nav.fade_level(now));
    let nub = app.nav.nub_left(now);
    app.nav.panel().render(
        panel_area,
        buf,
        &mut app.registry,
        content.as_ref(),
        slide,
        fade,
        nub,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::AppEvent;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_scene(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_tab_bar_sits_top_right() {
        let mut app = App::new(AppConfig::default()).unwrap();
        let buf = draw(&mut app, 100, 30);

        let bar_row = row_text(&buf, NAV_TOP);
        assert!(bar_row.contains("Services ∨"));
        assert!(bar_row.contains("Insights ∨"));
        // Right margin stays clear
        assert_eq!(buf.cell((99, NAV_TOP)).map(|c| c.symbol()), Some(" "));
    }

    #[test]
    fn test_overlay_appears_after_hover_and_leaves_after_close() {
        let mut app = App::new(AppConfig::default()).unwrap();
        draw(&mut app, 100, 30);

        // First draw published the pill rects; hover the first pill
        let pill = app
            .registry
            .get_metrics(app.nav.tabs().descriptors()[0].handle)
            .unwrap();
        app.handle_event(AppEvent::PointerMoved(pill.x + 1, pill.y));
        let buf = draw(&mut app, 100, 30);
        assert!(row_text(&buf, NAV_TOP).contains("Services ∧"));

        // Panel border row sits below the bridge
        let border_row = row_text(&buf, NAV_TOP + 1 + BRIDGE_ROWS);
        assert!(border_row.contains("╭"));

        // Close and let the exit fade run out
        app.handle_event(AppEvent::CloseOverlay);
        app.after_render(Instant::now() + std::time::Duration::from_secs(1));
        let buf = draw(&mut app, 100, 30);
        let border_row = row_text(&buf, NAV_TOP + 1 + BRIDGE_ROWS);
        assert!(!border_row.contains("╭"));
    }

    #[test]
    fn test_status_line_on_bottom_row() {
        let mut app = App::new(AppConfig::default()).unwrap();
        let buf = draw(&mut app, 100, 30);
        assert!(row_text(&buf, 29).contains("q quit"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = App::new(AppConfig::default()).unwrap();
        draw(&mut app, 4, 2);
        app.handle_event(AppEvent::PointerMoved(1, 1));
        draw(&mut app, 4, 2);
    }
}
