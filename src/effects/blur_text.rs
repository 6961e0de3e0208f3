// Blur Text Reveal
// The tagline materializes word by word, each word sharpening from dim to
// bright, then the whole line fades away at its deadline.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use spellpixel_components::FadeContext;

const DIM: Color = Color::Rgb(0x52, 0x52, 0x52);
const MID: Color = Color::Rgb(0xa3, 0xa3, 0xa3);
const SHARP: Color = Color::Rgb(0xf5, 0xf5, 0xf5);

#[derive(Debug, Clone)]
pub struct BlurTextReveal {
    words: Vec<String>,
    word_delay: Duration,
    hide_after: Duration,
    fade: Duration,
}

impl BlurTextReveal {
    pub fn new(text: &str, word_delay: Duration, hide_after: Duration, fade: Duration) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_string).collect(),
            word_delay,
            hide_after,
            fade,
        }
    }

    /// Style of word `index` at `elapsed`, or None while it is still hidden
    fn word_style(&self, index: usize, elapsed: Duration) -> Option<Style> {
        let revealed_at = self.word_delay * index as u32;
        let age = elapsed.checked_sub(revealed_at)?;

        let color = if age < self.word_delay {
            DIM
        } else if age < self.word_delay * 2 {
            MID
        } else {
            SHARP
        };
        let style = Style::default().fg(color);
        Some(if color == SHARP {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        })
    }

    /// Opacity of the whole line: 1.0 until the deadline, then a linear
    /// ramp down; 0.0 once the fade has run out
    fn line_level(&self, elapsed: Duration) -> f32 {
        match elapsed.checked_sub(self.hide_after) {
            None => 1.0,
            Some(over) if over >= self.fade => 0.0,
            Some(over) => 1.0 - over.as_secs_f32() / self.fade.as_secs_f32(),
        }
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        self.line_level(elapsed) == 0.0
    }

    /// Draw the revealed words centered on the given row
    pub fn render(&self, area: Rect, buf: &mut Buffer, row: u16, elapsed: Duration) {
        let level = self.line_level(elapsed);
        if level == 0.0 || row >= area.y + area.height {
            return;
        }
        let fade = FadeContext::new(level);

        let visible: Vec<(usize, Style)> = self
            .words
            .iter()
            .enumerate()
            .filter_map(|(i, _)| self.word_style(i, elapsed).map(|s| (i, s)))
            .collect();
        if visible.is_empty() {
            return;
        }

        // Center on the full line so words do not shift as they appear
        let full_width: usize =
            self.words.iter().map(|w| w.chars().count()).sum::<usize>() + self.words.len() - 1;
        let mut x = area.x + area.width.saturating_sub(full_width as u16) / 2;

        for (index, style) in visible {
            let word = &self.words[index];
            buf.set_stringn(x, row, word, area.width as usize, fade.fade_style(style));
            x += word.chars().count() as u16 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal() -> BlurTextReveal {
        BlurTextReveal::new(
            "Crafted pixels",
            Duration::from_millis(180),
            Duration::from_millis(6000),
            Duration::from_millis(500),
        )
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_words_appear_in_order() {
        let r = reveal();
        assert!(r.word_style(0, ms(0)).is_some());
        assert!(r.word_style(1, ms(0)).is_none());
        assert!(r.word_style(1, ms(180)).is_some());
    }

    #[test]
    fn test_words_sharpen_over_time() {
        let r = reveal();
        assert_eq!(r.word_style(0, ms(10)).unwrap().fg, Some(DIM));
        assert_eq!(r.word_style(0, ms(200)).unwrap().fg, Some(MID));
        assert_eq!(r.word_style(0, ms(400)).unwrap().fg, Some(SHARP));
    }

    #[test]
    fn test_line_fades_out_at_deadline() {
        let r = reveal();
        assert_eq!(r.line_level(ms(5999)), 1.0);
        assert!(r.line_level(ms(6250)) < 1.0);
        assert!(r.is_done(ms(6500)));
        assert!(!r.is_done(ms(3000)));
    }

    #[test]
    fn test_render_after_deadline_leaves_buffer_blank() {
        let r = reveal();
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        r.render(area, &mut buf, 1, ms(7000));
        let row: String = (0..40)
            .filter_map(|x| buf.cell((x, 1)).map(|c| c.symbol().to_string()))
            .collect();
        assert_eq!(row.trim(), "");
    }
}
