// Helper utilities for TUI components
use ratatui::style::{Color, Style};

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Background the overlay fades from and to
const FADE_BG: (u8, u8, u8) = (10, 10, 10);

/// Fade context - scales colors toward the backdrop by an opacity level.
/// Level 1.0 leaves colors untouched; level 0.0 sinks them into the backdrop.
#[derive(Debug, Clone, Copy)]
pub struct FadeContext {
    pub level: f32,
}

impl FadeContext {
    pub fn new(level: f32) -> Self {
        Self { level: level.clamp(0.0, 1.0) }
    }

    /// Fully opaque context
    pub fn opaque() -> Self {
        Self { level: 1.0 }
    }

    /// Apply the fade level to a color.
    /// RGB colors interpolate toward the backdrop; indexed/named colors step
    /// through gray stand-ins since they cannot be interpolated.
    pub fn fade_color(&self, color: Color) -> Color {
        if self.level >= 1.0 {
            return color;
        }
        match color {
            Color::Rgb(r, g, b) => {
                let mix = |from: u8, to: u8| -> u8 {
                    let from = from as f32;
                    let to = to as f32;
                    (from + (to - from) * self.level).round() as u8
                };
                Color::Rgb(mix(FADE_BG.0, r), mix(FADE_BG.1, g), mix(FADE_BG.2, b))
            }
            other => {
                if self.level >= 0.66 {
                    other
                } else if self.level >= 0.33 {
                    Color::DarkGray
                } else {
                    Color::Rgb(FADE_BG.0.saturating_add(20), FADE_BG.1.saturating_add(20), FADE_BG.2.saturating_add(20))
                }
            }
        }
    }

    /// Apply the fade level to both foreground and background of a style
    pub fn fade_style(&self, style: Style) -> Style {
        let mut faded = style;
        if let Some(fg) = style.fg {
            faded = faded.fg(self.fade_color(fg));
        }
        if let Some(bg) = style.bg {
            faded = faded.bg(self.fade_color(bg));
        }
        faded
    }
}

/// Wrap text to fit within max width
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let words: Vec<&str> = paragraph.split_whitespace().collect();
        let mut current_line = String::new();

        for word in words {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.len() + 1 + word.len() <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0x1e90ff), Color::Rgb(0x1e, 0x90, 0xff));
    }

    #[test]
    fn test_fade_endpoints() {
        let full = FadeContext::opaque();
        assert_eq!(full.fade_color(Color::Rgb(200, 100, 50)), Color::Rgb(200, 100, 50));

        let gone = FadeContext::new(0.0);
        assert_eq!(gone.fade_color(Color::Rgb(200, 100, 50)), Color::Rgb(10, 10, 10));
    }

    #[test]
    fn test_fade_level_is_clamped() {
        assert_eq!(FadeContext::new(3.0).level, 1.0);
        assert_eq!(FadeContext::new(-1.0).level, 0.0);
    }

    #[test]
    fn test_fade_named_color_steps() {
        assert_eq!(FadeContext::new(0.8).fade_color(Color::Cyan), Color::Cyan);
        assert_eq!(FadeContext::new(0.5).fade_color(Color::Cyan), Color::DarkGray);
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("a quick guide to clean interface design", 12);
        assert!(lines.iter().all(|l| l.len() <= 12));
        assert_eq!(lines.join(" "), "a quick guide to clean interface design");
    }
}
