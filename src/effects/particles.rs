// Particle Background
// Drifting colored dots behind everything else. Wrap-around edges, gentle
// repulsion away from the pointer. Purely decorative, advanced once per tick.

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use spellpixel_components::hex_color;

const GLYPHS: &[&str] = &["•", "∙", "·"];

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    color: Color,
    glyph: &'static str,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    count: usize,
    drift: f32,
    repel: f32,
    palette: Vec<Color>,
    /// Last known field size; a change reseeds the field
    bounds: (u16, u16),
}

impl ParticleField {
    pub fn new(count: usize, drift: f32, repel: f32, palette: &[u32]) -> Self {
        Self {
            particles: Vec::new(),
            count,
            drift,
            repel,
            palette: palette.iter().copied().map(hex_color).collect(),
            bounds: (0, 0),
        }
    }

    fn seed(&mut self, width: u16, height: u16) {
        let mut rng = rand::rng();
        self.particles = (0..self.count)
            .map(|_| Particle {
                x: rng.random_range(0.0..width as f32),
                y: rng.random_range(0.0..height as f32),
                vx: rng.random_range(-1.0..1.0),
                vy: rng.random_range(-0.5..0.5),
                color: self.palette[rng.random_range(0..self.palette.len().max(1))],
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
            })
            .collect();
        self.bounds = (width, height);
    }

    /// Advance one tick. Reseeds when the terminal size changed.
    pub fn step(&mut self, width: u16, height: u16, pointer: Option<(u16, u16)>) {
        if width == 0 || height == 0 || self.palette.is_empty() {
            return;
        }
        if self.bounds != (width, height) || self.particles.is_empty() {
            self.seed(width, height);
        }

        let (w, h) = (width as f32, height as f32);
        for p in &mut self.particles {
            if let Some((px, py)) = pointer {
                let dx = p.x - px as f32;
                // Terminal cells are roughly twice as tall as wide
                let dy = (p.y - py as f32) * 2.0;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > 0.01 && dist < self.repel {
                    let push = (self.repel - dist) / self.repel;
                    p.x += dx / dist * push;
                    p.y += dy / dist * push * 0.5;
                }
            }

            p.x = (p.x + p.vx * self.drift).rem_euclid(w);
            p.y = (p.y + p.vy * self.drift).rem_euclid(h);
        }
    }

    /// Draw onto empty cells only; text and widgets always win
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        for p in &self.particles {
            let x = area.x + p.x as u16;
            let y = area.y + p.y as u16;
            if x >= area.x + area.width || y >= area.y + area.height {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                if cell.symbol() == " " {
                    cell.set_symbol(p.glyph);
                    cell.fg = p.color;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: &[u32] = &[0x0000ff, 0x1e90ff];

    #[test]
    fn test_seeds_on_first_step() {
        let mut field = ParticleField::new(20, 0.35, 9.0, PALETTE);
        field.step(80, 24, None);
        assert_eq!(field.particles.len(), 20);
        for p in &field.particles {
            assert!(p.x >= 0.0 && p.x < 80.0);
            assert!(p.y >= 0.0 && p.y < 24.0);
        }
    }

    #[test]
    fn test_positions_stay_in_bounds_while_drifting() {
        let mut field = ParticleField::new(30, 1.5, 9.0, PALETTE);
        for _ in 0..200 {
            field.step(40, 12, Some((20, 6)));
        }
        for p in &field.particles {
            assert!(p.x >= 0.0 && p.x < 40.0);
            assert!(p.y >= 0.0 && p.y < 12.0);
        }
    }

    #[test]
    fn test_resize_reseeds_into_new_bounds() {
        let mut field = ParticleField::new(10, 0.35, 9.0, PALETTE);
        field.step(100, 40, None);
        field.step(20, 5, None);
        for p in &field.particles {
            assert!(p.x < 20.0);
            assert!(p.y < 5.0);
        }
    }

    #[test]
    fn test_render_never_overwrites_text() {
        let mut field = ParticleField::new(50, 0.35, 9.0, PALETTE);
        field.step(10, 3, None);

        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        buf.set_stringn(0, 1, "HELLO WORLD", 10, ratatui::style::Style::default());
        field.render(area, &mut buf);

        let row: String = (0..10)
            .filter_map(|x| buf.cell((x, 1)).map(|c| c.symbol().to_string()))
            .collect();
        assert_eq!(row, "HELLO WORL");
    }
}
