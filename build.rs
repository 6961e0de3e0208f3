// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    // Generate Rust code with the compiled-in values
    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const MOUSE_ENABLED: bool = {mouse_enabled};

pub const PARTICLE_COUNT: usize = {particle_count};
pub const PARTICLE_DRIFT: f32 = {particle_drift:?};
pub const POINTER_REPEL: f32 = {pointer_repel:?};
pub const WORD_DELAY_MS: u64 = {word_delay_ms};
pub const TAGLINE_HIDE_MS: u64 = {tagline_hide_ms};
pub const TITLE_SHOW_MS: u64 = {title_show_ms};

// Particle colors (0xRRGGBB)
pub const PARTICLE_PALETTE: &[u32] = &[
{palette}
];
"#,
        mouse_enabled = config.mouse_enabled,
        particle_count = config.particle_count,
        particle_drift = config.particle_drift,
        pointer_repel = config.pointer_repel,
        word_delay_ms = config.word_delay_ms,
        tagline_hide_ms = config.tagline_hide_ms,
        title_show_ms = config.title_show_ms,
        palette = config
            .particle_palette
            .iter()
            .map(|c| format!("    0x{:06x},", c))
            .collect::<Vec<_>>()
            .join("\n"),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    mouse_enabled: bool,
    particle_count: usize,
    particle_drift: f32,
    pointer_repel: f32,
    word_delay_ms: u64,
    tagline_hide_ms: u64,
    title_show_ms: u64,
    particle_palette: Vec<u32>,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            particle_count: 60,
            particle_drift: 0.35,
            pointer_repel: 9.0,
            word_delay_ms: 180,
            tagline_hide_ms: 6000,
            title_show_ms: 7000,
            particle_palette: vec![0x0000ff, 0x1e90ff, 0x87cefa, 0xadd8e6],
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_ui = false;
    let mut in_effects = false;
    let mut in_palette = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Track which section we're in
        if trimmed.starts_with("ui:") {
            in_ui = true;
            in_effects = false;
            in_palette = false;
            continue;
        } else if trimmed.starts_with("effects:") {
            in_ui = false;
            in_effects = true;
            in_palette = false;
            continue;
        } else if trimmed.starts_with("particle_palette:") {
            in_ui = false;
            in_effects = false;
            in_palette = true;
            config.particle_palette.clear(); // Start fresh when we see the section
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            if in_ui {
                match key {
                    "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                    _ => {}
                }
            } else if in_effects {
                match key {
                    "particle_count" => {
                        config.particle_count = value.parse().unwrap_or(60)
                    }
                    "particle_drift" => {
                        config.particle_drift = value.parse().unwrap_or(0.35)
                    }
                    "pointer_repel" => {
                        config.pointer_repel = value.parse().unwrap_or(9.0)
                    }
                    "word_delay_ms" => {
                        config.word_delay_ms = value.parse().unwrap_or(180)
                    }
                    "tagline_hide_ms" => {
                        config.tagline_hide_ms = value.parse().unwrap_or(6000)
                    }
                    "title_show_ms" => {
                        config.title_show_ms = value.parse().unwrap_or(7000)
                    }
                    _ => {}
                }
            }
        }

        // Parse list items for the palette
        if in_palette && trimmed.starts_with("- ") {
            let (r, g, b) = parse_hex_color(trimmed[2..].trim());
            config
                .particle_palette
                .push(((r as u32) << 16) | ((g as u32) << 8) | b as u32);
            continue;
        }

        // Stop parsing the palette when we hit a non-list line
        if in_palette && !trimmed.starts_with("- ") && !trimmed.is_empty() && !trimmed.starts_with('#') {
            in_palette = false;
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments (everything after # that's not part of a hex color)
    if let Some(comment_pos) = value.find(" #") {
        value = &value[..comment_pos];
        value = value.trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

fn parse_hex_color(s: &str) -> (u8, u8, u8) {
    // Remove quotes if present
    let s = s.trim().trim_matches('"').trim_matches('\'');

    // Remove # if present
    let s = if s.starts_with('#') { &s[1..] } else { s };

    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return (r, g, b);
        }
    }

    // Fallback to default if parsing fails
    (0, 0, 0)
}
