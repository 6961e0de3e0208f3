// Application Settings
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level settings for spellpixel
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// UI and input settings
    pub ui: UiSettings,

    /// Background and text effect settings
    pub effects: EffectSettings,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Enable mouse capture (hover and click drive the navigation)
    pub mouse_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct EffectSettings {
    /// Number of background particles
    pub particle_count: usize,

    /// Particle velocity scale, cells per tick
    pub particle_drift: f32,

    /// Radius in cells within which particles flee the pointer
    pub pointer_repel: f32,

    /// Delay between tagline word reveals
    pub word_delay_ms: u64,

    /// When the tagline starts fading out
    pub tagline_hide_ms: u64,

    /// When the headline starts fading in
    pub title_show_ms: u64,

    /// Particle colors (0xRRGGBB)
    pub particle_palette: Vec<u32>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mouse_enabled: compiled::MOUSE_ENABLED,
        }
    }
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            particle_count: compiled::PARTICLE_COUNT,
            particle_drift: compiled::PARTICLE_DRIFT,
            pointer_repel: compiled::POINTER_REPEL,
            word_delay_ms: compiled::WORD_DELAY_MS,
            tagline_hide_ms: compiled::TAGLINE_HIDE_MS,
            title_show_ms: compiled::TITLE_SHOW_MS,
            particle_palette: compiled::PARTICLE_PALETTE.to_vec(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            effects: EffectSettings::default(),
        }
    }
}
