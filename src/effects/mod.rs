// Visual Effects
// Time-driven decorations: the particle background and the staged text reveals

pub mod blur_text;
pub mod particles;
pub mod pressure_text;

pub use blur_text::BlurTextReveal;
pub use particles::ParticleField;
pub use pressure_text::PressureText;
