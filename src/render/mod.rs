// Rendering module
// Composes the full frame from the background up

pub mod scene;

pub use scene::render_scene;
