// Application Constants
// Layout and timing values shared across the application

/// Row the tab bar sits on
pub const NAV_TOP: u16 = 1;

/// Columns kept free to the right of the tab bar and panel
pub const NAV_MARGIN_RIGHT: u16 = 2;

/// Hover bridge rows between the tab bar and the overlay panel
pub const BRIDGE_ROWS: u16 = 1;

/// Event poll timeout doubling as the animation tick
pub const TICK_MS: u64 = 33;

/// Fade length for the timed text phases (tagline out, title in)
pub const PHASE_FADE_MS: u64 = 500;
