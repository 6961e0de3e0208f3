// GUI elements module
// Visual components that render into buffers and report their rects

pub mod overlay;
pub mod shift_tabs;

pub use overlay::{OverlayPanel, TabContent};
pub use shift_tabs::{ShiftTabs, TabDescriptor};
