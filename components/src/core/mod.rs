// Core infrastructure module
// Rect handle registry, selection state machine, and indicator geometry

pub mod indicator;
pub mod rect_handle;
pub mod selection;

pub use indicator::IndicatorPositioner;
pub use rect_handle::{RectHandle, RectMetrics, RectRegistry};
pub use selection::{SelectionMachine, SelectionState, SlideDirection, TabId};
