// Spellpixel components library
// Reusable widgets for terminal showcase applications

// Core infrastructure
pub mod core;
// GUI elements (visual components)
pub mod elements;
// OOP-style manager wrappers
pub mod managers;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
// Note: ambiguous_glob_reexports warning is intentional - shift_tabs exists in both elements and
// managers but refers to different types (ShiftTabs widget vs ShiftTabsManager), so
// disambiguation is expected
#[allow(ambiguous_glob_reexports)]
pub use core::*;
#[allow(ambiguous_glob_reexports)]
pub use elements::*;
#[allow(ambiguous_glob_reexports)]
pub use managers::*;
pub use utilities::*;
