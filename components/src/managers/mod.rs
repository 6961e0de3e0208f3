// OOP-style manager wrappers

pub mod shift_tabs;

pub use shift_tabs::{
    validate_nav_config, NavConfigError, NavConfigYaml, NavTabYaml, ShiftTabsManager,
    DEFAULT_PANEL_WIDTH, FADE_DURATION, SLIDE_DURATION,
};
