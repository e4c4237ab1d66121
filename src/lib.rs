// Settings Tabs Library
// An animated, tabbed settings panel for the terminal

// Core infrastructure - tab model, selection state, config, input
pub mod core;

// Runtime configuration (config.yaml `application` section)
pub mod config;
pub mod config_validation;

// UI - panel, content views, motion and the event loop
pub mod ui;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use self::core::{App, AppConfig, TabName, TabPanel};
pub use config::ApplicationConfig;
pub use constants::*;
