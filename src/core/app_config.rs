// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use std::time::Duration;

use ratatui::style::Color;
use tui_components::Spring;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level configuration for settings-tabs
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// UI and input settings
    pub ui: UiSettings,

    /// Animation parameters
    pub motion: MotionSettings,

    /// Colour palette
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiSettings {
    /// Enable mouse support
    pub mouse_enabled: bool,

    /// Play transitions; when false every value snaps
    pub animations: bool,

    /// Input poll interval, which is also the animation frame interval
    pub tick_rate: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MotionSettings {
    pub underline: Spring,
    pub resize: Spring,
    pub resize_delay: Duration,
    pub content: Spring,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub accent: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub inactive: Color,
    pub input_outline: Color,
    pub background: Color,
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mouse_enabled: compiled::MOUSE_ENABLED,
            animations: compiled::ANIMATIONS,
            tick_rate: Duration::from_millis(compiled::TICK_RATE_MS.max(1)),
        }
    }
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            underline: Spring::new(compiled::UNDERLINE_STIFFNESS, compiled::UNDERLINE_DAMPING),
            resize: Spring::new(compiled::RESIZE_STIFFNESS, compiled::RESIZE_DAMPING),
            resize_delay: Duration::from_millis(compiled::RESIZE_DELAY_MS),
            content: Spring::new(compiled::CONTENT_STIFFNESS, compiled::CONTENT_DAMPING),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: rgb(compiled::ACCENT),
            border: rgb(compiled::BORDER),
            text: rgb(compiled::TEXT),
            muted: rgb(compiled::MUTED),
            inactive: rgb(compiled::INACTIVE),
            input_outline: rgb(compiled::INPUT_OUTLINE),
            background: rgb(compiled::BACKGROUND),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            motion: MotionSettings::default(),
            palette: Palette::default(),
        }
    }
}

impl AppConfig {
    /// Same configuration with every transition turned off
    pub fn without_animations(mut self) -> Self {
        self.ui.animations = false;
        self
    }
}
