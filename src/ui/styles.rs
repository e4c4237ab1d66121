// UI Styles
// Palette-driven styles for the panel, with optional fade toward the background

use ratatui::style::{Color, Modifier, Style};
use tui_components::{blend_color, TabStripColors};

use crate::core::app_config::Palette;

/// Styles for one frame of the panel
///
/// `fade` is the content opacity: 0.0 draws everything in the background
/// colour, 1.0 draws the palette as-is. Only view content is faded; the
/// container and tab strip always use `fade = 1.0`.
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    palette: Palette,
    fade: f32,
}

impl Styles {
    pub fn new(palette: Palette) -> Self {
        Self { palette, fade: 1.0 }
    }

    pub fn faded(mut self, fade: f32) -> Self {
        self.fade = fade.clamp(0.0, 1.0);
        self
    }

    fn color(&self, color: Color) -> Color {
        blend_color(self.palette.background, color, self.fade)
    }

    // === Container ===

    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.palette.background)
    }

    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.palette.border)
    }

    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.palette.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_strip(&self) -> TabStripColors {
        TabStripColors {
            active: self.palette.text,
            inactive: self.palette.inactive,
            hover: self.palette.text,
            rule: self.palette.border,
            underline: self.palette.accent,
        }
    }

    // === View content ===

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.color(self.palette.text))
            .add_modifier(Modifier::BOLD)
    }

    pub fn description(&self) -> Style {
        Style::default().fg(self.color(self.palette.muted))
    }

    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.color(self.palette.text))
            .bg(self.color(self.palette.accent))
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text(&self) -> Style {
        Style::default().fg(self.color(self.palette.text))
    }

    /// Outline of a text input; the focused input uses the accent colour
    pub fn input_outline(&self, focused: bool) -> Style {
        let color = if focused {
            self.palette.accent
        } else {
            self.palette.input_outline
        };
        Style::default().fg(self.color(color))
    }
}
