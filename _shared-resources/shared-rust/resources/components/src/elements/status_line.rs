// Status line component
// Bottom-of-screen key binding hints and status text

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::utilities::hex_color;

/// Configuration for a keyboard binding display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingConfig {
    pub key: String,         // e.g., "[q]", "[←/→]"
    pub description: String, // e.g., "Quit"
}

/// Bindings row above a dim status row, anchored to the bottom of the screen
pub struct StatusLine<'a> {
    bindings: &'a [BindingConfig],
    status_text: &'a str,
}

impl<'a> StatusLine<'a> {
    /// Rows occupied: bindings + status
    pub const HEIGHT: u16 = 2;

    pub fn new(bindings: &'a [BindingConfig], status_text: &'a str) -> Self {
        Self {
            bindings,
            status_text,
        }
    }

    /// Area reserved at the bottom of `area`
    pub fn area_in(area: Rect) -> Rect {
        let height = Self::HEIGHT.min(area.height);
        Rect {
            x: area.x,
            y: area.y + area.height - height,
            width: area.width,
            height,
        }
    }

    pub fn build_bindings_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (idx, binding) in self.bindings.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(hex_color(0x777777))));
            }
            spans.push(Span::styled(
                binding.key.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", binding.description),
                Style::default().fg(hex_color(0x777777)),
            ));
        }
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let area = Self::area_in(area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        if area.height == Self::HEIGHT && !self.bindings.is_empty() {
            let bindings_row = Rect { height: 1, ..area };
            f.render_widget(Paragraph::new(self.build_bindings_line()), bindings_row);
        }

        let status_row = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };
        let status = Paragraph::new(Line::from(self.status_text.to_string()))
            .style(Style::default().fg(hex_color(0x444444)));
        f.render_widget(status, status_row);
    }
}
