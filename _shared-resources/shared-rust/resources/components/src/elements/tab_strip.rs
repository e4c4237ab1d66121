// Tab Strip Component
// A row of padded tab labels above a rule, with an underline marking the selected label

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::RectRegistry;
use crate::utilities::hex_color;

/// Bounding box for a tab label (for click detection and underline placement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TabBounds {
    /// Check if a coordinate (x, y) is within this tab's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

impl From<TabBounds> for Rect {
    fn from(bounds: TabBounds) -> Self {
        Rect::new(bounds.x, bounds.y, bounds.width, bounds.height)
    }
}

/// Underline placement, relative to the left edge of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnderlinePosition {
    pub offset: u16,
    pub width: u16,
}

/// Spacing of the strip, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabStripLayout {
    /// Space between the strip edges and the first/last label
    pub padding_x: u16,
    /// Space on each side of a label's text (part of the clickable area)
    pub label_padding: u16,
    /// Space between neighbouring labels
    pub gap: u16,
}

impl Default for TabStripLayout {
    fn default() -> Self {
        Self {
            padding_x: 2,
            label_padding: 4,
            gap: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabStripColors {
    pub active: Color,
    pub inactive: Color,
    pub hover: Color,
    pub rule: Color,
    pub underline: Color,
}

impl Default for TabStripColors {
    fn default() -> Self {
        Self {
            active: Color::White,
            inactive: hex_color(0xA3A3A3),
            hover: Color::White,
            rule: hex_color(0xA3A3A3),
            underline: hex_color(0xEC4899),
        }
    }
}

pub struct TabStrip {
    pub labels: Vec<String>,
    pub selected: usize,
    pub hovered: Option<usize>,
    pub layout: TabStripLayout,
    pub colors: TabStripColors,
    /// Where the underline is drawn this frame (may lag the selection while animating)
    pub underline: Option<UnderlinePosition>,
}

impl TabStrip {
    /// Labels row plus the rule row
    pub const HEIGHT: u16 = 2;

    pub fn new(labels: Vec<String>, selected: usize) -> Self {
        Self {
            labels,
            selected,
            hovered: None,
            layout: TabStripLayout::default(),
            colors: TabStripColors::default(),
            underline: None,
        }
    }

    pub fn with_colors(mut self, colors: TabStripColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_hovered(mut self, hovered: Option<usize>) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn with_underline(mut self, underline: UnderlinePosition) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Width of each label including its padding
    pub fn label_widths(&self) -> Vec<u16> {
        self.labels
            .iter()
            .map(|label| label.chars().count() as u16 + self.layout.label_padding * 2)
            .collect()
    }

    /// Minimum width needed to show every label
    pub fn required_width(&self) -> u16 {
        let labels: u16 = self.label_widths().iter().sum();
        let gaps = self.layout.gap * self.labels.len().saturating_sub(1) as u16;
        self.layout.padding_x * 2 + labels + gaps
    }

    /// Calculate the bounds of each label when the strip is drawn into `area`
    ///
    /// Bounds are clipped to `area`; a label pushed entirely outside it gets a
    /// zero-width bound so indices still line up with `labels`.
    pub fn label_bounds(&self, area: Rect) -> Vec<TabBounds> {
        let right = area.x.saturating_add(area.width);
        let height = area.height.min(1);
        let mut bounds = Vec::with_capacity(self.labels.len());
        let mut current_x = area.x.saturating_add(self.layout.padding_x);

        for width in self.label_widths() {
            let x = current_x.min(right);
            let end = current_x.saturating_add(width).min(right);
            bounds.push(TabBounds {
                x,
                y: area.y,
                width: end - x,
                height,
            });
            current_x = current_x.saturating_add(width + self.layout.gap);
        }

        bounds
    }

    /// Underline placement that exactly covers the visible part of label `index`
    pub fn underline_for(&self, area: Rect, index: usize) -> Option<UnderlinePosition> {
        self.label_bounds(area)
            .get(index)
            .filter(|bounds| bounds.width > 0)
            .map(|bounds| UnderlinePosition {
                offset: bounds.x - area.x,
                width: bounds.width,
            })
    }

    /// Register every label's bounds as `<prefix><label>`
    pub fn register_labels(&self, registry: &mut RectRegistry, area: Rect, prefix: &str) {
        for (label, bounds) in self.labels.iter().zip(self.label_bounds(area)) {
            if bounds.width > 0 && bounds.height > 0 {
                registry.register(Some(&format!("{}{}", prefix, label)), bounds.into());
            }
        }
    }

    fn label_style(&self, idx: usize) -> Style {
        if idx == self.selected {
            Style::default().fg(self.colors.active)
        } else if self.hovered == Some(idx) {
            Style::default().fg(self.colors.hover)
        } else {
            Style::default().fg(self.colors.inactive)
        }
    }

    pub fn build_label_line(&self) -> Line<'static> {
        let pad = " ".repeat(self.layout.label_padding as usize);
        let mut spans = vec![Span::raw(" ".repeat(self.layout.padding_x as usize))];

        for (idx, label) in self.labels.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" ".repeat(self.layout.gap as usize)));
            }
            let mut style = self.label_style(idx);
            if idx == self.selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!("{}{}{}", pad, label, pad), style));
        }

        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let labels_row = Rect { height: 1, ..area };
        f.render_widget(Paragraph::new(self.build_label_line()), labels_row);

        if area.height < Self::HEIGHT {
            return;
        }

        let rule_row = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        let rule = Paragraph::new(Line::from("─".repeat(area.width as usize)))
            .style(Style::default().fg(self.colors.rule));
        f.render_widget(rule, rule_row);

        if let Some(underline) = self.underline {
            // Clip to the strip so an overshooting spring never draws outside it
            let x = rule_row.x.saturating_add(underline.offset);
            let right = (x.saturating_add(underline.width)).min(rule_row.x + rule_row.width);
            if x < right {
                let underline_area = Rect {
                    x,
                    width: right - x,
                    ..rule_row
                };
                let bar = Paragraph::new(Line::from("━".repeat(underline_area.width as usize)))
                    .style(Style::default().fg(self.colors.underline));
                f.render_widget(bar, underline_area);
            }
        }
    }
}
