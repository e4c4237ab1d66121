// Helper utilities for TUI components
use ratatui::layout::Rect;
use ratatui::style::Color;

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Linear blend between two colors, `t` = 0.0 gives `from`, 1.0 gives `to`
/// Non-RGB colors cannot be mixed, so they switch over at the halfway point
pub fn blend_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

/// Fixed-size rectangle centered in `r`, clamped to fit
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Wrap text to fit within max width
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.chars().count() + 1 + word.chars().count() <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0xEC4899), Color::Rgb(0xEC, 0x48, 0x99));
    }

    #[test]
    fn test_blend_color_endpoints() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(200, 100, 50);
        assert_eq!(blend_color(from, to, 0.0), from);
        assert_eq!(blend_color(from, to, 1.0), to);
        assert_eq!(blend_color(from, to, 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(blend_color(from, to, 7.0), to);
    }

    #[test]
    fn test_blend_named_colors_switch_halfway() {
        assert_eq!(blend_color(Color::Black, Color::White, 0.2), Color::Black);
        assert_eq!(blend_color(Color::Black, Color::White, 0.8), Color::White);
    }

    #[test]
    fn test_centered_fixed() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_fixed(20, 10, area), Rect::new(30, 7, 20, 10));
        assert_eq!(centered_fixed(100, 40, area), area);
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("Manage your notification and privacy settings.", 20);
        assert_eq!(lines, vec!["Manage your", "notification and", "privacy settings."]);
    }
}
