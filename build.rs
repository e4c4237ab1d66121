// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const ANIMATIONS: bool = {animations};
pub const TICK_RATE_MS: u64 = {tick_rate_ms};

pub const UNDERLINE_STIFFNESS: f32 = {underline_stiffness:?};
pub const UNDERLINE_DAMPING: f32 = {underline_damping:?};
pub const RESIZE_STIFFNESS: f32 = {resize_stiffness:?};
pub const RESIZE_DAMPING: f32 = {resize_damping:?};
pub const RESIZE_DELAY_MS: u64 = {resize_delay_ms};
pub const CONTENT_STIFFNESS: f32 = {content_stiffness:?};
pub const CONTENT_DAMPING: f32 = {content_damping:?};

// Palette (RGB tuples)
pub const ACCENT: (u8, u8, u8) = {accent:?};
pub const BORDER: (u8, u8, u8) = {border:?};
pub const TEXT: (u8, u8, u8) = {text:?};
pub const MUTED: (u8, u8, u8) = {muted:?};
pub const INACTIVE: (u8, u8, u8) = {inactive:?};
pub const INPUT_OUTLINE: (u8, u8, u8) = {input_outline:?};
pub const BACKGROUND: (u8, u8, u8) = {background:?};
"#,
        mouse_enabled = config.mouse_enabled,
        animations = config.animations,
        tick_rate_ms = config.tick_rate_ms,
        underline_stiffness = config.underline_stiffness,
        underline_damping = config.underline_damping,
        resize_stiffness = config.resize_stiffness,
        resize_damping = config.resize_damping,
        resize_delay_ms = config.resize_delay_ms,
        content_stiffness = config.content_stiffness,
        content_damping = config.content_damping,
        accent = config.accent,
        border = config.border,
        text = config.text,
        muted = config.muted,
        inactive = config.inactive,
        input_outline = config.input_outline,
        background = config.background,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    mouse_enabled: bool,
    animations: bool,
    tick_rate_ms: u64,
    underline_stiffness: f32,
    underline_damping: f32,
    resize_stiffness: f32,
    resize_damping: f32,
    resize_delay_ms: u64,
    content_stiffness: f32,
    content_damping: f32,
    accent: (u8, u8, u8),
    border: (u8, u8, u8),
    text: (u8, u8, u8),
    muted: (u8, u8, u8),
    inactive: (u8, u8, u8),
    input_outline: (u8, u8, u8),
    background: (u8, u8, u8),
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            animations: true,
            tick_rate_ms: 16,
            underline_stiffness: 500.0,
            underline_damping: 25.0,
            resize_stiffness: 500.0,
            resize_damping: 25.0,
            resize_delay_ms: 200,
            content_stiffness: 300.0,
            content_damping: 30.0,
            accent: (236, 72, 153),       // #ec4899
            border: (163, 163, 163),      // #a3a3a3
            text: (255, 255, 255),        // #ffffff
            muted: (212, 212, 212),       // #d4d4d4
            inactive: (163, 163, 163),    // #a3a3a3
            input_outline: (115, 115, 115), // #737373
            background: (23, 23, 23),     // #171717
        }
    }
}

#[derive(PartialEq)]
enum Section {
    Other,
    Ui,
    Motion,
    Colors,
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut section = Section::Other;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Top-level keys switch sections
        if !line.starts_with(' ') && !line.starts_with('\t') {
            section = match trimmed {
                "ui:" => Section::Ui,
                "motion:" => Section::Motion,
                "colors:" => Section::Colors,
                _ => Section::Other,
            };
            continue;
        }

        let Some((key, value)) = parse_kv(trimmed) else {
            continue;
        };

        match section {
            Section::Ui => match key {
                "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                "animations" => config.animations = parse_bool(value),
                "tick_rate_ms" => config.tick_rate_ms = value.parse().unwrap_or(config.tick_rate_ms),
                _ => {}
            },
            Section::Motion => match key {
                "underline_stiffness" => config.underline_stiffness = parse_f32(value, config.underline_stiffness),
                "underline_damping" => config.underline_damping = parse_f32(value, config.underline_damping),
                "resize_stiffness" => config.resize_stiffness = parse_f32(value, config.resize_stiffness),
                "resize_damping" => config.resize_damping = parse_f32(value, config.resize_damping),
                "resize_delay_ms" => config.resize_delay_ms = value.parse().unwrap_or(config.resize_delay_ms),
                "content_stiffness" => config.content_stiffness = parse_f32(value, config.content_stiffness),
                "content_damping" => config.content_damping = parse_f32(value, config.content_damping),
                _ => {}
            },
            Section::Colors => {
                let slot = match key {
                    "accent" => &mut config.accent,
                    "border" => &mut config.border,
                    "text" => &mut config.text,
                    "muted" => &mut config.muted,
                    "inactive" => &mut config.inactive,
                    "input_outline" => &mut config.input_outline,
                    "background" => &mut config.background,
                    _ => continue,
                };
                if let Some(rgb) = parse_hex_color(value) {
                    *slot = rgb;
                }
            }
            Section::Other => {}
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments (a # preceded by a space; hex colors are quoted)
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

fn parse_f32(s: &str, fallback: f32) -> f32 {
    s.parse().unwrap_or(fallback)
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim().trim_matches('"').trim_matches('\'');
    let s = s.strip_prefix('#').unwrap_or(s);

    if s.len() != 6 {
        return None;
    }
    match (
        u8::from_str_radix(&s[0..2], 16),
        u8::from_str_radix(&s[2..4], 16),
        u8::from_str_radix(&s[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Some((r, g, b)),
        _ => None,
    }
}
