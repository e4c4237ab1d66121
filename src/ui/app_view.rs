// Application View
// Full-screen layout: the settings panel above the status line

use ratatui::{layout::Rect, Frame};
use tui_components::{BindingConfig, StatusLine};

use super::render_panel;
use crate::config::ApplicationConfig;
use crate::constants::HWND_STATUS_LINE;
use crate::core::App;

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &mut App, application: &ApplicationConfig) {
    let area = f.area();
    let status_area = StatusLine::area_in(area);
    let panel_area = Rect {
        height: area.height - status_area.height,
        ..area
    };

    render_panel(f, panel_area, app, &application.title);

    let bindings: Vec<BindingConfig> = application
        .bindings
        .iter()
        .map(|b| BindingConfig {
            key: b.key.clone(),
            description: b.description.clone(),
        })
        .collect();
    let status_text = status_text(app, application);
    StatusLine::new(&bindings, &status_text).render(f, area);
    app.registry.register(Some(HWND_STATUS_LINE), status_area);
}

/// Focused input name, otherwise the configured default
fn status_text(app: &App, application: &ApplicationConfig) -> String {
    match app.panel.focus() {
        Some(field) => format!("{} › {}", app.panel.selected(), field.placeholder()),
        None => application.status_bar.default_text.clone(),
    }
}
