// UI module
// Panel rendering, the three content views and the terminal event loop

pub mod account_view;
pub mod app_view;
pub mod motion;
pub mod panel_view;
pub mod password_view;
pub mod settings_view;
pub mod styles;

use anyhow::Result;
use crossterm::event;
use ratatui::{
    backend::Backend,
    layout::Rect,
    text::Span,
    widgets::Paragraph,
    Frame, Terminal,
};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tui_components::wrap_text;

use crate::config::ApplicationConfig;
use crate::core::{App, EventHandler, InputField};

pub use app_view::render_app;
pub use motion::PanelMotion;
pub use panel_view::{panel_width, render_panel};
pub use styles::Styles;

/// Poll interval while nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Horizontal padding between the panel border and view content
pub const CONTENT_PADDING_X: u16 = 2;

/// What a content view needs to draw itself
pub struct ViewContext<'a> {
    pub styles: &'a Styles,
    pub focus: Option<InputField>,
}

/// Single-row rect `offset` rows below the top of `area`, if it is inside `area`
pub(crate) fn row_at(area: Rect, offset: u16) -> Option<Rect> {
    if offset >= area.height {
        return None;
    }
    Some(Rect {
        y: area.y + offset,
        height: 1,
        ..area
    })
}

/// Title, wrapped description and a button: the layout shared by the Password and Settings views
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub button: &'static str,
    /// Leave an empty row between the description and the button
    pub gap_before_button: bool,
}

impl Notice {
    /// Rows needed to show the whole notice at `width`, top padding included
    pub fn rows(&self, width: u16) -> u16 {
        let description = wrap_text(self.description, width as usize).len() as u16;
        1 + 1 + description + u16::from(self.gap_before_button) + 1
    }
}

pub(crate) fn render_notice(f: &mut Frame, area: Rect, ctx: &ViewContext, notice: &Notice) {
    let styles = ctx.styles;
    // Row 0 is padding
    let mut offset = 1;

    if let Some(row) = row_at(area, offset) {
        f.render_widget(Paragraph::new(Span::styled(notice.title, styles.title())), row);
    }
    offset += 1;

    for line in wrap_text(notice.description, area.width as usize) {
        if let Some(row) = row_at(area, offset) {
            f.render_widget(Paragraph::new(Span::styled(line, styles.description())), row);
        }
        offset += 1;
    }

    if notice.gap_before_button {
        offset += 1;
    }
    if let Some(row) = row_at(area, offset) {
        let button = Span::styled(format!(" {} ", notice.button), styles.button());
        f.render_widget(Paragraph::new(button), row);
    }
}

/// Run the main application event loop
pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    application: &ApplicationConfig,
) -> Result<()> {
    let handler = EventHandler::new(app.config.ui.mouse_enabled);
    let tick_rate = app.config.ui.tick_rate;
    let mut last_tick = Instant::now();

    info!(tick_ms = tick_rate.as_millis() as u64, "event loop started");

    loop {
        terminal.draw(|f| render_app(f, app, application))?;

        // Wait for input, but never longer than the time left in this tick
        let timeout = if app.motion.is_idle() {
            IDLE_POLL
        } else {
            tick_rate.saturating_sub(last_tick.elapsed())
        };
        if event::poll(timeout)? {
            let app_event = handler.handle(event::read()?);
            debug!(?app_event, "input");
            app.handle_event(app_event);
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_tick));
        last_tick = now;

        // Check if we should quit
        if app.should_quit {
            info!("quit requested");
            return Ok(());
        }
    }
}
