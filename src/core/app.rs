// Application State
// Main application state: the tab panel, its motion and the hit-test registry

use std::time::Duration;

use tracing::debug;
use tui_components::RectRegistry;

use super::{AppConfig, AppEvent, InputField, TabName, TabPanel};
use crate::constants::{HWND_INPUT_PREFIX, HWND_TAB_PREFIX};
use crate::ui::PanelMotion;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration (compiled defaults plus CLI overrides)
    pub config: AppConfig,

    /// Selection and focus; the single source of truth for what is shown
    pub panel: TabPanel,

    /// Animated presentation that trails `panel`
    pub motion: PanelMotion,

    /// Tab label under the pointer
    pub hovered: Option<TabName>,

    /// Rects measured during the last draw
    pub registry: RectRegistry,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance showing the Account tab
    pub fn new(config: AppConfig) -> Self {
        let motion = PanelMotion::new(&config);
        Self {
            config,
            panel: TabPanel::new(),
            motion,
            hovered: None,
            registry: RectRegistry::new(),
            should_quit: false,
        }
    }

    /// Select a tab; returns true if the selection changed
    pub fn select(&mut self, tab: TabName) -> bool {
        self.panel.select(tab)
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::SelectNext => {
                self.select(self.panel.selected().next());
            }
            AppEvent::SelectPrevious => {
                self.select(self.panel.selected().previous());
            }
            AppEvent::Select(tab) => {
                self.select(tab);
            }
            AppEvent::Click { column, row } => self.click(column, row),
            AppEvent::Hover { column, row } => self.hovered = self.tab_at(column, row),
            AppEvent::ClearFocus => self.panel.clear_focus(),
            AppEvent::Resize | AppEvent::None => {}
        }
    }

    /// Primary-button click: a tab label selects, an input takes focus, anything else blurs
    pub fn click(&mut self, column: u16, row: u16) {
        if let Some(tab) = self.tab_at(column, row) {
            self.select(tab);
            return;
        }

        match self.input_at(column, row) {
            Some(field) => {
                self.panel.focus_input(field);
            }
            None => self.panel.clear_focus(),
        }
    }

    /// Tab whose label contains the cell
    pub fn tab_at(&self, column: u16, row: u16) -> Option<TabName> {
        self.registry
            .hit_test(HWND_TAB_PREFIX, column, row)
            .and_then(|name| name.strip_prefix(HWND_TAB_PREFIX))
            .and_then(TabName::from_label)
    }

    fn input_at(&self, column: u16, row: u16) -> Option<InputField> {
        self.registry
            .hit_test(HWND_INPUT_PREFIX, column, row)
            .and_then(|name| name.strip_prefix(HWND_INPUT_PREFIX))
            .and_then(InputField::from_placeholder)
    }

    /// Advance animations; returns true while anything is still moving
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.motion.tick(dt)
    }

    /// Request application quit
    pub fn quit(&mut self) {
        debug!("quit");
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    /// App with label and input rects laid out like a drawn Account panel at the origin
    fn app() -> App {
        let mut app = App::new(AppConfig::default().without_animations());
        let labels = [(2, "Account"), (19, "Password"), (37, "Settings")];
        for (x, label) in labels {
            app.registry.register(
                Some(&format!("{}{}", HWND_TAB_PREFIX, label)),
                Rect::new(x + 1, 1, 15, 1),
            );
        }
        app.registry
            .register(Some(&format!("{}username", HWND_INPUT_PREFIX)), Rect::new(3, 6, 51, 1));
        app.registry
            .register(Some(&format!("{}email", HWND_INPUT_PREFIX)), Rect::new(3, 8, 51, 1));
        app
    }

    #[test]
    fn test_new_app_shows_account() {
        let app = App::new(AppConfig::default());
        assert_eq!(app.panel.selected(), TabName::Account);
        assert_eq!(app.panel.focus(), None);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_click_label_selects_tab() {
        let mut app = app();
        app.handle_event(AppEvent::Click { column: 45, row: 1 });
        assert_eq!(app.panel.selected(), TabName::Settings);

        app.handle_event(AppEvent::Click { column: 20, row: 1 });
        assert_eq!(app.panel.selected(), TabName::Password);
    }

    #[test]
    fn test_click_outside_labels_keeps_selection() {
        let mut app = app();
        app.select(TabName::Password);
        // Gap between labels, then the rule row below them
        app.handle_event(AppEvent::Click { column: 19, row: 1 });
        app.handle_event(AppEvent::Click { column: 25, row: 2 });
        assert_eq!(app.panel.selected(), TabName::Password);
    }

    #[test]
    fn test_click_input_focuses_and_blurs() {
        let mut app = app();
        app.handle_event(AppEvent::Click { column: 10, row: 8 });
        assert_eq!(app.panel.focus(), Some(InputField::Email));

        app.handle_event(AppEvent::Click { column: 10, row: 7 });
        assert_eq!(app.panel.focus(), None);

        app.handle_event(AppEvent::Click { column: 10, row: 6 });
        app.handle_event(AppEvent::ClearFocus);
        assert_eq!(app.panel.focus(), None);
    }

    #[test]
    fn test_switching_tab_drops_focus() {
        let mut app = app();
        app.handle_event(AppEvent::Click { column: 10, row: 6 });
        assert_eq!(app.panel.focus(), Some(InputField::Username));

        app.handle_event(AppEvent::SelectNext);
        assert_eq!(app.panel.selected(), TabName::Password);
        assert_eq!(app.panel.focus(), None);
    }

    #[test]
    fn test_keyboard_navigation_wraps() {
        let mut app = app();
        app.handle_event(AppEvent::SelectPrevious);
        assert_eq!(app.panel.selected(), TabName::Settings);
        app.handle_event(AppEvent::SelectNext);
        assert_eq!(app.panel.selected(), TabName::Account);
        app.handle_event(AppEvent::Select(TabName::Password));
        assert_eq!(app.panel.selected(), TabName::Password);
    }

    #[test]
    fn test_hover_tracks_label() {
        let mut app = app();
        app.handle_event(AppEvent::Hover { column: 30, row: 1 });
        assert_eq!(app.hovered, Some(TabName::Password));
        app.handle_event(AppEvent::Hover { column: 30, row: 12 });
        assert_eq!(app.hovered, None);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_event(AppEvent::Quit);
        assert!(app.should_quit);
    }
}
