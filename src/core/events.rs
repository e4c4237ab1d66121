// Event Handling
// Converts terminal input into application events

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::TabName;

/// Application events that can be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Move to the tab on the right (wrapping)
    SelectNext,

    /// Move to the tab on the left (wrapping)
    SelectPrevious,

    /// Jump straight to a tab
    Select(TabName),

    /// Left click at a screen cell
    Click { column: u16, row: u16 },

    /// Pointer moved over a screen cell
    Hover { column: u16, row: u16 },

    /// Drop focus from the focused input
    ClearFocus,

    /// Terminal was resized; layout is recomputed on the next draw
    Resize,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler {
    mouse_enabled: bool,
}

impl EventHandler {
    pub fn new(mouse_enabled: bool) -> Self {
        Self { mouse_enabled }
    }

    /// Convert a crossterm event to an application event
    pub fn handle(&self, event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) if self.mouse_enabled => Self::handle_mouse(mouse),
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Tab navigation
            KeyCode::Right | KeyCode::Tab => AppEvent::SelectNext,
            KeyCode::Left | KeyCode::BackTab => AppEvent::SelectPrevious,
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                TabName::from_index(index).map_or(AppEvent::None, AppEvent::Select)
            }

            KeyCode::Esc => AppEvent::ClearFocus,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            MouseEventKind::Moved => AppEvent::Hover {
                column: mouse.column,
                row: mouse.row,
            },
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_number_keys_jump_to_tabs() {
        let handler = EventHandler::new(true);
        assert_eq!(handler.handle(press(KeyCode::Char('1'))), AppEvent::Select(TabName::Account));
        assert_eq!(handler.handle(press(KeyCode::Char('2'))), AppEvent::Select(TabName::Password));
        assert_eq!(handler.handle(press(KeyCode::Char('3'))), AppEvent::Select(TabName::Settings));
        assert_eq!(handler.handle(press(KeyCode::Char('4'))), AppEvent::None);
    }

    #[test]
    fn test_navigation_and_quit_keys() {
        let handler = EventHandler::new(true);
        assert_eq!(handler.handle(press(KeyCode::Right)), AppEvent::SelectNext);
        assert_eq!(handler.handle(press(KeyCode::BackTab)), AppEvent::SelectPrevious);
        assert_eq!(handler.handle(press(KeyCode::Esc)), AppEvent::ClearFocus);
        assert_eq!(handler.handle(press(KeyCode::Char('q'))), AppEvent::Quit);
        // Only the documented keys navigate
        assert_eq!(handler.handle(press(KeyCode::Char('l'))), AppEvent::None);
        assert_eq!(handler.handle(press(KeyCode::Char('h'))), AppEvent::None);

        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handler.handle(ctrl_c), AppEvent::Quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let handler = EventHandler::new(true);
        let release = Event::Key(KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(handler.handle(release), AppEvent::None);
    }

    #[test]
    fn test_mouse_events() {
        let handler = EventHandler::new(true);
        assert_eq!(
            handler.handle(mouse(MouseEventKind::Down(MouseButton::Left), 4, 7)),
            AppEvent::Click { column: 4, row: 7 }
        );
        assert_eq!(
            handler.handle(mouse(MouseEventKind::Moved, 1, 2)),
            AppEvent::Hover { column: 1, row: 2 }
        );
        assert_eq!(
            handler.handle(mouse(MouseEventKind::Down(MouseButton::Right), 4, 7)),
            AppEvent::None
        );
    }

    #[test]
    fn test_mouse_disabled() {
        let handler = EventHandler::new(false);
        assert_eq!(
            handler.handle(mouse(MouseEventKind::Down(MouseButton::Left), 4, 7)),
            AppEvent::None
        );
    }
}
