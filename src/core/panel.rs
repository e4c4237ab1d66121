// Tab Panel State
// Selection state machine for the panel: which tab is selected and which input shows focus

use tracing::debug;

use super::TabName;

/// Inert text inputs on the Account view that can show a focus ring
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputField {
    Username,
    Email,
}

impl InputField {
    pub const ALL: [InputField; 2] = [InputField::Username, InputField::Email];

    pub fn placeholder(self) -> &'static str {
        match self {
            InputField::Username => "username",
            InputField::Email => "email",
        }
    }

    pub fn from_placeholder(placeholder: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.placeholder() == placeholder)
    }
}

/// Container state: the selected tab plus focus on the visible view
///
/// `select` is the only way the selected tab changes.
#[derive(Debug, Clone, Default)]
pub struct TabPanel {
    selected: TabName,
    focus: Option<InputField>,
}

impl TabPanel {
    /// A freshly mounted panel shows the Account tab
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> TabName {
        self.selected
    }

    /// Select a tab; returns true if the selection changed
    /// Selecting the current tab leaves everything (including focus) untouched
    pub fn select(&mut self, tab: TabName) -> bool {
        if tab == self.selected {
            return false;
        }
        debug!(from = %self.selected, to = %tab, "tab selected");
        self.selected = tab;
        // The previous view is gone, and its focus with it
        self.focus = None;
        true
    }

    /// The single content view to render
    pub fn visible_view(&self) -> TabName {
        self.selected
    }

    /// Height the container settles at for the current selection
    pub fn target_height(&self) -> u16 {
        self.selected.panel_height()
    }

    pub fn focus(&self) -> Option<InputField> {
        self.focus
    }

    /// Put the focus ring on an input; only the Account view has inputs
    pub fn focus_input(&mut self, field: InputField) -> bool {
        if self.selected != TabName::Account {
            return false;
        }
        self.focus = Some(field);
        true
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_account() {
        let panel = TabPanel::new();
        assert_eq!(panel.selected(), TabName::Account);
        assert_eq!(panel.visible_view(), TabName::Account);
        assert_eq!(panel.focus(), None);
    }

    #[test]
    fn test_select_each_tab() {
        for tab in TabName::ALL {
            let mut panel = TabPanel::new();
            panel.select(tab);
            assert_eq!(panel.selected(), tab);
            assert_eq!(panel.visible_view(), tab);
        }
    }

    #[test]
    fn test_target_height_per_tab() {
        let mut panel = TabPanel::new();
        assert_eq!(panel.target_height(), 14);
        panel.select(TabName::Password);
        assert_eq!(panel.target_height(), 10);
        panel.select(TabName::Settings);
        assert_eq!(panel.target_height(), 9);
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let mut panel = TabPanel::new();
        panel.select(TabName::Password);
        let before = panel.clone();

        assert!(!panel.select(TabName::Password));
        assert_eq!(panel.selected(), before.selected());
        assert_eq!(panel.focus(), before.focus());
    }

    #[test]
    fn test_round_trip_returns_to_initial_view() {
        let mut panel = TabPanel::new();
        let initial = panel.visible_view();

        assert!(panel.select(TabName::Password));
        assert!(panel.select(TabName::Settings));
        assert!(panel.select(TabName::Account));

        assert_eq!(panel.visible_view(), initial);
        assert_eq!(panel.target_height(), TabName::Account.panel_height());
    }

    #[test]
    fn test_focus_only_on_account() {
        let mut panel = TabPanel::new();
        assert!(panel.focus_input(InputField::Email));
        assert_eq!(panel.focus(), Some(InputField::Email));

        // Reselecting the same tab keeps focus
        panel.select(TabName::Account);
        assert_eq!(panel.focus(), Some(InputField::Email));

        panel.select(TabName::Settings);
        assert_eq!(panel.focus(), None);
        assert!(!panel.focus_input(InputField::Username));
    }

    #[test]
    fn test_input_placeholder_lookup() {
        assert_eq!(InputField::from_placeholder("email"), Some(InputField::Email));
        assert_eq!(InputField::from_placeholder("password"), None);
    }
}
