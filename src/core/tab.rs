// Tab Names
// The fixed set of tabs shown by the panel

use std::fmt;

/// Height of the panel (in rows, borders included) while a tab is selected
pub const ACCOUNT_HEIGHT: u16 = 14;
pub const PASSWORD_HEIGHT: u16 = 10;
pub const SETTINGS_HEIGHT: u16 = 9;

/// One of the three panel tabs, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TabName {
    #[default]
    Account,
    Password,
    Settings,
}

impl TabName {
    pub const ALL: [TabName; 3] = [TabName::Account, TabName::Password, TabName::Settings];

    /// Position in the tab strip
    pub fn index(self) -> usize {
        match self {
            TabName::Account => 0,
            TabName::Password => 1,
            TabName::Settings => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Text shown on the tab label
    pub fn label(self) -> &'static str {
        match self {
            TabName::Account => "Account",
            TabName::Password => "Password",
            TabName::Settings => "Settings",
        }
    }

    /// Reverse of [`TabName::label`]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.label() == label)
    }

    /// Next tab to the right, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Next tab to the left, wrapping around
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Panel height for this tab: Account is tallest, Settings shortest
    pub fn panel_height(self) -> u16 {
        match self {
            TabName::Account => ACCOUNT_HEIGHT,
            TabName::Password => PASSWORD_HEIGHT,
            TabName::Settings => SETTINGS_HEIGHT,
        }
    }
}

impl fmt::Display for TabName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for tab in TabName::ALL {
            assert_eq!(TabName::from_index(tab.index()), Some(tab));
            assert_eq!(TabName::from_label(tab.label()), Some(tab));
        }
        assert_eq!(TabName::from_index(3), None);
        assert_eq!(TabName::from_label("Profile"), None);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(TabName::Account.next(), TabName::Password);
        assert_eq!(TabName::Settings.next(), TabName::Account);
        assert_eq!(TabName::Account.previous(), TabName::Settings);
        assert_eq!(TabName::Password.previous(), TabName::Account);
    }

    #[test]
    fn test_heights_are_ordered() {
        assert!(TabName::Account.panel_height() > TabName::Password.panel_height());
        assert!(TabName::Password.panel_height() > TabName::Settings.panel_height());
    }

    #[test]
    fn test_default_is_account() {
        assert_eq!(TabName::default(), TabName::Account);
        assert_eq!(TabName::Settings.to_string(), "Settings");
    }
}
