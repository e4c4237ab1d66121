// Application constants
// Handle names (HWND-style) for rectangles registered during rendering

/// The panel container
pub const HWND_PANEL: &str = "hwndSettingsPanel";

/// The labels + rule strip at the top of the panel
pub const HWND_TAB_STRIP: &str = "hwndTabStrip";

/// Tab labels are registered as `hwndTab.<label>`
pub const HWND_TAB_PREFIX: &str = "hwndTab.";

/// Account inputs are registered as `hwndInput.<placeholder>`
pub const HWND_INPUT_PREFIX: &str = "hwndInput.";

/// Bottom status line
pub const HWND_STATUS_LINE: &str = "hwndStatusLine";
