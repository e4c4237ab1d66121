// Core infrastructure module
// Tab model, selection state, configuration and input mapping

pub mod app;
pub mod app_config;
pub mod events;
pub mod panel;
pub mod tab;

pub use app::App;
pub use app_config::AppConfig;
pub use events::{AppEvent, EventHandler};
pub use panel::{InputField, TabPanel};
pub use tab::TabName;
