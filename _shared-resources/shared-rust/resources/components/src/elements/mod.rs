// GUI Elements module
// Visual components that render UI elements

pub mod status_line;
pub mod tab_strip;

pub use status_line::*;
pub use tab_strip::*;
