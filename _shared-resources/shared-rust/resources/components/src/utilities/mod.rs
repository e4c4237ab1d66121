// Utilities module
// Helper functions and quality of life utilities

pub mod animation;
pub mod helpers;

pub use animation::{AnimatedValue, Motion, Spring};
pub use helpers::*;
