// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod rect_handle;

pub use rect_handle::{render_with_handle, RectHandle, RectMetrics, RectRegistry};
