// Rectangle Handle System (HWND-like)
// Tracks the rectangles drawn during the last frame so input can be mapped back to them
//
// Usage:
//   let mut registry = RectRegistry::new();
//   let handle = registry.register(Some("hwndPanel"), rect);
//   // Later...
//   if let Some(metrics) = registry.get_metrics(handle) {
//       println!("Panel at: {},{} size: {}x{}", metrics.x, metrics.y, metrics.width, metrics.height);
//   }

use ratatui::layout::Rect;
use std::collections::HashMap;

/// Handle to a registered rectangle (similar to Windows HWND)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectHandle(u64);

/// Metrics for a registered rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectMetrics {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl RectMetrics {
    /// Check if a cell (x, y) lies inside the rectangle
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

impl From<Rect> for RectMetrics {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl From<RectMetrics> for Rect {
    fn from(metrics: RectMetrics) -> Self {
        Self {
            x: metrics.x,
            y: metrics.y,
            width: metrics.width,
            height: metrics.height,
        }
    }
}

/// Registry for tracking rendered rectangles with handles
#[derive(Debug, Clone)]
pub struct RectRegistry {
    handles: HashMap<u64, RectMetrics>,
    name_to_handle: HashMap<String, u64>,
    /// Next handle ID to assign (0 is never handed out)
    next_id: u64,
}

impl RectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
            name_to_handle: HashMap::new(),
            next_id: 1,
        }
    }

    /// Register a rectangle and return a handle
    /// Registering an existing name updates that entry and returns its original handle
    pub fn register(&mut self, name: Option<&str>, rect: Rect) -> RectHandle {
        let metrics = RectMetrics::from(rect);

        if let Some(name_str) = name {
            if let Some(&existing_id) = self.name_to_handle.get(name_str) {
                if let Some(entry) = self.handles.get_mut(&existing_id) {
                    *entry = metrics;
                    return RectHandle(existing_id);
                }
            }
        }

        let handle_id = self.next_id;
        self.next_id += 1;

        self.handles.insert(handle_id, metrics);
        if let Some(name_str) = name {
            self.name_to_handle.insert(name_str.to_string(), handle_id);
        }

        RectHandle(handle_id)
    }

    /// Get current metrics for a handle
    pub fn get_metrics(&self, handle: RectHandle) -> Option<RectMetrics> {
        self.handles.get(&handle.0).copied()
    }

    /// Get current metrics by name
    pub fn get_metrics_by_name(&self, name: &str) -> Option<RectMetrics> {
        self.name_to_handle
            .get(name)
            .and_then(|id| self.handles.get(id))
            .copied()
    }

    /// Remove a rectangle from the registry by name
    /// Used when an element stops being drawn (e.g. a view that is no longer mounted)
    pub fn unregister_by_name(&mut self, name: &str) -> bool {
        match self.name_to_handle.remove(name) {
            Some(id) => {
                self.handles.remove(&id);
                true
            }
            None => false,
        }
    }

    /// Remove every named rectangle whose name starts with `prefix`
    /// Returns how many were removed
    pub fn unregister_prefix(&mut self, prefix: &str) -> usize {
        let names: Vec<String> = self
            .name_to_handle
            .keys()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect();
        for name in &names {
            self.unregister_by_name(name);
        }
        names.len()
    }

    /// Find the first named rectangle containing (x, y) whose name starts with `prefix`
    pub fn hit_test(&self, prefix: &str, x: u16, y: u16) -> Option<&str> {
        self.name_to_handle
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .find(|(_, id)| {
                self.handles
                    .get(id)
                    .map(|metrics| metrics.contains(x, y))
                    .unwrap_or(false)
            })
            .map(|(name, _)| name.as_str())
    }

    /// Check if a name exists
    pub fn name_exists(&self, name: &str) -> bool {
        self.name_to_handle.contains_key(name)
    }
}

impl Default for RectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper function to render a widget and register its rectangle
pub fn render_with_handle<W: ratatui::widgets::Widget>(
    frame: &mut ratatui::Frame,
    registry: &mut RectRegistry,
    name: Option<&str>,
    widget: W,
    area: Rect,
) -> RectHandle {
    frame.render_widget(widget, area);
    registry.register(name, area)
}
