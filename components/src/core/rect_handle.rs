// Rectangle Handle System
// Tracks the on-screen rectangles of rendered elements behind opaque handles,
// so geometry consumers measure through explicit references instead of global
// name lookups.
//
// Usage:
//   let mut registry = RectRegistry::new();
//   let handle = registry.register(None, rect);
//   // Later, after a render pass has updated the rect...
//   if let Some(metrics) = registry.get_metrics(handle) {
//       println!("element at {},{} size {}x{}", metrics.x, metrics.y, metrics.width, metrics.height);
//   }

use ratatui::layout::Rect;
use std::collections::HashMap;

/// Handle to a registered rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectHandle(u64);

impl RectHandle {
    /// Get the internal ID of this handle
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Metrics for a registered rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectMetrics {
    /// Top-left X coordinate
    pub x: u16,
    /// Top-left Y coordinate
    pub y: u16,
    /// Width of the rectangle
    pub width: u16,
    /// Height of the rectangle
    pub height: u16,
}

impl RectMetrics {
    /// Check whether a cell coordinate falls within this rectangle
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Column of the horizontal center
    pub fn center_x(&self) -> u16 {
        self.x + self.width / 2
    }

    /// Smallest rectangle covering both `self` and `other`
    pub fn union(&self, other: &RectMetrics) -> RectMetrics {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = (self.x + self.width).max(other.x + other.width);
        let y2 = (self.y + self.height).max(other.y + other.height);
        RectMetrics {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
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

/// Registry entry for a rectangle
#[derive(Debug, Clone)]
struct RegistryEntry {
    /// Optional name for lookup by name
    name: Option<String>,
    /// Current metrics (position and size)
    metrics: RectMetrics,
}

/// Registry for tracking rendered rectangles with handles
#[derive(Debug, Clone)]
pub struct RectRegistry {
    /// Map of handle ID to registry entry
    handles: HashMap<u64, RegistryEntry>,
    /// Map of name to handle ID
    name_to_handle: HashMap<String, u64>,
    /// Next handle ID to assign
    next_id: u64,
}

impl RectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
            name_to_handle: HashMap::new(),
            next_id: 1, // 0 is reserved as an invalid handle
        }
    }

    /// Register a rectangle and return a handle.
    /// Registering an existing name updates that entry and returns its handle.
    pub fn register(&mut self, name: Option<&str>, rect: Rect) -> RectHandle {
        let metrics = RectMetrics::from(rect);

        if let Some(name_str) = name {
            if let Some(&existing) = self.name_to_handle.get(name_str) {
                if let Some(entry) = self.handles.get_mut(&existing) {
                    entry.metrics = metrics;
                    return RectHandle(existing);
                }
            }
        }

        let handle_id = self.next_id;
        self.next_id += 1;

        self.handles.insert(
            handle_id,
            RegistryEntry {
                name: name.map(|s| s.to_string()),
                metrics,
            },
        );
        if let Some(name_str) = name {
            self.name_to_handle.insert(name_str.to_string(), handle_id);
        }

        RectHandle(handle_id)
    }

    /// Update an existing rectangle's metrics by handle
    pub fn update(&mut self, handle: RectHandle, rect: Rect) -> bool {
        if let Some(entry) = self.handles.get_mut(&handle.0) {
            entry.metrics = RectMetrics::from(rect);
            true
        } else {
            false
        }
    }

    /// Get current metrics for a handle
    pub fn get_metrics(&self, handle: RectHandle) -> Option<RectMetrics> {
        self.handles.get(&handle.0).map(|entry| entry.metrics)
    }

    /// Get current metrics by name
    pub fn get_metrics_by_name(&self, name: &str) -> Option<RectMetrics> {
        self.name_to_handle
            .get(name)
            .and_then(|&handle_id| self.handles.get(&handle_id))
            .map(|entry| entry.metrics)
    }

    /// Get handle by name
    pub fn get_handle(&self, name: &str) -> Option<RectHandle> {
        self.name_to_handle.get(name).map(|&id| RectHandle(id))
    }

    /// Get name for a handle (if it was registered with one)
    pub fn get_name(&self, handle: RectHandle) -> Option<&String> {
        self.handles.get(&handle.0).and_then(|entry| entry.name.as_ref())
    }

    /// Remove a rectangle from the registry by handle
    pub fn unregister(&mut self, handle: RectHandle) -> bool {
        if let Some(entry) = self.handles.remove(&handle.0) {
            if let Some(name) = entry.name {
                self.name_to_handle.remove(&name);
            }
            true
        } else {
            false
        }
    }

    /// Check if a handle exists
    pub fn exists(&self, handle: RectHandle) -> bool {
        self.handles.contains_key(&handle.0)
    }

    /// Clear all registered rectangles
    pub fn clear(&mut self) {
        self.handles.clear();
        self.name_to_handle.clear();
        self.next_id = 1;
    }
}

impl Default for RectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
