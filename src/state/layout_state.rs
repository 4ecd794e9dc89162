//! UI layout state management.
//!
//! Holds user-adjustable layout values that are persisted across sessions.

/// Default sidebar width in pixels.
pub const DEFAULT_SIDEBAR_WIDTH: f32 = 320.0;

/// State related to UI layout.
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// Width of the outline sidebar panel
    sidebar_width: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with default values.
    pub fn new() -> Self {
        Self {
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
        }
    }

    /// Creates a new layout state with a specific sidebar width.
    pub fn with_sidebar_width(sidebar_width: f32) -> Self {
        Self {
            sidebar_width: sidebar_width.max(120.0),
        }
    }

    /// Returns the current sidebar width.
    pub fn sidebar_width(&self) -> f32 {
        self.sidebar_width
    }

    /// Updates the sidebar width (e.g., after the user drags the splitter).
    pub fn set_sidebar_width(&mut self, width: f32) {
        self.sidebar_width = width.max(120.0);
    }
}
