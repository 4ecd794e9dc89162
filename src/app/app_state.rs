//! Centralized application state for the outline viewer.
//!
//! Composes focused state components that each manage one aspect of the
//! application's state, keeping invariants local and borrow-checker friendly.

use crate::state::{ExpansionState, LayoutState, OutlineState, SelectionState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Loaded outline and its source
    pub outline: OutlineState,

    /// Sidebar expansion state
    pub expansion: ExpansionState,

    /// Active lecture selection
    pub selection: SelectionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// UI layout state
    pub layout: LayoutState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Lecture id to activate (and auto-expand to) once the next outline
    /// load completes. Stand-in for the route parameter of the mobile client.
    pub pending_active_leaf: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            outline: OutlineState::new(),
            expansion: ExpansionState::new(),
            selection: SelectionState::new(),
            theme: ThemeState::new(),
            layout: LayoutState::new(),
            error_message: None,
            pending_active_leaf: None,
        }
    }

    /// Creates a new AppState with theme and layout settings loaded from storage.
    pub fn with_theme_and_layout(theme_name: String, sidebar_width: f32) -> Self {
        Self {
            outline: OutlineState::new(),
            expansion: ExpansionState::new(),
            selection: SelectionState::new(),
            theme: ThemeState::with_theme(theme_name),
            layout: LayoutState::with_sidebar_width(sidebar_width),
            error_message: None,
            pending_active_leaf: None,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets outline-related state when loading a new payload.
    ///
    /// Clears the outline, selection, and sidebar expansion.
    pub fn reset_outline_state(&mut self) {
        self.outline.clear();
        self.expansion.clear();
        self.selection.clear();
        self.error_message = None;
    }
}
