//! Loaded outline and source file state management.
//!
//! This module encapsulates all state related to the loaded outline payload,
//! including the outline itself and where it came from.

use lectree::Outline;
use std::path::PathBuf;

/// State related to the loaded outline payload.
///
/// Responsibilities:
/// - Managing outline data lifetime
/// - Tracking source file path (None for demo outlines)
#[derive(Default)]
pub struct OutlineState {
    /// The currently loaded outline (if any)
    outline: Option<Outline>,
    /// Path to the currently loaded file (None for demo outlines)
    file_path: Option<PathBuf>,
}

impl OutlineState {
    /// Creates a new outline state with nothing loaded.
    pub fn new() -> Self {
        Self {
            outline: None,
            file_path: None,
        }
    }

    /// Loads a new outline, replacing any previous one.
    ///
    /// # Arguments
    /// * `outline` - The outline to load
    /// * `path` - Optional source file path (None for demo outlines)
    pub fn load_outline(&mut self, outline: Outline, path: Option<PathBuf>) {
        self.outline = Some(outline);
        self.file_path = path;
    }

    /// Clears all outline state, resetting to empty.
    pub fn clear(&mut self) {
        self.outline = None;
        self.file_path = None;
    }

    /// Returns a reference to the loaded outline, if any.
    pub fn outline(&self) -> Option<&Outline> {
        self.outline.as_ref()
    }

    /// Returns the source file path of the loaded outline, if any.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}
