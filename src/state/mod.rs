//! State management modules for the outline viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Outline state (loaded outline, source path)
//! - Expansion state (which groups are open in the sidebar)
//! - Selection state (the active lecture)
//! - Theme state (theme manager, current theme)
//! - Layout state (sidebar width)

mod outline_state;
mod expansion;
mod selection;
mod theme_state;
mod layout_state;

pub use outline_state::OutlineState;
pub use expansion::ExpansionState;
pub use selection::SelectionState;
pub use theme_state::ThemeState;
pub use layout_state::LayoutState;
