//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the outline viewer:
//! - Header panel (file controls, progress readout, theme selector)
//! - Sidebar panel (collapsible outline with the active lecture highlighted)
//! - Lesson panel (position and metadata of the active lecture)
//! - Status bar (outline counts and payload source)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod sidebar_panel;
pub mod lesson_panel;
pub mod status_bar;
pub mod panel_manager;
