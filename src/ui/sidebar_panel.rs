//! Sidebar panel UI rendering
//!
//! Handles the left panel with the collapsible course outline. The visible
//! row list comes from the pure projection in the library; this module only
//! iterates the rows and surfaces interactions.

use crate::app::AppState;
use crate::rendering::row_renderer::{self, RowInteraction};
use egui::ScrollArea;
use lectree::{build_rows, ThemeColors};

/// Result of sidebar interactions that need to be handled by the application.
pub enum SidebarInteraction {
    /// A lecture row was clicked (navigate)
    LeafActivated {
        leaf_id: String,
    },
    /// A group row was clicked (toggle expansion)
    GroupToggled {
        group_id: String,
    },
}

/// Renders the complete sidebar with the outline row list.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `theme_colors` - Color palette for the current theme
/// * `is_loading` - Whether a payload load is currently in flight
pub fn render_sidebar_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
    is_loading: bool,
) -> Option<SidebarInteraction> {
    if is_loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading outline…");
        });
        return None;
    }

    let outline = match state.outline.outline() {
        Some(outline) => outline,
        None => {
            ui.label("No outline loaded");
            return None;
        }
    };

    if outline.roots.is_empty() {
        ui.label("Outline is empty");
        return None;
    }

    let rows = build_rows(
        &outline.roots,
        state.expansion.expanded_set(),
        state.selection.active_leaf_id(),
    );

    let mut interaction: Option<SidebarInteraction> = None;

    ScrollArea::vertical()
        .id_salt("sidebar_scroll_area")
        .show(ui, |ui| {
            for row in &rows {
                if let Some(row_interaction) =
                    row_renderer::render_sidebar_row(ui, row, theme_colors)
                {
                    interaction = Some(match row_interaction {
                        RowInteraction::Activated { leaf_id } => {
                            SidebarInteraction::LeafActivated { leaf_id }
                        }
                        RowInteraction::Toggled { group_id } => {
                            SidebarInteraction::GroupToggled { group_id }
                        }
                    });
                }
            }
        });

    interaction
}
