//! Lesson panel UI rendering
//!
//! Shows position and metadata for the active lecture. This panel stands in
//! for the lesson screen of the mobile client; actual lecture content is a
//! backend concern.

use crate::app::AppState;
use crate::utils::format_lecture_position;
use eframe::egui;
use egui::RichText;
use lectree::{compute_progress, find_node, ThemeColors};

/// Renders the lesson panel for the currently active lecture.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `theme_colors` - Color palette for the current theme
pub fn render_lesson_panel(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) {
    let outline = match state.outline.outline() {
        Some(outline) => outline,
        None => {
            ui.label("Open an outline to get started");
            return;
        }
    };

    let active_id = match state.selection.active_leaf_id() {
        Some(id) => id,
        None => {
            ui.label("Select a lecture from the outline");
            return;
        }
    };

    match find_node(&outline.roots, active_id) {
        Some(node) => {
            ui.label(RichText::new(&node.title).heading().color(theme_colors.accent));

            if let Some(label) = &node.numbering_label {
                ui.label(RichText::new(format!("Section {}", label)).color(theme_colors.text_dim));
            }

            let progress = compute_progress(&outline.roots, Some(active_id));
            if let Some(position) = format_lecture_position(progress) {
                ui.label(RichText::new(position).strong());
            }

            ui.separator();
            ui.label(
                RichText::new(format!("Lecture id: {}", node.id)).color(theme_colors.text_dim),
            );
        }
        None => {
            // Stale route parameter; progress already shows 0 of N
            ui.colored_label(
                theme_colors.warning,
                format!("Lecture '{}' is not part of this outline", active_id),
            );
        }
    }
}
