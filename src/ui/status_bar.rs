//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying outline metadata.

use crate::app::AppState;
use crate::utils::format_progress;
use eframe::egui;
use egui::RichText;
use lectree::compute_progress;

/// Renders the status panel at the bottom of the window with outline metadata
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        if let Some(outline) = state.outline.outline() {
            let progress = compute_progress(&outline.roots, state.selection.active_leaf_id());
            let title = outline.title.as_deref().unwrap_or("Untitled course");
            let lectures = outline.leaf_count();
            let sections = outline.node_count() - lectures;
            let source = state
                .outline
                .file_path()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "demo outline".to_string());

            ui.label(RichText::new(format!(
                "{} | Lectures: {} | Sections: {} | Depth: {} | Progress: {} | Source: {}",
                title,
                lectures,
                sections,
                outline.max_depth(),
                format_progress(progress),
                source
            ))
            .strong());
        } else {
            ui.label(RichText::new("No outline loaded").strong());
        }
    });
}
