//! Header panel UI rendering
//!
//! Handles the top menu bar with file controls, the progress readout, and the
//! theme selector.

use crate::app::AppState;
use crate::utils::format_progress;
use eframe::egui;
use egui::Color32;
use lectree::compute_progress;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked an outline file to open
    OpenFileRequested(PathBuf),
    /// User clicked "Demo Outline"
    OpenDemoOutlineRequested,
}

/// Renders the application header with file controls and the theme selector
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📂 Open Outline").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Outline Payloads", &["json", "br"])
                .add_filter("All Files", &["*"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🎓 Demo Outline").clicked() {
            interaction = Some(HeaderInteraction::OpenDemoOutlineRequested);
        }

        ui.separator();

        if let Some(outline) = state.outline.outline() {
            let progress = compute_progress(&outline.roots, state.selection.active_leaf_id());
            ui.label(format!("Progress: {}", format_progress(progress)));
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(
                            &mut current_theme,
                            theme_name.to_string(),
                            theme_name,
                        );
                    }
                });

            // Save theme preference if it changed
            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
