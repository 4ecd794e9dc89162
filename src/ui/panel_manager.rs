//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, sidebar, lesson, status) and manages
//! their layout and interaction coordination.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{header, lesson_panel, sidebar_panel, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open an outline file
    OpenFileRequested(std::path::PathBuf),
    /// User requested a demo outline
    OpenDemoOutlineRequested,
    /// A lecture row was clicked (navigate)
    LeafActivated {
        leaf_id: String,
    },
    /// A group row was clicked (toggle expansion)
    GroupToggled {
        group_id: String,
    },
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Get theme colors for rendering
        let theme_colors = {
            let manager = state.theme.theme_manager();
            manager
                .get_theme(state.theme.current_theme_name())
                .unwrap_or_else(|| manager.current_theme())
                .colors
                .clone()
        };

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenDemoOutlineRequested => {
                        PanelInteraction::OpenDemoOutlineRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Left panel: outline sidebar
        let sidebar_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        let sidebar_response = egui::SidePanel::left("outline_sidebar")
            .default_width(state.layout.sidebar_width())
            .resizable(true)
            .frame(sidebar_frame)
            .show(ctx, |ui| {
                let heading = state
                    .outline
                    .outline()
                    .and_then(|outline| outline.title.clone())
                    .unwrap_or_else(|| "Course Outline".to_string());
                ui.heading(heading);
                ui.separator();

                if let Some(sidebar_interaction) =
                    sidebar_panel::render_sidebar_panel(ui, state, &theme_colors, loader.is_loading())
                {
                    interaction = Some(match sidebar_interaction {
                        sidebar_panel::SidebarInteraction::LeafActivated { leaf_id } => {
                            PanelInteraction::LeafActivated { leaf_id }
                        }
                        sidebar_panel::SidebarInteraction::GroupToggled { group_id } => {
                            PanelInteraction::GroupToggled { group_id }
                        }
                    });
                }
            });

        // Remember the user-resized sidebar width for persistence
        state
            .layout
            .set_sidebar_width(sidebar_response.response.rect.width());

        // Central panel: active lecture
        let lesson_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(lesson_frame)
            .show(ctx, |ui| {
                ui.heading("Lecture");
                ui.separator();
                lesson_panel::render_lesson_panel(ui, state, &theme_colors);
            });

        interaction
    }
}
