//! Course Outline Viewer GUI Application
//!
//! Interactive desktop viewer for lecture outline payloads using the egui
//! framework. The viewer features:
//! - Collapsible sidebar with the full course outline and guide lines
//! - Auto-expansion to the initially active lecture
//! - "Lecture N of M" progress readout
//! - Asynchronous payload loading with a loading indicator
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - Payload loading and demo outline generation
//! - `state/` - State management for outline, expansion, and selection
//! - `ui/` - UI panel rendering and interaction
//! - `rendering/` - Low-level rendering for sidebar rows
//! - `utils/` - Formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod app;
mod io;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::AsyncLoader;
use ui::panel_manager::PanelManager;

const SIDEBAR_WIDTH_KEY: &str = "sidebar_width";

/// Main application entry point that initializes and launches the outline viewer GUI.
fn main() -> eframe::Result {
    // Parse command-line arguments: optional payload file and active lecture id
    let mut args = std::env::args().skip(1);
    let initial_file = args.next().map(PathBuf::from);
    let initial_lecture = args.next();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_title("Course Outline Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Course Outline Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(OutlineViewerApp::new(cc, initial_file, initial_lecture)))),
    )
}

/// The main outline viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles payload loading and sidebar interaction rules
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct OutlineViewerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous payload loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl Default for OutlineViewerApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
            loader: AsyncLoader::new(),
            pending_file_load: None,
        }
    }
}

impl OutlineViewerApp {
    /// Creates a new viewer instance with theme and layout settings loaded
    /// from persistent storage. Optionally accepts an initial payload path and
    /// an initially active lecture id (the route-parameter stand-in).
    fn new(
        cc: &eframe::CreationContext,
        initial_file: Option<PathBuf>,
        initial_lecture: Option<String>,
    ) -> Self {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);

        // Load sidebar width with a sensible default
        let default_sidebar_width = 320.0;
        let sidebar_width: f32 = SettingsCoordinator::load_setting_or(
            cc.storage,
            SIDEBAR_WIDTH_KEY,
            default_sidebar_width,
        );

        let mut state = AppState::with_theme_and_layout(current_theme_name, sidebar_width);
        state.pending_active_leaf = initial_lecture;

        Self {
            state,
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(
        &mut self,
        interaction: ui::panel_manager::PanelInteraction,
        ctx: &egui::Context,
    ) {
        match interaction {
            ui::panel_manager::PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            ui::panel_manager::PanelInteraction::OpenDemoOutlineRequested => {
                ApplicationCoordinator::open_demo_outline(&mut self.state, &mut self.loader);
            }
            ui::panel_manager::PanelInteraction::LeafActivated { leaf_id } => {
                ApplicationCoordinator::handle_leaf_activated(&mut self.state, &leaf_id);
            }
            ui::panel_manager::PanelInteraction::GroupToggled { group_id } => {
                ApplicationCoordinator::handle_group_toggled(&mut self.state, &group_id);
            }
        }
    }
}

impl eframe::App for OutlineViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(
            storage,
            SIDEBAR_WIDTH_KEY,
            &self.state.layout.sidebar_width(),
        );
    }

    /// Main update loop that renders all UI panels and handles application state.
    ///
    /// 1. Check for async loading completion
    /// 2. Apply theme
    /// 3. Load initial file if specified via command line
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Check for async loading completion
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        // Apply current theme
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist preferences during frame (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            storage.set_string(
                "theme_preference",
                self.state.theme.current_theme_name().to_string(),
            );
            SettingsCoordinator::save_setting(
                storage,
                SIDEBAR_WIDTH_KEY,
                &self.state.layout.sidebar_width(),
            );
        }

        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        // Render all panels and get interaction result
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
