//! Application-level coordination and workflow management.
//!
//! Handles high-level application operations like payload loading, error
//! handling, and the sidebar interaction rules (toggle vs navigate).

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use lectree::resolve_ancestors;
use std::path::PathBuf;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing payload loading workflows
/// - Handling loading completion
/// - Coordinating demo outline generation
/// - Applying sidebar interaction rules
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous outline file loading.
    ///
    /// Immediately clears previous outline data to show the loading indicator.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        // Immediately clear previous outline data to show loading indicator
        state.reset_outline_state();

        // Start async loading
        loader.start_file_load(path, ctx);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { outline, path } => {
                state.outline.load_outline(outline, path);
                state.error_message = None;
                state.expansion.clear();
                state.selection.clear();

                if let Some(target) = state.pending_active_leaf.take() {
                    Self::seed_active_lecture(state, &target);
                }
                true
            }
            LoadResult::Error(error_msg) => {
                state.error_message = Some(format!("Error loading outline: {}", error_msg));
                state.outline.clear();
                true
            }
            LoadResult::None => {
                // No result available yet (still loading or no operation active)
                false
            }
        }
    }

    /// Generates and loads a demo outline in-memory.
    ///
    /// Useful for testing and demonstration purposes.
    pub fn open_demo_outline(state: &mut AppState, loader: &mut AsyncLoader) {
        let outline = loader.load_demo_outline();
        state.reset_outline_state();
        state.outline.load_outline(outline, None);
    }

    /// Activates a lecture right after an outline load and expands its
    /// ancestor chain so it is visible without manual expansion.
    ///
    /// Runs once per load. If the id is not found anywhere in the outline the
    /// expansion set is left untouched; progress will simply show 0.
    fn seed_active_lecture(state: &mut AppState, leaf_id: &str) {
        state.selection.set_active_leaf(leaf_id);

        if let Some(outline) = state.outline.outline() {
            if let Some(ancestors) = resolve_ancestors(&outline.roots, leaf_id) {
                state.expansion.seed_from_ancestors(&ancestors);
            }
        }
    }

    /// Handles a tap on a lecture row: navigation only.
    ///
    /// Expansion state is deliberately not touched here; within a sidebar
    /// session it evolves purely from user toggles.
    pub fn handle_leaf_activated(state: &mut AppState, leaf_id: &str) {
        state.selection.set_active_leaf(leaf_id);
    }

    /// Handles a tap on a group row: toggles its expansion, never navigates.
    pub fn handle_group_toggled(state: &mut AppState, group_id: &str) {
        state.expansion.toggle(group_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectree::{Outline, OutlineNode};

    fn leaf(id: &str) -> OutlineNode {
        OutlineNode {
            id: id.to_string(),
            title: format!("Lecture {}", id),
            numbering_label: None,
            order_index: None,
            children: Vec::new(),
        }
    }

    fn group(id: &str, children: Vec<OutlineNode>) -> OutlineNode {
        OutlineNode {
            id: id.to_string(),
            title: format!("Unit {}", id),
            numbering_label: None,
            order_index: None,
            children,
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        let outline = Outline {
            title: None,
            roots: vec![group("U1", vec![group("C1", vec![leaf("L1")]), leaf("L2")])],
        };
        state.outline.load_outline(outline, None);
        state
    }

    #[test]
    fn test_seed_expands_ancestor_chain() {
        let mut state = loaded_state();
        ApplicationCoordinator::seed_active_lecture(&mut state, "L1");

        assert_eq!(state.selection.active_leaf_id(), Some("L1"));
        assert!(state.expansion.is_expanded("U1"));
        assert!(state.expansion.is_expanded("C1"));
    }

    #[test]
    fn test_seed_with_unknown_id_leaves_expansion_untouched() {
        let mut state = loaded_state();
        ApplicationCoordinator::seed_active_lecture(&mut state, "missing");

        assert_eq!(state.selection.active_leaf_id(), Some("missing"));
        assert!(!state.expansion.is_expanded("U1"));
        assert!(!state.expansion.is_expanded("C1"));
    }

    #[test]
    fn test_navigation_does_not_touch_expansion() {
        let mut state = loaded_state();
        ApplicationCoordinator::seed_active_lecture(&mut state, "L1");

        // User collapses the unit, then navigates to another lecture
        ApplicationCoordinator::handle_group_toggled(&mut state, "U1");
        assert!(!state.expansion.is_expanded("U1"));

        ApplicationCoordinator::handle_leaf_activated(&mut state, "L2");
        assert_eq!(state.selection.active_leaf_id(), Some("L2"));
        assert!(!state.expansion.is_expanded("U1"));
        assert!(state.expansion.is_expanded("C1"));
    }

    #[test]
    fn test_group_toggle_round_trip() {
        let mut state = loaded_state();

        ApplicationCoordinator::handle_group_toggled(&mut state, "U1");
        assert!(state.expansion.is_expanded("U1"));

        ApplicationCoordinator::handle_group_toggled(&mut state, "U1");
        assert!(!state.expansion.is_expanded("U1"));
    }

    #[test]
    fn test_demo_outline_load() {
        let mut state = AppState::new();
        let mut loader = AsyncLoader::new();

        ApplicationCoordinator::open_demo_outline(&mut state, &mut loader);

        assert!(state.outline.outline().is_some());
        assert!(state.outline.file_path().is_none());
        assert_eq!(state.selection.active_leaf_id(), None);
    }
}
