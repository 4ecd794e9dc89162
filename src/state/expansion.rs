//! Sidebar expansion state management.
//!
//! Tracks which grouping nodes are currently open. The set starts empty, is
//! seeded at most once per outline load from the active lecture's ancestor
//! chain, and afterwards changes only through explicit user toggles.

use std::collections::HashSet;

/// State related to sidebar group expansion.
///
/// Responsibilities:
/// - Tracking which groups are expanded
/// - Providing intent-revealing expansion queries
/// - Seeding the auto-expand-to-current chain on load
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    /// Set of expanded group ids
    expanded: HashSet<String>,
}

impl ExpansionState {
    /// Creates a new expansion state with no expanded groups.
    pub fn new() -> Self {
        Self {
            expanded: HashSet::new(),
        }
    }

    /// Clears all expansion state (collapses all groups).
    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    // ===== Expansion Queries =====

    /// Returns a reference to the set of expanded group ids.
    ///
    /// Handed to the pure row projection, which needs direct access to the
    /// HashSet.
    pub fn expanded_set(&self) -> &HashSet<String> {
        &self.expanded
    }

    /// Returns true if the given group is currently expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    // ===== Expansion Mutations =====

    /// Expands the given group.
    ///
    /// # Returns
    /// `true` if the group was newly expanded, `false` if already expanded.
    pub fn expand(&mut self, id: impl Into<String>) -> bool {
        self.expanded.insert(id.into())
    }

    /// Collapses the given group.
    ///
    /// # Returns
    /// `true` if the group was expanded and is now collapsed.
    pub fn collapse(&mut self, id: &str) -> bool {
        self.expanded.remove(id)
    }

    /// Toggles the given group: adds it if absent, removes it if present.
    ///
    /// # Returns
    /// `true` if the group is expanded after the toggle.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.collapse(id) {
            false
        } else {
            self.expand(id);
            true
        }
    }

    /// Seeds the expansion set from the ancestor chain of the active lecture,
    /// so the lecture is visible without manual expansion. Called at most once
    /// per outline load; later navigation never re-runs it.
    pub fn seed_from_ancestors(&mut self, ancestors: &[String]) {
        for id in ancestors {
            self.expand(id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut state = ExpansionState::new();

        assert!(state.toggle("A"));
        assert!(state.is_expanded("A"));

        assert!(!state.toggle("A"));
        assert!(!state.is_expanded("A"));
    }

    #[test]
    fn test_seed_from_ancestors() {
        let mut state = ExpansionState::new();
        state.seed_from_ancestors(&["root".to_string(), "mid".to_string()]);

        assert!(state.is_expanded("root"));
        assert!(state.is_expanded("mid"));
        assert!(!state.is_expanded("other"));
    }

    #[test]
    fn test_seed_keeps_existing_expansion() {
        let mut state = ExpansionState::new();
        state.expand("manual");
        state.seed_from_ancestors(&["root".to_string()]);

        assert!(state.is_expanded("manual"));
        assert!(state.is_expanded("root"));
    }

    #[test]
    fn test_clear() {
        let mut state = ExpansionState::new();
        state.expand("A");
        state.expand("B");
        state.clear();
        assert!(!state.is_expanded("A"));
        assert!(!state.is_expanded("B"));
    }
}
