//! Pure projection of an outline into renderable sidebar rows.
//!
//! This is the seam between the tree logic and any rendering framework: given
//! the outline, the set of expanded group ids, and the active lecture id, it
//! produces the flat ordered list of rows the sidebar should display. All
//! recursion lives here; the UI layer only iterates the result.

use crate::outline::OutlineNode;
use std::collections::HashSet;

/// What tapping a row should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIntent {
    /// Toggle expansion of this group; never navigates.
    Toggle,
    /// Navigate to this lecture; never mutates expansion.
    Navigate,
}

/// One displayable sidebar row.
#[derive(Debug, Clone)]
pub struct SidebarRow {
    /// Node id this row stands for.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Display label ("1.2", order index, or positional fallback).
    pub label: String,
    /// Indentation level (0 for roots).
    pub depth: usize,
    /// True for grouping rows (toggle affordance), false for lectures.
    pub has_children: bool,
    /// True when this group's children are currently shown.
    pub is_expanded: bool,
    /// True when this row is the active lecture. Only ever set on leaves.
    pub is_active: bool,
    /// Which interaction the host should bind to this row.
    pub intent: RowIntent,
    /// For each ancestor level, whether more siblings follow below at that
    /// level. Used to draw vertical guide lines.
    pub branch_context: Vec<bool>,
    /// Whether this row is the last child of its parent.
    pub is_last_child: bool,
}

/// Projects the outline into its visible row list.
///
/// Rows are emitted in document (pre-order) order. Children of a group are
/// emitted immediately after it, and only when the group's id is in
/// `expanded`.
///
/// # Arguments
/// * `roots` - Root nodes of the outline
/// * `expanded` - Ids of currently expanded groups
/// * `active_leaf_id` - Id of the currently viewed lecture, if any
pub fn build_rows(
    roots: &[OutlineNode],
    expanded: &HashSet<String>,
    active_leaf_id: Option<&str>,
) -> Vec<SidebarRow> {
    let mut rows = Vec::new();
    push_rows(roots, expanded, active_leaf_id, 0, &[], &mut rows);
    rows
}

fn push_rows(
    nodes: &[OutlineNode],
    expanded: &HashSet<String>,
    active_leaf_id: Option<&str>,
    depth: usize,
    branch_context: &[bool],
    rows: &mut Vec<SidebarRow>,
) {
    let num_siblings = nodes.len();
    for (position, node) in nodes.iter().enumerate() {
        let is_last_child = position + 1 == num_siblings;
        let has_children = !node.is_leaf();
        let is_expanded = has_children && expanded.contains(&node.id);

        rows.push(SidebarRow {
            id: node.id.clone(),
            title: node.title.clone(),
            label: node.display_label(position),
            depth,
            has_children,
            is_expanded,
            is_active: node.is_leaf() && active_leaf_id == Some(node.id.as_str()),
            intent: if has_children {
                RowIntent::Toggle
            } else {
                RowIntent::Navigate
            },
            branch_context: branch_context.to_vec(),
            is_last_child,
        });

        if is_expanded {
            let mut child_context = branch_context.to_vec();
            child_context.push(!is_last_child);
            push_rows(
                &node.children,
                expanded,
                active_leaf_id,
                depth + 1,
                &child_context,
                rows,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, children: Vec<OutlineNode>) -> OutlineNode {
        OutlineNode {
            id: id.to_string(),
            title: format!("Title {}", id),
            numbering_label: None,
            order_index: None,
            children,
        }
    }

    fn expanded(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn row_ids(rows: &[SidebarRow]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_collapsed_groups_hide_children() {
        let roots = vec![node("A", vec![node("A1", vec![]), node("A2", vec![])])];

        let rows = build_rows(&roots, &HashSet::new(), None);
        assert_eq!(row_ids(&rows), vec!["A"]);

        let rows = build_rows(&roots, &expanded(&["A"]), None);
        assert_eq!(row_ids(&rows), vec!["A", "A1", "A2"]);
    }

    #[test]
    fn test_children_follow_parent_in_preorder() {
        let roots = vec![
            node("A", vec![node("A1", vec![node("A1a", vec![])]), node("A2", vec![])]),
            node("B", vec![]),
        ];

        let rows = build_rows(&roots, &expanded(&["A", "A1"]), None);
        assert_eq!(row_ids(&rows), vec!["A", "A1", "A1a", "A2", "B"]);

        assert_eq!(rows[0].depth, 0);
        assert_eq!(rows[1].depth, 1);
        assert_eq!(rows[2].depth, 2);
        assert_eq!(rows[3].depth, 1);
        assert_eq!(rows[4].depth, 0);
    }

    #[test]
    fn test_intents_split_by_kind() {
        let roots = vec![node("A", vec![node("A1", vec![])])];
        let rows = build_rows(&roots, &expanded(&["A"]), None);

        assert!(rows[0].has_children);
        assert_eq!(rows[0].intent, RowIntent::Toggle);
        assert!(!rows[1].has_children);
        assert_eq!(rows[1].intent, RowIntent::Navigate);
    }

    #[test]
    fn test_active_marking_only_on_leaves() {
        // "A" is both a group id and the active id; groups are never active
        let roots = vec![node("A", vec![node("A1", vec![]), node("A2", vec![])])];
        let rows = build_rows(&roots, &expanded(&["A"]), Some("A"));
        assert!(rows.iter().all(|r| !r.is_active));

        let rows = build_rows(&roots, &expanded(&["A"]), Some("A2"));
        let active: Vec<&str> = rows.iter().filter(|r| r.is_active).map(|r| r.id.as_str()).collect();
        assert_eq!(active, vec!["A2"]);
    }

    #[test]
    fn test_expanded_leaf_id_has_no_effect() {
        // A leaf id in the expansion set is ignored; leaves have nothing to show
        let roots = vec![node("A", vec![])];
        let rows = build_rows(&roots, &expanded(&["A"]), None);
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].is_expanded);
    }

    #[test]
    fn test_branch_context_tracks_following_siblings() {
        let roots = vec![
            node("A", vec![node("A1", vec![]), node("A2", vec![])]),
            node("B", vec![node("B1", vec![])]),
        ];
        let rows = build_rows(&roots, &expanded(&["A", "B"]), None);

        // Children of A: root "A" has a sibling below, so level 0 continues
        let a1 = rows.iter().find(|r| r.id == "A1").unwrap();
        assert_eq!(a1.branch_context, vec![true]);
        assert!(!a1.is_last_child);
        let a2 = rows.iter().find(|r| r.id == "A2").unwrap();
        assert!(a2.is_last_child);

        // Children of B: "B" is the last root, no continuation at level 0
        let b1 = rows.iter().find(|r| r.id == "B1").unwrap();
        assert_eq!(b1.branch_context, vec![false]);
    }

    #[test]
    fn test_label_uses_positional_fallback() {
        let roots = vec![node("A", vec![]), node("B", vec![])];
        let rows = build_rows(&roots, &HashSet::new(), None);
        assert_eq!(rows[0].label, "1");
        assert_eq!(rows[1].label, "2");
    }

    #[test]
    fn test_empty_outline_yields_no_rows() {
        let rows = build_rows(&[], &HashSet::new(), Some("X"));
        assert!(rows.is_empty());
    }
}
