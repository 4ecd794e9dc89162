pub mod outline;
pub mod rows;
pub mod payload;
pub mod writer;
pub mod demo;
pub mod theme;

// Export canonical model and traversal operations
pub use outline::{
    Outline, OutlineNode, Progress,
    find_node, flatten_leaves, compute_progress, resolve_ancestors,
    leaf_count, node_count, max_depth,
};

// Export the pure sidebar row projection
pub use rows::{SidebarRow, RowIntent, build_rows};

// Export payload ingestion
pub use payload::{load_outline, outline_from_str, outline_from_value};

// Export payload writing
pub use writer::{OutlineWriter, save_outline};

// Export demo outline generation
pub use demo::DemoOutlineBuilder;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};
