//! Sidebar row rendering logic
//!
//! Handles the visual rendering of individual outline rows in the sidebar.
//! Uses egui's painter API for custom drawing: indentation, branch guide
//! lines, toggle affordances, and the active-lecture highlight.

use eframe::egui;
use lectree::{with_alpha, RowIntent, SidebarRow, ThemeColors};

use crate::rendering::text_utils::truncate_text_to_fit;

/// Row height in pixels for sidebar rows
pub const ROW_HEIGHT: f32 = 22.0;

/// Horizontal distance per tree depth level
const INDENT_STEP: f32 = 18.0;

/// Width reserved for the expand/collapse affordance
const TOGGLE_WIDTH: f32 = 18.0;

/// Result of user interaction with a sidebar row
pub enum RowInteraction {
    /// A lecture row was clicked (navigate)
    Activated {
        leaf_id: String,
    },
    /// A group row or its arrow was clicked (toggle expansion)
    Toggled {
        group_id: String,
    },
}

/// Renders a single sidebar row with guide lines and interaction affordances
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `row` - The projected row to render
/// * `theme_colors` - Color palette for the current theme
///
/// # Returns
/// * `Option<RowInteraction>` - User interaction result (toggle or navigate)
pub fn render_sidebar_row(
    ui: &mut egui::Ui,
    row: &SidebarRow,
    theme_colors: &ThemeColors,
) -> Option<RowInteraction> {
    let indent = row.depth as f32 * INDENT_STEP;
    let start_pos = ui.cursor().min;

    // Reserve space for the entire row
    let (row_rect, row_response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), ROW_HEIGHT),
        egui::Sense::click(),
    );

    let mut interaction = None;

    if row_response.clicked() {
        // Group rows toggle, lecture rows navigate
        interaction = Some(match row.intent {
            RowIntent::Toggle => RowInteraction::Toggled {
                group_id: row.id.clone(),
            },
            RowIntent::Navigate => RowInteraction::Activated {
                leaf_id: row.id.clone(),
            },
        });
    }

    // Draw background for the active lecture, or a faint hover highlight
    if row.is_active {
        ui.painter().rect_filled(row_rect, 0.0, theme_colors.selection);
    } else if row_response.hovered() {
        ui.painter()
            .rect_filled(row_rect, 0.0, with_alpha(theme_colors.hover, 96));
    }

    // Draw branch guide lines for ancestor levels
    let branch_color = ui.visuals().text_color().gamma_multiply(0.5); // Dimmed text color
    for (level, &has_continuation) in row.branch_context.iter().enumerate() {
        if has_continuation {
            let x = start_pos.x + (level as f32 * INDENT_STEP) + INDENT_STEP / 2.0;
            ui.painter().line_segment(
                [
                    egui::pos2(x, start_pos.y),
                    egui::pos2(x, start_pos.y + ROW_HEIGHT),
                ],
                egui::Stroke::new(1.0, branch_color),
            );
        }
    }

    // Draw connector for this row
    if row.depth > 0 {
        let x = start_pos.x + ((row.depth - 1) as f32 * INDENT_STEP) + INDENT_STEP / 2.0;
        let y = start_pos.y + ROW_HEIGHT / 2.0;

        // Vertical line from top to middle
        ui.painter().line_segment(
            [egui::pos2(x, start_pos.y), egui::pos2(x, y)],
            egui::Stroke::new(1.0, branch_color),
        );

        // Horizontal line from middle to the row content
        ui.painter().line_segment(
            [egui::pos2(x, y), egui::pos2(x + INDENT_STEP / 2.0, y)],
            egui::Stroke::new(1.0, branch_color),
        );
    }

    // Toggle affordance for group rows
    if row.has_children {
        let symbol = if row.is_expanded { "▼" } else { "▶" };

        let button_id = ui.id().with(format!("toggle_{}", row.id));
        let button_rect = egui::Rect::from_center_size(
            egui::pos2(
                start_pos.x + indent + TOGGLE_WIDTH / 2.0,
                start_pos.y + ROW_HEIGHT / 2.0,
            ),
            egui::vec2(16.0, 16.0),
        );
        let button_response = ui.interact(button_rect, button_id, egui::Sense::click());

        if button_response.clicked() {
            interaction = Some(RowInteraction::Toggled {
                group_id: row.id.clone(),
            });
        }

        ui.painter().text(
            button_rect.center(),
            egui::Align2::CENTER_CENTER,
            symbol,
            egui::FontId::proportional(12.0),
            ui.visuals().text_color(),
        );
    }

    let painter = ui.painter();

    // Numbering label in dimmed text
    let label_font = egui::FontId::proportional(11.0);
    let label_galley = painter.layout_no_wrap(row.label.clone(), label_font, theme_colors.text_dim);
    let label_width = label_galley.size().x + 6.0;
    let label_pos = egui::pos2(
        start_pos.x + indent + TOGGLE_WIDTH,
        start_pos.y + (ROW_HEIGHT - label_galley.size().y) / 2.0,
    );
    painter.galley(label_pos, label_galley, theme_colors.text_dim);

    // Title, truncated to the remaining width
    let font_id = egui::FontId::proportional(13.0);
    let title_color = if row.is_active {
        theme_colors.accent
    } else if row.has_children {
        theme_colors.text_strong
    } else {
        ui.visuals().text_color()
    };

    let title_x = start_pos.x + indent + TOGGLE_WIDTH + label_width;
    let available = row_rect.right() - title_x;
    let truncated_title = truncate_text_to_fit(&row.title, available, &font_id, painter);
    painter.text(
        egui::pos2(title_x, start_pos.y + ROW_HEIGHT / 2.0),
        egui::Align2::LEFT_CENTER,
        &truncated_title,
        font_id,
        title_color,
    );

    interaction
}
