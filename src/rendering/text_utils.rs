//! Text rendering utilities
//!
//! Shared utilities for text measurement and truncation.

use eframe::egui;

/// Truncates text to fit within a given width, adding ".." if truncated
///
/// # Arguments
/// * `text` - The text to potentially truncate
/// * `available_width` - Maximum width available for the text
/// * `font_id` - Font to use for measuring text
/// * `painter` - Painter for text measurement
///
/// # Returns
/// * Truncated string that fits within the available width
pub fn truncate_text_to_fit(
    text: &str,
    available_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    let padding = 8.0; // 4.0 on each side
    let max_width = available_width - padding;

    if max_width <= 0.0 {
        return String::new();
    }

    let measure = |s: String| -> f32 {
        painter
            .layout_no_wrap(s, font_id.clone(), egui::Color32::WHITE)
            .size()
            .x
    };

    if measure(text.to_string()) <= max_width {
        return text.to_string();
    }

    let ellipsis = "..";
    let ellipsis_width = measure(ellipsis.to_string());
    if ellipsis_width >= max_width {
        return String::new();
    }

    let available_for_text = max_width - ellipsis_width;

    // Binary search for the longest prefix that fits
    let mut low = 0;
    let mut high = text.chars().count();
    let mut best_fit = 0;

    while low <= high {
        let mid = (low + high) / 2;
        let prefix: String = text.chars().take(mid).collect();

        if measure(prefix) <= available_for_text {
            best_fit = mid;
            low = mid + 1;
        } else {
            if mid == 0 {
                break;
            }
            high = mid - 1;
        }
    }

    let mut result: String = text.chars().take(best_fit).collect();
    result.push_str(ellipsis);
    result
}
