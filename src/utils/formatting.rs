//! Text formatting utilities for the outline viewer.
//!
//! Helper functions for formatting progress values in a human-readable way.

use lectree::Progress;

/// Formats a progress position for compact display ("3 / 12").
///
/// A current value of 0 means no lecture is active (or the active id matched
/// nothing) and is shown as-is.
pub fn format_progress(progress: Progress) -> String {
    format!("{} / {}", progress.current, progress.total)
}

/// Formats the "Lecture N of M" position line.
///
/// Returns None when no lecture is active, so callers can skip the line.
pub fn format_lecture_position(progress: Progress) -> Option<String> {
    if progress.current == 0 {
        None
    } else {
        Some(format!("Lecture {} of {}", progress.current, progress.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_progress() {
        assert_eq!(format_progress(Progress { current: 3, total: 12 }), "3 / 12");
        assert_eq!(format_progress(Progress { current: 0, total: 12 }), "0 / 12");
        assert_eq!(format_progress(Progress { current: 0, total: 0 }), "0 / 0");
    }

    #[test]
    fn test_format_lecture_position() {
        assert_eq!(
            format_lecture_position(Progress { current: 3, total: 12 }),
            Some("Lecture 3 of 12".to_string())
        );
        assert_eq!(format_lecture_position(Progress { current: 0, total: 12 }), None);
    }
}
