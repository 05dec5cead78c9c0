//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds max_width (unicode-aware).
///
/// Uses unicode width for accurate terminal column calculation, handling
/// wide characters (CJK, emoji) correctly.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Truncates from the start, keeping the tail visible (for input lines).
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut kept: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        kept.push(ch);
    }
    let mut out = String::from("…");
    out.extend(kept.into_iter().rev());
    out
}

/// Formats a number the way a user typed it: `150` not `150.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let trimmed = format!("{value:.2}");
        trimmed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Half-up rounding to a whole number for display.
pub fn round_display(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Oatmeal", 10), "Oatmeal");
        assert_eq!(truncate_with_ellipsis("Chicken breast", 8), "Chicken…");
        assert_eq!(truncate_with_ellipsis("anything", 1), "…");
    }

    #[test]
    fn test_truncate_start_keeps_tail() {
        assert_eq!(
            truncate_start_with_ellipsis("/home/sam/menus/lunch.jpg", 10),
            "…lunch.jpg"
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(150.0), "150");
        assert_eq!(format_number(80.5), "80.5");
        assert_eq!(format_number(12.346), "12.35");
    }

    #[test]
    fn test_round_display() {
        assert_eq!(round_display(374.6), 375);
        assert_eq!(round_display(2.5), 3);
        assert_eq!(round_display(0.4), 0);
    }
}
