//! Shared rendering utilities and helpers.
//!
//! Low-level text shaping used across the UI components: cursor positioning,
//! width fitting, and search match highlighting with proper ANSI escape
//! sequence management. Everything except [`position_cursor`] returns a
//! `String`, so components decide when output reaches stdout.
//!
//! Widths are measured in terminal columns, so wide characters typed into the
//! search bar (CJK, for example) count double.
//!
//! # Example
//!
//! ```rust
//! use orderdeck::ui::helpers::{fit, highlighted_text};
//! use orderdeck::ui::Theme;
//!
//! let theme = Theme::default();
//! let styled = highlighted_text("Camera - #12", &[(0, 3)], &theme, &theme.colors.text_normal);
//! assert!(styled.contains("Cam"));
//! assert_eq!(fit("Camera - #12", 8), "Camera …");
//! ```

use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of display columns `text` occupies.
#[must_use]
pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Shortens `text` to at most `width` columns, marking the cut with `…`.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Fits `text` to exactly `width` columns, padding with spaces on the right.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let fitted = fit(text, width);
    let pad = width.saturating_sub(text_width(&fitted));
    format!("{fitted}{}", " ".repeat(pad))
}

/// Places `left` and `right` on one line of `width` columns.
///
/// `right` wins when space runs out; `left` is shortened first.
#[must_use]
pub fn spread(left: &str, right: &str, width: usize) -> (String, usize, String) {
    let right = fit(right, width);
    let left_room = width.saturating_sub(text_width(&right) + 1);
    let left = fit(left, left_room);
    let gap = width.saturating_sub(text_width(&left) + text_width(&right));
    (left, gap, right)
}

/// Styles `text` with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Ranges past the end of `text` are clipped, so callers may
/// pass ranges computed before the text was shortened with [`fit`]. Outside the
/// highlights the text is drawn in `base_fg`.
#[must_use]
pub fn highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, base_fg: &str) -> String {
    let base = Theme::fg(base_fg);
    if ranges.is_empty() {
        return format!("{base}{text}");
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = base.clone();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());
        if start == end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&base);

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
    out
}

/// Removes ANSI escape sequences, leaving the visible text.
#[cfg(test)]
pub(crate) fn strip_ansi(styled: &str) -> String {
    let mut out = String::new();
    let mut in_escape = false;
    for c in styled.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'm') => in_escape = false,
            (false, c) => out.push(c),
            (true, _) => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_marks_truncation() {
        assert_eq!(fit("Watch", 10), "Watch");
        assert_eq!(fit("Watch", 5), "Watch");
        assert_eq!(fit("Watch", 4), "Wat…");
        assert_eq!(fit("Watch", 0), "");
    }

    #[test]
    fn wide_characters_count_two_columns() {
        assert_eq!(text_width("カメラ"), 6);
        assert_eq!(text_width("Camera"), 6);
        assert_eq!(fit("カメラ", 6), "カメラ");
        assert_eq!(fit("カメラ", 5), "カメ…");
        assert_eq!(fit("カメラ", 4), "カ…");
        assert_eq!(text_width(&fit("カメラ", 4)), 3);
        assert_eq!(pad_right("カメラ", 8), "カメラ  ");
        assert_eq!(text_width(&pad_right("カメラレンズ", 7)), 7);
    }

    #[test]
    fn pad_right_has_exact_width() {
        assert_eq!(pad_right("¥5,000", 8), "¥5,000  ");
        assert_eq!(text_width(&pad_right("Camera - #4999", 6)), 6);
    }

    #[test]
    fn spread_fills_the_line() {
        let (left, gap, right) = spread("Boots - #3", "¥12,000", 30);
        assert_eq!(left, "Boots - #3");
        assert_eq!(right, "¥12,000");
        assert_eq!(text_width(&left) + gap + text_width(&right), 30);

        let (left, gap, _) = spread("Boots - #3", "¥12,000", 12);
        assert_eq!(left, "Boo…");
        assert_eq!(gap, 1);
    }

    #[test]
    fn highlights_keep_the_text_intact() {
        let theme = Theme::default();
        let styled = highlighted_text("Camera", &[(1, 2), (5, 6)], &theme, &theme.colors.text_normal);
        assert_eq!(strip_ansi(&styled), "Camera");
        assert_eq!(styled.matches(&Theme::bg(&theme.colors.match_highlight_bg)).count(), 2);
    }

    #[test]
    fn highlights_past_the_end_are_clipped() {
        let theme = Theme::default();
        let styled = highlighted_text("Cam…", &[(2, 9)], &theme, &theme.colors.text_normal);
        assert_eq!(strip_ansi(&styled), "Cam…");
        let styled = highlighted_text("Cam", &[(5, 9)], &theme, &theme.colors.text_normal);
        assert!(!styled.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }
}
