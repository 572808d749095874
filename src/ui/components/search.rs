//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame and query
//! text display.

use crate::ui::helpers::{pad_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 1;

/// Renders the search input box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 3, since search box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────────┐ [margin]
/// [margin] │ Search by item, buyer, id: ▏ │ [margin]
/// [margin] └──────────────────────────────┘ [margin]
/// ```
///
/// The border is drawn dimmed while the results have focus, and a cursor
/// marker follows the query while typing.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    let border = if search.typing {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}");
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", query_line(search, inner_width));
    print!("{border}│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}");
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Prompt and query padded to exactly `inner_width` columns.
fn query_line(search: &SearchBarInfo, inner_width: usize) -> String {
    let cursor = if search.typing { "▏" } else { "" };
    pad_right(
        &format!(" Search by item, buyer, id: {}{cursor}", search.query),
        inner_width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::text_width;

    fn info(query: &str) -> SearchBarInfo {
        SearchBarInfo {
            query: query.to_string(),
            typing: true,
        }
    }

    #[test]
    fn query_line_fills_the_box() {
        let line = query_line(&info("lens"), 40);
        assert!(line.starts_with(" Search by item, buyer, id: lens▏"));
        assert_eq!(text_width(&line), 40);
    }

    #[test]
    fn wide_query_keeps_the_border_aligned() {
        let line = query_line(&info("カメラ"), 40);
        assert!(line.contains("カメラ▏"));
        assert_eq!(text_width(&line), 40);

        let cut = query_line(&info("カメラカメラカメラ"), 30);
        assert!(cut.contains('…'));
        assert_eq!(text_width(&cut), 30);
    }
}
