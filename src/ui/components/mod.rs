//! Composable UI component renderers.
//!
//! Each component is responsible for rendering a specific part of the
//! interface and returns the next free row where that makes sense.
//!
//! # Components
//!
//! - [`header`]: Title and transaction count
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`list`]: Column headings and the clipped ledger rows
//! - [`scrollbar`]: Track and thumb on the right edge of the list area
//! - [`empty`]: Placeholder for an empty filtered ledger
//!
//! # Layout Modes
//!
//! - [`render_normal_mode`]: Header + Ledger + Footer
//! - [`render_search_mode`]: Header + `SearchBar` + Ledger + Footer

mod empty;
mod footer;
mod header;
mod list;
mod scrollbar;
mod search;

use crate::domain::TransactionStatus;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::{render_header, MARGIN};
use list::{render_column_headings, render_rows};
use scrollbar::render_scrollbar;
use search::render_search_bar;

/// Columns kept free between the text and the scrollbar, plus the scrollbar itself.
const SCROLLBAR_GUTTER: usize = 2;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the normal mode layout (no search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Title]
/// [Transaction count]
/// [Border]
/// [Column headings]
/// [Ledger rows]
/// [Border]
/// [Footer]
/// ```
///
/// The chrome adds up to the 7 rows `AppState` subtracts from the pane height.
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_list_area(current_row, vm, theme, cols);
    render_bottom(vm, theme, cols, rows);
}

/// Renders the search mode layout (with search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Title]
/// [Transaction count]
/// [Border]
/// [Search Bar - 3 lines]
/// [Column headings]
/// [Ledger rows]
/// [Border]
/// [Footer]
/// ```
pub fn render_search_mode(
    vm: &UIViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    render_list_area(current_row, vm, theme, cols);
    render_bottom(vm, theme, cols, rows);
}

/// Column headings followed by the rows, the empty state, and the scrollbar.
fn render_list_area(row: usize, vm: &UIViewModel, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(MARGIN + SCROLLBAR_GUTTER);
    let top = render_column_headings(row, vm.row_height, theme, width);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(top, vm.list_height, empty, theme, cols);
        return;
    }

    render_rows(top, &vm.display_rows, vm.row_height, theme, width);
    if let Some(scrollbar) = vm.scrollbar {
        render_scrollbar(top, vm.list_height, scrollbar, theme, cols);
    }
}

fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows;
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders a full-pane error message, used when the plugin could not start.
pub fn render_error(message: &str, theme: &Theme, cols: usize) {
    let mut current_row = 2;
    position_cursor(current_row, 1);
    print!("{}", " ".repeat(MARGIN));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(theme.colors.status(TransactionStatus::Dispute)));
    print!("orderdeck could not start");
    print!("{}", Theme::reset());
    current_row += 1;

    current_row = render_border(current_row, &theme.colors.border, cols);
    let width = cols.saturating_sub(MARGIN * 2).max(1);
    for chunk in message.chars().collect::<Vec<_>>().chunks(width) {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(MARGIN));
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", chunk.iter().collect::<String>());
        print!("{}", Theme::reset());
        current_row += 1;
    }
}
