//! Ledger component renderer.
//!
//! Draws the clipped ledger rows produced by the view model. A row occupies
//! `row_height` lines:
//!
//! ```text
//! line 0:  Camera - #1                                   ¥12,000
//! line 1:  TRX-10000 • To: user_0 • Oct 24, 2024   Awaiting Shipment
//! line 2+: blank, with a separator on the last line of rows 3 or more lines tall
//! ```
//!
//! With a row height of 1 the row collapses into a single compact line.

use super::header::MARGIN;
use crate::ui::helpers::{fit, highlighted_text, pad_right, position_cursor, spread, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayRow;

const ID_WIDTH: usize = 9;
const BUYER_WIDTH: usize = 12;
const DATE_WIDTH: usize = 12;
const STATUS_WIDTH: usize = 17;
const PRICE_WIDTH: usize = 9;

/// Columns used by everything but the item name on a compact line.
const COMPACT_FIXED: usize = ID_WIDTH + BUYER_WIDTH + DATE_WIDTH + STATUS_WIDTH + PRICE_WIDTH + 5;

/// Narrowest item column before the compact layout gives up its fixed columns.
const MIN_ITEM_WIDTH: usize = 8;

/// Renders the column headings at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_column_headings(row: usize, row_height: usize, theme: &Theme, width: usize) -> usize {
    let text = if row_height == 1 && width >= COMPACT_FIXED + MIN_ITEM_WIDTH {
        let item_width = width - COMPACT_FIXED;
        format!(
            "{} {} {} {} {} {:>price$}",
            pad_right("ORDER", ID_WIDTH),
            pad_right("ITEM", item_width),
            pad_right("BUYER", BUYER_WIDTH),
            pad_right("DATE", DATE_WIDTH),
            pad_right("STATUS", STATUS_WIDTH),
            "PRICE",
            price = PRICE_WIDTH,
        )
    } else {
        let (left, gap, right) = spread("TRANSACTION", "PRICE / STATUS", width);
        format!("{left}{}{right}", " ".repeat(gap))
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(MARGIN));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", fit(&text, width));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every visible line of the display rows.
///
/// # Parameters
///
/// * `top` - First row of the list area (1-indexed)
/// * `rows` - Clipped display rows from the view model
/// * `row_height` - Lines per ledger row
/// * `theme` - Active color theme
/// * `width` - Columns available to the text, excluding margin and scrollbar
pub fn render_rows(top: usize, rows: &[DisplayRow], row_height: usize, theme: &Theme, width: usize) {
    for row in rows {
        for (k, line) in row.visible_lines.clone().enumerate() {
            position_cursor(top + row.screen_line + k, 1);
            print!("{}", " ".repeat(MARGIN));
            print!("{}", row_line(row, line, row_height, theme, width));
            print!("{}", Theme::reset());
        }
    }
}

/// Styled text for one line of a ledger row, exactly `width` columns wide.
pub(super) fn row_line(row: &DisplayRow, line: usize, row_height: usize, theme: &Theme, width: usize) -> String {
    if row_height == 1 {
        return compact_line(row, theme, width);
    }

    match line {
        0 => title_line(row, theme, width),
        1 => detail_line(row, theme, width),
        _ if line + 1 == row_height => {
            format!("{}{}", Theme::fg(&theme.colors.border), "─".repeat(width))
        }
        _ => " ".repeat(width),
    }
}

fn title_line(row: &DisplayRow, theme: &Theme, width: usize) -> String {
    let (item, gap, price) = spread(&row.item_name, &row.price, width);
    format!(
        "{}{}{}{}{price}",
        highlighted_text(&item, &row.highlight_ranges, theme, &theme.colors.text_normal),
        " ".repeat(gap),
        Theme::bold(),
        Theme::fg(&theme.colors.price_fg),
    )
}

fn detail_line(row: &DisplayRow, theme: &Theme, width: usize) -> String {
    const BUYER_PREFIX: &str = " • To: ";

    let details = format!("{}{BUYER_PREFIX}{} • {}", row.id, row.buyer_name, row.date);
    let buyer_start = row.id.chars().count() + BUYER_PREFIX.chars().count();
    let ranges: Vec<(usize, usize)> = row
        .id_highlights
        .iter()
        .copied()
        .chain(
            row.buyer_highlights
                .iter()
                .map(|&(start, end)| (start + buyer_start, end + buyer_start)),
        )
        .collect();

    let (details, gap, status) = spread(&details, row.status.label(), width);
    format!(
        "{}{}{}{}{status}",
        highlighted_text(&details, &ranges, theme, &theme.colors.text_dim),
        " ".repeat(gap),
        Theme::bold(),
        Theme::fg(theme.colors.status(row.status)),
    )
}

fn compact_line(row: &DisplayRow, theme: &Theme, width: usize) -> String {
    if width < COMPACT_FIXED + MIN_ITEM_WIDTH {
        return title_line(row, theme, width);
    }

    let item_width = width - COMPACT_FIXED;
    let item = pad_right(&row.item_name, item_width);
    let dim = Theme::fg(&theme.colors.text_dim);
    let status = pad_right(row.status.label(), STATUS_WIDTH);
    let price = fit(&row.price, PRICE_WIDTH);

    format!(
        "{} {} {} {dim}{} {}{status}{} {}{}{}",
        highlighted_text(&pad_right(&row.id, ID_WIDTH), &row.id_highlights, theme, &theme.colors.text_dim),
        highlighted_text(&item, &row.highlight_ranges, theme, &theme.colors.text_normal),
        highlighted_text(&pad_right(&row.buyer_name, BUYER_WIDTH), &row.buyer_highlights, theme, &theme.colors.text_dim),
        pad_right(&row.date, DATE_WIDTH),
        Theme::fg(theme.colors.status(row.status)),
        Theme::reset(),
        Theme::fg(&theme.colors.price_fg),
        " ".repeat(PRICE_WIDTH - text_width(&price)),
        price,
    )
}
