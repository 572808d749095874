//! Header component renderer.
//!
//! Renders the two-line title block: the bold title and the transaction count.

use crate::ui::helpers::{fit, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Left margin shared by the header and the ledger rows.
pub(super) const MARGIN: usize = 1;

/// Renders the header at the specified row.
///
/// # Returns
///
/// The next available row position (row + 2)
///
/// # Layout
///
/// ```text
///  Order Management
///  Tracking 5,000 individual transactions
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(MARGIN);

    let title = fit(&header.title, width);
    position_cursor(row, 1);
    print!("{}", " ".repeat(MARGIN));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", " ".repeat(width.saturating_sub(text_width(&title))));
    print!("{}", Theme::reset());

    let subtitle = fit(&header.subtitle, width);
    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(MARGIN));
    print!("{}", Theme::fg(&theme.colors.subtitle_fg));
    print!("{subtitle}");
    print!("{}", " ".repeat(width.saturating_sub(text_width(&subtitle))));
    print!("{}", Theme::reset());

    row + 2
}
