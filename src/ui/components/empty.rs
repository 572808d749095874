//! Empty state component renderer.
//!
//! Draws the placeholder shown in the list area when the filtered ledger has no
//! rows, either because nothing matched the query or because there is no data.

use crate::ui::helpers::{fit, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message centered in the list area.
///
/// # Parameters
///
/// * `top` - First row of the list area (1-indexed)
/// * `height` - Rows in the list area
/// * `empty` - Empty state information (message and subtitle)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Layout
///
/// ```text
/// [blank lines]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// [blank lines]
/// ```
pub fn render_empty_state(top: usize, height: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    if height == 0 {
        return;
    }

    let message_row = top + height.saturating_sub(2) / 2;

    let message = fit(&empty.message, cols);
    let msg_len = text_width(&message);
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(message_row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    if height < 2 {
        return;
    }

    let subtitle = fit(&empty.subtitle, cols);
    let sub_len = text_width(&subtitle);
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(message_row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{subtitle}");
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
