//! Scrollbar component renderer.
//!
//! A one-column track on the right edge of the list area. The thumb geometry
//! comes from the view model, which derives it from the full content height.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ScrollbarInfo;

/// Renders the scrollbar in column `col` over `height` rows starting at `top`.
pub fn render_scrollbar(top: usize, height: usize, scrollbar: ScrollbarInfo, theme: &Theme, col: usize) {
    for line in 0..height {
        position_cursor(top + line, col);
        if is_thumb(scrollbar, line) {
            print!("{}█", Theme::fg(&theme.colors.scrollbar_thumb));
        } else {
            print!("{}│", Theme::fg(&theme.colors.scrollbar_track));
        }
    }
    print!("{}", Theme::reset());
}

const fn is_thumb(scrollbar: ScrollbarInfo, line: usize) -> bool {
    line >= scrollbar.thumb_start && line < scrollbar.thumb_start + scrollbar.thumb_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_covers_its_lines() {
        let bar = ScrollbarInfo { thumb_start: 3, thumb_len: 2 };
        let covered: Vec<usize> = (0..10).filter(|line| is_thumb(bar, *line)).collect();
        assert_eq!(covered, vec![3, 4]);
    }
}
