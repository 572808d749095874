//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It owns the [`WindowedList`] over the order ledger, the search query, the input
//! mode, the active theme, and the last pane size reported by Zellij.
//!
//! # Viewport Sizing
//!
//! The list viewport is the pane height minus the surrounding chrome (header,
//! borders, column headings, footer, and the search bar while it is open). It is
//! recomputed whenever the pane is resized or the search bar opens or closes.
//!
//! # Example
//!
//! ```rust
//! use orderdeck::app::AppState;
//! use orderdeck::data::generate_transactions;
//! use orderdeck::ui::Theme;
//! use orderdeck::virtual_list::RowGeometry;
//!
//! let ledger = generate_transactions(5000, 2024);
//! let mut state = AppState::new(ledger, RowGeometry::new(2, 5)?, Theme::default());
//! state.resize(40, 120);
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.header.subtitle, "Tracking 5,000 individual transactions");
//! # Ok::<(), orderdeck::OrderdeckError>(())
//! ```

use super::modes::InputMode;
use crate::domain::{group_thousands, Transaction};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    LineClip, DisplayRow, EmptyState, FooterInfo, HeaderInfo, ScrollbarInfo,
    SearchBarInfo, UIViewModel,
};
use crate::virtual_list::{RowGeometry, WindowedList};

/// Rows used by the blank top line, title, subtitle, border, column headings,
/// bottom border, and footer.
const NORMAL_CHROME_ROWS: usize = 7;

/// Rows used by the search bar frame.
const SEARCH_BAR_ROWS: usize = 3;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Virtualized view over the order ledger.
    pub list: WindowedList<Transaction>,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current search query string.
    ///
    /// Pushed to the list on every edit; the list ignores unchanged queries.
    pub search_query: String,

    /// Active color scheme.
    pub theme: Theme,

    /// Scheme swapped in by the theme toggle.
    pub alternate_theme: Theme,

    /// Pane height in rows, as last reported by Zellij.
    pub pane_rows: usize,

    /// Pane width in columns, as last reported by Zellij.
    pub pane_cols: usize,
}

impl AppState {
    /// Creates application state over a ledger.
    ///
    /// The viewport starts with zero height; the first [`AppState::resize`] gives
    /// it the pane's real size.
    #[must_use]
    pub fn new(transactions: Vec<Transaction>, geometry: RowGeometry, theme: Theme) -> Self {
        let alternate_theme = theme.counterpart();
        Self {
            list: WindowedList::new(transactions, geometry, 0),
            input_mode: InputMode::Normal,
            search_query: String::new(),
            theme,
            alternate_theme,
            pane_rows: 0,
            pane_cols: 0,
        }
    }

    /// Empty ledger with default geometry, used until the plugin is configured.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(Vec::new(), RowGeometry::default(), Theme::default())
    }

    /// Records a new pane size and resizes the list viewport.
    ///
    /// Returns `true` if the pane size changed.
    pub fn resize(&mut self, rows: usize, cols: usize) -> bool {
        if rows == self.pane_rows && cols == self.pane_cols {
            return false;
        }
        self.pane_rows = rows;
        self.pane_cols = cols;
        self.sync_viewport();
        true
    }

    /// Recomputes the list viewport height from the pane size and input mode.
    pub fn sync_viewport(&mut self) -> bool {
        let height = self.calculate_available_rows(self.pane_rows);
        self.list.resize(height)
    }

    /// Pushes the current search query to the list.
    ///
    /// Returns `true` if the filtered view or window changed.
    pub fn apply_search_filter(&mut self) -> bool {
        self.list.set_query(&self.search_query)
    }

    /// Swaps the active and alternate themes.
    pub fn toggle_theme(&mut self) {
        std::mem::swap(&mut self.theme, &mut self.alternate_theme);
        tracing::debug!(theme = %self.theme.name, "theme toggled");
    }

    /// Computes a renderable UI view model from current state.
    ///
    /// # Clipping
    ///
    /// Every materialized row is placed at its absolute offset minus the scroll
    /// offset. Buffer rows fall entirely outside the list area and are dropped;
    /// rows straddling an edge keep only their visible lines.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let geometry = self.list.geometry();
        let viewport = self.list.viewport();

        let empty_state = self.list.is_empty().then(|| self.compute_empty_state());

        let display_rows = self
            .list
            .materialized()
            .filter_map(|(placement, trx)| {
                let lines = LineClip::clip(
                    placement.offset,
                    geometry.row_height(),
                    viewport.scroll_offset,
                    viewport.height,
                )?;
                Some(self.compute_display_row(trx, placement.index, lines))
            })
            .collect();

        UIViewModel {
            header: self.compute_header(),
            display_rows,
            row_height: geometry.row_height(),
            list_height: viewport.height,
            scrollbar: self.compute_scrollbar(),
            footer: self.compute_footer(),
            empty_state,
            search_bar: self.compute_search_bar(),
        }
    }

    fn compute_display_row(&self, trx: &Transaction, index: usize, lines: LineClip) -> DisplayRow {
        DisplayRow {
            index,
            screen_line: lines.screen_line,
            visible_lines: lines.lines,
            id: trx.id.clone(),
            item_name: trx.item_name.clone(),
            buyer_name: trx.buyer_name.clone(),
            date: trx.formatted_date(),
            price: trx.formatted_price(),
            status: trx.status,
            highlight_ranges: self.compute_highlight_ranges(&trx.item_name),
            buyer_highlights: self.compute_highlight_ranges(&trx.buyer_name),
            id_highlights: self.compute_highlight_ranges(&trx.id),
        }
    }

    /// Computes character ranges of `text` containing the search query.
    ///
    /// Matching ignores case. Text whose lowercase form has a different number of
    /// characters is left unhighlighted, since its indices would not line up.
    fn compute_highlight_ranges(&self, text: &str) -> Vec<(usize, usize)> {
        if self.search_query.is_empty() {
            return vec![];
        }

        let haystack = text.to_lowercase();
        let needle = self.search_query.to_lowercase();
        if haystack.chars().count() != text.chars().count() {
            return vec![];
        }

        let needle_chars = needle.chars().count();
        haystack
            .match_indices(&needle)
            .map(|(byte_idx, _)| {
                let start = haystack[..byte_idx].chars().count();
                (start, start + needle_chars)
            })
            .collect()
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: "Order Management".to_string(),
            subtitle: format!(
                "Tracking {} individual transactions",
                group_thousands(self.list.filtered_len() as u64)
            ),
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.list.total_len() == 0 {
            EmptyState {
                message: "No transactions yet".to_string(),
                subtitle: "Sales will appear here once orders come in".to_string(),
            }
        } else {
            EmptyState {
                message: "No transactions found".to_string(),
                subtitle: "Try adjusting your search criteria".to_string(),
            }
        }
    }

    /// Computes the scrollbar thumb from the full content height.
    ///
    /// The thumb length is the visible fraction of the content and its position is
    /// the scrolled fraction of the scrollable range, matching what a fully laid out
    /// list would show.
    fn compute_scrollbar(&self) -> Option<ScrollbarInfo> {
        let track = self.list.viewport().height;
        let content = self.list.content_height();
        if track == 0 || content <= track {
            return None;
        }

        let thumb_len = (track * track / content).clamp(1, track);
        let max_scroll = self.list.max_scroll_offset();
        let travel = track - thumb_len;
        let thumb_start = if max_scroll == 0 {
            0
        } else {
            self.list.viewport().scroll_offset * travel / max_scroll
        };

        Some(ScrollbarInfo {
            thumb_start,
            thumb_len,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        use crate::app::modes::SearchFocus;

        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: browse results  Ctrl+n/p: scroll  Type to filter"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: scroll  PgUp/PgDn: page  g/G: top/bottom"
            }
            InputMode::Normal => {
                "j/k: scroll  PgUp/PgDn: page  g/G: top/bottom  /: search  t: theme  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        use crate::app::modes::SearchFocus;

        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.search_query.clone(),
                typing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal => None,
        }
    }

    /// Calculates rows available to the ledger after subtracting UI chrome.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(NORMAL_CHROME_ROWS),
            InputMode::Search(_) => total_rows.saturating_sub(NORMAL_CHROME_ROWS + SEARCH_BAR_ROWS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::SearchFocus;
    use crate::data::generate_transactions;

    fn state(count: usize, row_height: usize) -> AppState {
        let mut state = AppState::new(
            generate_transactions(count, 9),
            RowGeometry::new(row_height, 5).unwrap(),
            Theme::default(),
        );
        state.resize(27, 100);
        state
    }

    #[test]
    fn placeholder_holds_no_ledger() {
        let mut state = AppState::placeholder();
        assert_eq!(state.list.total_len(), 0);
        assert_eq!(state.list.geometry(), RowGeometry::default());
        state.resize(27, 100);
        assert!(state.list.window().is_empty());
        assert_eq!(
            state.compute_viewmodel().empty_state.map(|e| e.message),
            Some("No transactions yet".to_string())
        );
    }

    #[test]
    fn viewport_excludes_chrome() {
        let mut state = state(100, 2);
        assert_eq!(state.list.viewport().height, 20);
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        state.sync_viewport();
        assert_eq!(state.list.viewport().height, 17);
    }

    #[test]
    fn only_visible_lines_are_displayed() {
        let mut state = state(5000, 2);
        let vm = state.compute_viewmodel();
        // 20 lines of 2-line rows, buffer rows below the fold are clipped away.
        assert_eq!(vm.display_rows.len(), 10);
        assert_eq!(vm.display_rows[0].screen_line, 0);
        assert_eq!(vm.display_rows[9].screen_line, 18);

        state.list.scroll_to(101);
        let vm = state.compute_viewmodel();
        let first = &vm.display_rows[0];
        assert_eq!(first.index, 50);
        assert_eq!(first.visible_lines, 1..2);
        assert_eq!(first.screen_line, 0);
        let last = vm.display_rows.last().unwrap();
        assert_eq!(last.index, 60);
        assert_eq!(last.visible_lines, 0..1);
        assert_eq!(last.screen_line, 19);
    }

    #[test]
    fn empty_search_shows_placeholder() {
        let mut state = state(50, 2);
        state.search_query = "no such order".to_string();
        state.apply_search_filter();
        let vm = state.compute_viewmodel();
        assert!(vm.display_rows.is_empty());
        assert_eq!(
            vm.empty_state,
            Some(EmptyState {
                message: "No transactions found".to_string(),
                subtitle: "Try adjusting your search criteria".to_string(),
            })
        );
        assert_eq!(vm.header.subtitle, "Tracking 0 individual transactions");
    }

    #[test]
    fn highlight_ranges_mark_case_insensitive_matches() {
        let mut state = state(10, 2);
        state.search_query = "CAM".to_string();
        assert_eq!(state.compute_highlight_ranges("Camera - #1"), vec![(0, 3)]);
        state.search_query = "a".to_string();
        assert_eq!(state.compute_highlight_ranges("Camera"), vec![(1, 2), (5, 6)]);
        state.search_query.clear();
        assert!(state.compute_highlight_ranges("Camera").is_empty());
    }

    #[test]
    fn buyer_and_id_matches_are_highlighted() {
        let mut state = state(100, 2);
        state.search_query = "user_42".to_string();
        state.apply_search_filter();
        let vm = state.compute_viewmodel();
        assert_eq!(vm.display_rows.len(), 1);
        let row = &vm.display_rows[0];
        assert_eq!(row.buyer_name, "user_42");
        assert_eq!(row.buyer_highlights, vec![(0, 7)]);
        assert!(row.highlight_ranges.is_empty());
        assert!(row.id_highlights.is_empty());

        state.search_query = "trx-9950".to_string();
        state.apply_search_filter();
        let vm = state.compute_viewmodel();
        assert_eq!(vm.display_rows.len(), 1);
        assert_eq!(vm.display_rows[0].id_highlights, vec![(0, 8)]);
    }

    #[test]
    fn scrollbar_tracks_scroll_position() {
        let mut state = state(100, 2);
        let bar = state.compute_viewmodel().scrollbar.unwrap();
        assert_eq!(bar, ScrollbarInfo { thumb_start: 0, thumb_len: 2 });

        state.list.scroll_to_bottom();
        let bar = state.compute_viewmodel().scrollbar.unwrap();
        assert_eq!(bar.thumb_start + bar.thumb_len, 20);
    }

    #[test]
    fn short_ledger_has_no_scrollbar() {
        let state = state(5, 2);
        assert!(state.compute_viewmodel().scrollbar.is_none());
    }

    #[test]
    fn theme_toggle_swaps_variants() {
        let mut state = state(1, 2);
        let original = state.theme.name.clone();
        state.toggle_theme();
        assert_ne!(state.theme.name, original);
        state.toggle_theme();
        assert_eq!(state.theme.name, original);
    }
}
