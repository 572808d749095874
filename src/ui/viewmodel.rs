//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold no
//! business logic, only display-ready data: which ledger rows to draw, which of
//! their lines survive clipping, and where each one lands inside the list area.
//!
//! # Example
//!
//! ```rust
//! use orderdeck::ui::viewmodel::{EmptyState, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo {
//!         title: "Order Management".to_string(),
//!         subtitle: "Tracking 0 individual transactions".to_string(),
//!     },
//!     display_rows: vec![],
//!     row_height: 2,
//!     list_height: 10,
//!     scrollbar: None,
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: Some(EmptyState {
//!         message: "No transactions found".to_string(),
//!         subtitle: "Try adjusting your search criteria".to_string(),
//!     }),
//!     search_bar: None,
//! };
//! assert!(vm.display_rows.is_empty());
//! ```

use crate::domain::TransactionStatus;
use std::ops::Range;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title block above the ledger.
    pub header: HeaderInfo,

    /// Materialized ledger rows that overlap the list area, in order.
    pub display_rows: Vec<DisplayRow>,

    /// Lines per ledger row.
    pub row_height: usize,

    /// Lines available to the list area.
    pub list_height: usize,

    /// Scrollbar thumb, present when the ledger is taller than the list area.
    pub scrollbar: Option<ScrollbarInfo>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Placeholder shown instead of rows when the filtered ledger is empty.
    pub empty_state: Option<EmptyState>,

    /// Search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,
}

/// Display information for a single ledger row.
///
/// A row spans `row_height` lines. Rows cut by the top or bottom edge of the list
/// area carry only the lines that remain visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Position of the row within the filtered ledger.
    pub index: usize,

    /// List-area line on which the first visible line is drawn.
    pub screen_line: usize,

    /// Lines of the row (within `0..row_height`) that are visible.
    pub visible_lines: Range<usize>,

    pub id: String,
    pub item_name: String,
    pub buyer_name: String,
    pub date: String,
    pub price: String,
    pub status: TransactionStatus,

    /// Character ranges of `item_name` that match the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,

    /// Matching character ranges of `buyer_name`.
    pub buyer_highlights: Vec<(usize, usize)>,

    /// Matching character ranges of `id`.
    pub id_highlights: Vec<(usize, usize)>,
}

/// Visible part of one ledger row after clipping to the list area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClip {
    /// List-area line of the first visible line.
    pub screen_line: usize,
    /// Visible lines of the row.
    pub lines: Range<usize>,
}

impl LineClip {
    /// Clips a row at absolute `offset` against the area `[scroll, scroll + height)`.
    ///
    /// Returns `None` for rows entirely outside the area (buffer rows).
    ///
    /// # Example
    ///
    /// ```rust
    /// use orderdeck::ui::viewmodel::LineClip;
    ///
    /// // A 2-line row at offset 100 with the view scrolled to 101 shows its second line.
    /// let clip = LineClip::clip(100, 2, 101, 20).unwrap();
    /// assert_eq!(clip.screen_line, 0);
    /// assert_eq!(clip.lines, 1..2);
    /// assert!(LineClip::clip(98, 2, 101, 20).is_none());
    /// ```
    #[must_use]
    pub fn clip(offset: usize, row_height: usize, scroll: usize, height: usize) -> Option<Self> {
        let area_end = scroll.saturating_add(height);
        if height == 0 || offset.saturating_add(row_height) <= scroll || offset >= area_end {
            return None;
        }

        let first = scroll.saturating_sub(offset);
        let end = row_height.min(area_end - offset);
        Some(Self {
            screen_line: offset + first - scroll,
            lines: first..end,
        })
    }
}

/// Scrollbar thumb geometry, in list-area lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarInfo {
    /// First line covered by the thumb.
    pub thumb_start: usize,
    /// Lines covered by the thumb.
    pub thumb_len: usize,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    /// Count of transactions in the current view.
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: scroll  /: search  q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No transactions found").
    pub message: String,

    /// Secondary explanatory text (e.g., "Try adjusting your search criteria").
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
    /// Whether keys currently edit the query.
    pub typing: bool,
}
