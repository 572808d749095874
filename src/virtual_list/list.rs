//! Stateful windowed list controller.
//!
//! [`WindowedList`] owns a record set, its search index, the current
//! [`FilteredView`], and the [`Viewport`]. Every mutation recomputes the window
//! and the row placements immediately and reports whether anything a renderer
//! draws has changed, so hosts can skip redundant frames.
//!
//! # Example
//!
//! ```rust
//! use orderdeck::virtual_list::{Record, RowGeometry, Searchable, Window, WindowedList};
//!
//! #[derive(Debug)]
//! struct Row(String);
//! impl Record for Row {
//!     type Key = str;
//!     fn key(&self) -> &str { &self.0 }
//! }
//! impl Searchable for Row {
//!     fn search_fields(&self) -> Vec<&str> { vec![&self.0] }
//! }
//!
//! let rows = (0..5000).map(|i| Row(format!("row-{i}"))).collect();
//! let mut list = WindowedList::new(rows, RowGeometry::new(80, 5)?, 600);
//! assert_eq!(list.window(), Window::Span { start: 0, end: 12 });
//!
//! list.scroll_to(4000);
//! assert_eq!(list.window(), Window::Span { start: 45, end: 62 });
//! assert_eq!(list.content_height(), 400_000);
//! # Ok::<(), orderdeck::OrderdeckError>(())
//! ```

use super::filter::{FilteredView, SearchIndex};
use super::geometry::RowGeometry;
use super::window::{Window, WindowDiff};
use super::{Record, Searchable};

/// Scroll position and measured height of the visible region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Distance scrolled from the top of the content.
    pub scroll_offset: usize,
    /// Height of the visible region.
    pub height: usize,
}

/// Absolute position of one materialized row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPlacement {
    /// Index within the filtered view.
    pub index: usize,
    /// Offset from the top of the full content (`index * row_height`).
    pub offset: usize,
}

/// Virtualized view over an ordered record set with substring search.
#[derive(Debug, Clone)]
pub struct WindowedList<T> {
    records: Vec<T>,
    search_index: SearchIndex,
    query: String,
    view: FilteredView,
    geometry: RowGeometry,
    viewport: Viewport,
    window: Window,
    placements: Vec<RowPlacement>,
    last_diff: WindowDiff,
}

impl<T: Record + Searchable> WindowedList<T> {
    /// Creates a list scrolled to the top with an empty query.
    #[must_use]
    pub fn new(records: Vec<T>, geometry: RowGeometry, viewport_height: usize) -> Self {
        let search_index = SearchIndex::build(&records);
        let view = FilteredView::all(records.len());
        let mut list = Self {
            records,
            search_index,
            query: String::new(),
            view,
            geometry,
            viewport: Viewport {
                scroll_offset: 0,
                height: viewport_height,
            },
            window: Window::Empty,
            placements: Vec::new(),
            last_diff: WindowDiff::default(),
        };
        list.recompute();
        list
    }

    /// Replaces the record set, re-running the current query against it.
    pub fn set_records(&mut self, records: Vec<T>) -> bool {
        let _span = tracing::debug_span!("set_records", count = records.len()).entered();

        self.search_index = SearchIndex::build(&records);
        self.records = records;
        self.view = self.search_index.filter(&self.query);
        self.clamp_scroll();
        self.recompute();
        true
    }

    /// Applies a new search query. Returns `false` if the query is unchanged.
    pub fn set_query(&mut self, query: &str) -> bool {
        if self.query == query {
            return false;
        }

        let _span = tracing::debug_span!(
            "set_query",
            total_records = self.records.len(),
            query_len = query.len()
        )
        .entered();

        query.clone_into(&mut self.query);
        let view = self.search_index.filter(&self.query);
        let view_changed = view != self.view;
        self.view = view;

        let scroll_changed = self.clamp_scroll();
        let window_changed = self.recompute();

        tracing::debug!(filtered_count = self.view.len(), "search filter applied");
        view_changed || scroll_changed || window_changed
    }

    /// Scrolls to an absolute offset, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: usize) -> bool {
        let clamped = offset.min(self.max_scroll_offset());
        if clamped == self.viewport.scroll_offset {
            return false;
        }
        self.viewport.scroll_offset = clamped;
        self.recompute();
        true
    }

    /// Scrolls by a signed distance.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let target = if delta.is_negative() {
            self.viewport.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.viewport.scroll_offset.saturating_add(delta.unsigned_abs())
        };
        self.scroll_to(target)
    }

    /// Scrolls down by one viewport height.
    pub fn page_down(&mut self) -> bool {
        self.scroll_to(self.viewport.scroll_offset.saturating_add(self.page_extent()))
    }

    /// Scrolls up by one viewport height.
    pub fn page_up(&mut self) -> bool {
        self.scroll_to(self.viewport.scroll_offset.saturating_sub(self.page_extent()))
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.scroll_to(0)
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        self.scroll_to(self.max_scroll_offset())
    }

    /// Updates the measured viewport height.
    ///
    /// The scroll offset is kept unless the larger viewport leaves it past the end
    /// of the scrollable range.
    pub fn resize(&mut self, viewport_height: usize) -> bool {
        if viewport_height == self.viewport.height {
            return false;
        }

        tracing::debug!(
            from = self.viewport.height,
            to = viewport_height,
            "viewport resized"
        );

        self.viewport.height = viewport_height;
        self.clamp_scroll();
        self.recompute();
        true
    }

    /// Largest scroll offset that still fills the viewport.
    #[must_use]
    pub fn max_scroll_offset(&self) -> usize {
        self.content_height().saturating_sub(self.viewport.height)
    }

    /// Total height of the filtered view (`len * row_height`).
    #[must_use]
    pub fn content_height(&self) -> usize {
        self.geometry.content_height(self.view.len())
    }

    #[must_use]
    pub const fn window(&self) -> Window {
        self.window
    }

    /// Placements for every materialized row, in index order.
    #[must_use]
    pub fn placements(&self) -> &[RowPlacement] {
        &self.placements
    }

    /// Rows that entered and left the window on the last recompute.
    #[must_use]
    pub const fn last_diff(&self) -> &WindowDiff {
        &self.last_diff
    }

    /// Materialized rows paired with their records.
    pub fn materialized(&self) -> impl Iterator<Item = (RowPlacement, &T)> + '_ {
        self.placements
            .iter()
            .filter_map(move |placement| self.record_at(placement.index).map(|record| (*placement, record)))
    }

    /// Record shown at `view_index` in the filtered view.
    #[must_use]
    pub fn record_at(&self, view_index: usize) -> Option<&T> {
        self.view
            .position(view_index)
            .and_then(|position| self.records.get(position))
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub const fn geometry(&self) -> RowGeometry {
        self.geometry
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.view.len()
    }

    #[must_use]
    pub fn total_len(&self) -> usize {
        self.records.len()
    }

    /// Whether the filtered view has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    fn page_extent(&self) -> usize {
        // Keep one row of context when paging through tall viewports.
        let row = self.geometry.row_height();
        if self.viewport.height > row {
            self.viewport.height - row
        } else {
            self.viewport.height.max(row)
        }
    }

    fn clamp_scroll(&mut self) -> bool {
        let max = self.max_scroll_offset();
        if self.viewport.scroll_offset > max {
            self.viewport.scroll_offset = max;
            true
        } else {
            false
        }
    }

    fn recompute(&mut self) -> bool {
        let window = self.geometry.window(
            self.view.len(),
            self.viewport.scroll_offset,
            self.viewport.height,
        );

        let diff = WindowDiff::between(self.window, window);
        let changed = window != self.window;
        if changed {
            tracing::trace!(
                start = ?window.start_index(),
                end = ?window.end_index(),
                entered = diff.entered.len(),
                left = diff.left.len(),
                "window recomputed"
            );
        }

        self.window = window;
        self.placements = window
            .indices()
            .map(|index| RowPlacement {
                index,
                offset: self.geometry.offset_of(index),
            })
            .collect();
        self.last_diff = diff;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: String,
        label: String,
    }

    impl Record for Row {
        type Key = str;

        fn key(&self) -> &str {
            &self.id
        }
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.label, &self.id]
        }
    }

    fn rows(count: usize) -> Vec<Row> {
        (0..count)
            .map(|i| Row {
                id: format!("id-{i}"),
                label: if i % 2 == 0 { format!("even {i}") } else { format!("odd {i}") },
            })
            .collect()
    }

    fn list(count: usize) -> WindowedList<Row> {
        WindowedList::new(rows(count), RowGeometry::new(80, 5).unwrap(), 600)
    }

    #[test]
    fn placements_use_absolute_offsets() {
        let mut list = list(5000);
        list.scroll_to(4000);
        let placements = list.placements();
        assert_eq!(placements.len(), 18);
        assert_eq!(placements[0], RowPlacement { index: 45, offset: 3600 });
        assert_eq!(placements[17], RowPlacement { index: 62, offset: 4960 });
    }

    #[test]
    fn materialized_rows_follow_filtered_order() {
        let mut list = list(100);
        list.set_query("odd");
        let keys: Vec<&str> = list.materialized().take(3).map(|(_, row)| row.key()).collect();
        assert_eq!(keys, vec!["id-1", "id-3", "id-5"]);
        let offsets: Vec<usize> = list.materialized().take(3).map(|(p, _)| p.offset).collect();
        assert_eq!(offsets, vec![0, 80, 160]);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut list = list(10);
        assert!(list.scroll_to(1_000_000));
        assert_eq!(list.viewport().scroll_offset, 800 - 600);
        assert!(!list.scroll_to(1_000_000));
    }

    #[test]
    fn shrinking_filter_clamps_scroll_instead_of_failing() {
        let mut list = list(5000);
        list.scroll_to(300_000);
        assert!(list.set_query("id-4999"));
        assert_eq!(list.filtered_len(), 1);
        assert_eq!(list.viewport().scroll_offset, 0);
        assert_eq!(list.window(), Window::Span { start: 0, end: 0 });
    }

    #[test]
    fn no_match_empties_window_and_content() {
        let mut list = list(50);
        list.set_query("nothing like this");
        assert!(list.is_empty());
        assert_eq!(list.window(), Window::Empty);
        assert!(list.placements().is_empty());
        assert_eq!(list.content_height(), 0);
    }

    #[test]
    fn resize_keeps_scroll_offset() {
        let mut list = list(5000);
        list.scroll_to(4000);
        assert!(list.resize(300));
        assert_eq!(list.viewport().scroll_offset, 4000);
        assert_eq!(list.window(), Window::Span { start: 45, end: 58 });
        assert!(!list.resize(300));
    }

    #[test]
    fn resize_past_end_pulls_scroll_back() {
        let mut list = list(20);
        list.scroll_to_bottom();
        assert_eq!(list.viewport().scroll_offset, 1000);
        list.resize(1200);
        assert_eq!(list.viewport().scroll_offset, 400);
    }

    #[test]
    fn unchanged_inputs_report_no_change() {
        let mut list = list(500);
        assert!(!list.set_query(""));
        assert!(!list.scroll_to(0));
        let before = list.placements().to_vec();
        list.scroll_by(0);
        assert_eq!(list.placements(), before.as_slice());
    }

    #[test]
    fn small_scrolls_inside_a_row_keep_window() {
        let mut list = list(500);
        list.scroll_to(800);
        let window = list.window();
        assert!(list.scroll_by(10));
        assert_eq!(list.window(), window);
        assert!(list.last_diff().is_empty());
    }

    #[test]
    fn diff_tracks_rows_entering_on_scroll() {
        let mut list = list(500);
        list.scroll_by(160);
        assert_eq!(list.last_diff().entered, vec![13, 14]);
        assert!(list.last_diff().left.is_empty());
    }

    #[test]
    fn paging_moves_by_viewport_minus_one_row() {
        let mut list = list(500);
        list.page_down();
        assert_eq!(list.viewport().scroll_offset, 520);
        list.page_up();
        assert_eq!(list.viewport().scroll_offset, 0);
        list.scroll_to_bottom();
        assert_eq!(list.viewport().scroll_offset, list.max_scroll_offset());
        list.scroll_to_top();
        assert_eq!(list.viewport().scroll_offset, 0);
    }

    #[test]
    fn replacing_records_reapplies_query() {
        let mut list = list(10);
        list.set_query("even");
        assert_eq!(list.filtered_len(), 5);
        list.set_records(rows(4));
        assert_eq!(list.filtered_len(), 2);
        assert_eq!(list.total_len(), 4);
        assert_eq!(list.record_at(1).map(|r| r.key()), Some("id-2"));
    }

    #[test]
    fn zero_height_viewport_materializes_nothing() {
        let list = WindowedList::new(rows(10), RowGeometry::new(2, 5).unwrap(), 0);
        assert!(list.window().is_empty());
        assert_eq!(list.content_height(), 20);
    }
}
