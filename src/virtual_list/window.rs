//! Window computation for fixed-height virtualized lists.
//!
//! A [`Window`] is the contiguous, inclusive index range of rows that must be
//! materialized to cover the viewport plus a fixed buffer of rows on each side.
//! It is a pure function of five inputs and carries no state of its own.
//!
//! # Algorithm
//!
//! ```text
//! scroll    = min(scroll_offset, total_items * row_height)
//! raw_start = floor(scroll / row_height) - buffer
//! raw_end   = floor((scroll + viewport_height) / row_height) + buffer
//! start     = clamp(raw_start, 0, total_items - 1)
//! end       = clamp(raw_end,   0, total_items - 1)
//! ```
//!
//! An empty list or a zero-height viewport yields [`Window::Empty`].
//!
//! # Example
//!
//! ```rust
//! use orderdeck::virtual_list::{compute_window, Window};
//! use std::num::NonZeroUsize;
//!
//! let row_height = NonZeroUsize::new(80).unwrap();
//! let window = compute_window(5000, 4000, 600, row_height, 5);
//! assert_eq!(window, Window::Span { start: 45, end: 62 });
//! ```

use std::num::NonZeroUsize;
use std::ops::Range;

/// Inclusive range of materialized row indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    /// Nothing to materialize (no rows, or no visible area).
    #[default]
    Empty,
    /// Rows `start..=end` are materialized.
    Span {
        /// First materialized index.
        start: usize,
        /// Last materialized index (inclusive).
        end: usize,
    },
}

impl Window {
    /// First materialized index, if any.
    #[must_use]
    pub const fn start_index(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Span { start, .. } => Some(*start),
        }
    }

    /// Last materialized index (inclusive), if any.
    #[must_use]
    pub const fn end_index(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Span { end, .. } => Some(*end),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Number of materialized rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Span { start, end } => *end - *start + 1,
        }
    }

    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        match self {
            Self::Empty => false,
            Self::Span { start, end } => *start <= index && index <= *end,
        }
    }

    /// Half-open index range, empty for [`Window::Empty`].
    #[must_use]
    pub const fn indices(&self) -> Range<usize> {
        match self {
            Self::Empty => 0..0,
            Self::Span { start, end } => *start..*end + 1,
        }
    }
}

/// Computes the rows to materialize for the given scroll state.
///
/// `scroll_offset` is expected to be clamped to `[0, total_items * row_height]` by
/// the caller. Offsets past the end of the content (a filter just shrank the view)
/// are pulled back to the content height, so no out-of-range index is produced.
///
/// # Parameters
///
/// * `total_items` - Rows in the current filtered view
/// * `scroll_offset` - Distance scrolled from the top, in the same unit as `row_height`
/// * `viewport_height` - Measured height of the visible region
/// * `row_height` - Uniform row height
/// * `buffer` - Extra rows to materialize above and below the visible range
#[must_use]
pub fn compute_window(
    total_items: usize,
    scroll_offset: usize,
    viewport_height: usize,
    row_height: NonZeroUsize,
    buffer: usize,
) -> Window {
    if total_items == 0 || viewport_height == 0 {
        return Window::Empty;
    }

    let last = total_items - 1;
    let scroll_offset = scroll_offset.min(content_height(total_items, row_height));
    let row_height = row_height.get();

    let raw_start = (scroll_offset / row_height).saturating_sub(buffer);
    let raw_end = (scroll_offset.saturating_add(viewport_height) / row_height).saturating_add(buffer);

    Window::Span {
        start: raw_start.min(last),
        end: raw_end.min(last),
    }
}

/// Vertical offset of a row within the full (unmaterialized) content.
#[must_use]
pub const fn layout_row(index: usize, row_height: NonZeroUsize) -> usize {
    index.saturating_mul(row_height.get())
}

/// Total scrollable height of `total_items` rows.
#[must_use]
pub const fn content_height(total_items: usize, row_height: NonZeroUsize) -> usize {
    total_items.saturating_mul(row_height.get())
}

/// Rows entering and leaving the window between two recomputes.
///
/// Hosts use this to limit re-rendering to rows whose membership changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowDiff {
    /// Indices newly materialized.
    pub entered: Vec<usize>,
    /// Indices no longer materialized.
    pub left: Vec<usize>,
}

impl WindowDiff {
    /// Compares two windows over the same filtered view.
    #[must_use]
    pub fn between(previous: Window, next: Window) -> Self {
        Self {
            entered: next.indices().filter(|i| !previous.contains(*i)).collect(),
            left: previous.indices().filter(|i| !next.contains(*i)).collect(),
        }
    }

    /// Whether the window membership is unchanged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.left.is_empty()
    }
}
