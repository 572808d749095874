//! Windowed (virtualized) rendering of long, fixed-height lists.
//!
//! Only the rows overlapping the viewport, plus a fixed buffer on each side, are
//! materialized. Each materialized row is placed at `index * row_height` inside
//! content of height `len * row_height`, so scroll limits and scrollbars behave as
//! if every row existed.
//!
//! # Modules
//!
//! - [`window`]: The pure window computation and row layout
//! - [`geometry`]: Validated row height and buffer
//! - [`filter`]: Case-insensitive substring filtering into a [`FilteredView`]
//! - [`list`]: [`WindowedList`], the stateful controller hosts drive
//!
//! # Data Flow
//!
//! ```text
//! records ──► SearchIndex ──query──► FilteredView ─┐
//!                                                  ├──► Window ──► RowPlacement[]
//! scroll / resize ──────────────────► Viewport ────┘
//! ```

pub mod filter;
pub mod geometry;
pub mod list;
pub mod window;

pub use filter::{FilteredView, SearchIndex};
pub use geometry::RowGeometry;
pub use list::{RowPlacement, Viewport, WindowedList};
pub use window::{compute_window, content_height, layout_row, Window, WindowDiff};

use std::fmt::Debug;
use std::hash::Hash;

/// An item with a stable identity.
pub trait Record {
    /// Unique key for the record.
    type Key: ?Sized + Eq + Hash + Debug;

    fn key(&self) -> &Self::Key;
}

/// An item that exposes the string fields a search query is matched against.
pub trait Searchable {
    /// Fields matched, case-insensitively, as substrings.
    fn search_fields(&self) -> Vec<&str>;
}
