//! Validated row geometry.
//!
//! [`RowGeometry`] pairs the uniform row height with the buffer of extra rows
//! materialized on each side of the viewport. Both are fixed for the lifetime of a
//! list and validated once at construction.

use super::window::{compute_window, content_height, layout_row, Window};
use crate::domain::error::{OrderdeckError, Result};
use std::num::NonZeroUsize;

/// Uniform row height plus overscan buffer.
///
/// # Example
///
/// ```rust
/// use orderdeck::virtual_list::RowGeometry;
///
/// let geometry = RowGeometry::new(80, 5)?;
/// assert_eq!(geometry.row_height(), 80);
/// assert_eq!(geometry.offset_of(3), 240);
/// assert!(RowGeometry::new(0, 5).is_err());
/// # Ok::<(), orderdeck::OrderdeckError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowGeometry {
    row_height: NonZeroUsize,
    buffer: usize,
}

impl Default for RowGeometry {
    /// One line per row, no buffer.
    fn default() -> Self {
        Self {
            row_height: NonZeroUsize::MIN,
            buffer: 0,
        }
    }
}

impl RowGeometry {
    /// Creates a geometry from an unsigned row height and buffer.
    ///
    /// # Errors
    ///
    /// Returns [`OrderdeckError::Configuration`] if `row_height` is zero.
    pub fn new(row_height: usize, buffer: usize) -> Result<Self> {
        let row_height = NonZeroUsize::new(row_height).ok_or_else(|| {
            OrderdeckError::Configuration("row height must be positive, got 0".to_string())
        })?;
        Ok(Self { row_height, buffer })
    }

    /// Creates a geometry from signed values, as read from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OrderdeckError::Configuration`] if `row_height <= 0` or `buffer < 0`.
    pub fn from_signed(row_height: i64, buffer: i64) -> Result<Self> {
        let height = usize::try_from(row_height)
            .ok()
            .filter(|h| *h > 0)
            .ok_or_else(|| {
                OrderdeckError::Configuration(format!("row height must be positive, got {row_height}"))
            })?;
        let buffer = usize::try_from(buffer).map_err(|_| {
            OrderdeckError::Configuration(format!("buffer must not be negative, got {buffer}"))
        })?;
        Self::new(height, buffer)
    }

    #[must_use]
    pub const fn row_height(&self) -> usize {
        self.row_height.get()
    }

    #[must_use]
    pub const fn row_height_nonzero(&self) -> NonZeroUsize {
        self.row_height
    }

    #[must_use]
    pub const fn buffer(&self) -> usize {
        self.buffer
    }

    /// Window for a view of `total_items` rows at the given scroll state.
    #[must_use]
    pub fn window(&self, total_items: usize, scroll_offset: usize, viewport_height: usize) -> Window {
        compute_window(total_items, scroll_offset, viewport_height, self.row_height, self.buffer)
    }

    /// Vertical offset of row `index`.
    #[must_use]
    pub const fn offset_of(&self, index: usize) -> usize {
        layout_row(index, self.row_height)
    }

    /// Total height of `total_items` rows.
    #[must_use]
    pub const fn content_height(&self, total_items: usize) -> usize {
        content_height(total_items, self.row_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_row_height() {
        let err = RowGeometry::new(0, 5).unwrap_err();
        assert!(matches!(err, OrderdeckError::Configuration(_)));
    }

    #[test]
    fn signed_constructor_rejects_negative_values() {
        assert!(matches!(
            RowGeometry::from_signed(-80, 5),
            Err(OrderdeckError::Configuration(_))
        ));
        assert!(matches!(
            RowGeometry::from_signed(0, 5),
            Err(OrderdeckError::Configuration(_))
        ));
        assert!(matches!(
            RowGeometry::from_signed(80, -1),
            Err(OrderdeckError::Configuration(_))
        ));
    }

    #[test]
    fn signed_constructor_accepts_zero_buffer() {
        let geometry = RowGeometry::from_signed(2, 0).unwrap();
        assert_eq!(geometry.row_height(), 2);
        assert_eq!(geometry.buffer(), 0);
    }

    #[test]
    fn window_delegates_to_compute_window() {
        let geometry = RowGeometry::new(80, 5).unwrap();
        assert_eq!(geometry.window(5000, 0, 600), Window::Span { start: 0, end: 12 });
        assert_eq!(geometry.content_height(5000), 400_000);
    }
}
