//! Case-insensitive substring filtering.
//!
//! [`SearchIndex`] lowercases every record's search fields once per record set so
//! that each keystroke only lowercases the query. Filtering produces a fresh
//! [`FilteredView`]: the ordered positions of matching records.

use super::Searchable;

/// Ordered positions of the records that match the current query.
///
/// A view is rebuilt on every query or record change, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredView {
    positions: Vec<usize>,
}

impl FilteredView {
    /// View over every record in `0..len`.
    #[must_use]
    pub fn all(len: usize) -> Self {
        Self {
            positions: (0..len).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Record position for the row at `view_index`.
    #[must_use]
    pub fn position(&self, view_index: usize) -> Option<usize> {
        self.positions.get(view_index).copied()
    }

    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

/// Pre-lowercased search fields for a record set.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    fields: Vec<Vec<String>>,
}

impl SearchIndex {
    /// Lowercases the search fields of every record.
    pub fn build<T: Searchable>(records: &[T]) -> Self {
        let fields = records
            .iter()
            .map(|record| {
                record
                    .search_fields()
                    .into_iter()
                    .map(str::to_lowercase)
                    .collect()
            })
            .collect();
        Self { fields }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Records whose fields contain `query`, ignoring case, in original order.
    ///
    /// An empty query matches every record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use orderdeck::virtual_list::{SearchIndex, Searchable};
    ///
    /// struct Row(&'static str);
    /// impl Searchable for Row {
    ///     fn search_fields(&self) -> Vec<&str> { vec![self.0] }
    /// }
    ///
    /// let index = SearchIndex::build(&[Row("Camera"), Row("Scarf"), Row("camcorder")]);
    /// assert_eq!(index.filter("CAM").positions(), &[0, 2]);
    /// ```
    #[must_use]
    pub fn filter(&self, query: &str) -> FilteredView {
        if query.is_empty() {
            return FilteredView::all(self.fields.len());
        }

        let needle = query.to_lowercase();
        let positions = self
            .fields
            .iter()
            .enumerate()
            .filter(|(_, fields)| fields.iter().any(|field| field.contains(&needle)))
            .map(|(position, _)| position)
            .collect();

        FilteredView { positions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Order {
        item: &'static str,
        buyer: &'static str,
        id: &'static str,
    }

    impl Searchable for Order {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.item, self.buyer, self.id]
        }
    }

    fn orders() -> Vec<Order> {
        vec![
            Order { item: "Camera - #1", buyer: "user_0", id: "TRX-10000" },
            Order { item: "Scarf - #2", buyer: "user_1", id: "TRX-9999" },
            Order { item: "Boots - #3", buyer: "user_2", id: "TRX-9998" },
            Order { item: "Lens - #4", buyer: "user_3", id: "TRX-9997" },
            Order { item: "Watch - #5", buyer: "camille", id: "TRX-9996" },
        ]
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let index = SearchIndex::build(&orders());
        assert_eq!(index.filter("").positions(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn matches_any_field_ignoring_case() {
        let index = SearchIndex::build(&orders());
        assert_eq!(index.filter("cam").positions(), &[0, 4]);
        assert_eq!(index.filter("trx-999").positions(), &[1, 2, 3, 4]);
        assert_eq!(index.filter("USER_2").positions(), &[2]);
    }

    #[test]
    fn no_match_yields_empty_view() {
        let index = SearchIndex::build(&orders());
        let view = index.filter("tripod");
        assert!(view.is_empty());
        assert_eq!(view.position(0), None);
    }

    #[test]
    fn query_does_not_match_across_field_boundaries() {
        let index = SearchIndex::build(&orders());
        assert!(index.filter("#1user_0").is_empty());
    }

    #[test]
    fn repeated_filter_is_deterministic() {
        let index = SearchIndex::build(&orders());
        assert_eq!(index.filter("s"), index.filter("s"));
    }
}
