//! Pagination types for windowed employee listings.
//!
//! This module provides [`PageRequest`] for specifying a window over the
//! ordered collection and [`Page`] for carrying the window's content along
//! with the request parameters and the total element count.

use serde::{Deserialize, Serialize};

use crate::sort::Sort;

/// Parameters for a windowed fetch over an ordered collection.
///
/// Pages are 0-indexed: page 0 is the first window. `per_page` must be at
/// least 1; the transport layer is responsible for enforcing that bound
/// before the request reaches the store.
///
/// # Example
///
/// ```ignore
/// use workforce_core::{page::PageRequest, sort::{Sort, SortField}};
///
/// let request = PageRequest::new(2, 50, Sort::asc(SortField::Name));
/// // Offset is 2 * 50 = 100
/// assert_eq!(request.offset(), 100);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PageRequest {
    /// The page index (0-indexed).
    pub page: u64,
    /// Number of items per page (at least 1).
    pub per_page: u64,
    /// Ordering applied before windowing.
    pub sort: Sort,
}

impl PageRequest {
    /// Creates new page request parameters.
    ///
    /// # Arguments
    ///
    /// * `page` - The page index (0-indexed)
    /// * `per_page` - Number of items per page
    /// * `sort` - Ordering applied before the window is taken
    pub fn new(page: u64, per_page: u64, sort: Sort) -> Self {
        Self { page, per_page, sort }
    }

    /// Calculates the number of items to skip for this page.
    pub fn offset(&self) -> u64 {
        self.page * self.per_page
    }
}

/// A single page of paginated results.
///
/// Carries the items of the requested window, the request parameters that
/// produced it, and the total element count across all pages. The total is
/// read independently of the window and may reflect a collection state that
/// changed between the two reads under concurrent writers.
///
/// # Type Parameters
///
/// * `T` - The type of items contained in this page
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The items contained in this page. Never longer than `per_page`.
    pub items: Vec<T>,
    /// The page index this window was requested at (0-indexed).
    pub page: u64,
    /// The requested window size.
    pub per_page: u64,
    /// Total count of items across all pages at read time.
    pub total: u64,
}

impl<T> Page<T> {
    /// Creates a new builder for constructing a page.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let page = Page::builder(vec![1, 2, 3])
    ///     .with_request(0, 3)
    ///     .with_total(10)
    ///     .build();
    /// ```
    pub fn builder(items: Vec<T>) -> PageBuilder<T> {
        PageBuilder::new(items)
    }

    /// The next page index, or `None` if this window reaches the end.
    pub fn next_page(&self) -> Option<u64> {
        if (self.page + 1) * self.per_page < self.total {
            Some(self.page + 1)
        } else {
            None
        }
    }

    /// The previous page index, or `None` if this is the first page.
    pub fn previous_page(&self) -> Option<u64> {
        self.page.checked_sub(1)
    }

    /// Whether this page carries no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            per_page: 0,
            total: 0,
        }
    }
}

/// Builder for constructing [`Page`] instances with a fluent API.
pub struct PageBuilder<T> {
    items: Vec<T>,
    page: u64,
    per_page: u64,
    total: u64,
}

impl<T> PageBuilder<T> {
    /// Creates a new builder with the given items.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            page: 0,
            per_page: 0,
            total: 0,
        }
    }

    /// Sets the request parameters this page was produced for.
    pub fn with_request(mut self, page: u64, per_page: u64) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }

    /// Sets the total count of items across all pages.
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    /// Builds and returns the final [`Page`] instance.
    pub fn build(self) -> Page<T> {
        Page {
            items: self.items,
            page: self.page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::{Sort, SortField};

    #[test]
    fn offset_is_page_times_size() {
        let request = PageRequest::new(3, 20, Sort::asc(SortField::Id));

        assert_eq!(request.offset(), 60);
    }

    #[test]
    fn first_page_has_offset_zero() {
        let request = PageRequest::new(0, 10, Sort::asc(SortField::Id));

        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn navigation_from_a_middle_page() {
        let page = Page::builder(vec![4, 5, 6])
            .with_request(1, 3)
            .with_total(10)
            .build();

        assert_eq!(page.next_page(), Some(2));
        assert_eq!(page.previous_page(), Some(0));
    }

    #[test]
    fn last_page_has_no_next() {
        let page = Page::builder(vec![10])
            .with_request(3, 3)
            .with_total(10)
            .build();

        assert_eq!(page.next_page(), None);
        assert_eq!(page.previous_page(), Some(2));
    }

    #[test]
    fn empty_collection_yields_empty_default_page() {
        let page: Page<i32> = Page::default();

        assert!(page.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.next_page(), None);
        assert_eq!(page.previous_page(), None);
    }
}
