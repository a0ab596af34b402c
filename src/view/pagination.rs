//! Page arithmetic.

use std::ops::Range;

/// Position within a paged result. Pages are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    /// Starts on page 1. A zero page size is treated as 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Number of pages needed for `total` rows. Never less than 1, so an empty
    /// result still has a page to show the empty state on.
    ///
    /// ```
    /// use gridview::view::Pagination;
    ///
    /// let p = Pagination::new(10);
    /// assert_eq!(p.page_count(0), 1);
    /// assert_eq!(p.page_count(10), 1);
    /// assert_eq!(p.page_count(11), 2);
    /// ```
    #[must_use]
    pub fn page_count(&self, total: usize) -> usize {
        let size = self.page_size.max(1);
        ((total + size - 1) / size).max(1)
    }

    /// Moves the current page into `1..=page_count(total)`.
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.clamp(1, self.page_count(total));
    }

    /// Index range of the current page within `total` rows.
    #[must_use]
    pub fn range(&self, total: usize) -> Range<usize> {
        let size = self.page_size.max(1);
        let start = self.page.saturating_sub(1).saturating_mul(size).min(total);
        let end = start.saturating_add(size).min(total);
        start..end
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_is_partial() {
        let p = Pagination { page: 3, page_size: 10 };
        assert_eq!(p.range(25), 20..25);
    }

    #[test]
    fn clamp_pulls_page_back_into_range() {
        let mut p = Pagination { page: 7, page_size: 5 };
        p.clamp(12);
        assert_eq!(p.page, 3);

        p.page = 0;
        p.clamp(12);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn out_of_range_page_yields_empty_range() {
        let p = Pagination { page: 9, page_size: 10 };
        assert!(p.range(15).is_empty());
    }
}
