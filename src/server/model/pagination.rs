//! Page arithmetic shared by the thesis directory and the admin lists.

/// One page of a larger ordered result set.
///
/// Pages are numbered from 1. Requests for page 0 (or below) are clamped to 1; requests
/// past the last page are kept as-is and simply yield no items.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
    /// Total number of items across all pages.
    pub total: u64,
}

impl Pagination {
    pub fn new(page: u64, per_page: u64, total: u64) -> Self {
        Self {
            page: page.max(1),
            per_page,
            total,
        }
    }

    /// Total number of pages.
    pub fn pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }

    /// Zero-based page index as expected by SeaORM paginators.
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages()
    }

    pub fn prev_num(&self) -> Option<u64> {
        self.has_prev().then(|| self.page - 1)
    }

    pub fn next_num(&self) -> Option<u64> {
        self.has_next().then(|| self.page + 1)
    }

    /// Page numbers to show in a pagination widget, `None` marking a gap.
    ///
    /// Shows the first two and last two pages plus a window of two pages before and four
    /// pages after the current one.
    pub fn iter_pages(&self) -> Vec<Option<u64>> {
        self.iter_pages_with(2, 2, 5, 2)
    }

    pub fn iter_pages_with(
        &self,
        left_edge: u64,
        left_current: u64,
        right_current: u64,
        right_edge: u64,
    ) -> Vec<Option<u64>> {
        let pages = self.pages();
        let page = self.page;
        let mut result = Vec::new();
        let mut last = 0;

        for num in 1..=pages {
            let in_left_edge = num <= left_edge;
            let in_window = num + left_current + 1 > page && num < page + right_current;
            let in_right_edge = num + right_edge > pages;

            if in_left_edge || in_window || in_right_edge {
                if last + 1 != num {
                    result.push(None);
                }
                result.push(Some(num));
                last = num;
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_page_to_first() {
        let pagination = Pagination::new(0, 10, 35);

        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.index(), 0);
        assert!(!pagination.has_prev());
    }

    #[test]
    fn counts_partial_last_page() {
        assert_eq!(Pagination::new(1, 10, 35).pages(), 4);
        assert_eq!(Pagination::new(1, 10, 40).pages(), 4);
        assert_eq!(Pagination::new(1, 10, 0).pages(), 0);
    }

    #[test]
    fn navigation_links_respect_bounds() {
        let middle = Pagination::new(2, 10, 35);
        assert_eq!(middle.prev_num(), Some(1));
        assert_eq!(middle.next_num(), Some(3));

        let last = Pagination::new(4, 10, 35);
        assert_eq!(last.next_num(), None);
    }

    #[test]
    fn shows_every_page_when_few() {
        let pagination = Pagination::new(1, 10, 45);

        assert_eq!(
            pagination.iter_pages(),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn inserts_gaps_around_current_window() {
        let pagination = Pagination::new(10, 10, 200);

        assert_eq!(
            pagination.iter_pages(),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn no_pages_for_empty_result() {
        assert!(Pagination::new(1, 10, 0).iter_pages().is_empty());
    }
}
