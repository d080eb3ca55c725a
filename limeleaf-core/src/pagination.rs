/// Number of communities requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Client-side accumulation of paginated results.
///
/// Pages are counted from 1. The server is expected to return
/// exactly `limit` items as long as there are more to come.
#[derive(Debug, Clone, PartialEq)]
pub struct Pager<T> {
    page: usize,
    limit: usize,
    items: Vec<T>,
    exhausted: bool,
}

impl<T> Default for Pager<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T> Pager<T> {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            page: 1,
            limit,
            items: Vec::new(),
            exhausted: false,
        }
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether "See More" should be offered.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        !self.exhausted
    }

    pub fn receive(&mut self, results: Vec<T>) {
        if results.len() != self.limit {
            self.exhausted = true;
        }
        self.items.extend(results);
    }

    /// Advances to the next page and returns it,
    /// or `None` if the last page was already received.
    pub fn see_more(&mut self) -> Option<usize> {
        if self.exhausted {
            return None;
        }
        self.page += 1;
        Some(self.page)
    }

    /// Keeps only the first page.
    pub fn see_less(&mut self) {
        self.items.truncate(self.limit);
        self.exhausted = false;
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_full_pages() {
        let mut pager = Pager::new(2);
        assert_eq!(pager.page(), 1);
        pager.receive(vec![1, 2]);
        assert!(pager.has_more());
        assert_eq!(pager.see_more(), Some(2));
        pager.receive(vec![3, 4]);
        assert_eq!(pager.items(), &[1, 2, 3, 4]);
        assert!(pager.has_more());
    }

    #[test]
    fn short_page_stops_see_more() {
        let mut pager = Pager::new(DEFAULT_PAGE_SIZE);
        pager.receive((0..DEFAULT_PAGE_SIZE).collect());
        assert_eq!(pager.see_more(), Some(2));
        pager.receive(vec![10, 11, 12]);
        assert!(!pager.has_more());
        assert_eq!(pager.see_more(), None);
        assert_eq!(pager.page(), 2);
        assert_eq!(pager.items().len(), 13);
    }

    #[test]
    fn see_less_resets_to_first_page() {
        let mut pager = Pager::new(3);
        pager.receive(vec!['a', 'b', 'c']);
        pager.see_more();
        pager.receive(vec!['d']);
        pager.see_less();
        assert_eq!(pager.items(), &['a', 'b', 'c']);
        assert_eq!(pager.page(), 1);
        assert!(pager.has_more());
    }
}
