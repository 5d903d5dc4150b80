//! Pagination utilities for service layer
//!
//! Provides a `PageRequest` with zero-based page numbers and a helper that
//! slices an already ordered result set.

/// Page number used when the client does not send one.
pub const DEFAULT_PAGE_NUMBER: usize = 0;
/// Page size used when the client does not send one.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Pagination parameters as received from the client
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// 0-based page index
    pub page_number: Option<u32>,
    /// items per page
    pub page_size: Option<u32>,
}

impl PageRequest {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self { page_number: Some(page_number), page_size: Some(page_size) }
    }

    /// Fill in defaults and convert to `usize`
    pub fn normalize(self) -> (usize, usize) {
        let page = self.page_number.map_or(DEFAULT_PAGE_NUMBER, |p| p as usize);
        let size = self.page_size.map_or(DEFAULT_PAGE_SIZE, |s| s as usize);
        (page, size)
    }

    /// Index range `[n*s, min(len, n*s+s))`; `None` when the page lies past the end.
    pub fn bounds(self, len: usize) -> Option<(usize, usize)> {
        let (page, size) = self.normalize();
        let first = page.checked_mul(size)?;
        if size == 0 || first >= len {
            return None;
        }
        let last = first.saturating_add(size).min(len);
        Some((first, last))
    }
}

/// Return the requested page of `items`. Out-of-range pages are empty.
pub fn paginate<T>(mut items: Vec<T>, page: PageRequest) -> Vec<T> {
    match page.bounds(items.len()) {
        Some((first, last)) => {
            items.truncate(last);
            items.drain(..first);
            items
        }
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_page_of_three() {
        assert_eq!(PageRequest::default().normalize(), (0, 3));
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(paginate(items, PageRequest::default()), vec![0, 1, 2]);
    }

    #[test]
    fn last_page_is_clipped() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(paginate(items, PageRequest::new(3, 3)), vec![9]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (0..10).collect();
        assert!(paginate(items.clone(), PageRequest::new(4, 3)).is_empty());
        assert!(paginate(items, PageRequest::new(u32::MAX, u32::MAX)).is_empty());
    }

    #[test]
    fn zero_page_size_is_empty() {
        let items: Vec<u32> = (0..10).collect();
        assert!(paginate(items, PageRequest::new(0, 0)).is_empty());
    }

    #[test]
    fn every_page_covers_its_window() {
        let items: Vec<usize> = (0..17).collect();
        for size in 1..6u32 {
            for n in 0..8u32 {
                let page = paginate(items.clone(), PageRequest::new(n, size));
                let start = (n * size) as usize;
                let expected: Vec<usize> = items.iter().copied().skip(start).take(size as usize).collect();
                assert!(page.len() <= size as usize);
                assert_eq!(page, expected, "page {n} size {size}");
            }
        }
    }

    #[test]
    fn only_size_given_uses_first_page() {
        let req = PageRequest { page_number: None, page_size: Some(5) };
        assert_eq!(req.bounds(12), Some((0, 5)));
        let req = PageRequest { page_number: Some(2), page_size: None };
        assert_eq!(req.bounds(12), Some((6, 9)));
    }
}
