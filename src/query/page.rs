//! Fixed-size pagination with clamping instead of range errors.

use crate::store::Record;

/// One page of an ordered view, plus the metadata the pager needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Records on this page; at most `page_size` of them, possibly empty.
    pub items: Vec<Record>,
    /// The 1-based page actually served, after clamping.
    pub page: usize,
    /// Always at least 1, even for an empty view.
    pub total_pages: usize,
}

impl Page {
    #[must_use]
    pub const fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn can_go_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice `view` into the requested page.
///
/// Out-of-range page numbers are clamped into `[1, total_pages]`, never
/// rejected. An empty view yields `{items: [], page: 1, total_pages: 1}`.
/// A zero `page_size` is treated as 1.
#[must_use]
pub fn paginate(view: &[Record], page: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let total_pages = view.len().div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(view.len());
    let items = if start < view.len() {
        view[start..end].to_vec()
    } else {
        Vec::new()
    };
    Page {
        items,
        page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(n: usize) -> Vec<Record> {
        (0..n).map(|i| Record::new(format!("w{i}"), i as u64)).collect()
    }

    #[test]
    fn empty_view_yields_single_empty_page() {
        for requested in [0, 1, 7, usize::MAX] {
            let page = paginate(&[], requested, 50);
            assert!(page.items.is_empty());
            assert_eq!(page.page, 1);
            assert_eq!(page.total_pages, 1);
            assert!(!page.can_go_prev());
            assert!(!page.can_go_next());
        }
    }

    #[test]
    fn full_pages_slice_exactly() {
        let view = fixture(100);
        let page = paginate(&view, 1, 50);
        assert_eq!(page.items.len(), 50);
        assert_eq!(page.items[0].word, "w0");
        assert_eq!(page.total_pages, 2);
        assert!(!page.can_go_prev());
        assert!(page.can_go_next());

        let page = paginate(&view, 2, 50);
        assert_eq!(page.items.len(), 50);
        assert_eq!(page.items[0].word, "w50");
        assert!(page.can_go_prev());
        assert!(!page.can_go_next());
    }

    #[test]
    fn last_page_may_be_short() {
        let view = fixture(120);
        let page = paginate(&view, 3, 50);
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let view = fixture(10);
        assert_eq!(paginate(&view, 0, 50).page, 1);
        assert_eq!(paginate(&view, 99, 50).page, 1);
        let view = fixture(120);
        let page = paginate(&view, 99, 50);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 20);
    }

    #[test]
    fn zero_page_size_treated_as_one() {
        let view = fixture(3);
        let page = paginate(&view, 2, 0);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].word, "w1");
    }
}
