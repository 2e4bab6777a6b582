//! Page slicing shared by every paged list (models, musicians, brands).

/// One page of a list plus the metadata needed to render pager controls.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    /// Items on this page, in source order. Never longer than `page_size`.
    pub items: Vec<T>,
    /// Zero-based page actually rendered, after clamping.
    pub page_index: usize,
    /// Items in the whole (filtered) list.
    pub total_items: usize,
    /// `max(1, ceil(total_items / page_size))`.
    pub total_pages: usize,
    /// Effective page size (at least 1).
    pub page_size: usize,
}

impl<T> Page<T> {
    /// 1-based position of the first item shown, 0 when the list is empty.
    #[must_use]
    pub fn first_shown(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.page_index * self.page_size + 1
        }
    }

    /// 1-based position of the last item shown, 0 when the list is empty.
    #[must_use]
    pub fn last_shown(&self) -> usize {
        self.page_index * self.page_size + self.items.len()
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page_index + 1 < self.total_pages
    }

    /// Index of the next page, staying on the last page at the end.
    #[must_use]
    pub const fn next_index(&self) -> usize {
        if self.has_next() {
            self.page_index + 1
        } else {
            self.page_index
        }
    }

    /// Index of the previous page, staying on the first page at the start.
    #[must_use]
    pub const fn prev_index(&self) -> usize {
        self.page_index.saturating_sub(1)
    }
}

/// What: Number of pages needed for `total_items`.
///
/// Inputs:
/// - `total_items`: List length
/// - `page_size`: Items per page (0 is treated as 1)
///
/// Output:
/// - `max(1, ceil(total_items / page_size))`
#[must_use]
pub const fn page_count(total_items: usize, page_size: usize) -> usize {
    let size = if page_size == 0 { 1 } else { page_size };
    let pages = total_items.div_ceil(size);
    if pages == 0 { 1 } else { pages }
}

/// What: Cut one page out of a list.
///
/// Inputs:
/// - `items`: Full list in display order
/// - `page_index`: Requested zero-based page (may be out of range)
/// - `page_size`: Items per page (0 is treated as 1)
///
/// Output:
/// - [`Page`] for the requested page clamped into `[0, total_pages - 1]`.
///
/// Details:
/// - An out-of-range request renders the last valid page, never an empty one.
/// - An empty list yields one empty page.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page_index: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = page_count(total_items, page_size);
    let page_index = page_index.min(total_pages - 1);
    let start = page_index * page_size;
    let end = (start + page_size).min(total_items);
    let items = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();
    Page {
        items,
        page_index,
        total_items,
        total_pages,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_has_minimum_of_one() {
        assert_eq!(page_count(0, 6), 1);
        assert_eq!(page_count(6, 6), 1);
        assert_eq!(page_count(7, 6), 2);
        assert_eq!(page_count(14, 6), 3);
        assert_eq!(page_count(3, 0), 3);
    }

    #[test]
    /// What: Musician-style pagination with two per page
    ///
    /// - Input: Five names, pages 0..=2 and an out-of-range page
    /// - Output: 2/2/1 split; out-of-range clamps to the last page
    fn paginate_two_per_page() {
        let names = ["a", "b", "c", "d", "e"];
        let p0 = paginate(&names, 0, 2);
        assert_eq!(p0.items, vec!["a", "b"]);
        assert_eq!(p0.total_pages, 3);
        assert!(!p0.has_prev());
        assert!(p0.has_next());
        let p2 = paginate(&names, 2, 2);
        assert_eq!(p2.items, vec!["e"]);
        assert_eq!((p2.first_shown(), p2.last_shown()), (5, 5));
        assert_eq!(p2.next_index(), 2);
        assert_eq!(paginate(&names, 99, 2), p2);
    }

    #[test]
    fn paginate_empty_list() {
        let empty: [u8; 0] = [];
        let page = paginate(&empty, 3, 2);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_index, 0);
        assert_eq!((page.first_shown(), page.last_shown()), (0, 0));
        assert_eq!(page.prev_index(), 0);
    }
}
