use blattwerk_common::util::PageSize;

pub const POSTS_PER_PAGE: PageSize = match PageSize::new(3) {
    Some(size) => size,
    None => panic!("Posts per page was zero."),
};

/// Number of pages needed for `total` items. The final partial page counts
/// as a full page; an empty set has no pages.
#[must_use]
pub fn page_count(total: usize, page_size: PageSize) -> usize {
    total.div_ceil(page_size.get())
}

/// The `page`th chunk of `items`. A page past the end of the items yields
/// an empty slice.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, page_size: PageSize) -> &[T] {
    let offset = page.saturating_mul(page_size.get());
    let end = offset.saturating_add(page_size.get()).min(items.len());
    items.get(offset..end).unwrap_or(&[])
}

/// Whether a page-selection control is meaningful: only when the items
/// overflow a single page.
#[must_use]
pub fn shows_pagination(total: usize, page_size: PageSize) -> bool {
    total > page_size.get()
}

#[cfg(test)]
mod tests {
    use crate::page::{POSTS_PER_PAGE, page_count, page_slice, shows_pagination};

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, POSTS_PER_PAGE), 0);
        assert_eq!(page_count(1, POSTS_PER_PAGE), 1);
        assert_eq!(page_count(3, POSTS_PER_PAGE), 1);
        assert_eq!(page_count(4, POSTS_PER_PAGE), 2);
        assert_eq!(page_count(7, POSTS_PER_PAGE), 3);
    }

    #[test]
    fn pages_partition_the_items() {
        let items: Vec<u32> = (0..7).collect();
        let pages = page_count(items.len(), POSTS_PER_PAGE);

        let mut reassembled = Vec::new();
        for page in 0..pages {
            let slice = page_slice(&items, page, POSTS_PER_PAGE);
            if page + 1 < pages {
                assert_eq!(slice.len(), POSTS_PER_PAGE.get());
            }
            reassembled.extend_from_slice(slice);
        }

        assert_eq!(reassembled, items);
    }

    #[test]
    fn final_partial_page_is_reachable() {
        let items: Vec<u32> = (0..7).collect();
        assert_eq!(page_slice(&items, 2, POSTS_PER_PAGE), [6]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (0..2).collect();
        assert!(page_slice(&items, 1, POSTS_PER_PAGE).is_empty());
        assert!(page_slice(&items, usize::MAX, POSTS_PER_PAGE).is_empty());
    }

    #[test]
    fn pagination_shows_only_past_one_page() {
        assert!(!shows_pagination(0, POSTS_PER_PAGE));
        assert!(!shows_pagination(3, POSTS_PER_PAGE));
        assert!(shows_pagination(4, POSTS_PER_PAGE));
    }
}
