//! Fixed-size windows over the filtered record sequence.

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Position of the visible window and the state of the pager buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub page_count: usize,
    pub start: usize,
    pub end: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Computes the window `[(page-1)*size, page*size)` clamped to `len`. A page
/// past the end yields an empty window; page 0 is treated as page 1.
pub fn window(page: usize, len: usize, page_size: usize) -> PageWindow {
    let page = page.max(1);
    let page_count = page_count(len, page_size);
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);

    PageWindow {
        page,
        page_count,
        start,
        end,
        has_previous: page > 1,
        has_next: page < page_count,
    }
}

pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> (&[T], PageWindow) {
    let window = window(page, items.len(), page_size);
    (&items[window.start..window.end], window)
}

/// Page numbers to show in a pager: a couple of pages at each edge and around
/// the current one, with `None` marking a gap.
pub fn page_links(page_count: usize, current: usize) -> Vec<Option<usize>> {
    const EDGE: usize = 2;
    const AROUND: usize = 2;

    if page_count == 0 {
        return vec![];
    }

    let mut links = Vec::new();

    let left_end = (1 + EDGE).min(page_count + 1);
    links.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current.saturating_sub(AROUND));
    let mid_end = (current + AROUND + 1).min(page_count + 1);

    if mid_start > left_end {
        links.push(None);
    }
    links.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(page_count.saturating_sub(EDGE) + 1);

    if right_start > mid_end {
        links.push(None);
    }
    links.extend((right_start..=page_count).map(Some));

    links
}

#[cfg(test)]
#[path = "tests/pagination_tests.rs"]
mod tests;
