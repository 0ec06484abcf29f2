//! Page math for the dashboard project table.

use serde::Serialize;

/// Fixed page size of the admin project table.
pub const ADMIN_PAGE_SIZE: usize = 5;

/// Number of pages needed for `total_items`: `ceil(total / page_size)`.
///
/// # Examples
///
/// ```
/// use galeri_core::pagination::total_pages;
/// assert_eq!(total_pages(0, 5), 0);
/// assert_eq!(total_pages(5, 5), 1);
/// assert_eq!(total_pages(6, 5), 2);
/// ```
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Clamp a 1-based page number to `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Current page, 1-based and already clamped.
    pub page: usize,
    pub page_size: usize,
    /// Size of the filtered collection, before slicing.
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based index of the first row shown ("Menampilkan X–Y dari N").
    /// Zero when there is nothing to show.
    pub showing_from: usize,
    pub showing_to: usize,
}

/// One page of a filtered collection.
#[derive(Debug)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub info: PageInfo,
}

/// Slice `items` into the requested page. Out-of-range pages are clamped.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let page = clamp_page(page, total_pages);

    let start = ((page - 1) * page_size).min(total_items);
    let end = (start + page_size).min(total_items);

    let (showing_from, showing_to) = if start == end {
        (0, 0)
    } else {
        (start + 1, end)
    };

    Page {
        items: &items[start..end],
        info: PageInfo {
            page,
            page_size,
            total_items,
            total_pages,
            showing_from,
            showing_to,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
