//! Catalog filtering and ordering shared by the gallery and the dashboard.
//!
//! The data layer owns the concrete project and category structs; this
//! module only sees them through [`CatalogEntry`] and [`CategoryEntry`], so
//! the same rules apply to both views' collections.

use crate::types::{DbId, ALL_CATEGORIES};

// ---------------------------------------------------------------------------
// Entry traits
// ---------------------------------------------------------------------------

/// The fields of a project that filtering, ordering and statistics read.
pub trait CatalogEntry {
    fn id(&self) -> DbId;
    fn title(&self) -> &str;
    fn student_name(&self) -> &str;
    /// Category slug, matched by value.
    fn category(&self) -> &str;
    fn is_featured(&self) -> bool;
}

impl<T: CatalogEntry + ?Sized> CatalogEntry for &T {
    fn id(&self) -> DbId {
        (**self).id()
    }

    fn title(&self) -> &str {
        (**self).title()
    }

    fn student_name(&self) -> &str {
        (**self).student_name()
    }

    fn category(&self) -> &str {
        (**self).category()
    }

    fn is_featured(&self) -> bool {
        (**self).is_featured()
    }
}

/// The fields of a category that filtering and statistics read.
pub trait CategoryEntry {
    fn name(&self) -> &str;
    fn slug(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Shown by the gallery when the active category has no projects.
pub const GALLERY_EMPTY_MESSAGE: &str = "Belum ada project di kategori ini.";

/// Shown by the dashboard table when search and filter match nothing.
pub const TABLE_EMPTY_MESSAGE: &str = "Tidak ada project ditemukan.";

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Whether a category filter value is the "no filtering" sentinel.
pub fn is_all(category: &str) -> bool {
    category == ALL_CATEGORIES
}

/// Exact category match, or always `true` for the sentinel.
pub fn matches_category<T: CatalogEntry>(entry: &T, category: &str) -> bool {
    is_all(category) || entry.category() == category
}

/// Case-insensitive substring match against title OR student name.
///
/// An empty query matches every entry.
pub fn matches_search<T: CatalogEntry>(entry: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    entry.title().to_lowercase().contains(&needle)
        || entry.student_name().to_lowercase().contains(&needle)
}

// ---------------------------------------------------------------------------
// Derived collections
// ---------------------------------------------------------------------------

/// Keep entries of the given category. The sentinel returns everything.
pub fn filter_by_category<'a, T: CatalogEntry>(items: &'a [T], category: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|p| matches_category(*p, category))
        .collect()
}

/// Stable two-way partition: featured entries first, each group keeping its
/// original relative order.
pub fn featured_first<T: CatalogEntry>(items: Vec<T>) -> Vec<T> {
    let (mut featured, normal): (Vec<T>, Vec<T>) =
        items.into_iter().partition(|p| p.is_featured());
    featured.extend(normal);
    featured
}

/// The gallery grid: category filter, then featured-first.
pub fn gallery_view<'a, T: CatalogEntry>(items: &'a [T], category: &str) -> Vec<&'a T> {
    featured_first(filter_by_category(items, category))
}

/// The dashboard table: search (title OR student) AND category.
pub fn filter_table<'a, T: CatalogEntry>(
    items: &'a [T],
    search: &str,
    category: &str,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|p| matches_search(*p, search) && matches_category(*p, category))
        .collect()
}

/// Next id for a newly created entry: `max(existing) + 1`, or `1` when the
/// collection is empty.
pub fn next_id<T: CatalogEntry>(items: &[T]) -> DbId {
    items.iter().map(CatalogEntry::id).max().unwrap_or(0) + 1
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
