//! Aggregate statistics for the dashboard home view and the gallery stats bar.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{is_all, CatalogEntry, CategoryEntry};

/// A count and its rounded share of a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Share {
    pub count: usize,
    /// `round(count / total * 100)`, 0 when the total is 0.
    pub percentage: u32,
}

impl Share {
    pub fn of(count: usize, total: usize) -> Self {
        Self {
            count,
            percentage: percentage(count, total),
        }
    }
}

/// Per-category bar on the dashboard home view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub name: String,
    pub slug: String,
    #[serde(flatten)]
    pub share: Share,
}

/// Featured vs normal projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeaturedSplit {
    pub featured: Share,
    pub normal: Share,
}

/// The four stat cards shown above the dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsCards {
    pub total_projects: usize,
    pub featured_projects: usize,
    /// Categories excluding the "all" sentinel.
    pub active_categories: usize,
    /// Distinct student names across all projects.
    pub total_students: usize,
}

/// The stats bar under the gallery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryStats {
    /// Projects in the active filter.
    pub total_projects: usize,
    /// Featured projects in the active filter.
    pub featured_projects: usize,
    /// Categories excluding the "all" sentinel.
    pub categories: usize,
}

/// Rounded percentage of `count` in `total`. Zero when `total` is zero.
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

/// One [`CategoryShare`] per non-sentinel category, in category order.
pub fn category_distribution<P, C>(projects: &[P], categories: &[C]) -> Vec<CategoryShare>
where
    P: CatalogEntry,
    C: CategoryEntry,
{
    let total = projects.len();
    categories
        .iter()
        .filter(|c| !is_all(c.slug()))
        .map(|c| {
            let count = projects.iter().filter(|p| p.category() == c.slug()).count();
            CategoryShare {
                name: c.name().to_string(),
                slug: c.slug().to_string(),
                share: Share::of(count, total),
            }
        })
        .collect()
}

pub fn featured_split<P: CatalogEntry>(projects: &[P]) -> FeaturedSplit {
    let total = projects.len();
    let featured = projects.iter().filter(|p| p.is_featured()).count();
    FeaturedSplit {
        featured: Share::of(featured, total),
        normal: Share::of(total - featured, total),
    }
}

pub fn stats_cards<P, C>(projects: &[P], categories: &[C]) -> StatsCards
where
    P: CatalogEntry,
    C: CategoryEntry,
{
    let students: HashSet<&str> = projects.iter().map(|p| p.student_name()).collect();
    StatsCards {
        total_projects: projects.len(),
        featured_projects: projects.iter().filter(|p| p.is_featured()).count(),
        active_categories: categories.iter().filter(|c| !is_all(c.slug())).count(),
        total_students: students.len(),
    }
}

/// Counts over an already filtered project list. The category count ignores
/// the filter.
pub fn gallery_stats<P, C>(filtered: &[P], categories: &[C]) -> GalleryStats
where
    P: CatalogEntry,
    C: CategoryEntry,
{
    GalleryStats {
        total_projects: filtered.len(),
        featured_projects: filtered.iter().filter(|p| p.is_featured()).count(),
        categories: categories.iter().filter(|c| !is_all(c.slug())).count(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
