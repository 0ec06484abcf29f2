//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?category=` for the gallery grid. Missing means the "all" sentinel.
#[derive(Debug, Deserialize)]
pub struct GalleryParams {
    pub category: Option<String>,
}

/// `?search=&category=&page=` for the dashboard project table.
///
/// `page` is 1-based and clamped to the pages that exist.
#[derive(Debug, Deserialize)]
pub struct TableParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<usize>,
}
