//! Category entity model.

use galeri_core::catalog::CategoryEntry;
use galeri_core::types::DbId;
use serde::Serialize;

/// A project category. Projects reference it by `slug`, by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: DbId,
    /// Display name, e.g. `"Semua"` for the sentinel entry.
    pub name: String,
    pub slug: String,
    /// Icon identifier for the gallery filter bar. `None` on the dashboard.
    pub icon: Option<String>,
}

impl CategoryEntry for Category {
    fn name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}
