//! Project entity model and DTOs.

use chrono::NaiveDate;
use galeri_core::catalog::CatalogEntry;
use galeri_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Thumbnail assigned to every project created from the dashboard form.
pub const PLACEHOLDER_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=600&auto=format&fit=crop&q=60";

/// Category preselected on an empty form.
pub const DEFAULT_FORM_CATEGORY: &str = "Web";

/// A student project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    /// Category slug.
    pub category: String,
    pub student_name: String,
    pub student_class: String,
    /// Ordered, unique, case-sensitive.
    pub tech_stack: Vec<String>,
    pub demo_url: String,
    pub repo_url: String,
    /// Gallery only.
    pub video_url: Option<String>,
    pub is_featured: bool,
    /// Dashboard only.
    pub created_at: Option<NaiveDate>,
}

impl CatalogEntry for Project {
    fn id(&self) -> DbId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn student_name(&self) -> &str {
        &self.student_name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn is_featured(&self) -> bool {
        self.is_featured
    }
}

/// Form payload for creating or editing a project.
///
/// Missing fields take the empty-form defaults. Required fields are not
/// enforced; only upper length limits are.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct ProjectForm {
    #[validate(length(max = 200))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(length(max = 100))]
    pub category: String,
    #[validate(length(max = 100))]
    pub student_name: String,
    #[validate(length(max = 100))]
    pub student_class: String,
    pub tech_stack: Vec<String>,
    #[validate(length(max = 2048))]
    pub demo_url: String,
    #[validate(length(max = 2048))]
    pub repo_url: String,
    pub is_featured: bool,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: DEFAULT_FORM_CATEGORY.to_string(),
            student_name: String::new(),
            student_class: String::new(),
            tech_stack: Vec::new(),
            demo_url: String::new(),
            repo_url: String::new(),
            is_featured: false,
        }
    }
}

/// Body of `POST /admin/projects/{id}/tech-stack`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddTechRequest {
    pub value: String,
}
