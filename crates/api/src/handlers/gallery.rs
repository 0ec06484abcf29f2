//! Handlers for the public gallery page.
//!
//! The gallery owns its own copy of the mock data; dashboard edits never
//! show up here.

use axum::extract::{Path, Query, State};
use axum::Json;
use galeri_core::catalog::{gallery_view, GALLERY_EMPTY_MESSAGE};
use galeri_core::error::CoreError;
use galeri_core::stats::{gallery_stats, GalleryStats};
use galeri_core::types::{DbId, ALL_CATEGORIES};
use galeri_db::models::category::Category;
use galeri_db::models::project::Project;
use galeri_db::repositories::{CategoryRepo, ProjectRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::GalleryParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// The project grid for one category filter.
#[derive(Debug, Serialize)]
pub struct GalleryView {
    pub active_category: String,
    /// Display name of the active category, `None` for an unknown slug.
    pub active_category_name: Option<String>,
    /// Filtered, featured first.
    pub projects: Vec<Project>,
    /// Stats bar under the grid, over the filtered projects.
    pub stats: GalleryStats,
    /// Present only when `projects` is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

/// GET /api/v1/gallery
///
/// Projects of `?category=` (default `all`), featured projects first.
pub async fn gallery(
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
) -> Json<DataResponse<GalleryView>> {
    let category = params
        .category
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());

    let all = ProjectRepo::list(&state.gallery).await;
    let projects: Vec<Project> = gallery_view(&all, &category)
        .into_iter()
        .cloned()
        .collect();

    let stats = gallery_stats(&projects, state.gallery.categories());

    let view = GalleryView {
        active_category_name: CategoryRepo::find_by_slug(&state.gallery, &category)
            .map(|c| c.name.clone()),
        empty_message: projects.is_empty().then_some(GALLERY_EMPTY_MESSAGE),
        active_category: category,
        projects,
        stats,
    };

    Json(DataResponse { data: view })
}

/// GET /api/v1/gallery/categories
///
/// Filter bar entries, sentinel first, with icon identifiers.
pub async fn list_categories(State(state): State<AppState>) -> Json<DataResponse<Vec<Category>>> {
    Json(DataResponse {
        data: CategoryRepo::list(&state.gallery),
    })
}

/// GET /api/v1/gallery/projects/{id}
///
/// Full project detail for the gallery modal.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.gallery, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}
