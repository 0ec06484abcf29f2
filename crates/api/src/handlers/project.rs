//! Handlers for the dashboard's `/admin/projects` resource.
//!
//! Covers the paginated project table, the create/edit form, the featured
//! toggle, tech-stack tag editing and the two-step delete confirmation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use galeri_core::catalog::{filter_table, TABLE_EMPTY_MESSAGE};
use galeri_core::error::CoreError;
use galeri_core::pagination::{paginate, total_pages, ADMIN_PAGE_SIZE};
use galeri_core::tech_stack::{normalize_tech_stack, validate_tech_stack};
use galeri_core::types::DbId;
use galeri_core::view_state::{PendingDelete, TableState};
use galeri_db::models::project::{AddTechRequest, Project, ProjectForm};
use galeri_db::repositories::ProjectRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::TableParams;
use crate::response::{DataResponse, PagedResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// Length limits from the form rules, then tag limits on the normalised stack.
fn validate_form(input: &ProjectForm) -> AppResult<()> {
    input.validate()?;
    validate_tech_stack(&normalize_tech_stack(&input.tech_stack))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/projects
///
/// Search (title OR student, case-insensitive) AND category, five per page.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TableParams>,
) -> Json<PagedResponse<Project>> {
    let mut table = TableState::default();
    if let Some(search) = params.search {
        table.set_search(search);
    }
    if let Some(category) = params.category {
        table.set_category(category);
    }

    let projects = ProjectRepo::list(&state.dashboard).await;
    let filtered = filter_table(&projects, table.search(), table.category());
    table.go_to_page(
        params.page.unwrap_or(1),
        total_pages(filtered.len(), ADMIN_PAGE_SIZE),
    );

    let page = paginate(&filtered, table.page(), ADMIN_PAGE_SIZE);
    let data: Vec<Project> = page.items.iter().map(|p| (*p).clone()).collect();

    Json(PagedResponse {
        empty_message: data.is_empty().then_some(TABLE_EMPTY_MESSAGE),
        pagination: page.info,
        data,
    })
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProjectForm>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    validate_form(&input)?;
    let project = ProjectRepo::create(&state.dashboard, &input).await;

    tracing::info!(project_id = project.id, title = %project.title, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/admin/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.dashboard, id)
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProjectForm>,
) -> AppResult<Json<DataResponse<Project>>> {
    validate_form(&input)?;
    let project = ProjectRepo::update(&state.dashboard, id, &input)
        .await
        .ok_or_else(|| not_found(id))?;

    tracing::info!(project_id = id, "Project updated");

    Ok(Json(DataResponse { data: project }))
}

/// PATCH /api/v1/admin/projects/{id}/featured
pub async fn toggle_featured(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::toggle_featured(&state.dashboard, id)
        .await
        .ok_or_else(|| not_found(id))?;

    tracing::info!(project_id = id, is_featured = project.is_featured, "Featured flag toggled");

    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/admin/projects/{id}/tech-stack
///
/// Appends the trimmed tag. Blank or duplicate tags return the project
/// unchanged; a tag over the limits is rejected with 400.
pub async fn add_tech_tag(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AddTechRequest>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::add_tech(&state.dashboard, id, &input.value)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/admin/projects/{id}/tech-stack/{tech}
pub async fn remove_tech_tag(
    State(state): State<AppState>,
    Path((id, tech)): Path<(DbId, String)>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::remove_tech(&state.dashboard, id, &tech)
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.dashboard, id).await {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/v1/admin/projects/{id}/delete-request
///
/// First step of the two-step delete: remember the target and return the
/// title for the confirmation prompt. Replaces any earlier request.
pub async fn request_delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PendingDelete>>> {
    let project = ProjectRepo::find_by_id(&state.dashboard, id)
        .await
        .ok_or_else(|| not_found(id))?;

    let pending = state
        .delete_confirmation
        .lock()
        .await
        .request(project.id, project.title);
    Ok(Json(DataResponse { data: pending }))
}

/// GET /api/v1/admin/delete-confirmation
pub async fn pending_delete(
    State(state): State<AppState>,
) -> Json<DataResponse<Option<PendingDelete>>> {
    let pending = state.delete_confirmation.lock().await.pending().cloned();
    Json(DataResponse { data: pending })
}

/// POST /api/v1/admin/delete-confirmation/confirm
pub async fn confirm_delete(State(state): State<AppState>) -> AppResult<StatusCode> {
    let pending = state
        .delete_confirmation
        .lock()
        .await
        .confirm()
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "No delete is waiting for confirmation".to_string(),
            ))
        })?;

    if ProjectRepo::delete(&state.dashboard, pending.project_id).await {
        tracing::info!(project_id = pending.project_id, title = %pending.title, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(pending.project_id))
    }
}

/// POST /api/v1/admin/delete-confirmation/cancel
pub async fn cancel_delete(State(state): State<AppState>) -> StatusCode {
    if let Some(pending) = state.delete_confirmation.lock().await.cancel() {
        tracing::debug!(project_id = pending.project_id, "Delete cancelled");
    }
    StatusCode::NO_CONTENT
}
