//! Handlers for the dashboard's `/categories` resource.

use axum::extract::State;
use axum::Json;
use galeri_db::models::category::Category;
use galeri_db::repositories::CategoryRepo;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> Json<DataResponse<Vec<Category>>> {
    Json(DataResponse {
        data: CategoryRepo::list(&state.dashboard),
    })
}
