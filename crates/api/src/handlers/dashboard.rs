//! Handlers for the admin dashboard home view.

use axum::extract::State;
use axum::Json;
use galeri_core::stats::{
    category_distribution, featured_split, stats_cards, CategoryShare, FeaturedSplit, StatsCards,
};
use galeri_db::models::project::Project;
use galeri_db::repositories::ProjectRepo;
use serde::Serialize;

use crate::response::DataResponse;
use crate::state::AppState;

/// Number of projects in the "recent projects" panel.
pub const RECENT_PROJECTS_LIMIT: usize = 3;

/// Everything the dashboard home view renders.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub stats: StatsCards,
    pub category_distribution: Vec<CategoryShare>,
    pub featured_split: FeaturedSplit,
    /// First projects in list order; new creations come first.
    pub recent_projects: Vec<Project>,
}

/// GET /api/v1/dashboard/summary
pub async fn summary(State(state): State<AppState>) -> Json<DataResponse<DashboardSummary>> {
    let projects = ProjectRepo::list(&state.dashboard).await;
    let categories = state.dashboard.categories();

    let summary = DashboardSummary {
        stats: stats_cards(&projects, categories),
        category_distribution: category_distribution(&projects, categories),
        featured_split: featured_split(&projects),
        recent_projects: projects.iter().take(RECENT_PROJECTS_LIMIT).cloned().collect(),
    };

    Json(DataResponse { data: summary })
}
