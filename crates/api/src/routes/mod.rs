pub mod admin;
pub mod category;
pub mod dashboard;
pub mod gallery;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /gallery                                         project grid (?category=)
/// /gallery/categories                              filter bar entries
/// /gallery/projects/{id}                           project detail
///
/// /categories                                      dashboard categories
/// /dashboard/summary                               home view stats
///
/// /admin/projects                                  table (?search=&category=&page=), create
/// /admin/projects/{id}                             get, update, delete
/// /admin/projects/{id}/featured                    toggle featured (PATCH)
/// /admin/projects/{id}/tech-stack                  add tag (POST)
/// /admin/projects/{id}/tech-stack/{tech}           remove tag (DELETE)
/// /admin/projects/{id}/delete-request              start two-step delete (POST)
/// /admin/delete-confirmation                       pending delete (GET)
/// /admin/delete-confirmation/confirm               confirm (POST)
/// /admin/delete-confirmation/cancel                cancel (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/gallery", gallery::router())
        .nest("/categories", category::router())
        .nest("/dashboard", dashboard::router())
        .nest("/admin", admin::router())
}
