//! Route definitions for the public gallery.

use axum::routing::get;
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
///
/// ```text
/// GET    /                  -> gallery
/// GET    /categories        -> list_categories
/// GET    /projects/{id}     -> get_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::gallery))
        .route("/categories", get(gallery::list_categories))
        .route("/projects/{id}", get(gallery::get_project))
}
