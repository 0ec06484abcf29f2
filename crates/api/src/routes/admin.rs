//! Route definitions for dashboard project management.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /projects                              -> list
/// POST   /projects                              -> create
/// GET    /projects/{id}                         -> get_by_id
/// PUT    /projects/{id}                         -> update
/// DELETE /projects/{id}                         -> delete
/// PATCH  /projects/{id}/featured                -> toggle_featured
/// POST   /projects/{id}/tech-stack              -> add_tech_tag
/// DELETE /projects/{id}/tech-stack/{tech}       -> remove_tech_tag
/// POST   /projects/{id}/delete-request          -> request_delete
///
/// GET    /delete-confirmation                   -> pending_delete
/// POST   /delete-confirmation/confirm           -> confirm_delete
/// POST   /delete-confirmation/cancel            -> cancel_delete
/// ```
pub fn router() -> Router<AppState> {
    let project_routes = Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/featured", patch(project::toggle_featured))
        .route("/{id}/tech-stack", post(project::add_tech_tag))
        .route("/{id}/tech-stack/{tech}", delete(project::remove_tech_tag))
        .route("/{id}/delete-request", post(project::request_delete));

    let confirmation_routes = Router::new()
        .route("/", get(project::pending_delete))
        .route("/confirm", post(project::confirm_delete))
        .route("/cancel", post(project::cancel_delete));

    Router::new()
        .nest("/projects", project_routes)
        .nest("/delete-confirmation", confirmation_routes)
}
