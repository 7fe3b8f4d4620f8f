//! Route definitions for the `/tasks` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /{id}          -> get_detail (subtasks + comments)
/// DELETE /{id}          -> delete (cascade)
/// PATCH  /{id}/status   -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(task::get_detail).delete(task::delete))
        .route("/{id}/status", patch(task::update_status))
}
