//! Route definitions for the `/projects` resource.
//!
//! Also nests task creation under `/projects/{project_id}/tasks`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                            -> list
/// POST   /                            -> create
/// GET    /{id}                        -> get_detail
/// DELETE /{id}                        -> delete
/// GET    /{id}/task-count             -> task_count
/// POST   /{project_id}/tasks          -> task::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_detail).delete(project::delete),
        )
        .route("/{id}/task-count", get(project::task_count))
        .route("/{project_id}/tasks", post(task::create))
}
