pub mod comment;
pub mod health;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                          list (GET), create (POST)
/// /projects/{id}                     detail (GET), cascade delete (DELETE)
/// /projects/{id}/task-count          total task count (GET)
/// /projects/{project_id}/tasks       create task or subtask (POST)
///
/// /tasks/{id}                        detail with subtasks + comments (GET),
///                                    cascade delete (DELETE)
/// /tasks/{id}/status                 overwrite status (PATCH)
///
/// /comments                          attach to project or task (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/comments", comment::router())
}
