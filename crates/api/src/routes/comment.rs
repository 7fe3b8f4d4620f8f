//! Route definitions for the `/comments` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// ```text
/// POST   /   -> create (attach to a project or task)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(comment::create))
}
