//! Handlers for the `/comments` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use taskboard_core::error::CoreError;
use taskboard_core::validate::{validate_comment_body, validate_comment_kind};
use taskboard_db::models::comment::{CommentKind, CreateComment};
use taskboard_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /comments
///
/// Attach a comment to a project or task. The parent must exist at creation
/// time; a comment always has exactly one parent.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    validate_comment_kind(&input.parent_kind)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    validate_comment_body(&input.body)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    // validate_comment_kind guarantees the parse succeeds.
    let kind = CommentKind::parse(&input.parent_kind).ok_or_else(|| {
        AppError::InternalError(format!("Unmapped parent kind '{}'", input.parent_kind))
    })?;

    // The repository guards the insert against a missing parent atomically,
    // so a cascade delete racing this request cannot strand an orphan.
    let comment = CommentRepo::create(&state.pool, kind, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: match kind {
                CommentKind::Project => "Project",
                CommentKind::Task => "Task",
            },
            id: input.parent_id,
        }))?;

    tracing::info!(
        comment_id = comment.id,
        parent_kind = kind.as_str(),
        parent_id = comment.parent_id,
        "Comment created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}
