//! Handlers for the `/tasks` resource (and task creation under a project).
//!
//! A task with `parent_task_id` set is a subtask. The parent must exist and
//! belong to the same project; a cross-project parent is an integrity
//! violation, never a silent success.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_core::validate::{validate_task_status, validate_task_title};
use taskboard_db::models::comment::{Comment, CommentKind};
use taskboard_db::models::task::{CreateTask, Task, TaskStatus, TaskSummary};
use taskboard_db::repositories::{CommentRepo, ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response payloads
// ---------------------------------------------------------------------------

/// Body for PATCH /tasks/{id}/status. The status arrives as a string so an
/// unknown value surfaces as a validation failure, not a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatus {
    pub status: String,
}

/// Full task view: the task row, its direct subtasks (each with counts),
/// and its comments.
#[derive(Debug, Serialize)]
pub struct TaskDetail {
    pub task: Task,
    pub subtasks: Vec<TaskSummary>,
    pub comments: Vec<Comment>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /projects/{project_id}/tasks
///
/// Create a task (or, with `parent_task_id`, a subtask) under a project.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateTask>,
) -> AppResult<impl IntoResponse> {
    validate_task_title(&input.title)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    if ProjectRepo::find_by_id(&state.pool, project_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }));
    }

    if let Some(parent_id) = input.parent_task_id {
        let parent = TaskRepo::find_by_id(&state.pool, parent_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Task",
                id: parent_id,
            }))?;

        if parent.project_id != project_id {
            return Err(AppError::Core(CoreError::Integrity(format!(
                "Parent task {parent_id} belongs to a different project"
            ))));
        }
    }

    let task = TaskRepo::create(&state.pool, project_id, &input).await?;

    tracing::info!(
        task_id = task.id,
        project_id,
        parent_task_id = ?task.parent_task_id,
        title = %task.title,
        "Task created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

/// GET /tasks/{id}
///
/// Get a task with its direct subtasks and comments.
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    let subtasks = TaskRepo::list_subtasks_with_counts(&state.pool, id).await?;
    let comments = CommentRepo::list_for_parent(&state.pool, CommentKind::Task, id).await?;

    Ok(Json(DataResponse {
        data: TaskDetail {
            task,
            subtasks,
            comments,
        },
    }))
}

/// PATCH /tasks/{id}/status
///
/// Overwrite a task's status. Any status may replace any other.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTaskStatus>,
) -> AppResult<impl IntoResponse> {
    validate_task_status(&input.status)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    // validate_task_status guarantees the parse succeeds.
    let status = TaskStatus::parse(&input.status)
        .ok_or_else(|| AppError::InternalError(format!("Unmapped status '{}'", input.status)))?;

    let task = TaskRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    tracing::info!(task_id = id, status = status.as_str(), "Task status updated");

    Ok(Json(DataResponse { data: task }))
}

/// DELETE /tasks/{id}
///
/// Delete a task, its subtasks (recursively), and their comments, as one
/// atomic cascade.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TaskRepo::delete_cascade(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Task", id }));
    }

    tracing::info!(task_id = id, "Task deleted (cascade)");

    Ok(StatusCode::NO_CONTENT)
}
