//! Handlers for the `/projects` resource.
//!
//! Provides endpoints for listing, creating, inspecting, and deleting
//! projects, plus the task-count lookup.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_core::validate::validate_project_name;
use taskboard_db::models::comment::{Comment, CommentKind};
use taskboard_db::models::project::{CreateProject, Project};
use taskboard_db::models::task::TaskSummary;
use taskboard_db::repositories::{CommentRepo, ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

/// Full project view: the project row, its top-level tasks (each with
/// subtask and comment counts), and its project-level comments.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub tasks: Vec<TaskSummary>,
    pub comments: Vec<Comment>,
}

/// Payload for the task-count lookup.
#[derive(Debug, Serialize)]
pub struct TaskCount {
    pub count: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /projects
///
/// List all projects, newest first, each with its total task count.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list_with_task_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /projects
///
/// Create a new project.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    validate_project_name(&input.name)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(project_id = project.id, name = %project.name, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /projects/{id}
///
/// Get a project with its top-level tasks and project-level comments.
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let tasks = TaskRepo::list_top_level_with_counts(&state.pool, id).await?;
    let comments = CommentRepo::list_for_parent(&state.pool, CommentKind::Project, id).await?;

    Ok(Json(DataResponse {
        data: ProjectDetail {
            project,
            tasks,
            comments,
        },
    }))
}

/// DELETE /projects/{id}
///
/// Delete a project and everything under it (tasks, subtasks, comments),
/// as one atomic cascade.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProjectRepo::delete_cascade(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    tracing::info!(project_id = id, "Project deleted (cascade)");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /projects/{id}/task-count
///
/// Total number of tasks in the project, subtasks included.
pub async fn task_count(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if ProjectRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    let count = ProjectRepo::task_count(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: TaskCount { count },
    }))
}
