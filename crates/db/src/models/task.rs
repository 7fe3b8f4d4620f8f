//! Task entity model, status enum, and DTOs.
//!
//! A task with `parent_task_id` set is a subtask; nesting depth is not
//! limited. Every task row carries its `project_id`, subtasks included, so
//! project-level queries never need to walk the tree.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::types::{DbId, Timestamp};
use taskboard_core::validate::{STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_PENDING};

/// Task workflow status, stored as lowercase text.
///
/// Transitions are unrestricted: any status may be overwritten with any
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Parse the wire/storage form (`pending`, `in_progress`, `completed`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            STATUS_PENDING => Some(Self::Pending),
            STATUS_IN_PROGRESS => Some(Self::InProgress),
            STATUS_COMPLETED => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Completed => STATUS_COMPLETED,
        }
    }
}

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub parent_task_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: Timestamp,
}

/// DTO for creating a new task or subtask. The project id comes from the
/// request path, not the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub parent_task_id: Option<DbId>,
}

/// A task row annotated with its direct subtask count and comment count,
/// as returned by the project and task detail views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaskSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub task: Task,
    pub subtask_count: i64,
    pub comment_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_round_trip() {
        for status in [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed] {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn status_parse_rejects_unknown() {
        assert_eq!(TaskStatus::parse("done"), None);
        assert_eq!(TaskStatus::parse("Pending"), None);
        assert_eq!(TaskStatus::parse(""), None);
    }
}
