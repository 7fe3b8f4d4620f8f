//! Repository for the `tasks` table.
//!
//! Tasks form a tree within their project via `parent_task_id`. A parent
//! must already exist when a child is created, so the tree is acyclic by
//! construction.

use chrono::Utc;
use taskboard_core::types::DbId;

use crate::models::task::{CreateTask, Task, TaskStatus, TaskSummary};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, parent_task_id, title, description, status, created_at";

/// Count subqueries attached to summary rows: direct subtasks and comments.
const COUNT_COLUMNS: &str = "(SELECT COUNT(*) FROM tasks c WHERE c.parent_task_id = t.id) AS subtask_count,
     (SELECT COUNT(*) FROM comments m WHERE m.parent_kind = 'task' AND m.parent_id = t.id) AS comment_count";

/// Provides CRUD operations for tasks and subtasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task under the given project, returning the created row.
    ///
    /// Callers are responsible for checking that the project exists and that
    /// `parent_task_id`, if set, names a task in the same project.
    pub async fn create(
        pool: &DbPool,
        project_id: DbId,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, parent_task_id, title, description, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(input.parent_task_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(TaskStatus::Pending)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's top-level tasks (oldest first), each annotated with
    /// its direct subtask count and comment count.
    pub async fn list_top_level_with_counts(
        pool: &DbPool,
        project_id: DbId,
    ) -> Result<Vec<TaskSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, {COUNT_COLUMNS}
             FROM tasks t
             WHERE t.project_id = $1 AND t.parent_task_id IS NULL
             ORDER BY t.created_at ASC, t.id ASC"
        );
        sqlx::query_as::<_, TaskSummary>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List a task's direct subtasks (oldest first), each annotated with its
    /// own subtask count and comment count.
    pub async fn list_subtasks_with_counts(
        pool: &DbPool,
        parent_task_id: DbId,
    ) -> Result<Vec<TaskSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, {COUNT_COLUMNS}
             FROM tasks t
             WHERE t.parent_task_id = $1
             ORDER BY t.created_at ASC, t.id ASC"
        );
        sqlx::query_as::<_, TaskSummary>(&query)
            .bind(parent_task_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a task's status unconditionally.
    ///
    /// Returns the updated row, or `None` if no task with the given `id`
    /// exists.
    pub async fn update_status(
        pool: &DbPool,
        id: DbId,
        status: TaskStatus,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET status = $2 WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task, all its descendant subtasks, and every comment
    /// attached to any of them.
    ///
    /// The descendant set is collected with a recursive CTE; both deletes
    /// run inside one transaction so a concurrent reader never observes a
    /// partially-deleted subtree. Sibling tasks are untouched. Returns
    /// `true` if the task row existed.
    pub async fn delete_cascade(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "WITH RECURSIVE descendants (id) AS (
                 SELECT id FROM tasks WHERE id = $1
                 UNION ALL
                 SELECT t.id FROM tasks t JOIN descendants d ON t.parent_task_id = d.id
             )
             DELETE FROM comments
             WHERE parent_kind = 'task' AND parent_id IN (SELECT id FROM descendants)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query(
            "WITH RECURSIVE descendants (id) AS (
                 SELECT id FROM tasks WHERE id = $1
                 UNION ALL
                 SELECT t.id FROM tasks t JOIN descendants d ON t.parent_task_id = d.id
             )
             DELETE FROM tasks WHERE id IN (SELECT id FROM descendants)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
