//! Repository for the `projects` table.

use chrono::Utc;
use taskboard_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectSummary};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, icon_data, created_at";

/// Provides CRUD operations for projects, including the cascade delete.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, description, icon_data, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon_data)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first, each with
    /// its total task count (subtasks included).
    pub async fn list_with_task_counts(pool: &DbPool) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS},
                (SELECT COUNT(*) FROM tasks t WHERE t.project_id = projects.id) AS task_count
             FROM projects
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ProjectSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Count all tasks in a project, subtasks included.
    pub async fn task_count(pool: &DbPool, id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE project_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Delete a project and everything under it: all its tasks (every
    /// nesting level) and all comments attached to the project or to any of
    /// its tasks.
    ///
    /// Runs as a single transaction so a concurrent reader never observes a
    /// partially-deleted tree. Returns `true` if a project row existed.
    pub async fn delete_cascade(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Every task row carries project_id, so the comment sweep does not
        // need to walk the subtask tree.
        sqlx::query(
            "DELETE FROM comments
             WHERE parent_kind = 'task'
               AND parent_id IN (SELECT id FROM tasks WHERE project_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM comments WHERE parent_kind = 'project' AND parent_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM tasks WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
