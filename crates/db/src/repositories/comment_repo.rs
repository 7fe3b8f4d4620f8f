//! Repository for the `comments` table.

use chrono::Utc;
use taskboard_core::types::DbId;

use crate::models::comment::{Comment, CommentKind, CreateComment};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, parent_kind, parent_id, body, author, created_at";

/// Provides create/list operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row, or `None` if the
    /// referenced parent entity does not exist.
    ///
    /// The parent is polymorphic, so there is no FK backing it; the INSERT
    /// itself is guarded with an EXISTS predicate on the referenced table.
    /// Checking existence in a separate statement would leave a window for
    /// a concurrent cascade delete to commit in between, stranding an
    /// orphan comment no cascade would ever sweep. A missing `author`
    /// falls back to `"User"`.
    pub async fn create(
        pool: &DbPool,
        kind: CommentKind,
        input: &CreateComment,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let parent_table = match kind {
            CommentKind::Project => "projects",
            CommentKind::Task => "tasks",
        };
        let query = format!(
            "INSERT INTO comments (parent_kind, parent_id, body, author, created_at)
             SELECT $1, $2, $3, COALESCE($4, 'User'), $5
             WHERE EXISTS (SELECT 1 FROM {parent_table} WHERE id = $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(kind)
            .bind(input.parent_id)
            .bind(&input.body)
            .bind(&input.author)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// List all comments attached to the given parent, oldest first.
    pub async fn list_for_parent(
        pool: &DbPool,
        kind: CommentKind,
        parent_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE parent_kind = $1 AND parent_id = $2
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(kind)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }
}
