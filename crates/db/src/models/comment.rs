//! Comment entity model and DTOs.
//!
//! A comment is attached to exactly one parent entity, discriminated by
//! `parent_kind` + `parent_id` (a tagged reference, not two nullable FKs).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::types::{DbId, Timestamp};
use taskboard_core::validate::{KIND_PROJECT, KIND_TASK};

/// The kind of entity a comment is attached to, stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum CommentKind {
    Project,
    Task,
}

impl CommentKind {
    /// Parse the wire/storage form (`project`, `task`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            KIND_PROJECT => Some(Self::Project),
            KIND_TASK => Some(Self::Task),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => KIND_PROJECT,
            Self::Task => KIND_TASK,
        }
    }
}

/// A comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub parent_kind: CommentKind,
    pub parent_id: DbId,
    pub body: String,
    pub author: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new comment. `parent_kind` arrives as a string and is
/// validated at the boundary before being parsed into [`CommentKind`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub parent_kind: String,
    pub parent_id: DbId,
    pub body: String,
    /// Defaults to `"User"` if omitted.
    pub author: Option<String>,
}
