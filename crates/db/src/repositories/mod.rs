//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod comment_repo;
pub mod project_repo;
pub mod task_repo;

pub use comment_repo::CommentRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
