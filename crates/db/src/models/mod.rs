pub mod comment;
pub mod project;
pub mod task;
