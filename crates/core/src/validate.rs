//! Input validation for projects, tasks, and comments.
//!
//! Every helper returns `Result<(), String>` with a human-readable message;
//! callers decide how to surface the failure (the HTTP layer maps these to
//! `CoreError::Validation` → 400).

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a project name or task title in characters.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a comment body in characters.
pub const MAX_COMMENT_BODY_LENGTH: usize = 10_000;

// ---------------------------------------------------------------------------
// Task statuses
// ---------------------------------------------------------------------------

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";

/// All valid task status values, in lifecycle order. Transitions between
/// them are unrestricted: any status may be overwritten with any other.
pub const VALID_TASK_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_IN_PROGRESS, STATUS_COMPLETED];

// ---------------------------------------------------------------------------
// Comment parent kinds
// ---------------------------------------------------------------------------

pub const KIND_PROJECT: &str = "project";
pub const KIND_TASK: &str = "task";

/// Entity kinds a comment can be attached to. A comment has exactly one
/// parent, discriminated by this kind.
pub const VALID_COMMENT_KINDS: &[&str] = &[KIND_PROJECT, KIND_TASK];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a project name: non-empty after trimming, within the length limit.
pub fn validate_project_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Project name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "Project name exceeds maximum length of {MAX_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a task title: non-empty after trimming, within the length limit.
pub fn validate_task_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Task title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "Task title exceeds maximum length of {MAX_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a comment body: non-empty after trimming, within the length limit.
pub fn validate_comment_body(body: &str) -> Result<(), String> {
    if body.trim().is_empty() {
        return Err("Comment body cannot be empty".to_string());
    }
    if body.chars().count() > MAX_COMMENT_BODY_LENGTH {
        return Err(format!(
            "Comment body exceeds maximum length of {MAX_COMMENT_BODY_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate that the status string is one of the accepted values.
pub fn validate_task_status(status: &str) -> Result<(), String> {
    if VALID_TASK_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_TASK_STATUSES.join(", ")
        ))
    }
}

/// Validate that the comment parent kind is one of the allowed values.
pub fn validate_comment_kind(kind: &str) -> Result<(), String> {
    if VALID_COMMENT_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(format!(
            "Invalid parent kind '{kind}'. Must be one of: {}",
            VALID_COMMENT_KINDS.join(", ")
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_project_name ----------------------------------------------

    #[test]
    fn project_name_accepted() {
        assert!(validate_project_name("Launch").is_ok());
    }

    #[test]
    fn empty_project_name_rejected() {
        let result = validate_project_name("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be empty"));
    }

    #[test]
    fn whitespace_only_project_name_rejected() {
        assert!(validate_project_name("   ").is_err());
    }

    #[test]
    fn overlong_project_name_rejected() {
        let name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_project_name(&name).is_err());
    }

    #[test]
    fn length_limits_count_characters_not_bytes() {
        // Two bytes per char in UTF-8; must still fit the character limit.
        let name = "ü".repeat(MAX_NAME_LENGTH);
        assert!(validate_project_name(&name).is_ok());
        assert!(validate_task_title(&name).is_ok());

        let body = "ü".repeat(MAX_COMMENT_BODY_LENGTH);
        assert!(validate_comment_body(&body).is_ok());

        let over = "ü".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_project_name(&over).is_err());
    }

    // -- validate_task_title ------------------------------------------------

    #[test]
    fn task_title_accepted() {
        assert!(validate_task_title("Design").is_ok());
    }

    #[test]
    fn empty_task_title_rejected() {
        assert!(validate_task_title("").is_err());
        assert!(validate_task_title("\t\n").is_err());
    }

    // -- validate_comment_body ----------------------------------------------

    #[test]
    fn comment_body_accepted() {
        assert!(validate_comment_body("Looks good to me").is_ok());
    }

    #[test]
    fn empty_comment_body_rejected() {
        let result = validate_comment_body("  ");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be empty"));
    }

    #[test]
    fn overlong_comment_body_rejected() {
        let body = "x".repeat(MAX_COMMENT_BODY_LENGTH + 1);
        assert!(validate_comment_body(&body).is_err());
    }

    // -- validate_task_status -----------------------------------------------

    #[test]
    fn valid_statuses_accepted() {
        assert!(validate_task_status("pending").is_ok());
        assert!(validate_task_status("in_progress").is_ok());
        assert!(validate_task_status("completed").is_ok());
    }

    #[test]
    fn invalid_status_rejected() {
        let result = validate_task_status("done");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid status"));
    }

    #[test]
    fn case_sensitive_status() {
        assert!(validate_task_status("Pending").is_err());
        assert!(validate_task_status("").is_err());
    }

    // -- validate_comment_kind ----------------------------------------------

    #[test]
    fn valid_comment_kinds_accepted() {
        assert!(validate_comment_kind("project").is_ok());
        assert!(validate_comment_kind("task").is_ok());
    }

    #[test]
    fn invalid_comment_kind_rejected() {
        assert!(validate_comment_kind("subtask").is_err());
        assert!(validate_comment_kind("").is_err());
        assert!(validate_comment_kind("Project").is_err());
    }
}
