//! Error types for board domain validation.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The column name is empty after trimming.
    #[error("column name must not be empty")]
    EmptyColumnName,

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyTaskDescription,
}
