//! Service-level error taxonomy for board operations.

use crate::board::{
    domain::{BoardDomainError, ColumnId, TaskId},
    ports::{ColumnRepositoryError, TaskRepositoryError},
};
use thiserror::Error;

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Coarse classification of a [`BoardServiceError`], for callers that map
/// failures onto response codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardErrorKind {
    /// Caller input violated a precondition. Never retried.
    InvalidArgument,
    /// A referenced task or column does not exist.
    NotFound,
    /// The store failed for reasons opaque to the board.
    StoreFailure,
}

/// Repository failure wrapped by [`BoardServiceError::Store`].
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Column repository failure.
    #[error(transparent)]
    Column(#[from] ColumnRepositoryError),
    /// Task repository failure.
    #[error(transparent)]
    Task(#[from] TaskRepositoryError),
}

/// Errors returned by the column and task services.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Input validation failed before the store was touched.
    #[error(transparent)]
    InvalidArgument(#[from] BoardDomainError),
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The referenced column does not exist.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),
    /// The store failed while performing an operation.
    #[error("failed to {operation}: {source}")]
    Store {
        /// Description of the operation, naming the entity involved.
        operation: String,
        /// The original repository failure.
        source: StoreError,
    },
}

impl BoardServiceError {
    /// Wraps a repository failure with the operation that triggered it.
    pub fn store(operation: impl Into<String>, source: impl Into<StoreError>) -> Self {
        Self::Store {
            operation: operation.into(),
            source: source.into(),
        }
    }

    /// Maps a task repository failure, surfacing a missing task as
    /// [`BoardServiceError::TaskNotFound`] and wrapping everything else.
    pub fn from_task_repository(operation: impl Into<String>, err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(task_id) => Self::TaskNotFound(task_id),
            other => Self::store(operation, other),
        }
    }

    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> BoardErrorKind {
        match self {
            Self::InvalidArgument(_) => BoardErrorKind::InvalidArgument,
            Self::TaskNotFound(_) | Self::ColumnNotFound(_) => BoardErrorKind::NotFound,
            Self::Store { .. } => BoardErrorKind::StoreFailure,
        }
    }
}
