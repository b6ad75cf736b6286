//! Repository port for column persistence and lookup.

use crate::board::domain::{Column, ColumnId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for column repository operations.
pub type ColumnRepositoryResult<T> = Result<T, ColumnRepositoryError>;

/// Column persistence contract.
#[async_trait]
pub trait ColumnRepository: Send + Sync {
    /// Returns every stored column. No ordering is guaranteed.
    async fn list_all(&self) -> ColumnRepositoryResult<Vec<Column>>;

    /// Finds a column by identifier.
    ///
    /// Returns `None` when the column does not exist.
    async fn find_by_id(&self, id: ColumnId) -> ColumnRepositoryResult<Option<Column>>;

    /// Stores a new column.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnRepositoryError::DuplicateColumn`] when the column ID
    /// already exists.
    async fn store(&self, column: &Column) -> ColumnRepositoryResult<()>;
}

/// Errors returned by column repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ColumnRepositoryError {
    /// A column with the same identifier already exists.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumn(ColumnId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ColumnRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
