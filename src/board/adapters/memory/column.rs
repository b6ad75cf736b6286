//! In-memory column repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Column, ColumnId},
    ports::{ColumnRepository, ColumnRepositoryError, ColumnRepositoryResult},
};

/// Thread-safe in-memory column repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryColumnRepository {
    state: Arc<RwLock<HashMap<ColumnId, Column>>>,
}

impl InMemoryColumnRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ColumnRepositoryError {
    ColumnRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ColumnRepository for InMemoryColumnRepository {
    async fn list_all(&self) -> ColumnRepositoryResult<Vec<Column>> {
        let columns = self.state.read().map_err(lock_poisoned)?;
        Ok(columns.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ColumnId) -> ColumnRepositoryResult<Option<Column>> {
        let columns = self.state.read().map_err(lock_poisoned)?;
        Ok(columns.get(&id).cloned())
    }

    async fn store(&self, column: &Column) -> ColumnRepositoryResult<()> {
        let mut columns = self.state.write().map_err(lock_poisoned)?;
        if columns.contains_key(&column.id()) {
            return Err(ColumnRepositoryError::DuplicateColumn(column.id()));
        }
        columns.insert(column.id(), column.clone());
        Ok(())
    }
}
