//! Service layer for column lookup and creation.

use super::{BoardServiceError, BoardServiceResult, SeedReport, seed_default_columns};
use crate::board::{
    domain::{Column, ColumnId, ColumnName},
    ports::ColumnRepository,
    projection::ColumnView,
};
use std::sync::Arc;

/// Column orchestration service.
#[derive(Clone)]
pub struct ColumnService<C>
where
    C: ColumnRepository,
{
    columns: Arc<C>,
}

impl<C> ColumnService<C>
where
    C: ColumnRepository,
{
    /// Creates a new column service.
    #[must_use]
    pub const fn new(columns: Arc<C>) -> Self {
        Self { columns }
    }

    /// Returns every column, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the lookup fails.
    pub async fn list_columns(&self) -> BoardServiceResult<Vec<ColumnView>> {
        let columns = self
            .columns
            .list_all()
            .await
            .map_err(|err| BoardServiceError::store("list columns", err))?;
        Ok(columns.iter().map(ColumnView::from).collect())
    }

    /// Finds a column by identifier.
    ///
    /// Returns `Ok(None)` when no column has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the lookup fails.
    pub async fn get_column(&self, id: ColumnId) -> BoardServiceResult<Option<ColumnView>> {
        let column = self
            .columns
            .find_by_id(id)
            .await
            .map_err(|err| BoardServiceError::store(format!("load column {id}"), err))?;
        Ok(column.map(ColumnView::from))
    }

    /// Creates a column with a fresh identifier. Names need not be unique.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::InvalidArgument`] when the name is blank,
    /// or [`BoardServiceError::Store`] when persistence fails.
    pub async fn create_column(&self, name: impl Into<String>) -> BoardServiceResult<ColumnView> {
        let column = Column::new(ColumnName::new(name)?);
        self.columns.store(&column).await.map_err(|err| {
            BoardServiceError::store(format!("create column {}", column.id()), err)
        })?;
        tracing::debug!(column_id = %column.id(), name = %column.name(), "column created");
        Ok(ColumnView::from(column))
    }

    /// Seeds the default columns through this service's store.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when seeding fails.
    pub async fn ensure_default_columns(&self) -> BoardServiceResult<SeedReport> {
        seed_default_columns(self.columns.as_ref()).await
    }
}
