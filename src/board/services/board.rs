//! Composition root wiring the column and task services to shared stores.

use super::{BoardServiceResult, ColumnService, TaskService};
use crate::board::ports::{ColumnRepository, TaskRepository};
use std::sync::Arc;

/// Column and task services sharing one pair of stores.
///
/// Construct with [`Board::start`], which seeds the default columns before
/// handing out the services.
#[derive(Clone)]
pub struct Board<T, C>
where
    T: TaskRepository,
    C: ColumnRepository,
{
    columns: ColumnService<C>,
    tasks: TaskService<T, C>,
}

impl<T, C> Board<T, C>
where
    T: TaskRepository,
    C: ColumnRepository,
{
    /// Seeds the default columns, then builds the services.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardServiceError::Store`] when seeding fails. No
    /// services are returned in that case.
    pub async fn start(tasks: Arc<T>, columns: Arc<C>) -> BoardServiceResult<Self> {
        let column_service = ColumnService::new(Arc::clone(&columns));
        let report = column_service.ensure_default_columns().await?;
        tracing::info!(
            inserted = report.inserted.len(),
            already_present = report.already_present.len(),
            "board default columns ready"
        );

        Ok(Self {
            columns: column_service,
            tasks: TaskService::new(tasks, columns),
        })
    }

    /// Returns the column service.
    #[must_use]
    pub const fn columns(&self) -> &ColumnService<C> {
        &self.columns
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskService<T, C> {
        &self.tasks
    }
}
