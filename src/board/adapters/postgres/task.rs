//! `PostgreSQL` repository implementation for board tasks.

use super::{
    BoardPgPool,
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::board_tasks,
};
use crate::board::{
    domain::{ColumnId, Page, PageRequest, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: BoardPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = board_tasks::table
                .filter(board_tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_page(&self, request: PageRequest) -> TaskRepositoryResult<Page<Task>> {
        self.run_blocking(move |connection| {
            let rows = board_tasks::table
                .select(TaskRow::as_select())
                .order((
                    board_tasks::is_favourite.desc(),
                    board_tasks::name.asc(),
                    board_tasks::id.asc(),
                ))
                .offset(request.offset())
                .limit(request.limit())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            let total = board_tasks::table
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let items = rows
                .into_iter()
                .map(row_to_task)
                .collect::<TaskRepositoryResult<Vec<_>>>()?;
            let total_count = u64::try_from(total).map_err(TaskRepositoryError::persistence)?;
            Ok(Page::new(items, total_count))
        })
        .await
    }

    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = NewTaskRow::from(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(board_tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn replace(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = TaskChangeset::from(task);

        self.run_blocking(move |connection| {
            let updated = diesel::update(
                board_tasks::table.filter(board_tasks::id.eq(task_id.into_inner())),
            )
            .set(&changeset)
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            ensure_matched(updated, task_id)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted =
                diesel::delete(board_tasks::table.filter(board_tasks::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;
            ensure_matched(deleted, id)
        })
        .await
    }

    async fn set_column(&self, task_id: TaskId, column_id: ColumnId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let updated = diesel::update(
                board_tasks::table.filter(board_tasks::id.eq(task_id.into_inner())),
            )
            .set(board_tasks::column_id.eq(column_id.into_inner()))
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            ensure_matched(updated, task_id)
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    row.into_task().map_err(TaskRepositoryError::persistence)
}

const fn ensure_matched(affected_rows: usize, task_id: TaskId) -> TaskRepositoryResult<()> {
    if affected_rows == 0 {
        return Err(TaskRepositoryError::NotFound(task_id));
    }
    Ok(())
}
