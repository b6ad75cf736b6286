//! `PostgreSQL` repository implementation for board columns.

use super::{
    BoardPgPool,
    models::{ColumnRow, NewColumnRow},
    schema::board_columns,
};
use crate::board::{
    domain::{Column, ColumnId},
    ports::{ColumnRepository, ColumnRepositoryError, ColumnRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed column repository.
#[derive(Debug, Clone)]
pub struct PostgresColumnRepository {
    pool: BoardPgPool,
}

impl PostgresColumnRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ColumnRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ColumnRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ColumnRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ColumnRepositoryError::persistence)?
    }
}

#[async_trait]
impl ColumnRepository for PostgresColumnRepository {
    async fn list_all(&self) -> ColumnRepositoryResult<Vec<Column>> {
        self.run_blocking(move |connection| {
            let rows = board_columns::table
                .select(ColumnRow::as_select())
                .load::<ColumnRow>(connection)
                .map_err(ColumnRepositoryError::persistence)?;
            rows.into_iter()
                .map(|row| row.into_column().map_err(ColumnRepositoryError::persistence))
                .collect()
        })
        .await
    }

    async fn find_by_id(&self, id: ColumnId) -> ColumnRepositoryResult<Option<Column>> {
        self.run_blocking(move |connection| {
            let row = board_columns::table
                .filter(board_columns::id.eq(id.into_inner()))
                .select(ColumnRow::as_select())
                .first::<ColumnRow>(connection)
                .optional()
                .map_err(ColumnRepositoryError::persistence)?;
            row.map(|found| found.into_column().map_err(ColumnRepositoryError::persistence))
                .transpose()
        })
        .await
    }

    async fn store(&self, column: &Column) -> ColumnRepositoryResult<()> {
        let column_id = column.id();
        let new_row = NewColumnRow::from(column);

        self.run_blocking(move |connection| {
            diesel::insert_into(board_columns::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ColumnRepositoryError::DuplicateColumn(column_id)
                    }
                    _ => ColumnRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }
}
