//! `PostgreSQL` adapters for board persistence.

mod column;
mod models;
mod schema;
mod task;

pub use column::PostgresColumnRepository;
pub use task::PostgresTaskRepository;

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// SQL that creates the board tables when they do not exist yet.
pub const CREATE_BOARD_TABLES_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_board_tables/up.sql");

/// Errors raised while preparing the `PostgreSQL` store.
#[derive(Debug, Error)]
pub enum PostgresSetupError {
    /// The connection pool could not be built or could not hand out a
    /// connection.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    /// Applying the board schema failed.
    #[error("schema setup failed: {0}")]
    Schema(#[from] diesel::result::Error),
}

/// Builds a connection pool for the given database URL.
///
/// # Errors
///
/// Returns [`PostgresSetupError::Pool`] when the pool cannot establish its
/// initial connections.
pub fn build_pool(database_url: &str, max_size: u32) -> Result<BoardPgPool, PostgresSetupError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Ok(Pool::builder().max_size(max_size).build(manager)?)
}

/// Creates the board tables if they are missing.
///
/// This is a blocking call; run it from `spawn_blocking` or before the
/// service starts accepting requests.
///
/// # Errors
///
/// Returns [`PostgresSetupError`] when no connection is available or the
/// schema statements fail.
pub fn apply_schema(pool: &BoardPgPool) -> Result<(), PostgresSetupError> {
    let mut connection = pool.get()?;
    connection.batch_execute(CREATE_BOARD_TABLES_SQL)?;
    Ok(())
}
