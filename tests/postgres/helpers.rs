//! Shared test helpers for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, TemporaryDatabase, postgres_cluster};
use chrono::{DateTime, Utc};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use kanban::board::{
    adapters::postgres::{
        CREATE_BOARD_TABLES_SQL, PostgresColumnRepository, PostgresTaskRepository, build_pool,
    },
    domain::{Task, TaskName},
};
use rstest::fixture;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};
use uuid::Uuid;

/// Template database name for the pre-built board schema.
pub const TEMPLATE_DB: &str = "kanban_test_template";

/// Builds the runtime that drives the embedded cluster's async start-up.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built.
pub fn test_runtime() -> Result<Runtime, BoxError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| Box::new(err) as BoxError)
}

/// Ensures the template database exists with the board tables applied.
///
/// # Errors
///
/// Returns an error if template creation or schema setup fails.
pub async fn ensure_template(cluster: PostgresCluster) -> Result<(), BoxError> {
    let connection = cluster.connection();
    cluster
        .ensure_template_exists(TEMPLATE_DB, move |db_name| {
            apply_board_schema(&connection.database_url(db_name))
        })
        .await
}

fn apply_board_schema(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(CREATE_BOARD_TABLES_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(())
}

/// Both board repositories over one temporary database.
///
/// The database is dropped after the repositories.
pub struct BoardStores {
    /// Task repository.
    pub tasks: Arc<PostgresTaskRepository>,
    /// Column repository.
    pub columns: Arc<PostgresColumnRepository>,
    _temp_db: TemporaryDatabase,
}

/// Creates a database from the template and opens both repositories on it.
///
/// # Errors
///
/// Returns an error if database creation or pool setup fails.
pub async fn setup_stores(cluster: PostgresCluster) -> Result<BoardStores, BoxError> {
    let temp_db = cluster
        .temporary_database_from_template(&format!("board_{}", Uuid::new_v4()), TEMPLATE_DB)
        .await?;
    let pool = build_pool(temp_db.url(), 2)?;
    Ok(BoardStores {
        tasks: Arc::new(PostgresTaskRepository::new(pool.clone())),
        columns: Arc::new(PostgresColumnRepository::new(pool)),
        _temp_db: temp_db,
    })
}

/// Fresh board stores with an empty schema.
///
/// # Errors
///
/// Returns an error if the cluster, template, or database cannot be set up.
#[fixture]
pub async fn stores(
    postgres_cluster: Result<PostgresCluster, BoxError>,
) -> Result<BoardStores, BoxError> {
    let cluster = postgres_cluster?;
    ensure_template(cluster).await?;
    setup_stores(cluster).await
}

/// Deadline used for tasks created by these tests.
///
/// # Errors
///
/// Returns an error if the fixed timestamp is out of range.
pub fn deadline() -> Result<DateTime<Utc>, BoxError> {
    DateTime::from_timestamp(1_793_000_000, 0)
        .ok_or_else(|| Box::new(std::io::Error::other("deadline out of range")) as BoxError)
}

/// Builds a task in the `ToDo` column with the given name.
///
/// # Errors
///
/// Returns an error if the name or description is rejected.
pub fn new_task(name: &str) -> Result<Task, BoxError> {
    Ok(Task::new(
        TaskName::new(name)?,
        format!("{name} details"),
        deadline()?,
    )?)
}
