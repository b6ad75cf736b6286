//! Shared test helpers for in-memory store integration tests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kanban::board::{
    adapters::memory::{InMemoryColumnRepository, InMemoryTaskRepository},
    projection::{CreateTaskRequest, TaskView},
    services::Board,
};

/// Board type wired to the in-memory stores.
pub type MemoryBoard = Board<InMemoryTaskRepository, InMemoryColumnRepository>;

/// Starts a board over fresh in-memory stores.
///
/// # Errors
///
/// Returns an error if seeding the default columns fails.
pub async fn start_board() -> Result<MemoryBoard, eyre::Report> {
    let board = Board::start(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(InMemoryColumnRepository::new()),
    )
    .await?;
    Ok(board)
}

/// Deadline used for tasks created by these tests.
///
/// # Errors
///
/// Returns an error if the fixed timestamp is out of range.
pub fn deadline() -> Result<DateTime<Utc>, eyre::Report> {
    DateTime::from_timestamp(1_793_000_000, 0).ok_or_else(|| eyre::eyre!("deadline out of range"))
}

/// Creates a task with a generated description.
///
/// # Errors
///
/// Returns an error if the task cannot be created.
pub async fn create_task(board: &MemoryBoard, name: &str) -> Result<TaskView, eyre::Report> {
    let request = CreateTaskRequest::new(name, format!("{name} details"), deadline()?);
    Ok(board.tasks().create_task(request).await?)
}
