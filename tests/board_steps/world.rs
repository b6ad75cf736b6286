//! Shared world state for kanban board BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kanban::board::{
    adapters::memory::{InMemoryColumnRepository, InMemoryTaskRepository},
    domain::{DefaultColumn, Page},
    projection::TaskView,
    services::{Board, BoardServiceError},
};
use rstest::fixture;

/// Board type used by the BDD world.
pub type TestBoard = Board<InMemoryTaskRepository, InMemoryColumnRepository>;

/// Scenario world for kanban board behaviour tests.
#[derive(Default)]
pub struct BoardWorld {
    /// The started board, once a scenario has started it.
    pub board: Option<TestBoard>,
    /// Task most recently created by a step.
    pub last_task: Option<TaskView>,
    /// Result of the last mutating operation.
    pub last_result: Option<Result<(), BoardServiceError>>,
    /// Result of the last listing.
    pub last_page: Option<Page<TaskView>>,
}

impl BoardWorld {
    /// Returns the started board.
    ///
    /// # Errors
    ///
    /// Returns an error if no step has started the board yet.
    pub fn board(&self) -> Result<&TestBoard, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("board has not been started in this scenario"))
    }

    /// Returns the task most recently created by a step.
    ///
    /// # Errors
    ///
    /// Returns an error if no task has been created yet.
    pub fn last_task(&self) -> Result<&TaskView, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no task has been created in this scenario"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Starts a board over fresh in-memory stores.
///
/// # Errors
///
/// Returns an error if seeding the default columns fails.
pub async fn start_board() -> Result<TestBoard, BoardServiceError> {
    Board::start(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(InMemoryColumnRepository::new()),
    )
    .await
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Looks up a default column by display name.
///
/// # Errors
///
/// Returns an error if no default column has the given name.
pub fn default_column(name: &str) -> Result<DefaultColumn, eyre::Report> {
    DefaultColumn::ALL
        .into_iter()
        .find(|column| column.name() == name)
        .ok_or_else(|| eyre::eyre!("'{name}' is not a default column"))
}

/// Deadline used for every task created by the scenarios.
///
/// # Errors
///
/// Returns an error if the fixed timestamp is out of range.
pub fn scenario_deadline() -> Result<DateTime<Utc>, eyre::Report> {
    DateTime::from_timestamp(1_793_000_000, 0)
        .ok_or_else(|| eyre::eyre!("scenario deadline out of range"))
}
