//! Default column seeding against `PostgreSQL`.

use std::sync::Arc;

use async_trait::async_trait;
use kanban::board::{
    adapters::postgres::PostgresColumnRepository,
    domain::{Column, ColumnId, DefaultColumn},
    ports::{ColumnRepository, ColumnRepositoryResult},
    services::{Board, seed_default_columns},
};
use rstest::rstest;

use crate::postgres::helpers::{BoardStores, BoxError, stores};

/// Column store whose listing is always empty, as if another process seeded
/// between the listing and the inserts.
struct StaleListing(Arc<PostgresColumnRepository>);

#[async_trait]
impl ColumnRepository for StaleListing {
    async fn list_all(&self) -> ColumnRepositoryResult<Vec<Column>> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, id: ColumnId) -> ColumnRepositoryResult<Option<Column>> {
        self.0.find_by_id(id).await
    }

    async fn store(&self, column: &Column) -> ColumnRepositoryResult<()> {
        self.0.store(column).await
    }
}

fn sorted_ids(columns: &[Column]) -> Vec<ColumnId> {
    let mut ids: Vec<ColumnId> = columns.iter().map(Column::id).collect();
    ids.sort();
    ids
}

fn default_ids() -> Vec<ColumnId> {
    let mut ids: Vec<ColumnId> = DefaultColumn::ALL.into_iter().map(DefaultColumn::id).collect();
    ids.sort();
    ids
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeding_twice_inserts_each_default_once(
    #[future] stores: Result<BoardStores, BoxError>,
) -> Result<(), BoxError> {
    let board = stores.await?;

    let first = seed_default_columns(board.columns.as_ref()).await?;
    let second = seed_default_columns(board.columns.as_ref()).await?;

    assert_eq!(first.inserted, DefaultColumn::ALL);
    assert!(second.is_noop());
    assert_eq!(second.already_present, DefaultColumn::ALL);
    assert_eq!(sorted_ids(&board.columns.list_all().await?), default_ids());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrently_seeded_defaults_count_as_present(
    #[future] stores: Result<BoardStores, BoxError>,
) -> Result<(), BoxError> {
    let board = stores.await?;
    board.columns.store(&DefaultColumn::InProgress.column()).await?;
    let stale = StaleListing(Arc::clone(&board.columns));

    let report = seed_default_columns(&stale).await?;

    assert_eq!(report.inserted, [DefaultColumn::ToDo, DefaultColumn::Done]);
    assert_eq!(report.already_present, [DefaultColumn::InProgress]);
    assert_eq!(sorted_ids(&board.columns.list_all().await?), default_ids());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn restarted_board_keeps_created_columns(
    #[future] stores: Result<BoardStores, BoxError>,
) -> Result<(), BoxError> {
    let board = stores.await?;
    let first = Board::start(Arc::clone(&board.tasks), Arc::clone(&board.columns)).await?;
    let review = first.columns().create_column("Review").await?;

    let restarted = Board::start(Arc::clone(&board.tasks), Arc::clone(&board.columns)).await?;

    let listed = restarted.columns().list_columns().await?;
    assert_eq!(listed.len(), DefaultColumn::ALL.len() + 1);
    assert!(listed.iter().any(|column| column.id == review.id));
    Ok(())
}
