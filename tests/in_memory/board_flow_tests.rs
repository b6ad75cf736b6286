//! In-memory integration tests for the task lifecycle across columns.

use kanban::board::{
    domain::{ColumnId, DefaultColumn},
    projection::TaskView,
    services::{BoardErrorKind, BoardServiceError},
};
use rstest::rstest;

use super::helpers::{create_task, deadline, start_board};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_travels_across_the_default_columns() -> Result<(), eyre::Report> {
    let board = start_board().await?;
    let created = create_task(&board, "Write spec").await?;
    eyre::ensure!(
        created.column_id == DefaultColumn::ToDo.id(),
        "new task should start in ToDo"
    );

    for target in [DefaultColumn::InProgress, DefaultColumn::Done] {
        board.tasks().move_task(created.id, target.id()).await?;
        let current = board
            .tasks()
            .get_task(created.id)
            .await?
            .ok_or_else(|| eyre::eyre!("task disappeared after move"))?;
        eyre::ensure!(
            current
                == TaskView {
                    column_id: target.id(),
                    ..created.clone()
                },
            "move to {target} changed more than the column"
        );
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_update_then_partial_updates_compose() -> Result<(), eyre::Report> {
    let board = start_board().await?;
    let created = create_task(&board, "Draft").await?;
    let review = board.columns().create_column("Review").await?;
    let replacement = TaskView {
        name: "Final".to_owned(),
        description: "Ready for review".to_owned(),
        deadline: deadline()?,
        column_id: review.id,
        ..created.clone()
    };

    board.tasks().update_task(replacement.clone()).await?;
    board
        .tasks()
        .update_task_images(created.id, Some(vec!["https://img.example/final.png".to_owned()]))
        .await?;
    let finished = board.tasks().update_task_favourite(created.id, true).await?;

    eyre::ensure!(
        finished
            == TaskView {
                is_favourite: true,
                image_urls: vec!["https://img.example/final.png".to_owned()],
                ..replacement
            },
        "partial updates should keep the replaced fields, got {finished:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_rejects_every_mutation() -> Result<(), eyre::Report> {
    let board = start_board().await?;
    let created = create_task(&board, "Short-lived").await?;
    board.tasks().delete_task(created.id).await?;

    let results = [
        board.tasks().update_task(created.clone()).await.err(),
        board.tasks().delete_task(created.id).await.err(),
        board
            .tasks()
            .move_task(created.id, DefaultColumn::Done.id())
            .await
            .err(),
        board
            .tasks()
            .update_task_images(created.id, None)
            .await
            .err(),
        board
            .tasks()
            .update_task_favourite(created.id, true)
            .await
            .err(),
    ];

    for result in results {
        eyre::ensure!(
            matches!(result, Some(BoardServiceError::TaskNotFound(id)) if id == created.id),
            "expected task not found, got {result:?}"
        );
    }
    let page = board.tasks().list_tasks(1, 10).await?;
    eyre::ensure!(page.total_count == 0, "deleted task should not be listed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_to_an_unknown_column_is_not_found() -> Result<(), eyre::Report> {
    let board = start_board().await?;
    let created = create_task(&board, "Write spec").await?;

    let err = board
        .tasks()
        .move_task(created.id, ColumnId::new())
        .await
        .err()
        .ok_or_else(|| eyre::eyre!("move to unknown column should fail"))?;

    eyre::ensure!(err.kind() == BoardErrorKind::NotFound, "unexpected error {err}");
    Ok(())
}
