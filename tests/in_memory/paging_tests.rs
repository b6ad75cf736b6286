//! In-memory integration tests for board order and paging.

use std::collections::HashSet;

use rstest::rstest;

use super::helpers::{MemoryBoard, create_task, start_board};

async fn board_with_tasks(count: usize) -> Result<MemoryBoard, eyre::Report> {
    let board = start_board().await?;
    let favourite_pattern = [true, false, false].into_iter().cycle();
    for (index, is_favourite) in (0..count).zip(favourite_pattern) {
        let created = create_task(&board, &format!("task-{index:02}")).await?;
        if is_favourite {
            board
                .tasks()
                .update_task_favourite(created.id, true)
                .await?;
        }
    }
    Ok(board)
}

#[rstest]
#[case(11, 1)]
#[case(11, 4)]
#[case(11, 11)]
#[case(12, 5)]
#[tokio::test(flavor = "multi_thread")]
async fn every_task_appears_on_exactly_one_page(
    #[case] count: usize,
    #[case] page_size: i64,
) -> Result<(), eyre::Report> {
    let board = board_with_tasks(count).await?;
    let mut seen = HashSet::new();
    let mut concatenated = Vec::new();
    let mut page_number = 1;

    loop {
        let page = board.tasks().list_tasks(page_number, page_size).await?;
        eyre::ensure!(
            page.total_count == u64::try_from(count)?,
            "total count should cover every task"
        );
        if page.items.is_empty() {
            break;
        }
        for task in page.items {
            eyre::ensure!(seen.insert(task.id), "task {} listed twice", task.id);
            concatenated.push(task);
        }
        page_number += 1;
    }

    eyre::ensure!(concatenated.len() == count, "some tasks were never listed");
    let favourites_end = concatenated
        .iter()
        .position(|task| !task.is_favourite)
        .unwrap_or(concatenated.len());
    let (favourites, others) = concatenated.split_at(favourites_end);
    eyre::ensure!(
        others.iter().all(|task| !task.is_favourite),
        "a favourite was listed after a plain task"
    );
    for group in [favourites, others] {
        eyre::ensure!(
            group.windows(2).all(|pair| match pair {
                [first, second] => first.name <= second.name,
                _ => true,
            }),
            "names should ascend within each group"
        );
    }
    Ok(())
}
