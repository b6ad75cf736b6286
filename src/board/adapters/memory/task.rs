//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{ColumnId, Page, PageRequest, Task, TaskId, board_order},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.state.read().map_err(lock_poisoned)?;
        Ok(tasks.get(&id).cloned())
    }

    async fn list_page(&self, request: PageRequest) -> TaskRepositoryResult<Page<Task>> {
        let tasks = self.state.read().map_err(lock_poisoned)?;
        let mut ordered: Vec<&Task> = tasks.values().collect();
        ordered.sort_by(|left, right| board_order(left, right));

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);
        let items = ordered
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        let total_count = u64::try_from(tasks.len()).unwrap_or(u64::MAX);
        Ok(Page::new(items, total_count))
    }

    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(lock_poisoned)?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn replace(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(lock_poisoned)?;
        let stored = tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *stored = task.clone();
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(lock_poisoned)?;
        tasks
            .remove(&id)
            .map(drop)
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn set_column(&self, task_id: TaskId, column_id: ColumnId) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(lock_poisoned)?;
        let stored = tasks
            .get_mut(&task_id)
            .ok_or(TaskRepositoryError::NotFound(task_id))?;
        stored.move_to(column_id);
        Ok(())
    }
}
