//! Service layer for the task lifecycle on the board.
//!
//! Provides [`TaskService`], which validates input, checks the store's
//! current state for the entities an operation references, then applies the
//! change through the task repository. Checks and writes are separate store
//! calls; concurrent writers to the same task follow last-write-wins.

use super::{BoardServiceError, BoardServiceResult};
use crate::board::{
    domain::{ColumnId, Page, PageRequest, Task, TaskId},
    ports::{ColumnRepository, TaskRepository},
    projection::{CreateTaskRequest, TaskView},
};
use std::sync::Arc;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskService<T, C>
where
    T: TaskRepository,
    C: ColumnRepository,
{
    tasks: Arc<T>,
    columns: Arc<C>,
}

impl<T, C> TaskService<T, C>
where
    T: TaskRepository,
    C: ColumnRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, columns: Arc<C>) -> Self {
        Self { tasks, columns }
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the lookup fails.
    pub async fn get_task(&self, id: TaskId) -> BoardServiceResult<Option<TaskView>> {
        let task = self
            .tasks
            .find_by_id(id)
            .await
            .map_err(|err| BoardServiceError::store(format!("load task {id}"), err))?;
        Ok(task.map(TaskView::from))
    }

    /// Returns one page of tasks: favourites first, then by name.
    ///
    /// Pages are one-based. A page past the end is empty but still reports
    /// the total number of tasks. Non-positive page numbers and sizes are
    /// passed to the store unchanged; see [`PageRequest`] for how they are
    /// interpreted.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the listing fails.
    pub async fn list_tasks(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> BoardServiceResult<Page<TaskView>> {
        let request = PageRequest::new(page_number, page_size);
        let page = self.tasks.list_page(request).await.map_err(|err| {
            BoardServiceError::store(
                format!("list tasks page {page_number} of size {page_size}"),
                err,
            )
        })?;
        Ok(page.map(TaskView::from))
    }

    /// Creates a task in the default `ToDo` column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::InvalidArgument`] when the name or
    /// description is blank, or [`BoardServiceError::Store`] when persistence
    /// fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> BoardServiceResult<TaskView> {
        let task = request.into_task()?;
        self.tasks.store(&task).await.map_err(|err| {
            BoardServiceError::from_task_repository(format!("create task {}", task.id()), err)
        })?;
        tracing::debug!(task_id = %task.id(), column_id = %task.column_id(), "task created");
        Ok(TaskView::from(task))
    }

    /// Replaces every field of an existing task with the given view.
    ///
    /// The view's column must exist, exactly as for [`Self::move_task`]. The
    /// view is validated before the task is looked up, so a blank name on an
    /// unknown ID is an invalid argument rather than a missing task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::InvalidArgument`] when the name or
    /// description is blank, [`BoardServiceError::TaskNotFound`] when no task
    /// has the view's ID, [`BoardServiceError::ColumnNotFound`] when the
    /// view's column does not exist, or [`BoardServiceError::Store`] when
    /// persistence fails.
    pub async fn update_task(&self, view: TaskView) -> BoardServiceResult<()> {
        let replacement = Task::try_from(view)?;
        let task_id = replacement.id();
        self.find_task_or_error(task_id).await?;
        self.ensure_column_exists(replacement.column_id()).await?;

        self.tasks.replace(&replacement).await.map_err(|err| {
            BoardServiceError::from_task_repository(format!("update task {task_id}"), err)
        })?;
        tracing::debug!(task_id = %task_id, "task replaced");
        Ok(())
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::TaskNotFound`] when no task has the given
    /// ID, or [`BoardServiceError::Store`] when persistence fails.
    pub async fn delete_task(&self, id: TaskId) -> BoardServiceResult<()> {
        self.tasks.delete(id).await.map_err(|err| {
            BoardServiceError::from_task_repository(format!("delete task {id}"), err)
        })?;
        tracing::debug!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Moves a task to another column, leaving every other field untouched.
    ///
    /// The target column is checked before the task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::ColumnNotFound`] when the target column
    /// does not exist, [`BoardServiceError::TaskNotFound`] when the task does
    /// not exist, or [`BoardServiceError::Store`] when persistence fails.
    pub async fn move_task(&self, task_id: TaskId, column_id: ColumnId) -> BoardServiceResult<()> {
        self.ensure_column_exists(column_id).await?;
        self.tasks
            .set_column(task_id, column_id)
            .await
            .map_err(|err| {
                BoardServiceError::from_task_repository(
                    format!("move task {task_id} to column {column_id}"),
                    err,
                )
            })?;
        tracing::debug!(task_id = %task_id, column_id = %column_id, "task moved");
        Ok(())
    }

    /// Replaces the image URLs of a task. `None` clears them.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::TaskNotFound`] when the task does not
    /// exist, or [`BoardServiceError::Store`] when persistence fails.
    pub async fn update_task_images(
        &self,
        task_id: TaskId,
        image_urls: Option<Vec<String>>,
    ) -> BoardServiceResult<TaskView> {
        let mut task = self.find_task_or_error(task_id).await?;
        task.replace_image_urls(image_urls.unwrap_or_default());
        self.replace_task(&task, "update images of task").await?;
        Ok(TaskView::from(task))
    }

    /// Sets the favourite flag of a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::TaskNotFound`] when the task does not
    /// exist, or [`BoardServiceError::Store`] when persistence fails.
    pub async fn update_task_favourite(
        &self,
        task_id: TaskId,
        is_favourite: bool,
    ) -> BoardServiceResult<TaskView> {
        let mut task = self.find_task_or_error(task_id).await?;
        task.set_favourite(is_favourite);
        self.replace_task(&task, "update favourite flag of task")
            .await?;
        Ok(TaskView::from(task))
    }

    async fn find_task_or_error(&self, task_id: TaskId) -> BoardServiceResult<Task> {
        self.tasks
            .find_by_id(task_id)
            .await
            .map_err(|err| BoardServiceError::store(format!("load task {task_id}"), err))?
            .ok_or(BoardServiceError::TaskNotFound(task_id))
    }

    async fn ensure_column_exists(&self, column_id: ColumnId) -> BoardServiceResult<()> {
        self.columns
            .find_by_id(column_id)
            .await
            .map_err(|err| BoardServiceError::store(format!("load column {column_id}"), err))?
            .map(drop)
            .ok_or(BoardServiceError::ColumnNotFound(column_id))
    }

    async fn replace_task(&self, task: &Task, operation: &str) -> BoardServiceResult<()> {
        let task_id = task.id();
        self.tasks.replace(task).await.map_err(|err| {
            BoardServiceError::from_task_repository(format!("{operation} {task_id}"), err)
        })?;
        tracing::debug!(task_id = %task_id, "{operation}");
        Ok(())
    }
}
