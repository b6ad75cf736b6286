//! Externally facing views of board entities and the mappings between them.
//!
//! Every mapping here is a plain field-for-field copy. The only mappings that
//! add information are the create mapping, which assigns a fresh identifier
//! and the default `ToDo` column, and the partial updates on [`Task`], which
//! overwrite exactly one field.

use crate::board::domain::{
    BoardDomainError, Column, ColumnId, PersistedTaskData, Task, TaskId, TaskName,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Column as seen by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    /// Column identifier.
    pub id: ColumnId,
    /// Display name.
    pub name: String,
}

impl From<&Column> for ColumnView {
    fn from(column: &Column) -> Self {
        Self {
            id: column.id(),
            name: column.name().as_str().to_owned(),
        }
    }
}

impl From<Column> for ColumnView {
    fn from(column: Column) -> Self {
        Self::from(&column)
    }
}

/// Task as seen by callers. Also the payload of a full task update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Task description.
    pub description: String,
    /// Task deadline.
    pub deadline: DateTime<Utc>,
    /// Whether the task is a favourite.
    pub is_favourite: bool,
    /// Owning column.
    pub column_id: ColumnId,
    /// Attached image URLs, in order.
    pub image_urls: Vec<String>,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            name: task.name().as_str().to_owned(),
            description: task.description().to_owned(),
            deadline: task.deadline(),
            is_favourite: task.is_favourite(),
            column_id: task.column_id(),
            image_urls: task.image_urls().to_vec(),
        }
    }
}

impl From<Task> for TaskView {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}

impl TryFrom<TaskView> for Task {
    type Error = BoardDomainError;

    /// Maps a full view onto a task, keeping every field including the id
    /// and column reference.
    fn try_from(view: TaskView) -> Result<Self, Self::Error> {
        let TaskView {
            id,
            name,
            description,
            deadline,
            is_favourite,
            column_id,
            image_urls,
        } = view;

        Self::try_from_parts(PersistedTaskData {
            id,
            name: TaskName::new(name)?,
            description,
            deadline,
            is_favourite,
            column_id,
            image_urls,
        })
    }
}

/// Payload for creating a task.
///
/// Missing `name` or `description` fields deserialise to empty strings and
/// are rejected when the task is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Task name.
    #[serde(default)]
    pub name: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Task deadline.
    pub deadline: DateTime<Utc>,
    /// Initial image URLs; absent means none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            deadline,
            image_urls: None,
        }
    }

    /// Sets the initial image URLs.
    #[must_use]
    pub fn with_image_urls(mut self, image_urls: impl IntoIterator<Item = String>) -> Self {
        self.image_urls = Some(image_urls.into_iter().collect());
        self
    }

    /// Builds the new task: fresh id, `ToDo` column, not a favourite.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskName`] or
    /// [`BoardDomainError::EmptyTaskDescription`] when a required text field
    /// is blank.
    pub fn into_task(self) -> Result<Task, BoardDomainError> {
        let Self {
            name,
            description,
            deadline,
            image_urls,
        } = self;
        let task = Task::new(TaskName::new(name)?, description, deadline)?;
        Ok(task.with_image_urls(image_urls.unwrap_or_default()))
    }
}
