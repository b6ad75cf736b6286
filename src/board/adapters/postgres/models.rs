//! Diesel row models for board persistence and their domain conversions.

use super::schema::{board_columns, board_tasks};
use crate::board::domain::{
    BoardDomainError, Column, ColumnId, ColumnName, PersistedTaskData, Task, TaskId, TaskName,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use thiserror::Error;

/// Error raised when a stored row cannot be turned back into a domain value.
#[derive(Debug, Error)]
pub enum RowConversionError {
    /// A stored name or description failed domain validation.
    #[error("invalid stored value: {0}")]
    Domain(#[from] BoardDomainError),
    /// The stored image URL payload is not a JSON array of strings.
    #[error("invalid stored image urls: {0}")]
    ImageUrls(#[from] serde_json::Error),
}

/// Query result row for column records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = board_columns)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ColumnRow {
    /// Column identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
}

impl ColumnRow {
    /// Reconstructs the column aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`RowConversionError::Domain`] when the stored name is blank.
    pub fn into_column(self) -> Result<Column, RowConversionError> {
        let name = ColumnName::new(self.name)?;
        Ok(Column::with_id(ColumnId::from_uuid(self.id), name))
    }
}

/// Insert model for column records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = board_columns)]
pub struct NewColumnRow {
    /// Column identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
}

impl From<&Column> for NewColumnRow {
    fn from(column: &Column) -> Self {
        Self {
            id: column.id().into_inner(),
            name: column.name().as_str().to_owned(),
        }
    }
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = board_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task name.
    pub name: String,
    /// Task description.
    pub description: String,
    /// Task deadline.
    pub deadline: DateTime<Utc>,
    /// Favourite flag.
    pub is_favourite: bool,
    /// Owning column.
    pub column_id: uuid::Uuid,
    /// Image URLs as a JSON array.
    pub image_urls: Value,
}

impl TaskRow {
    /// Reconstructs the task aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`RowConversionError`] when the stored name is blank or the
    /// image URL payload is not an array of strings.
    pub fn into_task(self) -> Result<Task, RowConversionError> {
        let Self {
            id,
            name,
            description,
            deadline,
            is_favourite,
            column_id,
            image_urls,
        } = self;

        let data = PersistedTaskData {
            id: TaskId::from_uuid(id),
            name: TaskName::new(name)?,
            description,
            deadline,
            is_favourite,
            column_id: ColumnId::from_uuid(column_id),
            image_urls: serde_json::from_value(image_urls)?,
        };
        Ok(Task::from_persisted(data))
    }
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = board_tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task name.
    pub name: String,
    /// Task description.
    pub description: String,
    /// Task deadline.
    pub deadline: DateTime<Utc>,
    /// Favourite flag.
    pub is_favourite: bool,
    /// Owning column.
    pub column_id: uuid::Uuid,
    /// Image URLs as a JSON array.
    pub image_urls: Value,
}

impl From<&Task> for NewTaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            name: task.name().as_str().to_owned(),
            description: task.description().to_owned(),
            deadline: task.deadline(),
            is_favourite: task.is_favourite(),
            column_id: task.column_id().into_inner(),
            image_urls: image_urls_value(task.image_urls()),
        }
    }
}

/// Full-replace changeset for task records; every non-key column is written.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = board_tasks)]
pub struct TaskChangeset {
    /// Task name.
    pub name: String,
    /// Task description.
    pub description: String,
    /// Task deadline.
    pub deadline: DateTime<Utc>,
    /// Favourite flag.
    pub is_favourite: bool,
    /// Owning column.
    pub column_id: uuid::Uuid,
    /// Image URLs as a JSON array.
    pub image_urls: Value,
}

impl From<&Task> for TaskChangeset {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name().as_str().to_owned(),
            description: task.description().to_owned(),
            deadline: task.deadline(),
            is_favourite: task.is_favourite(),
            column_id: task.column_id().into_inner(),
            image_urls: image_urls_value(task.image_urls()),
        }
    }
}

fn image_urls_value(image_urls: &[String]) -> Value {
    Value::Array(image_urls.iter().cloned().map(Value::String).collect())
}
