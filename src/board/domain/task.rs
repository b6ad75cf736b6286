//! Task aggregate root and board ordering.

use super::{BoardDomainError, ColumnId, DefaultColumn, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Non-blank task name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated task name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(BoardDomainError::EmptyTaskName);
        }
        Ok(Self(raw))
    }

    /// Returns the task name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task aggregate root.
///
/// A task has no lifecycle state of its own: the owning column and the
/// favourite flag together describe where it sits on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    description: String,
    deadline: DateTime<Utc>,
    is_favourite: bool,
    column_id: ColumnId,
    image_urls: Vec<String>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task name.
    pub name: TaskName,
    /// Persisted description.
    pub description: String,
    /// Persisted deadline.
    pub deadline: DateTime<Utc>,
    /// Persisted favourite flag.
    pub is_favourite: bool,
    /// Persisted owning column.
    pub column_id: ColumnId,
    /// Persisted image URLs, in order.
    pub image_urls: Vec<String>,
}

impl Task {
    /// Creates a new task in the default `ToDo` column.
    ///
    /// The task gets a fresh identifier, is not a favourite, and carries no
    /// images.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskDescription`] when the
    /// description is empty after trimming.
    pub fn new(
        name: TaskName,
        description: impl Into<String>,
        deadline: DateTime<Utc>,
    ) -> Result<Self, BoardDomainError> {
        Ok(Self {
            id: TaskId::new(),
            name,
            description: validated_description(description.into())?,
            deadline,
            is_favourite: false,
            column_id: DefaultColumn::ToDo.id(),
            image_urls: Vec::new(),
        })
    }

    /// Sets the initial image URLs.
    #[must_use]
    pub fn with_image_urls(mut self, image_urls: impl IntoIterator<Item = String>) -> Self {
        self.image_urls = image_urls.into_iter().collect();
        self
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            deadline: data.deadline,
            is_favourite: data.is_favourite,
            column_id: data.column_id,
            image_urls: data.image_urls,
        }
    }

    /// Builds a task from caller-supplied fields, validating the description.
    ///
    /// Used by the full-replace mapping where every field comes from the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskDescription`] when the
    /// description is empty after trimming.
    pub fn try_from_parts(data: PersistedTaskData) -> Result<Self, BoardDomainError> {
        let description = validated_description(data.description)?;
        Ok(Self::from_persisted(PersistedTaskData {
            description,
            ..data
        }))
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns whether the task is marked as a favourite.
    #[must_use]
    pub const fn is_favourite(&self) -> bool {
        self.is_favourite
    }

    /// Returns the owning column.
    #[must_use]
    pub const fn column_id(&self) -> ColumnId {
        self.column_id
    }

    /// Returns the attached image URLs in order.
    #[must_use]
    pub fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    /// Reassigns the task to another column.
    ///
    /// The caller is responsible for checking that the column exists.
    pub const fn move_to(&mut self, column_id: ColumnId) {
        self.column_id = column_id;
    }

    /// Replaces the attached image URLs.
    pub fn replace_image_urls(&mut self, image_urls: Vec<String>) {
        self.image_urls = image_urls;
    }

    /// Sets the favourite flag.
    pub const fn set_favourite(&mut self, is_favourite: bool) {
        self.is_favourite = is_favourite;
    }
}

fn validated_description(description: String) -> Result<String, BoardDomainError> {
    if description.trim().is_empty() {
        return Err(BoardDomainError::EmptyTaskDescription);
    }
    Ok(description)
}

/// Compares two tasks by board order.
///
/// Favourites come first, then names ascend by byte order. The identifier
/// breaks remaining ties so that paging over an unchanged board never
/// repeats or skips a task.
#[must_use]
pub fn board_order(left: &Task, right: &Task) -> Ordering {
    right
        .is_favourite
        .cmp(&left.is_favourite)
        .then_with(|| left.name.cmp(&right.name))
        .then_with(|| left.id.cmp(&right.id))
}
