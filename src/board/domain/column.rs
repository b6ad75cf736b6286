//! Column aggregate, validated column name, and the default board lanes.

use super::{BoardDomainError, ColumnId};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Non-blank display name of a column.
///
/// Validation rejects names that are empty after trimming, but the stored
/// value keeps the caller's spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnName(String);

impl ColumnName {
    /// Creates a validated column name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyColumnName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(BoardDomainError::EmptyColumnName);
        }
        Ok(Self(raw))
    }

    /// Returns the column name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ColumnName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named lane on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    name: ColumnName,
}

impl Column {
    /// Creates a column with a freshly assigned identifier.
    #[must_use]
    pub fn new(name: ColumnName) -> Self {
        Self {
            id: ColumnId::new(),
            name,
        }
    }

    /// Creates a column with a known identifier, as used for default lanes
    /// and when reconstructing persisted rows.
    #[must_use]
    pub const fn with_id(id: ColumnId, name: ColumnName) -> Self {
        Self { id, name }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column name.
    #[must_use]
    pub const fn name(&self) -> &ColumnName {
        &self.name
    }
}

/// The three lanes every board starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultColumn {
    /// Work that has not started.
    ToDo,
    /// Work in flight.
    InProgress,
    /// Finished work.
    Done,
}

impl DefaultColumn {
    /// All default columns in board order.
    pub const ALL: [Self; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    /// Returns the fixed, well-known identifier of this lane.
    #[must_use]
    pub const fn id(self) -> ColumnId {
        let raw = match self {
            Self::ToDo => 0x1111_1111_1111_1111_1111_1111_1111_1111,
            Self::InProgress => 0x2222_2222_2222_2222_2222_2222_2222_2222,
            Self::Done => 0x3333_3333_3333_3333_3333_3333_3333_3333,
        };
        ColumnId::from_uuid(Uuid::from_u128(raw))
    }

    /// Returns the fixed display name of this lane.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ToDo => "ToDo",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the default lane matching `id`, if any.
    #[must_use]
    pub fn from_id(id: ColumnId) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.id() == id)
    }

    /// Builds the column aggregate for this lane.
    #[must_use]
    pub fn column(self) -> Column {
        Column::with_id(self.id(), ColumnName(self.name().to_owned()))
    }
}

impl fmt::Display for DefaultColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
