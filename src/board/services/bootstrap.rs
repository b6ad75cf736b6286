//! Seeding of the default board columns.

use super::{BoardServiceError, BoardServiceResult};
use crate::board::{
    domain::{Column, DefaultColumn},
    ports::{ColumnRepository, ColumnRepositoryError},
};
use std::collections::HashSet;

/// Outcome of a [`seed_default_columns`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Default columns inserted by this run.
    pub inserted: Vec<DefaultColumn>,
    /// Default columns that were already stored.
    pub already_present: Vec<DefaultColumn>,
}

impl SeedReport {
    /// Returns `true` when this run inserted nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.inserted.is_empty()
    }
}

/// Inserts every default column whose fixed identifier is not stored yet.
///
/// The routine is idempotent: running it again finds every default column
/// and inserts nothing. A duplicate-identifier rejection for a default column
/// means another process seeded it after the initial read, and counts as
/// already present.
///
/// # Errors
///
/// Returns [`BoardServiceError::Store`] when listing or inserting columns
/// fails for any other reason.
pub async fn seed_default_columns<R>(columns: &R) -> BoardServiceResult<SeedReport>
where
    R: ColumnRepository + ?Sized,
{
    let existing: HashSet<_> = columns
        .list_all()
        .await
        .map_err(|err| BoardServiceError::store("list columns before seeding", err))?
        .iter()
        .map(Column::id)
        .collect();

    let mut report = SeedReport::default();
    for default in DefaultColumn::ALL {
        if existing.contains(&default.id()) {
            report.already_present.push(default);
            continue;
        }

        match columns.store(&default.column()).await {
            Ok(()) => {
                tracing::info!(column_id = %default.id(), name = default.name(), "seeded default column");
                report.inserted.push(default);
            }
            Err(ColumnRepositoryError::DuplicateColumn(_)) => {
                tracing::debug!(column_id = %default.id(), "default column seeded concurrently");
                report.already_present.push(default);
            }
            Err(err) => {
                return Err(BoardServiceError::store(
                    format!("seed default column {} ({})", default.name(), default.id()),
                    err,
                ));
            }
        }
    }
    Ok(report)
}
