//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the column and
//! task services. Together they form the store the services read and write
//! through; neither port checks references between columns and tasks.

pub mod column;
pub mod task;

pub use column::{ColumnRepository, ColumnRepositoryError, ColumnRepositoryResult};
pub use task::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
