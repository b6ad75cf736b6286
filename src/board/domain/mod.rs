//! Domain model for the kanban board.
//!
//! The board domain models columns, tasks, the fixed default lanes, and the
//! ordering used for paged task listings. All infrastructure concerns are kept
//! outside the domain boundary.

mod column;
mod error;
mod ids;
mod page;
mod task;

pub use column::{Column, ColumnName, DefaultColumn};
pub use error::BoardDomainError;
pub use ids::{ColumnId, TaskId};
pub use page::{Page, PageRequest};
pub use task::{PersistedTaskData, Task, TaskName, board_order};
