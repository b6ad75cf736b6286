//! Application services for the board: column and task orchestration, the
//! default-column bootstrap, and the composition root that wires them.

mod board;
mod bootstrap;
mod column;
mod error;
mod task;

pub use board::Board;
pub use bootstrap::{SeedReport, seed_default_columns};
pub use column::ColumnService;
pub use error::{BoardErrorKind, BoardServiceError, BoardServiceResult, StoreError};
pub use task::TaskService;
