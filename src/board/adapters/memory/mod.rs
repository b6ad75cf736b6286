//! In-memory repositories for tests and single-process use.

mod column;
mod task;

pub use column::InMemoryColumnRepository;
pub use task::InMemoryTaskRepository;
