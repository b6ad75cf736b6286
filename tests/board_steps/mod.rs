//! Step definitions for kanban board BDD scenarios.

mod given;
pub mod world;
