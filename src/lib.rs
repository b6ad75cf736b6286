//! Kanban: core of a kanban-style task board.
//!
//! This crate manages a board of columns (lanes) and tasks. It enforces the
//! board invariants: every task sits in exactly one existing column, the
//! three default columns are always present, and task listings follow one
//! stable order across pages.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract store traits consumed by the services
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//!
//! # Modules
//!
//! - [`board`]: Columns, tasks, projections, and the board services
//! - [`config`]: Settings read from the process environment
//! - [`telemetry`]: Tracing subscriber initialisation

pub mod board;
pub mod config;
pub mod telemetry;
