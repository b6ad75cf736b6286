//! Kanban board core.
//!
//! A board is a set of columns (lanes) and tasks that each live in exactly
//! one column. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Caller-facing views in [`projection`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod projection;
pub mod services;
