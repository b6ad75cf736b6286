//! Adapter implementations for the board repository ports.

pub mod memory;
pub mod postgres;
