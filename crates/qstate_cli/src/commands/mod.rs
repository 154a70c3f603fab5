//! CLI command implementations.

pub mod common;
pub mod frequencies;
pub mod grid;
pub mod pairs;
pub mod verify;
