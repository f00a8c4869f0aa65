//! Utilities shared by all the crates of the workspace

pub mod types;
pub mod shutdown;
