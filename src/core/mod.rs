//! Core data types and structures
//!
//! This module contains the workspace model shared by every stage of dirty
//! project detection, separated from the logic that consumes it.

pub mod types;

pub use types::*;
