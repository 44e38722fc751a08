//! Shared domain types and errors for the ZenGrid workspace.

pub mod error;
pub mod types;
