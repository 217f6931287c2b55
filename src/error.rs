//! Typed failures raised by the shell's state components.
//!
//! None of these are fatal: coordinators turn them into Message Log entries
//! or log lines.

use thiserror::Error;

/// A persisted panel size that could not be read back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LengthError {
    #[error("empty length")]
    Empty,
    #[error("length {0:?} is not a pixel value")]
    NotPixels(String),
    #[error("length {0:?} is negative or not finite")]
    OutOfRange(String),
}

/// Refused view tab operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewTabError {
    #[error("at least one view must remain open")]
    LastTab,
    #[error("no view tab with id {0}")]
    UnknownTab(u64),
}
