//! Error types surfaced while building and driving trees.
//!
//! Only structural and lifecycle problems are Rust errors. Missing or
//! mistyped external data found during a tick is reported through
//! [`Status::Error`](crate::Status::Error) instead, so a tick never unwinds.

use thiserror::Error;

use crate::tree::TreeState;

/// A tree that cannot be ticked safely, detected at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("{kind} must have at least one child")]
    NoChildren { kind: &'static str },

    #[error("repeater must repeat at least once")]
    ZeroRepeat,

    #[error("{kind} duration must be a finite, non-negative number of seconds (got {seconds})")]
    InvalidSeconds { kind: &'static str, seconds: f64 },
}

/// A lifecycle call made out of order on a [`Tree`](crate::Tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("tree must be initialized before it is ticked (state: {state})")]
    NotInitialized { state: TreeState },

    #[error("tree is already initialized")]
    AlreadyInitialized,

    #[error("tree has been disposed")]
    Disposed,
}

/// Failure to read a required entry from a [`Blackboard`](crate::Blackboard).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlackboardError {
    #[error("blackboard entry `{name}` is missing")]
    Missing { name: String },

    #[error("blackboard entry `{name}` is not a `{expected}`")]
    TypeMismatch { name: String, expected: &'static str },
}
