//! Build errors for the cube store builder.

use crate::core::StateViolation;
use thiserror::Error;

/// Errors that can occur when building a cube store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state is not a well-formed cube ({} violation(s)). Pass a state reachable from solved", .0.len())]
    InvalidState(Vec<StateViolation>),
}

impl BuildError {
    /// Every violation found in the rejected state.
    pub fn violations(&self) -> &[StateViolation] {
        match self {
            Self::InvalidState(violations) => violations,
        }
    }
}
