//! Checkpoint error types.

use crate::core::StateViolation;
use thiserror::Error;

/// Errors that can occur while encoding, decoding or resuming a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("JSON checkpoint encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary checkpoint encoding failed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Checkpointed cube is malformed: {}", describe(.0))]
    InvalidState(Vec<StateViolation>),
}

fn describe(violations: &[StateViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
