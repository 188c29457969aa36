//! Checkpoint and resume for cube stores.
//!
//! A checkpoint captures everything a [`CubeStore`] holds so that a
//! presentation layer or an external persistence collaborator can save
//! it and later resume. This module only converts to and from bytes;
//! where those bytes go is up to the caller.

use crate::core::{CubeState, TurnDirection};
use crate::store::CubeStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use tracing::info;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Metadata tracked by a cube store
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// When the store was created
    pub created_at: DateTime<Utc>,

    /// Last turn, toggle or reset
    pub updated_at: DateTime<Utc>,

    /// Turns applied since creation or the last reset
    pub turn_count: u64,
}

impl Default for StoreMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            turn_count: 0,
        }
    }
}

/// Serializable snapshot of a cube store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Cube configuration at checkpoint time
    pub state: CubeState,

    /// Direction the store was turning in
    pub direction: TurnDirection,

    /// Store metadata
    pub metadata: StoreMetadata,
}

impl Checkpoint {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to the compact bincode format.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Check the format version and that the state is a well-formed cube.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        match self.state.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(CheckpointError::InvalidState(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

impl CubeStore {
    /// Capture the store's current state, direction and metadata.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: self.state.clone(),
            direction: self.direction,
            metadata: self.metadata.clone(),
        }
    }

    /// Rebuild a store from a checkpoint after validating it.
    pub fn resume(checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        info!(
            id = %checkpoint.id,
            turns = checkpoint.metadata.turn_count,
            direction = %checkpoint.direction,
            "resuming cube from checkpoint"
        );
        Ok(Self {
            state: checkpoint.state,
            direction: checkpoint.direction,
            metadata: checkpoint.metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Edge, Face, FaceKey};

    fn scrambled_store() -> CubeStore {
        let mut store = CubeStore::new();
        for face in [FaceKey::Right, FaceKey::Up, FaceKey::Front] {
            store.turn(face);
        }
        store.toggle_direction();
        store
    }

    #[test]
    fn checkpoint_captures_store() {
        let store = scrambled_store();
        let checkpoint = store.checkpoint();

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(&checkpoint.state, store.state());
        assert_eq!(checkpoint.direction, TurnDirection::CounterClockwise);
        assert_eq!(checkpoint.metadata.turn_count, 3);
        assert!(Uuid::parse_str(&checkpoint.id).is_ok());
    }

    #[test]
    fn checkpoint_ids_are_unique() {
        let store = CubeStore::new();
        assert_ne!(store.checkpoint().id, store.checkpoint().id);
    }

    #[test]
    fn resume_restores_store_through_json() {
        let store = scrambled_store();
        let json = store.checkpoint().to_json().unwrap();

        let resumed = CubeStore::resume(Checkpoint::from_json(&json).unwrap()).unwrap();
        assert_eq!(resumed.state(), store.state());
        assert_eq!(resumed.direction(), store.direction());
        assert_eq!(resumed.turn_count(), 3);
    }

    #[test]
    fn resume_restores_store_through_binary() {
        let store = scrambled_store();
        let bytes = store.checkpoint().to_binary().unwrap();

        let resumed = CubeStore::resume(Checkpoint::from_binary(&bytes).unwrap()).unwrap();
        assert_eq!(resumed.state(), store.state());
        assert!(resumed.is_inverted());
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut checkpoint = CubeStore::new().checkpoint();
        checkpoint.version = CHECKPOINT_VERSION + 1;

        assert!(matches!(
            CubeStore::resume(checkpoint),
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn malformed_state_is_rejected() {
        let mut checkpoint = CubeStore::new().checkpoint();
        let mut faces: Vec<Face> = checkpoint.state.faces().map(|(_, face)| *face).collect();
        let strip = faces[FaceKey::Up.index()].edge(Edge::Top);
        faces[FaceKey::Front.index()].set_edge(Edge::Top, strip);
        checkpoint.state = CubeState::from_faces(faces.try_into().unwrap());

        match CubeStore::resume(checkpoint) {
            Err(err @ CheckpointError::InvalidState(_)) => {
                let message = err.to_string();
                assert!(message.contains("U0,1 appears 2 times"));
                assert!(message.contains("F0,1 is missing"));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn truncated_bytes_fail_to_deserialize() {
        let bytes = CubeStore::new().checkpoint().to_binary().unwrap();
        assert!(matches!(
            Checkpoint::from_binary(&bytes[..bytes.len() / 2]),
            Err(CheckpointError::Binary(_))
        ));
        assert!(matches!(
            Checkpoint::from_json("{\"version\": 1}"),
            Err(CheckpointError::Json(_))
        ));
    }
}
