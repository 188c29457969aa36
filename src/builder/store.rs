//! Builder for configuring cube stores.

use crate::builder::error::BuildError;
use crate::checkpoint::StoreMetadata;
use crate::core::{CubeState, TurnDirection};
use crate::store::CubeStore;
use stillwater::validation::Validation;
use tracing::debug;

/// Builder for constructing cube stores with a fluent API.
///
/// Both settings are optional: the default is a solved cube turning
/// clockwise. A supplied state is validated once here, so the engine can
/// assume well-formed input on every turn.
///
/// # Example
///
/// ```rust
/// use twisty::builder::CubeStoreBuilder;
///
/// let store = CubeStoreBuilder::new().inverted(true).build().unwrap();
/// assert!(store.is_inverted());
/// assert!(store.state().is_solved());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CubeStoreBuilder {
    state: Option<CubeState>,
    direction: TurnDirection,
}

impl CubeStoreBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing state instead of a solved cube.
    pub fn state(mut self, state: CubeState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the direction used by [`CubeStore::turn`].
    pub fn direction(mut self, direction: TurnDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the direction from the "inverted" toggle.
    pub fn inverted(self, inverted: bool) -> Self {
        self.direction(TurnDirection::from_inverted(inverted))
    }

    /// Build the store.
    /// Returns every violation if the supplied state is malformed.
    pub fn build(self) -> Result<CubeStore, BuildError> {
        let state = match self.state {
            Some(state) => {
                if let Validation::Failure(errors) = state.validate() {
                    return Err(BuildError::InvalidState(errors.iter().cloned().collect()));
                }
                state
            }
            None => CubeState::solved(),
        };

        debug!(direction = %self.direction, solved = state.is_solved(), "building cube store");
        Ok(CubeStore {
            state,
            direction: self.direction,
            metadata: StoreMetadata::default(),
        })
    }
}
