//! Cube state store.
//!
//! The store owns the authoritative [`CubeState`] and the direction
//! toggle, and funnels every turn through [`crate::engine::apply`]. Each
//! turn replaces the held state wholesale; callers reading through
//! [`CubeStore::state`] only ever observe complete states.

use crate::checkpoint::StoreMetadata;
use crate::core::{CubeState, FaceKey, Move, ParseError, TurnDirection};
use crate::engine;
use chrono::Utc;
use tracing::{debug, warn};

/// Holds the current cube and the direction used by [`CubeStore::turn`].
///
/// # Example
///
/// ```rust
/// use twisty::core::{FaceKey, TurnDirection};
/// use twisty::CubeStore;
///
/// let mut store = CubeStore::new();
/// store.turn(FaceKey::Right);
/// assert!(!store.state().is_solved());
///
/// store.toggle_direction();
/// assert_eq!(store.direction(), TurnDirection::CounterClockwise);
///
/// store.turn(FaceKey::Right);
/// assert!(store.state().is_solved());
/// assert_eq!(store.turn_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct CubeStore {
    pub(crate) state: CubeState,
    pub(crate) direction: TurnDirection,
    pub(crate) metadata: StoreMetadata,
}

impl Default for CubeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeStore {
    /// A solved cube turning clockwise.
    pub fn new() -> Self {
        Self {
            state: CubeState::solved(),
            direction: TurnDirection::default(),
            metadata: StoreMetadata::default(),
        }
    }

    /// Current state (pure)
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Direction applied by [`CubeStore::turn`] (pure)
    pub fn direction(&self) -> TurnDirection {
        self.direction
    }

    pub fn is_inverted(&self) -> bool {
        self.direction.is_inverted()
    }

    /// Number of turns applied since creation or the last reset (pure)
    pub fn turn_count(&self) -> u64 {
        self.metadata.turn_count
    }

    pub fn metadata(&self) -> &StoreMetadata {
        &self.metadata
    }

    /// Turn `face` in the currently selected direction.
    pub fn turn(&mut self, face: FaceKey) {
        self.turn_with(face, self.direction);
    }

    /// Turn `face` in an explicit direction, ignoring the toggle.
    pub fn turn_with(&mut self, face: FaceKey, direction: TurnDirection) {
        debug!(%face, %direction, turn = self.metadata.turn_count + 1, "turning face");
        self.state = engine::apply(&self.state, face, direction);
        self.metadata.turn_count += 1;
        self.metadata.updated_at = Utc::now();
    }

    pub fn apply_move(&mut self, mv: Move) {
        self.turn_with(mv.face, mv.direction);
    }

    /// Parse and apply a single move such as `"F"` or `"F'"`.
    ///
    /// Unknown face identifiers are rejected before the state is touched.
    pub fn turn_notation(&mut self, notation: &str) -> Result<(), ParseError> {
        let mv = notation.parse::<Move>().map_err(|err| {
            warn!(notation, error = %err, "rejected move");
            err
        })?;
        self.apply_move(mv);
        Ok(())
    }

    /// Flip between clockwise and counter-clockwise for later turns.
    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.inverse();
        self.metadata.updated_at = Utc::now();
        debug!(direction = %self.direction, "direction toggled");
    }

    /// Return to a solved cube. The direction toggle is kept.
    pub fn reset(&mut self) {
        debug!(turns = self.metadata.turn_count, "resetting cube");
        self.state = CubeState::solved();
        self.metadata.turn_count = 0;
        self.metadata.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Edge;

    #[test]
    fn new_store_is_solved_and_clockwise() {
        let store = CubeStore::new();
        assert!(store.state().is_solved());
        assert_eq!(store.direction(), TurnDirection::Clockwise);
        assert!(!store.is_inverted());
        assert_eq!(store.turn_count(), 0);
    }

    #[test]
    fn turn_replaces_state_with_engine_result() {
        let mut store = CubeStore::new();
        store.turn(FaceKey::Up);

        let expected = engine::apply(&CubeState::solved(), FaceKey::Up, TurnDirection::Clockwise);
        assert_eq!(store.state(), &expected);
        assert_eq!(store.turn_count(), 1);
    }

    #[test]
    fn toggle_changes_meaning_of_later_turns() {
        let mut store = CubeStore::new();
        store.toggle_direction();
        assert!(store.is_inverted());

        store.turn(FaceKey::Up);
        let top = store.state().face(FaceKey::Left).edge(Edge::Top);
        assert!(top.iter().all(|cell| cell.color == FaceKey::Back));

        store.toggle_direction();
        assert!(!store.is_inverted());
    }

    #[test]
    fn turn_with_ignores_toggle() {
        let mut store = CubeStore::new();
        store.toggle_direction();
        store.turn_with(FaceKey::Front, TurnDirection::Clockwise);

        let expected =
            engine::apply(&CubeState::solved(), FaceKey::Front, TurnDirection::Clockwise);
        assert_eq!(store.state(), &expected);
        assert_eq!(store.direction(), TurnDirection::CounterClockwise);
    }

    #[test]
    fn invalid_notation_leaves_state_unchanged() {
        let mut store = CubeStore::new();
        store.turn(FaceKey::Back);
        let before = store.state().clone();

        assert!(matches!(
            store.turn_notation("X"),
            Err(ParseError::UnknownFace { .. })
        ));
        assert!(store.turn_notation("B2").is_err());
        assert_eq!(store.state(), &before);
        assert_eq!(store.turn_count(), 1);
    }

    #[test]
    fn notation_turns_are_applied() {
        let mut store = CubeStore::new();
        store.turn_notation("L").unwrap();
        store.turn_notation("L'").unwrap();
        assert!(store.state().is_solved());
        assert_eq!(store.turn_count(), 2);
    }

    #[test]
    fn reset_restores_solved_cube_and_keeps_direction() {
        let mut store = CubeStore::new();
        store.toggle_direction();
        store.turn(FaceKey::Down);
        store.turn(FaceKey::Right);

        store.reset();
        assert!(store.state().is_solved());
        assert_eq!(store.turn_count(), 0);
        assert!(store.is_inverted());
    }
}
