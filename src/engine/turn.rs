//! Applying a face turn to a whole cube state.

use super::adjacency::border_cycle;
use super::rotation::rotate_face;
use crate::core::{CubeState, FaceKey, Move, Strip, TurnDirection};
use tracing::trace;

/// Turn `face` a quarter turn in `direction`, returning the successor state.
///
/// The input is never modified. The turned face's own grid is rotated
/// directly in either direction; its border strips are cycled once for a
/// clockwise turn and three times for a counter-clockwise one, so the two
/// directions share a single table.
///
/// # Example
///
/// ```rust
/// use twisty::core::{CubeState, Edge, FaceKey, TurnDirection};
/// use twisty::engine::apply;
///
/// let solved = CubeState::solved();
/// let turned = apply(&solved, FaceKey::Up, TurnDirection::Clockwise);
///
/// // The Right face's top row came from the Back face.
/// let top = turned.face(FaceKey::Right).edge(Edge::Top);
/// assert!(top.iter().all(|cell| cell.color == FaceKey::Back));
///
/// let restored = apply(&turned, FaceKey::Up, TurnDirection::CounterClockwise);
/// assert_eq!(restored, solved);
/// ```
pub fn apply(state: &CubeState, face: FaceKey, direction: TurnDirection) -> CubeState {
    let mut next = state.clone();
    next.replace_face(face, rotate_face(state.face(face), direction));
    for _ in 0..direction.quarter_turns() {
        cycle_borders(&mut next, face);
    }
    next
}

/// [`apply`] for a parsed [`Move`].
pub fn apply_move(state: &CubeState, mv: Move) -> CubeState {
    apply(state, mv.face, mv.direction)
}

/// Slide the four border strips around `face` one clockwise step.
///
/// Strips overlap at the corners of neighbouring faces, so every source
/// strip is read before any destination is written.
fn cycle_borders(state: &mut CubeState, face: FaceKey) {
    let cycle = border_cycle(face);

    let strips: [Strip; 4] = cycle.map(|transfer| {
        let mut strip = state.face(transfer.from.face).edge(transfer.from.edge);
        if transfer.reversed {
            strip.reverse();
        }
        strip
    });

    for (transfer, strip) in cycle.iter().zip(strips) {
        trace!(from = ?transfer.from, to = ?transfer.to, reversed = transfer.reversed, "moving strip");
        state.face_mut(transfer.to.face).set_edge(transfer.to.edge, strip);
    }
}
