//! Quarter-turn rotation of a single face grid.

use crate::core::{Face, TurnDirection, CUBE_SIZE};

/// Rotate a face's own grid by a quarter turn.
///
/// Clockwise: `new[i][j] = old[N-1-j][i]`.
/// Counter-clockwise: `new[i][j] = old[j][N-1-i]`.
pub fn rotate_face(face: &Face, direction: TurnDirection) -> Face {
    let last = CUBE_SIZE - 1;
    let old = face.grid();
    let grid = std::array::from_fn(|i| {
        std::array::from_fn(|j| match direction {
            TurnDirection::Clockwise => old[last - j][i],
            TurnDirection::CounterClockwise => old[j][last - i],
        })
    });
    Face::from_grid(grid)
}
