//! Face rotation engine.
//!
//! Pure functions from `(state, face, direction)` to the next state:
//! - [`rotate_face`] turns the manipulated face's own grid
//! - [`border_cycle`] holds the fixed strip transfers for every face
//! - [`apply`] combines both into a complete turn
//!
//! Every function here is total: a `FaceKey` always names a face with a
//! table entry, so no turn can fail or be partially applied.

mod adjacency;
mod rotation;
mod turn;

pub use adjacency::{border_cycle, StripRef, StripTransfer};
pub use rotation::rotate_face;
pub use turn::{apply, apply_move};
