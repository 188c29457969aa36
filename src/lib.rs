//! Twisty: a pure functional 3x3x3 cube state engine
//!
//! Twisty keeps a cube as six independent 3x3 faces and applies outer-face
//! quarter turns to them. A turn rotates the manipulated face's own grid
//! and slides the four border strips of its neighbours around a fixed
//! cycle, reversing a strip wherever two faces' local axes meet
//! anti-parallel along the shared edge.
//!
//! # Core Concepts
//!
//! - **State**: [`CubeState`], six faces of nine [`Cell`]s each
//! - **Engine**: [`engine::apply`], a pure function from
//!   `(state, face, direction)` to the next state
//! - **Store**: [`CubeStore`], which holds the current state and the
//!   direction toggle and routes every turn through the engine
//! - **Checkpoints**: serializable snapshots of a store
//!
//! # Example
//!
//! ```rust
//! use twisty::core::{Edge, FaceKey, TurnDirection};
//! use twisty::CubeStore;
//!
//! let mut store = CubeStore::new();
//! store.turn(FaceKey::Front);
//!
//! // The Up face's bottom row now sits on the Right face's left column.
//! let strip = store.state().face(FaceKey::Right).edge(Edge::Left);
//! assert!(strip.iter().all(|cell| cell.color == FaceKey::Up));
//!
//! store.turn_with(FaceKey::Front, TurnDirection::CounterClockwise);
//! assert!(store.state().is_solved());
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod store;

// Re-export commonly used types
pub use crate::builder::{BuildError, CubeStoreBuilder};
pub use crate::checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{Cell, CubeState, Edge, Face, FaceKey, Move, ParseError, TurnDirection};
pub use crate::store::CubeStore;
