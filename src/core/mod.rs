//! Core cube types.
//!
//! This module contains the plain data of the cube:
//! - Cells and their diagnostic origin labels
//! - Faces, face identifiers and border strips
//! - Turn directions and single moves
//! - The complete six-face state and its validation
//!
//! Nothing here turns the cube; see [`crate::engine`] for that.

mod cell;
mod direction;
mod error;
mod face;
mod state;

pub use cell::{Cell, CellOrigin};
pub use direction::{Move, TurnDirection};
pub use error::ParseError;
pub use face::{Edge, Face, FaceKey, Grid, Strip, CUBE_SIZE};
pub use state::{CubeState, StateViolation, CELL_COUNT};
