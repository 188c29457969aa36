//! Individual stickers.

use super::face::FaceKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a cell sat when the cube was generated.
///
/// Diagnostic only: turns never read it. Displayed as the face symbol
/// followed by `row,col`, e.g. `U0,2`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct CellOrigin {
    pub face: FaceKey,
    pub row: u8,
    pub col: u8,
}

impl CellOrigin {
    pub const fn new(face: FaceKey, row: u8, col: u8) -> Self {
        Self { face, row, col }
    }
}

impl fmt::Display for CellOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{},{}", self.face.symbol(), self.row, self.col)
    }
}

/// One sticker. Turns relocate cells but never change their content.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Cell {
    /// The face this sticker belongs to on a solved cube.
    pub color: FaceKey,
    pub origin: CellOrigin,
}

impl Cell {
    pub const fn new(color: FaceKey, origin: CellOrigin) -> Self {
        Self { color, origin }
    }
}
