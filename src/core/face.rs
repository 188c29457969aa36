//! Faces, their identifiers and their border strips.
//!
//! Every face is a fixed 3x3 grid addressed in its own local orientation:
//! row 0 is the top row, column 0 is the left column, as seen when looking
//! at the face from outside the cube in the standard unfolded net
//! (Up above Front; Left, Front, Right, Back in a row; Down below Front).

use super::cell::{Cell, CellOrigin};
use super::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Edge length of the cube, in cells.
pub const CUBE_SIZE: usize = 3;

/// A row-major 3x3 grid of cells.
pub type Grid = [[Cell; CUBE_SIZE]; CUBE_SIZE];

/// A three-cell border strip, ordered by increasing row or column.
pub type Strip = [Cell; CUBE_SIZE];

/// Identifier of one of the six faces.
///
/// The set is closed: any value of this type names a turnable face, so
/// turn operations taking a `FaceKey` cannot fail. Untrusted identifiers
/// enter through [`FromStr`] or [`TryFrom<char>`], which reject anything
/// outside the six symbols.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum FaceKey {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

impl FaceKey {
    /// All faces in net order: U, L, F, R, B, D.
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Left,
        Self::Front,
        Self::Right,
        Self::Back,
        Self::Down,
    ];

    /// Position of this face in [`FaceKey::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Left => 1,
            Self::Front => 2,
            Self::Right => 3,
            Self::Back => 4,
            Self::Down => 5,
        }
    }

    /// Single-letter symbol used in move notation and cell labels.
    pub const fn symbol(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Left => 'L',
            Self::Front => 'F',
            Self::Right => 'R',
            Self::Back => 'B',
            Self::Down => 'D',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Left => "Left",
            Self::Front => "Front",
            Self::Right => "Right",
            Self::Back => "Back",
            Self::Down => "Down",
        }
    }

    /// The face on the other side of the cube, which a turn never touches.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

impl fmt::Display for FaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<char> for FaceKey {
    type Error = ParseError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'U' => Ok(Self::Up),
            'L' => Ok(Self::Left),
            'F' => Ok(Self::Front),
            'R' => Ok(Self::Right),
            'B' => Ok(Self::Back),
            'D' => Ok(Self::Down),
            other => Err(ParseError::UnknownFace {
                symbol: other.to_string(),
            }),
        }
    }
}

impl FromStr for FaceKey {
    type Err = ParseError;

    /// Accepts either the single-letter symbol or the full face name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(symbol), None) = (chars.next(), chars.next()) {
            return Self::try_from(symbol);
        }
        Self::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownFace {
                symbol: s.to_string(),
            })
    }
}

/// One of the four border strips of a face.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Grid coordinates of the strip's cells, in strip order.
    pub fn coords(self) -> [(usize, usize); CUBE_SIZE] {
        let last = CUBE_SIZE - 1;
        std::array::from_fn(|k| match self {
            Self::Top => (0, k),
            Self::Bottom => (last, k),
            Self::Left => (k, 0),
            Self::Right => (k, last),
        })
    }
}

/// A single face: exactly nine cells in a fixed grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Face {
    cells: Grid,
}

impl Face {
    /// Build a face from an explicit grid.
    pub fn from_grid(cells: Grid) -> Self {
        Self { cells }
    }

    /// A face whose every cell carries `key`'s color and its own position.
    pub fn solved(key: FaceKey) -> Self {
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| Cell::new(key, CellOrigin::new(key, row as u8, col as u8)))
        });
        Self { cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    pub fn grid(&self) -> &Grid {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &Strip> {
        self.cells.iter()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Read a border strip, top-to-bottom for columns and left-to-right for rows.
    pub fn edge(&self, edge: Edge) -> Strip {
        edge.coords().map(|(row, col)| self.cells[row][col])
    }

    /// Overwrite a border strip in the same order [`Face::edge`] reads it.
    pub fn set_edge(&mut self, edge: Edge, strip: Strip) {
        for ((row, col), cell) in edge.coords().into_iter().zip(strip) {
            self.cells[row][col] = cell;
        }
    }

    /// True when all nine cells share one color.
    pub fn is_uniform(&self) -> bool {
        let color = self.cells[0][0].color;
        self.cells().all(|cell| cell.color == color)
    }
}
