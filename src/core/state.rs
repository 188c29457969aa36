//! The full cube configuration.
//!
//! A `CubeState` maps each of the six [`FaceKey`]s to exactly one [`Face`].
//! The mapping is an array indexed by [`FaceKey::index`], so a state can
//! never have a missing or extra face. What the type cannot rule out is a
//! set of cells that no sequence of turns could produce (duplicated or
//! lost stickers); [`CubeState::validate`] reports those.

use super::cell::{Cell, CellOrigin};
use super::face::{Face, FaceKey, CUBE_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Index;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Total number of cells on the cube.
pub const CELL_COUNT: usize = 6 * CUBE_SIZE * CUBE_SIZE;

/// A reason a state is not a well-formed cube.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateViolation {
    #[error("Color {color} appears {count} times, expected {expected}")]
    ColorCount {
        color: FaceKey,
        count: usize,
        expected: usize,
    },

    #[error("Cell {origin} appears {count} times")]
    DuplicateCell { origin: CellOrigin, count: usize },

    #[error("Cell {origin} is missing")]
    MissingCell { origin: CellOrigin },

    #[error("Cell {origin} has a position outside the {size}x{size} grid")]
    OriginOutOfRange { origin: CellOrigin, size: usize },

    #[error("Cell {origin} is colored {color} but originates on {}", .origin.face)]
    ColorMismatch { origin: CellOrigin, color: FaceKey },

    #[error("Center of {face} holds {found} instead of its own center")]
    CenterMoved { face: FaceKey, found: CellOrigin },
}

/// Configuration of all six faces.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CubeState {
    faces: [Face; 6],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState {
    /// The canonical solved cube: every cell colored after its face and
    /// labelled with its starting position.
    pub fn solved() -> Self {
        Self {
            faces: FaceKey::ALL.map(Face::solved),
        }
    }

    /// Assemble a state from faces given in [`FaceKey::ALL`] order.
    ///
    /// No checks are performed here; see [`CubeState::validate`].
    pub fn from_faces(faces: [Face; 6]) -> Self {
        Self { faces }
    }

    pub fn face(&self, key: FaceKey) -> &Face {
        &self.faces[key.index()]
    }

    pub(crate) fn face_mut(&mut self, key: FaceKey) -> &mut Face {
        &mut self.faces[key.index()]
    }

    pub(crate) fn replace_face(&mut self, key: FaceKey, face: Face) {
        self.faces[key.index()] = face;
    }

    /// Iterate faces paired with their key, in [`FaceKey::ALL`] order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceKey, &Face)> {
        FaceKey::ALL.into_iter().zip(self.faces.iter())
    }

    /// All 54 cells, face by face, row-major within a face.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.faces.iter().flat_map(Face::cells)
    }

    /// True when every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(Face::is_uniform)
    }

    /// Check that this state holds exactly the 54 generated cells.
    ///
    /// All violations are accumulated rather than stopping at the first one.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<StateViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<StateViolation>>> = Vec::new();

        let expected = CUBE_SIZE * CUBE_SIZE;
        for color in FaceKey::ALL {
            let count = self.cells().filter(|cell| cell.color == color).count();
            checks.push(if count == expected {
                Validation::success(())
            } else {
                Validation::fail(StateViolation::ColorCount {
                    color,
                    count,
                    expected,
                })
            });
        }

        let mut seen: HashMap<CellOrigin, usize> = HashMap::with_capacity(CELL_COUNT);
        for cell in self.cells() {
            *seen.entry(cell.origin).or_default() += 1;

            if cell.color != cell.origin.face {
                checks.push(Validation::fail(StateViolation::ColorMismatch {
                    origin: cell.origin,
                    color: cell.color,
                }));
            }
        }

        for origin in Self::solved().cells().map(|cell| cell.origin) {
            match seen.remove(&origin).unwrap_or(0) {
                0 => checks.push(Validation::fail(StateViolation::MissingCell { origin })),
                1 => {}
                count => checks.push(Validation::fail(StateViolation::DuplicateCell {
                    origin,
                    count,
                })),
            }
        }

        // Whatever remains was never generated.
        let mut strays: Vec<CellOrigin> = seen.into_keys().collect();
        strays.sort();
        for origin in strays {
            checks.push(Validation::fail(StateViolation::OriginOutOfRange {
                origin,
                size: CUBE_SIZE,
            }));
        }

        // Outer-face turns never move a center.
        let mid = CUBE_SIZE / 2;
        for (key, face) in self.faces() {
            let found = face.cell(mid, mid).origin;
            if found != CellOrigin::new(key, mid as u8, mid as u8) {
                checks.push(Validation::fail(StateViolation::CenterMoved { face: key, found }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

impl Index<FaceKey> for CubeState {
    type Output = Face;

    fn index(&self, key: FaceKey) -> &Self::Output {
        self.face(key)
    }
}
