//! Turn directions and single moves.

use super::error::ParseError;
use super::face::FaceKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a quarter turn, as seen looking at the turned face from outside.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum TurnDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl TurnDirection {
    /// Map the "inverted" toggle onto a direction.
    pub const fn from_inverted(inverted: bool) -> Self {
        if inverted {
            Self::CounterClockwise
        } else {
            Self::Clockwise
        }
    }

    pub const fn is_inverted(self) -> bool {
        matches!(self, Self::CounterClockwise)
    }

    pub const fn inverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    /// How many clockwise quarter turns this direction amounts to.
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => 3,
        }
    }
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clockwise => f.write_str("clockwise"),
            Self::CounterClockwise => f.write_str("counter-clockwise"),
        }
    }
}

/// A single outer-face quarter turn with an explicit direction.
///
/// Notation: the face symbol alone is clockwise (`R`), a trailing `'` or
/// `i` makes it counter-clockwise (`R'`, `Ri`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
    pub face: FaceKey,
    pub direction: TurnDirection,
}

impl Move {
    pub const fn new(face: FaceKey, direction: TurnDirection) -> Self {
        Self { face, direction }
    }

    pub const fn clockwise(face: FaceKey) -> Self {
        Self::new(face, TurnDirection::Clockwise)
    }

    pub const fn counter_clockwise(face: FaceKey) -> Self {
        Self::new(face, TurnDirection::CounterClockwise)
    }

    /// The move that undoes this one.
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.direction.inverse())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            TurnDirection::Clockwise => write!(f, "{}", self.face.symbol()),
            TurnDirection::CounterClockwise => write!(f, "{}'", self.face.symbol()),
        }
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidMove {
            notation: s.to_string(),
        };

        let mut chars = s.trim().chars();
        let face = FaceKey::try_from(chars.next().ok_or_else(invalid)?)?;
        let direction = match (chars.next(), chars.next()) {
            (None, _) => TurnDirection::Clockwise,
            (Some('\'' | 'i'), None) => TurnDirection::CounterClockwise,
            _ => return Err(invalid()),
        };

        Ok(Self::new(face, direction))
    }
}
