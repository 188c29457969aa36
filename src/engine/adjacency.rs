//! Border strip cycles for every face.
//!
//! Each turnable face borders four strips on its neighbours. A clockwise
//! quarter turn slides each strip one step around a 4-cycle. The cycles
//! below are derived from the unfolded net (Up above Front; Left, Front,
//! Right, Back in a row; Down below Front), with every face read from
//! outside the cube.
//!
//! A transfer is `reversed` when the two faces' local axes run in opposite
//! directions along the shared physical edge; the destination then receives
//! the source cells in reverse order. Every cycle carries an even number of
//! reversals, so four turns always restore each strip's order.

use crate::core::{Edge, FaceKey};
use serde::{Deserialize, Serialize};
use Edge::{Bottom, Left, Right, Top};
use FaceKey as K;

/// A border strip on a specific face.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct StripRef {
    pub face: FaceKey,
    pub edge: Edge,
}

/// One step of a border cycle: `from` slides into `to` on a clockwise turn.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct StripTransfer {
    pub from: StripRef,
    pub to: StripRef,
    pub reversed: bool,
}

const fn strip(face: FaceKey, edge: Edge) -> StripRef {
    StripRef { face, edge }
}

const fn straight(from: StripRef, to: StripRef) -> StripTransfer {
    StripTransfer {
        from,
        to,
        reversed: false,
    }
}

const fn reversed(from: StripRef, to: StripRef) -> StripTransfer {
    StripTransfer {
        from,
        to,
        reversed: true,
    }
}

/// Indexed by [`FaceKey::index`].
static BORDER_CYCLES: [[StripTransfer; 4]; 6] = [
    // Up
    [
        straight(strip(K::Back, Top), strip(K::Right, Top)),
        straight(strip(K::Right, Top), strip(K::Front, Top)),
        straight(strip(K::Front, Top), strip(K::Left, Top)),
        straight(strip(K::Left, Top), strip(K::Back, Top)),
    ],
    // Left
    [
        straight(strip(K::Up, Left), strip(K::Front, Left)),
        straight(strip(K::Front, Left), strip(K::Down, Left)),
        reversed(strip(K::Down, Left), strip(K::Back, Right)),
        reversed(strip(K::Back, Right), strip(K::Up, Left)),
    ],
    // Front
    [
        straight(strip(K::Up, Bottom), strip(K::Right, Left)),
        reversed(strip(K::Right, Left), strip(K::Down, Top)),
        straight(strip(K::Down, Top), strip(K::Left, Right)),
        reversed(strip(K::Left, Right), strip(K::Up, Bottom)),
    ],
    // Right
    [
        reversed(strip(K::Up, Right), strip(K::Back, Left)),
        reversed(strip(K::Back, Left), strip(K::Down, Right)),
        straight(strip(K::Down, Right), strip(K::Front, Right)),
        straight(strip(K::Front, Right), strip(K::Up, Right)),
    ],
    // Back
    [
        reversed(strip(K::Up, Top), strip(K::Left, Left)),
        straight(strip(K::Left, Left), strip(K::Down, Bottom)),
        reversed(strip(K::Down, Bottom), strip(K::Right, Right)),
        straight(strip(K::Right, Right), strip(K::Up, Top)),
    ],
    // Down
    [
        straight(strip(K::Front, Bottom), strip(K::Right, Bottom)),
        straight(strip(K::Right, Bottom), strip(K::Back, Bottom)),
        straight(strip(K::Back, Bottom), strip(K::Left, Bottom)),
        straight(strip(K::Left, Bottom), strip(K::Front, Bottom)),
    ],
];

/// The four strip transfers performed by a clockwise turn of `face`.
pub fn border_cycle(face: FaceKey) -> &'static [StripTransfer; 4] {
    &BORDER_CYCLES[face.index()]
}
