//! Object catalog: fixed 3x3 stamps and the board types that choose them

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cell::CellKind;
use crate::error::BoardError;

/// A 3x3 pattern indexed `[col][row]` relative to its anchor
pub type Stamp = [[CellKind; 3]; 3];

const E: CellKind = CellKind::Empty;
const O: CellKind = CellKind::Opaque;
const CW: CellKind = CellKind::ReflectClockwise;
const CCW: CellKind = CellKind::ReflectCounterClockwise;

/// Every stamp the generator can place
pub const STAMPS: [Stamp; 6] = [
    // Mirrored corners around a solid cross
    [[CW, O, CCW], [O, O, O], [CCW, O, CW]],
    // Corners with an open middle column
    [[CW, O, CCW], [E, E, E], [CCW, O, CW]],
    // Corners with an open middle row
    [[CW, E, CCW], [O, E, O], [CCW, E, CW]],
    // Lone block
    [[E, E, E], [E, O, E], [E, E, E]],
    // Corners around a "\" center
    [[CW, E, CCW], [E, CCW, E], [CCW, E, CW]],
    // Corners around a "/" center
    [[CW, E, CCW], [E, CW, E], [CCW, E, CW]],
];

/// Board theme: picks eligible stamps and the emitter accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoardType {
    #[default]
    Blocks,
    SplitMirrors,
    Pillars,
    Prisms,
}

impl BoardType {
    pub const ALL: [BoardType; 4] = [
        BoardType::Blocks,
        BoardType::SplitMirrors,
        BoardType::Pillars,
        BoardType::Prisms,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Stamp indices this type may place
    pub fn eligible_stamps(self) -> &'static [usize] {
        match self {
            BoardType::Blocks => &[0],
            BoardType::SplitMirrors => &[1, 2],
            BoardType::Pillars => &[3],
            BoardType::Prisms => &[4, 5],
        }
    }

    /// Draw one eligible stamp index, uniformly
    pub fn pick_stamp<R: Rng + ?Sized>(self, rng: &mut R) -> usize {
        match self.eligible_stamps() {
            [only] => *only,
            [first, .., last] => rng.random_range(*first..=*last),
            [] => 0,
        }
    }

    /// Emitter accent color (RGBA)
    pub fn accent(self) -> [u8; 4] {
        match self {
            BoardType::Blocks => [9, 132, 227, 255],
            BoardType::SplitMirrors => [0, 184, 148, 255],
            BoardType::Pillars => [253, 203, 110, 255],
            BoardType::Prisms => [214, 48, 49, 255],
        }
    }

    /// Menu caption ("TYPE 1" .. "TYPE 4")
    pub fn label(self) -> String {
        format!("TYPE {}", self.index() + 1)
    }
}

impl TryFrom<u8> for BoardType {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(BoardError::InvalidBoardType(value))
    }
}
