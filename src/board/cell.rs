//! Cell types, travel directions and the per-type light transforms

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MIRROR_ATTENUATION;

/// Travel direction of light; `None` only appears on non-emitter cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Grid step `(dcol, drow)` for one move in this direction
    pub fn offset(self) -> Option<(isize, isize)> {
        match self {
            Direction::Up => Some((0, -1)),
            Direction::Down => Some((0, 1)),
            Direction::Right => Some((1, 0)),
            Direction::Left => Some((-1, 0)),
            Direction::None => None,
        }
    }

    pub fn rotate(self, rotation: Rotation) -> Self {
        match (rotation, self) {
            (Rotation::Keep, dir) | (_, dir @ Direction::None) => dir,
            // "/" mirror
            (Rotation::Clockwise, Direction::Up) => Direction::Right,
            (Rotation::Clockwise, Direction::Right) => Direction::Up,
            (Rotation::Clockwise, Direction::Down) => Direction::Left,
            (Rotation::Clockwise, Direction::Left) => Direction::Down,
            // "\" mirror
            (Rotation::CounterClockwise, Direction::Up) => Direction::Left,
            (Rotation::CounterClockwise, Direction::Left) => Direction::Up,
            (Rotation::CounterClockwise, Direction::Down) => Direction::Right,
            (Rotation::CounterClockwise, Direction::Right) => Direction::Down,
        }
    }

    /// Arrow used in ASCII board dumps
    pub fn arrow(self) -> char {
        match self {
            Direction::None => '.',
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
        }
    }
}

/// Direction change applied when light crosses a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Keep,
    Clockwise,
    CounterClockwise,
}

/// What a cell type does to light passing through it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Multiplier applied to the carried value
    pub attenuation: f32,
    pub rotation: Rotation,
}

impl Transform {
    pub const PASS: Self = Self {
        attenuation: 1.0,
        rotation: Rotation::Keep,
    };

    /// Apply to a `(value, direction)` pair
    #[inline]
    pub fn apply(self, value: f32, direction: Direction) -> (f32, Direction) {
        (value * self.attenuation, direction.rotate(self.rotation))
    }
}

/// Cell types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Empty,
    Emitter,
    ReflectClockwise,
    ReflectCounterClockwise,
    Opaque,
}

impl CellKind {
    /// Light transform for this cell type
    pub const fn transform(self) -> Transform {
        match self {
            CellKind::Empty | CellKind::Emitter => Transform::PASS,
            CellKind::ReflectClockwise => Transform {
                attenuation: MIRROR_ATTENUATION,
                rotation: Rotation::Clockwise,
            },
            CellKind::ReflectCounterClockwise => Transform {
                attenuation: MIRROR_ATTENUATION,
                rotation: Rotation::CounterClockwise,
            },
            CellKind::Opaque => Transform {
                attenuation: 0.0,
                rotation: Rotation::Keep,
            },
        }
    }

    /// Overlay glyph shown in debug view (`None` for cells drawn as nodes or not at all)
    pub fn glyph(self) -> Option<char> {
        match self {
            CellKind::Opaque => Some('O'),
            CellKind::ReflectClockwise => Some('/'),
            CellKind::ReflectCounterClockwise => Some('\\'),
            CellKind::Empty | CellKind::Emitter => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == CellKind::Empty
    }
}

/// A single grid position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    /// Initial travel direction (emitters only)
    pub direction: Direction,
    /// Screen-space center, recomputed from the layout
    pub position: Vec2,
    /// Visible brightness in `[0, MAX_CHARGE]`
    pub charge: f32,
}

impl Cell {
    pub fn new(kind: CellKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn emitter(direction: Direction) -> Self {
        Self {
            kind: CellKind::Emitter,
            direction,
            ..Default::default()
        }
    }

    pub fn is_emitter(&self) -> bool {
        self.kind == CellKind::Emitter
    }
}
