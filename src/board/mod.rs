//! Deterministic board engine
//!
//! Everything the puzzle needs to run lives here. Like any simulation core:
//! - Seeded RNG only
//! - Stable iteration order (column-major)
//! - No rendering or platform dependencies

pub mod catalog;
pub mod cell;
pub mod generate;
pub mod grid;
pub mod light;
pub mod tick;

pub use catalog::{BoardType, STAMPS, Stamp};
pub use cell::{Cell, CellKind, Direction, Rotation, Transform};
pub use generate::{Placement, generate};
pub use grid::Grid;
pub use light::{Trace, propagate, pulse_emitter};
pub use tick::decay;
