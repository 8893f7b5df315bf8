//! Fixed-capacity square grid of cells
//!
//! Storage is always `MAX_BOARD_SIZE` squared; only the top-left `size`
//! by `size` region is part of the board. Indexing is `[col][row]`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellKind, Direction};
use crate::consts::MAX_BOARD_SIZE;
use crate::error::BoardError;
use crate::layout::Layout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: [[Cell; MAX_BOARD_SIZE]; MAX_BOARD_SIZE],
}

impl Grid {
    /// All-empty grid; `size` is clamped to the storage capacity
    pub fn new(size: usize) -> Self {
        Self {
            size: size.min(MAX_BOARD_SIZE),
            cells: [[Cell::default(); MAX_BOARD_SIZE]; MAX_BOARD_SIZE],
        }
    }

    /// Empty interior ringed by inward-facing emitters (corners stay empty)
    pub fn bordered(size: usize) -> Self {
        let mut grid = Self::new(size);
        grid.place_emitters();
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, col: usize, row: usize) -> bool {
        col < self.size && row < self.size
    }

    fn check(&self, col: usize, row: usize) -> Result<(), BoardError> {
        if self.in_bounds(col, row) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                col,
                row,
                size: self.size,
            })
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Result<&Cell, BoardError> {
        self.check(col, row)?;
        Ok(&self.cells[col][row])
    }

    pub fn get_mut(&mut self, col: usize, row: usize) -> Result<&mut Cell, BoardError> {
        self.check(col, row)?;
        Ok(&mut self.cells[col][row])
    }

    pub fn set(&mut self, col: usize, row: usize, cell: Cell) -> Result<(), BoardError> {
        *self.get_mut(col, row)? = cell;
        Ok(())
    }

    /// Reset every stored cell (including those beyond `size`) to empty
    pub fn clear(&mut self) {
        self.cells = [[Cell::default(); MAX_BOARD_SIZE]; MAX_BOARD_SIZE];
    }

    /// Put inward-facing emitters on all four borders, corners excluded
    pub fn place_emitters(&mut self) {
        let last = match self.size.checked_sub(1) {
            Some(last) if last > 0 => last,
            _ => return,
        };
        for i in 1..last {
            self.cells[i][0] = Cell::emitter(Direction::Down);
            self.cells[i][last] = Cell::emitter(Direction::Up);
            self.cells[0][i] = Cell::emitter(Direction::Right);
            self.cells[last][i] = Cell::emitter(Direction::Left);
        }
    }

    /// Recompute screen positions for every board cell
    pub fn update_positions(&mut self, layout: &Layout) {
        for col in 0..self.size {
            for row in 0..self.size {
                self.cells[col][row].position = layout.cell_center(col, row);
            }
        }
    }

    /// Iterate `(col, row, cell)` over the board region, column-major
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        let size = self.size;
        (0..size).flat_map(move |col| (0..size).map(move |row| (col, row, &self.cells[col][row])))
    }

    /// Mutable iteration over the board region
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        let size = self.size;
        self.cells[..size]
            .iter_mut()
            .flat_map(move |column| column.iter_mut().take(size))
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.iter().filter(|(_, _, cell)| cell.kind == kind).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::consts::DEFAULT_BOARD_SIZE)
    }
}

/// Row-per-line dump: arrows for emitters, debug glyphs for objects, `.` for empty
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = &self.cells[col][row];
                let ch = match cell.kind {
                    CellKind::Emitter => cell.direction.arrow(),
                    kind => kind.glyph().unwrap_or('.'),
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
