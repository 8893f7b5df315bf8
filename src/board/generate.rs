//! Seeded board generation
//!
//! Same `(size, board_type, seed)` always yields the same board: the PCG
//! stream is seeded from `seed + board_type`, so each board type gets its
//! own layout for a given seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::catalog::{BoardType, STAMPS};
use super::cell::Cell;
use super::grid::Grid;
use crate::consts::{MAX_OBJECTS, MAX_PLACEMENT_ATTEMPTS, MIN_OBJECTS};
use crate::error::BoardError;

/// Where one stamp ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub stamp: usize,
    pub col: usize,
    pub row: usize,
}

/// Seed for the generator stream
pub fn board_rng(seed: u32, board_type: BoardType) -> Pcg32 {
    Pcg32::seed_from_u64(u64::from(seed) + u64::from(board_type.index()))
}

/// Build a fresh board: border emitters plus 2-4 non-overlapping stamps.
///
/// Positions are left at zero; callers owning a layout recompute them.
pub fn generate(size: usize, board_type: BoardType, seed: u32) -> Result<Grid, BoardError> {
    let mut grid = Grid::bordered(size);
    let mut rng = board_rng(seed, board_type);
    let placements = place_objects(&mut grid, board_type, &mut rng)?;

    log::info!(
        "Generated {0}x{0} board (type {1}, seed {2}) with {3} objects",
        grid.size(),
        board_type.index() + 1,
        seed,
        placements.len()
    );
    Ok(grid)
}

/// Stamp objects into the interior of `grid`.
///
/// Anchors are drawn so the whole footprint lies inside the border ring.
/// Fails only when no anchor is free after the random draws and a full sweep.
pub fn place_objects<R: Rng + ?Sized>(
    grid: &mut Grid,
    board_type: BoardType,
    rng: &mut R,
) -> Result<Vec<Placement>, BoardError> {
    let size = grid.size();
    let wanted = rng.random_range(MIN_OBJECTS..=MAX_OBJECTS);
    let mut placements = Vec::with_capacity(wanted);

    // Interior is [1, size - 2]; a footprint starting at `max_anchor` ends on its last cell
    let Some(max_anchor) = size.checked_sub(4).filter(|&m| m >= 1) else {
        return Err(BoardError::Generation {
            placed: 0,
            wanted,
            attempts: 0,
            size,
        });
    };

    for _ in 0..wanted {
        let mut found = None;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let col = rng.random_range(1..=max_anchor);
            let row = rng.random_range(1..=max_anchor);
            let stamp = board_type.pick_stamp(rng);
            if footprint_is_free(grid, &placements, col, row) {
                found = Some(Placement { stamp, col, row });
                break;
            }
        }

        // Random draws can miss the last few free anchors; sweep before giving up
        if found.is_none() {
            found = (1..=max_anchor)
                .flat_map(|row| (1..=max_anchor).map(move |col| (col, row)))
                .find(|&(col, row)| footprint_is_free(grid, &placements, col, row))
                .map(|(col, row)| Placement {
                    stamp: board_type.pick_stamp(rng),
                    col,
                    row,
                });
        }

        let Some(placement) = found else {
            return Err(BoardError::Generation {
                placed: placements.len(),
                wanted,
                attempts: MAX_PLACEMENT_ATTEMPTS,
                size,
            });
        };
        stamp_at(grid, placement)?;
        log::debug!(
            "Placed stamp {} at ({}, {})",
            placement.stamp,
            placement.col,
            placement.row
        );
        placements.push(placement);
    }

    Ok(placements)
}

/// A footprint is free when all 9 cells are empty and it shares no cell
/// with an earlier footprint (stamps with empty cells would otherwise nest)
fn footprint_is_free(grid: &Grid, placed: &[Placement], col: usize, row: usize) -> bool {
    let apart = |p: &Placement| {
        p.col + 3 <= col || col + 3 <= p.col || p.row + 3 <= row || row + 3 <= p.row
    };
    placed.iter().all(apart)
        && (0..3).all(|c| {
            (0..3).all(|r| {
                grid.get(col + c, row + r)
                    .is_ok_and(|cell| cell.kind.is_empty())
            })
        })
}

fn stamp_at(grid: &mut Grid, placement: Placement) -> Result<(), BoardError> {
    let stamp = &STAMPS[placement.stamp];
    for (c, column) in stamp.iter().enumerate() {
        for (r, &kind) in column.iter().enumerate() {
            grid.set(placement.col + c, placement.row + r, Cell::new(kind))?;
        }
    }
    Ok(())
}
