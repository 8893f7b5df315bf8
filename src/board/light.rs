//! Light propagation
//!
//! A ray walks the grid one cell at a time. Each visited cell takes the
//! carried value as its charge (last write wins), then the cell's
//! transform scales the value and may turn the ray. The walk ends when the
//! next step leaves the board.
//!
//! A ray that hits a block keeps walking with zero value, so the cells
//! behind the block are darkened rather than left at whatever they held.

use super::cell::Direction;
use super::grid::Grid;
use crate::consts::MAX_CHARGE;
use crate::error::BoardError;

/// Summary of one propagation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trace {
    /// Cells visited, counting revisits
    pub steps: usize,
    /// True when the ray left the board (false on a stalled or capped walk)
    pub exited: bool,
}

/// Upper bound on visits for a board of `size`.
///
/// Each `(cell, direction)` state is entered at most once on a walk that
/// starts at the border, so `4 * size^2` can never be reached in practice.
pub fn step_limit(size: usize) -> usize {
    4 * size * size
}

/// Walk a ray from `(col, row)` carrying `value` in `direction`
pub fn propagate(
    grid: &mut Grid,
    col: usize,
    row: usize,
    value: f32,
    direction: Direction,
) -> Result<Trace, BoardError> {
    let limit = step_limit(grid.size());
    let (mut col, mut row, mut value, mut direction) = (col, row, value, direction);
    let mut steps = 0;

    loop {
        let cell = grid.get_mut(col, row)?;
        cell.charge = value.clamp(0.0, MAX_CHARGE);
        steps += 1;
        (value, direction) = cell.kind.transform().apply(value, direction);

        let Some((dc, dr)) = direction.offset() else {
            return Ok(Trace {
                steps,
                exited: false,
            });
        };
        let next = col
            .checked_add_signed(dc)
            .zip(row.checked_add_signed(dr))
            .filter(|&(c, r)| grid.in_bounds(c, r));
        let Some((next_col, next_row)) = next else {
            return Ok(Trace {
                steps,
                exited: true,
            });
        };

        if steps >= limit {
            log::warn!("Light walk from ({col}, {row}) hit the {limit} step cap");
            return Ok(Trace {
                steps,
                exited: false,
            });
        }
        col = next_col;
        row = next_row;
    }
}

/// Add one unit of charge to an emitter and fire it along its direction.
///
/// Returns `None` for cells that are not emitters or are already full.
pub fn pulse_emitter(grid: &mut Grid, col: usize, row: usize) -> Result<Option<Trace>, BoardError> {
    let cell = grid.get(col, row)?;
    if !cell.is_emitter() || cell.charge >= MAX_CHARGE {
        return Ok(None);
    }
    let (value, direction) = (cell.charge + 1.0, cell.direction);
    propagate(grid, col, row, value, direction).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::catalog::BoardType;
    use crate::board::cell::{Cell, CellKind};
    use crate::board::generate::generate;
    use proptest::prelude::*;

    fn charges_in_column(grid: &Grid, col: usize) -> Vec<f32> {
        (0..grid.size())
            .map(|row| grid.get(col, row).unwrap().charge)
            .collect()
    }

    #[test]
    fn test_straight_run_charges_whole_column() {
        let mut grid = Grid::bordered(10);
        let trace = propagate(&mut grid, 3, 0, 5.0, Direction::Down).unwrap();
        assert_eq!(trace, Trace { steps: 10, exited: true });
        assert_eq!(charges_in_column(&grid, 3), vec![5.0; 10]);
        assert_eq!(charges_in_column(&grid, 4), vec![0.0; 10]);
    }

    #[test]
    fn test_value_is_clamped_when_stored() {
        let mut grid = Grid::bordered(10);
        propagate(&mut grid, 0, 2, 150.0, Direction::Right).unwrap();
        assert!(grid.iter().all(|(_, _, c)| c.charge <= MAX_CHARGE));
        assert_eq!(grid.get(9, 2).unwrap().charge, MAX_CHARGE);
    }

    #[test]
    fn test_negative_value_is_stored_as_dark() {
        let mut grid = Grid::bordered(10);
        grid.get_mut(4, 3).unwrap().charge = 20.0;
        propagate(&mut grid, 0, 3, -5.0, Direction::Right).unwrap();
        for col in 0..10 {
            assert_eq!(grid.get(col, 3).unwrap().charge, 0.0);
        }
    }

    #[test]
    fn test_block_darkens_cells_behind_it() {
        let mut grid = Grid::bordered(10);
        grid.set(3, 5, Cell::new(CellKind::Opaque)).unwrap();
        grid.get_mut(3, 7).unwrap().charge = 50.0;

        propagate(&mut grid, 3, 0, 12.0, Direction::Down).unwrap();
        let column = charges_in_column(&grid, 3);
        assert_eq!(&column[..=5], &[12.0; 6]);
        assert_eq!(&column[6..], &[0.0; 4]);
    }

    #[test]
    fn test_clockwise_mirror_turns_down_into_left() {
        let mut grid = Grid::bordered(10);
        grid.set(3, 4, Cell::new(CellKind::ReflectClockwise)).unwrap();

        let trace = propagate(&mut grid, 3, 0, 10.0, Direction::Down).unwrap();
        assert_eq!(trace, Trace { steps: 8, exited: true });
        assert_eq!(grid.get(3, 4).unwrap().charge, 10.0);
        for col in 0..3 {
            assert!((grid.get(col, 4).unwrap().charge - 9.0).abs() < 1e-5);
        }
        // Nothing below the mirror
        assert_eq!(grid.get(3, 5).unwrap().charge, 0.0);
    }

    #[test]
    fn test_counter_clockwise_mirror_turns_left_into_up() {
        let mut grid = Grid::bordered(10);
        grid.set(5, 6, Cell::new(CellKind::ReflectCounterClockwise)).unwrap();

        propagate(&mut grid, 9, 6, 20.0, Direction::Left).unwrap();
        for col in 6..=9 {
            assert_eq!(grid.get(col, 6).unwrap().charge, 20.0);
        }
        for row in 0..6 {
            assert!((grid.get(5, row).unwrap().charge - 18.0).abs() < 1e-5);
        }
        assert_eq!(grid.get(4, 6).unwrap().charge, 0.0);
    }

    #[test]
    fn test_two_mirrors_attenuate_twice() {
        let mut grid = Grid::bordered(10);
        // Down, "/" -> Left, "\" -> Up
        grid.set(6, 5, Cell::new(CellKind::ReflectClockwise)).unwrap();
        grid.set(2, 5, Cell::new(CellKind::ReflectCounterClockwise)).unwrap();

        propagate(&mut grid, 6, 0, 50.0, Direction::Down).unwrap();
        let top = grid.get(2, 0).unwrap().charge;
        assert!((top - 50.0 * 0.9 * 0.9).abs() < 1e-4);
    }

    #[test]
    fn test_start_outside_board_is_an_error() {
        let mut grid = Grid::bordered(10);
        let err = propagate(&mut grid, 10, 3, 1.0, Direction::Left).unwrap_err();
        assert!(matches!(err, BoardError::OutOfBounds { col: 10, .. }));
    }

    #[test]
    fn test_directionless_start_charges_only_itself() {
        let mut grid = Grid::new(10);
        let trace = propagate(&mut grid, 4, 4, 7.0, Direction::None).unwrap();
        assert_eq!(trace, Trace { steps: 1, exited: false });
        assert_eq!(grid.get(4, 4).unwrap().charge, 7.0);
    }

    #[test]
    fn test_pulse_adds_one_and_stops_at_full() {
        let mut grid = Grid::bordered(10);
        assert!(pulse_emitter(&mut grid, 0, 3).unwrap().is_some());
        assert_eq!(grid.get(0, 3).unwrap().charge, 1.0);
        assert_eq!(grid.get(9, 3).unwrap().charge, 1.0);

        grid.get_mut(0, 3).unwrap().charge = MAX_CHARGE;
        assert_eq!(pulse_emitter(&mut grid, 0, 3).unwrap(), None);
        // Interior and corner cells never pulse
        assert_eq!(pulse_emitter(&mut grid, 4, 4).unwrap(), None);
        assert_eq!(pulse_emitter(&mut grid, 0, 0).unwrap(), None);
    }

    fn arb_board_type() -> impl Strategy<Value = BoardType> {
        prop_oneof![
            Just(BoardType::Blocks),
            Just(BoardType::SplitMirrors),
            Just(BoardType::Pillars),
            Just(BoardType::Prisms),
        ]
    }

    proptest! {
        #[test]
        fn prop_every_emitter_ray_leaves_the_board(
            size in 10usize..=16,
            board_type in arb_board_type(),
            seed in 0u32..100_000,
            value in 1.0f32..100.0,
        ) {
            let mut grid = generate(size, board_type, seed).unwrap();
            let emitters: Vec<(usize, usize, Direction)> = grid
                .iter()
                .filter(|(_, _, c)| c.is_emitter())
                .map(|(col, row, c)| (col, row, c.direction))
                .collect();
            for (col, row, direction) in emitters {
                let trace = propagate(&mut grid, col, row, value, direction).unwrap();
                prop_assert!(trace.exited);
                prop_assert!(trace.steps <= step_limit(size));
                prop_assert!(grid.iter().all(|(_, _, c)| (0.0..=MAX_CHARGE).contains(&c.charge)));
            }
        }

        #[test]
        fn prop_pass_through_rows_keep_value(
            size in 5usize..=16,
            value in 0.0f32..=100.0,
        ) {
            let mut grid = Grid::bordered(size);
            let row = size / 2;
            propagate(&mut grid, 0, row, value, Direction::Right).unwrap();
            for col in 0..size {
                prop_assert_eq!(grid.get(col, row).unwrap().charge, value);
            }
        }
    }
}
