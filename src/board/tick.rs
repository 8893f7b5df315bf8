//! Per-frame charge decay

use super::grid::Grid;
use crate::consts::DECAY_STEP;

/// Relax every charged cell one step toward zero
pub fn decay(grid: &mut Grid) {
    for cell in grid.cells_mut() {
        if cell.charge > 0.0 {
            cell.charge = (cell.charge - DECAY_STEP).max(0.0);
        }
    }
}
