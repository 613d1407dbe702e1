//! Point-against-grid collision for a walker moving through a finished maze.
//!
//! Each cell is a unit square centred on its integer coordinate. Walls are
//! inflated by a small margin so a camera at the point cannot see through
//! them. The x axis runs along grid columns and z along grid rows.

use crate::maze::Grid;

/// Half the side of a cell's collision square: half a cell plus the margin.
pub const HALF_EXTENT: f32 = 0.7;

/// Cells scanned along each axis around the point.
const WINDOW: i32 = 4;

pub fn point_hits_cell(px: f32, pz: f32, cx: f32, cz: f32) -> bool {
    px >= cx - HALF_EXTENT
        && px <= cx + HALF_EXTENT
        && pz >= cz - HALF_EXTENT
        && pz <= cz + HALF_EXTENT
}

/// Whether the point overlaps any wall near it.
///
/// Only a 4x4 window starting two cells up and left of the point is
/// scanned, clamped to the grid. A naive check like this is only sound
/// because the outer margin is solid wall except for the exit.
pub fn collides(grid: &Grid, px: f32, pz: f32) -> bool {
    let dimension = grid.dimension() as i32;
    // `as` saturates out-of-range floats, so only the offsets can overflow
    let first_col = (px as i32).saturating_sub(2).max(0);
    let first_row = (pz as i32).saturating_sub(2).max(0);

    (first_row..first_row.saturating_add(WINDOW).min(dimension)).any(|z| {
        (first_col..first_col.saturating_add(WINDOW).min(dimension)).any(|x| {
            grid[(x as u16, z as u16)] && point_hits_cell(px, pz, x as f32, z as f32)
        })
    })
}

/// Whether the point is standing on the exit cell.
pub fn reached_exit(exit: (u16, u16), px: f32, pz: f32) -> bool {
    point_hits_cell(px, pz, exit.0 as f32, exit.1 as f32)
}
