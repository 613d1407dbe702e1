use crate::{
    error::{MazeError, Result},
    maze::{Border, Grid, Placement},
    rng::MazeRng,
};

/// Upper bound on rejection-sampling draws for a grid of this dimension.
pub fn retry_cap(dimension: u16) -> usize {
    10 * dimension as usize * dimension as usize
}

/// Breaches the outer wall at a random border cell whose inward neighbour is
/// already open, so the exit is always reachable.
pub fn place_exit(grid: &mut Grid, rng: &mut MazeRng) -> Result<(Border, (u16, u16))> {
    let dimension = grid.dimension();
    let attempts = retry_cap(dimension);
    if dimension < 3 {
        return Err(MazeError::ExitPlacementExhausted { attempts: 0 });
    }

    for attempt in 1..=attempts {
        let offset = rng.next_int(1, dimension - 2)?;
        let border = Border::ALL[rng.next_int(0u8, 3)? as usize];

        let cell = border.cell(offset, dimension);
        let (ix, iy) = border.inward().step(cell);
        if grid.is_open(ix, iy) {
            grid[cell] = false;
            tracing::debug!(
                "[placement] Exit placed on {} border at {:?} after {} attempt(s)",
                border,
                cell,
                attempt
            );
            return Ok((border, cell));
        }
        tracing::trace!("[placement] Rejected exit candidate {:?} on {}", cell, border);
    }

    tracing::warn!("[placement] No exit found within {} attempts", attempts);
    Err(MazeError::ExitPlacementExhausted { attempts })
}

/// Picks a random open cell strictly inside the border.
pub fn place_start(grid: &Grid, rng: &mut MazeRng) -> Result<(u16, u16)> {
    let dimension = grid.dimension();
    let attempts = retry_cap(dimension);
    if dimension < 3 {
        return Err(MazeError::StartPlacementExhausted { attempts: 0 });
    }

    for attempt in 1..=attempts {
        let x = rng.next_int(1, dimension - 2)?;
        let y = rng.next_int(1, dimension - 2)?;
        if grid.is_open(x, y) {
            tracing::debug!(
                "[placement] Start placed at {:?} after {} attempt(s)",
                (x, y),
                attempt
            );
            return Ok((x, y));
        }
    }

    tracing::warn!("[placement] No start cell found within {} attempts", attempts);
    Err(MazeError::StartPlacementExhausted { attempts })
}

/// Exit first, then start, on a freshly carved grid.
pub fn place(grid: &mut Grid, rng: &mut MazeRng) -> Result<Placement> {
    let (border, exit) = place_exit(grid, rng)?;
    let start = place_start(grid, rng)?;
    Ok(Placement {
        start,
        exit,
        border,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walls everywhere except a single open interior cell.
    fn single_open(dimension: u16, open: (u16, u16)) -> Grid {
        let mut grid = Grid::new(dimension).unwrap();
        grid.set(open.0, open.1, false).unwrap();
        grid
    }

    #[test]
    fn test_exit_breaches_next_to_open_cell() {
        let mut grid = single_open(7, (1, 3));
        let mut rng = MazeRng::new("exit");
        let (border, exit) = place_exit(&mut grid, &mut rng).unwrap();
        assert_eq!(border, Border::Left);
        assert_eq!(exit, (0, 3));
        assert!(grid.is_open(0, 3));
        assert_eq!(grid.open_count(), 2);
    }

    #[test]
    fn test_start_lands_on_open_interior() {
        let grid = single_open(7, (4, 2));
        let mut rng = MazeRng::new("start");
        assert_eq!(place_start(&grid, &mut rng), Ok((4, 2)));
    }

    #[test]
    fn test_exhausted_on_solid_grid() {
        let mut grid = Grid::new(5).unwrap();
        let mut rng = MazeRng::new("solid");
        assert_eq!(
            place_exit(&mut grid, &mut rng),
            Err(MazeError::ExitPlacementExhausted { attempts: 250 })
        );
        assert_eq!(
            place_start(&grid, &mut rng),
            Err(MazeError::StartPlacementExhausted { attempts: 250 })
        );
        // A failed exit search leaves the grid untouched
        assert_eq!(grid.open_count(), 0);
    }

    #[test]
    fn test_corners_never_chosen() {
        let mut grid = Grid::new(5).unwrap();
        (1..4).for_each(|y| (1..4).for_each(|x| grid[(x, y)] = false));
        for seed in ["a", "b", "c", "d", "e", "f", "g", "h"] {
            let mut copy = grid.clone();
            let mut rng = MazeRng::new(seed);
            let placement = place(&mut copy, &mut rng).unwrap();
            let (x, y) = placement.exit;
            assert!(!(x == 0 || x == 4) || !(y == 0 || y == 4));
            assert!(copy.is_boundary(x, y));
            assert!(!copy.is_boundary(placement.start.0, placement.start.1));
        }
    }
}
