//! Graph checks over generated grids, shared by the unit tests.

use std::collections::VecDeque;

use crate::maze::{Border, Direction, Grid, Placement};

pub struct OpenGraph {
    /// Open cells
    pub open: usize,
    /// 4-adjacent pairs of open cells
    pub edges: usize,
    /// Connected components of open cells
    pub components: usize,
}

pub fn open_graph(grid: &Grid) -> OpenGraph {
    let dimension = grid.dimension();
    let mut edges = 0;
    (0..dimension).for_each(|y| {
        (0..dimension).for_each(|x| {
            if grid.is_open(x, y) {
                edges += grid.is_open(x + 1, y) as usize;
                edges += grid.is_open(x, y + 1) as usize;
            }
        })
    });

    let mut seen = vec![false; grid.as_slice().len()];
    let index = |(x, y): (u16, u16)| y as usize * dimension as usize + x as usize;
    let mut components = 0;
    for y in 0..dimension {
        for x in 0..dimension {
            if !grid.is_open(x, y) || seen[index((x, y))] {
                continue;
            }
            components += 1;
            seen[index((x, y))] = true;
            let mut queue = VecDeque::from([(x, y)]);
            while let Some(cell) = queue.pop_front() {
                for direction in Direction::ALL {
                    let (nx, ny) = direction.step(cell);
                    if grid.is_open(nx, ny) && !seen[index((nx, ny))] {
                        seen[index((nx, ny))] = true;
                        queue.push_back((nx, ny));
                    }
                }
            }
        }
    }

    OpenGraph {
        open: grid.open_count(),
        edges,
        components,
    }
}

/// Start is open and strictly inside; exit is open, on the named border, and
/// its inward neighbour is open.
pub fn assert_placement_valid(grid: &Grid, placement: Placement) {
    let last = grid.dimension() - 1;
    let (sx, sy) = placement.start;
    assert!(grid.is_open(sx, sy));
    assert!(!grid.is_boundary(sx, sy), "start {:?} on border", placement.start);

    let (ex, ey) = placement.exit;
    assert!(grid.is_open(ex, ey));
    match placement.border {
        Border::Top => assert_eq!(ey, 0),
        Border::Bottom => assert_eq!(ey, last),
        Border::Left => assert_eq!(ex, 0),
        Border::Right => assert_eq!(ex, last),
    }
    let (ix, iy) = placement.border.inward().step(placement.exit);
    assert!(grid.is_open(ix, iy));
    assert!(!grid.is_boundary(ix, iy));

    // The exit is the only breach in the outer wall
    let breaches = (0..=last)
        .flat_map(|i| [(i, 0), (i, last), (0, i), (last, i)])
        .filter(|&(x, y)| grid.is_open(x, y))
        .collect::<std::collections::HashSet<_>>();
    assert_eq!(breaches.len(), 1);
}
