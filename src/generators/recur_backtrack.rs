use crate::{
    error::{MazeError, Result},
    generators::{MIN_SIZE, MazeGenerator, Phase},
    maze::{Direction, Grid, placement},
    rng::MazeRng,
};

/// Randomized depth-first carving on a wall-filled grid.
///
/// The grid carries a one-cell wall margin, so a maze of size `n` lives in an
/// `(n + 2) × (n + 2)` grid and carving stays inside `[1, n + 1)`.
pub struct RecursiveBacktrack {
    grid: Grid,
    rng: MazeRng,
    size: u16,
    phase: Phase,
}

impl RecursiveBacktrack {
    pub fn new(size: u16, seed: &str) -> Result<Self> {
        let invalid = MazeError::InvalidSize {
            requested: size,
            minimum: MIN_SIZE,
        };
        if size < MIN_SIZE {
            return Err(invalid);
        }
        let dimension = size.checked_add(2).ok_or(invalid)?;

        Ok(RecursiveBacktrack {
            grid: Grid::new(dimension)?,
            rng: MazeRng::new(seed),
            size,
            phase: Phase::Unstarted,
        })
    }

    /// A cell can be carved when it is inside the margin, still a wall, and
    /// touches at most one open cell. Carving a cell with two open
    /// neighbours would join two branches of the tree into a loop.
    fn can_carve(grid: &Grid, cell: (u16, u16)) -> bool {
        let (x, y) = cell;
        let last = grid.dimension() - 1;
        if x < 1 || x >= last || y < 1 || y >= last {
            return false;
        }
        if !grid[cell] {
            return false;
        }

        let open_neighbors = Direction::ALL
            .iter()
            .filter(|d| {
                let (nx, ny) = d.step(cell);
                grid.is_open(nx, ny)
            })
            .count();
        open_neighbors <= 1
    }

    /// Depth-first carving from `first`.
    ///
    /// Pending cells go on the stack in reverse shuffled order, so they pop
    /// in shuffled order and each one is checked only after its earlier
    /// siblings' subtrees are fully carved. This visits cells and consumes
    /// random draws exactly as the recursive formulation does.
    fn carve(grid: &mut Grid, rng: &mut MazeRng, first: (u16, u16)) -> usize {
        let mut carved = 0;
        let mut stack = vec![first];

        while let Some(cell) = stack.pop() {
            if !Self::can_carve(grid, cell) {
                continue;
            }
            grid[cell] = false;
            carved += 1;

            let mut directions = Direction::ALL;
            rng.shuffle(&mut directions);
            stack.extend(directions.iter().rev().map(|d| d.step(cell)));
        }

        carved
    }
}

impl MazeGenerator for RecursiveBacktrack {
    fn generate(&mut self) -> Result<()> {
        self.phase = Phase::Carving;
        self.grid.clear_to_walls();

        let dimension = self.grid.dimension();
        // Keep the seed cell far enough inside that its first step stays in the grid
        let x = self.rng.next_int(3, dimension - 3)?;
        let y = self.rng.next_int(3, dimension - 3)?;
        let direction = Direction::ALL[self.rng.next_int(0u8, 3)? as usize];
        self.grid[(x, y)] = false;

        let carved = Self::carve(&mut self.grid, &mut self.rng, direction.step((x, y)));
        tracing::debug!(
            "[dfs] Carved {} cells from seed {:?} heading {:?}",
            carved + 1,
            (x, y),
            direction
        );

        self.phase = Phase::PlacingStartExit;
        let placement = placement::place(&mut self.grid, &mut self.rng)?;
        self.phase = Phase::Done(placement);
        Ok(())
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn size(&self) -> u16 {
        self.size
    }

    fn phase(&self) -> Phase {
        self.phase
    }
}
