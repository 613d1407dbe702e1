use crate::error::{MazeError, Result};

/// Square occupancy matrix. `true` is a wall, `false` is open floor.
///
/// Cells are addressed as `(x, y)` with `(0, 0)` in the top-left corner and
/// stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[bool]>,
    dimension: u16,
}

impl Grid {
    /// Allocates a `dimension × dimension` grid filled with walls. An empty
    /// grid has no cells to address and is rejected.
    pub fn new(dimension: u16) -> Result<Self> {
        if dimension == 0 {
            return Err(MazeError::InvalidSize {
                requested: 0,
                minimum: 1,
            });
        }
        // u16::MAX squared still fits in a 32-bit usize
        let cells = dimension as usize * dimension as usize;
        let mut data = Vec::new();
        data.try_reserve_exact(cells)
            .map_err(|_| MazeError::Allocation { cells })?;
        data.resize(cells, true);
        Ok(Grid {
            data: data.into_boxed_slice(),
            dimension,
        })
    }

    /// Number of cells along each side, including any border margin.
    pub fn dimension(&self) -> u16 {
        self.dimension
    }

    /// Sets every cell to a wall, the state carving starts from.
    pub fn clear_to_walls(&mut self) {
        self.fill(true);
    }

    pub fn fill(&mut self, wall: bool) {
        self.data.iter_mut().for_each(|cell| *cell = wall);
    }

    pub fn is_in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.dimension && y < self.dimension
    }

    pub fn is_boundary(&self, x: u16, y: u16) -> bool {
        let last = self.dimension.saturating_sub(1);
        x == 0 || y == 0 || x == last || y == last
    }

    /// Open and in bounds. Out-of-bounds coordinates read as walls.
    pub fn is_open(&self, x: u16, y: u16) -> bool {
        self.is_in_bounds(x, y) && !self[(x, y)]
    }

    pub fn get(&self, x: u16, y: u16) -> Result<bool> {
        self.check_bounds(x, y)?;
        Ok(self[(x, y)])
    }

    pub fn set(&mut self, x: u16, y: u16, wall: bool) -> Result<()> {
        self.check_bounds(x, y)?;
        self[(x, y)] = wall;
        Ok(())
    }

    /// Row slices from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.data.chunks(self.dimension as usize)
    }

    /// Raw row-major cells.
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.data.iter().filter(|&&wall| !wall).count()
    }

    fn check_bounds(&self, x: u16, y: u16) -> Result<()> {
        if self.is_in_bounds(x, y) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                x,
                y,
                dimension: self.dimension,
            })
        }
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        y as usize * self.dimension as usize + x as usize
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = bool;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}
