use crate::{
    error::{MazeError, Result},
    generators::{MIN_SIZE, MazeGenerator, Phase},
    maze::{Grid, Orientation, placement},
    rng::MazeRng,
};

/// One dividing wall, as stamped during generation.
///
/// `index` is the grid row (horizontal) or column (vertical) of the wall,
/// `span` the inclusive range of grid cells it covers along the other axis,
/// and `passage` the single grid cell on that line left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    pub orientation: Orientation,
    pub index: u16,
    pub span: (u16, u16),
    pub passage: u16,
}

/// Rectangle of logical fields, inclusive on both ends. Field `f` sits on
/// grid index `2f + 1`; even grid indices hold walls.
#[derive(Debug, Clone, Copy)]
struct Chamber {
    x0: u16,
    y0: u16,
    x1: u16,
    y1: u16,
    /// Chosen when the chamber is popped unless preset
    orientation: Option<Orientation>,
}

impl Chamber {
    fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Chamber {
            x0,
            y0,
            x1,
            y1,
            orientation: None,
        }
    }
}

/// Recursive division: start from an open room inside a solid border and
/// keep splitting chambers with a wall that has exactly one gap.
pub struct RecursiveDivision {
    grid: Grid,
    rng: MazeRng,
    phase: Phase,
    divisions: Vec<Division>,
}

impl RecursiveDivision {
    /// Even sizes are bumped to the next odd number so fields and walls
    /// alternate symmetrically.
    pub fn new(size: u16, seed: &str) -> Result<Self> {
        let invalid = MazeError::InvalidSize {
            requested: size,
            minimum: MIN_SIZE,
        };
        if size < MIN_SIZE {
            return Err(invalid);
        }
        let dimension = if size % 2 == 0 {
            size.checked_add(1).ok_or(invalid)?
        } else {
            size
        };

        Ok(RecursiveDivision {
            grid: Grid::new(dimension)?,
            rng: MazeRng::new(seed),
            phase: Phase::Unstarted,
            divisions: Vec::new(),
        })
    }

    /// Every wall stamped by the last `generate`, in stamping order.
    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    fn random_orientation(rng: &mut MazeRng) -> Result<Orientation> {
        Ok(match rng.next_int(0u8, 1)? {
            0 => Orientation::Vertical,
            _ => Orientation::Horizontal,
        })
    }

    /// Split across the longer side; toss a coin for square chambers.
    fn choose_orientation(chamber: &Chamber, rng: &mut MazeRng) -> Result<Orientation> {
        let width = chamber.x1 - chamber.x0;
        let height = chamber.y1 - chamber.y0;
        match width.cmp(&height) {
            std::cmp::Ordering::Greater => Ok(Orientation::Vertical),
            std::cmp::Ordering::Less => Ok(Orientation::Horizontal),
            std::cmp::Ordering::Equal => Self::random_orientation(rng),
        }
    }

    fn divide(&mut self, fields: u16) -> Result<()> {
        let mut root = Chamber::new(0, 0, fields - 1, fields - 1);
        root.orientation = Some(Self::random_orientation(&mut self.rng)?);
        let mut stack = vec![root];

        while let Some(chamber) = stack.pop() {
            // The orientation is drawn before the size check, even for
            // chambers that turn out to be too small to split
            let orientation = match chamber.orientation {
                Some(orientation) => orientation,
                None => Self::choose_orientation(&chamber, &mut self.rng)?,
            };
            let Chamber { x0, y0, x1, y1, .. } = chamber;
            if x1 - x0 < 1 || y1 - y0 < 1 {
                continue;
            }

            let (first, second) = match orientation {
                Orientation::Horizontal => {
                    let wall_field = self.rng.next_int(y0, y1 - 1)?;
                    let wall_y = wall_field * 2 + 2;
                    let span = (x0 * 2 + 1, x1 * 2 + 1);
                    (span.0..=span.1).for_each(|x| self.grid[(x, wall_y)] = true);

                    let passage = self.rng.next_int(x0, x1)? * 2 + 1;
                    self.grid[(passage, wall_y)] = false;
                    self.divisions.push(Division {
                        orientation,
                        index: wall_y,
                        span,
                        passage,
                    });

                    (
                        Chamber::new(x0, y0, x1, wall_field),
                        Chamber::new(x0, wall_field + 1, x1, y1),
                    )
                }
                Orientation::Vertical => {
                    let wall_field = self.rng.next_int(x0, x1 - 1)?;
                    let wall_x = wall_field * 2 + 2;
                    let span = (y0 * 2 + 1, y1 * 2 + 1);
                    (span.0..=span.1).for_each(|y| self.grid[(wall_x, y)] = true);

                    let passage = self.rng.next_int(y0, y1)? * 2 + 1;
                    self.grid[(wall_x, passage)] = false;
                    self.divisions.push(Division {
                        orientation,
                        index: wall_x,
                        span,
                        passage,
                    });

                    (
                        Chamber::new(x0, y0, wall_field, y1),
                        Chamber::new(wall_field + 1, y0, x1, y1),
                    )
                }
            };

            // LIFO: the first chamber is fully divided before the second
            stack.push(second);
            stack.push(first);
        }

        Ok(())
    }
}

impl MazeGenerator for RecursiveDivision {
    fn generate(&mut self) -> Result<()> {
        self.phase = Phase::Dividing;
        self.divisions.clear();

        // Open room inside a solid border
        self.grid.fill(false);
        let dimension = self.grid.dimension();
        let last = dimension - 1;
        (0..dimension).for_each(|i| {
            self.grid[(i, 0)] = true;
            self.grid[(i, last)] = true;
            self.grid[(0, i)] = true;
            self.grid[(last, i)] = true;
        });

        let fields = (dimension - 1) / 2;
        self.divide(fields)?;
        tracing::debug!(
            "[division] Stamped {} walls over {}x{} fields",
            self.divisions.len(),
            fields,
            fields
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
        self.grid.dimension()
    }

    fn phase(&self) -> Phase {
        self.phase
    }
}
