mod recur_backtrack;
mod recur_div;

pub use recur_backtrack::RecursiveBacktrack;
pub use recur_div::{Division, RecursiveDivision};

use crate::{
    error::Result,
    maze::{Border, Grid, Placement},
};

/// Smallest maze size either generator accepts.
pub const MIN_SIZE: u16 = 5;

/// Available maze generation algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Generator {
    /// Randomized depth-first carving
    #[value(name = "dfs")]
    RecurBacktrack,
    /// Recursive division
    #[value(name = "rd")]
    RecurDiv,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking (DFS)"),
            Generator::RecurDiv => write!(f, "Recursive Division"),
        }
    }
}

/// Lifecycle of a generator. A failed run stays in the phase it failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unstarted,
    /// DFS carving in progress
    Carving,
    /// Recursive division in progress
    Dividing,
    PlacingStartExit,
    Done(Placement),
}

/// Common surface of every maze generator.
///
/// `generate` can be called again to rebuild the maze in place from a
/// cleared grid, continuing the same random sequence.
pub trait MazeGenerator {
    fn generate(&mut self) -> Result<()>;

    /// The occupancy grid, margin included.
    fn grid(&self) -> &Grid;

    /// The size reported to callers: the requested size for DFS, the
    /// odd-coerced size for recursive division.
    fn size(&self) -> u16;

    fn phase(&self) -> Phase;

    fn placement(&self) -> Option<Placement> {
        match self.phase() {
            Phase::Done(placement) => Some(placement),
            _ => None,
        }
    }

    fn start_cell(&self) -> Option<(u16, u16)> {
        self.placement().map(|p| p.start)
    }

    fn end_cell(&self) -> Option<(u16, u16)> {
        self.placement().map(|p| p.exit)
    }

    fn end_border(&self) -> Option<Border> {
        self.placement().map(|p| p.border)
    }
}

/// Build a generator of the requested kind. An empty seed is non-reproducible.
pub fn new_generator(
    generator: Generator,
    size: u16,
    seed: &str,
) -> Result<Box<dyn MazeGenerator>> {
    Ok(match generator {
        Generator::RecurBacktrack => Box::new(RecursiveBacktrack::new(size, seed)?),
        Generator::RecurDiv => Box::new(RecursiveDivision::new(size, seed)?),
    })
}
