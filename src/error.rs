use std::fmt;

/// Errors surfaced by grid access, random draws and maze generation.
///
/// All of these signal a programmer or environment problem. None of them is
/// retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A bounded random draw was requested with `min > max`.
    InvalidRange { min: i64, max: i64 },
    /// A checked grid access fell outside `[0, dimension)`.
    OutOfBounds { x: u16, y: u16, dimension: u16 },
    /// The requested maze size is too small, or too large once padded.
    InvalidSize { requested: u16, minimum: u16 },
    /// The grid buffer could not be allocated.
    Allocation { cells: usize },
    /// No border cell with an open inward neighbour was found.
    ExitPlacementExhausted { attempts: usize },
    /// No open interior cell was found for the start position.
    StartPlacementExhausted { attempts: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidRange { min, max } => {
                write!(f, "invalid random range: min {} is greater than max {}", min, max)
            }
            MazeError::OutOfBounds { x, y, dimension } => write!(
                f,
                "cell ({}, {}) is outside a grid of dimension {}",
                x, y, dimension
            ),
            MazeError::InvalidSize { requested, minimum } => write!(
                f,
                "maze size {} is not supported (minimum is {}, and the padded grid must fit in u16)",
                requested, minimum
            ),
            MazeError::Allocation { cells } => {
                write!(f, "failed to allocate a grid of {} cells", cells)
            }
            MazeError::ExitPlacementExhausted { attempts } => write!(
                f,
                "could not place an exit after {} attempts, the grid has no open border-adjacent cell",
                attempts
            ),
            MazeError::StartPlacementExhausted { attempts } => write!(
                f,
                "could not place a start cell after {} attempts, the grid has no open interior cell",
                attempts
            ),
        }
    }
}

impl std::error::Error for MazeError {}
