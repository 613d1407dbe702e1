pub mod cell;
pub mod grid;
pub mod placement;

pub use cell::Marker;
pub use grid::Grid;
pub use placement::{place_exit, place_start};

/// Orientation of a dividing wall line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Unit step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The neighbouring coordinate in this direction.
    ///
    /// NOTE: Stepping off the low edge wraps to u16::MAX and stepping off the
    /// high edge saturates at u16::MAX, so the result never panics and is
    /// always rejected by a bounds check against a dimension <= u16::MAX.
    pub fn step(self, (x, y): (u16, u16)) -> (u16, u16) {
        match self {
            Direction::Up => (x, y.wrapping_sub(1)),
            Direction::Down => (x, y.saturating_add(1)),
            Direction::Left => (x.wrapping_sub(1), y),
            Direction::Right => (x.saturating_add(1), y),
        }
    }
}

/// The outer wall an exit breaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Top,
    Bottom,
    Left,
    Right,
}

impl Border {
    pub const ALL: [Border; 4] = [Border::Top, Border::Bottom, Border::Left, Border::Right];

    /// Direction pointing from this border into the maze.
    pub fn inward(self) -> Direction {
        match self {
            Border::Top => Direction::Down,
            Border::Bottom => Direction::Up,
            Border::Left => Direction::Right,
            Border::Right => Direction::Left,
        }
    }

    /// The border cell at `offset` along this side of a grid.
    pub fn cell(self, offset: u16, dimension: u16) -> (u16, u16) {
        let last = dimension.saturating_sub(1);
        match self {
            Border::Top => (offset, 0),
            Border::Bottom => (offset, last),
            Border::Left => (0, offset),
            Border::Right => (last, offset),
        }
    }
}

impl std::fmt::Display for Border {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Border::Top => write!(f, "top"),
            Border::Bottom => write!(f, "bottom"),
            Border::Left => write!(f, "left"),
            Border::Right => write!(f, "right"),
        }
    }
}

/// Where the player starts and where the maze is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub start: (u16, u16),
    pub exit: (u16, u16),
    pub border: Border,
}
