//! Perfect-maze generation on a square occupancy grid.
//!
//! Two generators share the [`generators::MazeGenerator`] surface: randomized
//! depth-first carving and recursive division. Both finish by breaching the
//! outer wall at one exit and picking an open start cell. A non-empty seed
//! string makes a run fully reproducible.

pub mod collision;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod render;
pub mod rng;

#[cfg(test)]
mod testing;

pub use error::{MazeError, Result};
pub use generators::{Generator, MazeGenerator, new_generator};
pub use maze::{Border, Grid, Placement};
