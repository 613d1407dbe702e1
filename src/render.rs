use std::io::Write;

use crossterm::{queue, style::Print};

use crate::maze::{Grid, Marker, Placement};

/// How markers are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Coloured emoji blocks
    Color,
    /// Two-character ASCII, no escape codes
    Plain,
}

fn marker_at(wall: bool, placement: Option<&Placement>, cell: (u16, u16)) -> Marker {
    let is_start = placement.is_some_and(|p| p.start == cell);
    let is_exit = placement.is_some_and(|p| p.exit == cell);
    Marker::for_cell(wall, is_start, is_exit)
}

/// Queues the whole grid, one terminal row per grid row, then flushes.
pub fn draw<W: Write>(
    out: &mut W,
    grid: &Grid,
    placement: Option<&Placement>,
    style: Style,
) -> std::io::Result<()> {
    for (row, y) in grid.rows().zip(0u16..) {
        for (&wall, x) in row.iter().zip(0u16..) {
            let marker = marker_at(wall, placement, (x, y));
            match style {
                Style::Color => queue!(out, Print(marker))?,
                Style::Plain => queue!(out, Print(marker.plain()))?,
            }
        }
        queue!(out, Print("\r\n"))?;
    }
    out.flush()
}

/// Plain text form of the maze, rows joined with `\n`.
pub fn to_string_plain(grid: &Grid, placement: Option<&Placement>) -> String {
    grid.rows()
        .zip(0u16..)
        .map(|(row, y)| {
            row.iter()
                .zip(0u16..)
                .map(|(&wall, x)| marker_at(wall, placement, (x, y)).plain())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
