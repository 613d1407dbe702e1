use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// What a single grid cell shows when the maze is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Open,
    Wall,
    Start,
    Exit,
}

impl Marker {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Picks the marker for `(x, y)` given the occupancy and the placement.
    pub fn for_cell(wall: bool, is_start: bool, is_exit: bool) -> Marker {
        if is_start {
            Marker::Start
        } else if is_exit {
            Marker::Exit
        } else if wall {
            Marker::Wall
        } else {
            Marker::Open
        }
    }

    /// ASCII form, for logs and terminals without emoji support.
    pub fn plain(self) -> &'static str {
        match self {
            Marker::Open => "  ",
            Marker::Wall => "##",
            Marker::Start => "S ",
            Marker::Exit => "E ",
        }
    }

    pub fn styled(self) -> StyledContent<&'static str> {
        match self {
            Marker::Open => "  ".with(Color::Reset),
            Marker::Wall => "⬜".with(Color::White),
            Marker::Start => "🟩".with(Color::Green),
            Marker::Exit => "🟥".with(Color::Red),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = self.styled();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Marker::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_markers_are_two_columns() {
        for marker in [Marker::Open, Marker::Wall, Marker::Start, Marker::Exit] {
            assert_eq!(marker.plain().width(), Marker::CELL_WIDTH as usize);
            assert_eq!(marker.styled().content().width(), Marker::CELL_WIDTH as usize);
        }
    }

    #[test]
    fn test_start_and_exit_win_over_occupancy() {
        assert_eq!(Marker::for_cell(false, true, false), Marker::Start);
        assert_eq!(Marker::for_cell(false, false, true), Marker::Exit);
        assert_eq!(Marker::for_cell(true, false, false), Marker::Wall);
        assert_eq!(Marker::for_cell(false, false, false), Marker::Open);
    }
}
