//! Screen layout and rendering of the board plus the two-line header.

use std::fmt;
use std::time::Duration;

use pathviz_core::{Cell, Grid, Point, Range};
use pathviz_paths::{Algorithm, Board, SearchReport};

use crate::colors;
use crate::config::{CELL_HEIGHT, CELL_WIDTH, HEADER_HEIGHT};

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Maps between screen cells and board cells.
///
/// The header occupies the top [`HEADER_HEIGHT`] rows; below it every board
/// cell is [`CELL_WIDTH`] × [`CELL_HEIGHT`] screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    rows: i32,
}

impl Layout {
    pub const fn new(rows: i32) -> Self {
        Self { rows }
    }

    /// Screen size in cells, header included.
    pub const fn screen_size(self) -> Point {
        Point::new(self.rows * CELL_WIDTH, HEADER_HEIGHT + self.rows * CELL_HEIGHT)
    }

    /// Board cell under the screen position `p`, or `None` over the header
    /// or past the board edge.
    pub fn board_pos(self, p: Point) -> Option<Point> {
        let y = p.y - HEADER_HEIGHT;
        if p.x < 0 || y < 0 {
            return None;
        }
        let cell = Point::from_row_col(y / CELL_HEIGHT, p.x / CELL_WIDTH);
        Range::new(0, 0, self.rows, self.rows)
            .contains(cell)
            .then_some(cell)
    }

    /// Top-left screen cell of the board cell `cell`.
    pub const fn screen_pos(self, cell: Point) -> Point {
        Point::new(cell.x * CELL_WIDTH, HEADER_HEIGHT + cell.y * CELL_HEIGHT)
    }
}

// ---------------------------------------------------------------------------
// Header contents
// ---------------------------------------------------------------------------

/// What the header reports as the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Current {
    #[default]
    Nothing,
    One(Algorithm),
    /// Compare mode: every algorithm, one after another.
    All,
}

impl fmt::Display for Current {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => f.write_str("-"),
            Self::One(algorithm) => f.write_str(algorithm.name()),
            Self::All => f.write_str("All"),
        }
    }
}

/// Result of one timed run, as shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub algorithm: Algorithm,
    /// Path length in cells, `None` when no path exists.
    pub path_len: Option<usize>,
    pub expanded: usize,
    pub elapsed: Duration,
}

impl Summary {
    pub fn new(algorithm: Algorithm, report: &SearchReport, elapsed: Duration) -> Self {
        Self {
            algorithm,
            path_len: report.outcome.path().map(<[Point]>::len),
            expanded: report.expanded,
            elapsed,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path_len {
            Some(n) => write!(f, "{}: {n} cells", self.algorithm)?,
            None => write!(f, "{}: no path", self.algorithm)?,
        }
        write!(
            f,
            ", {} expanded, {:.4}s",
            self.expanded,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Second header line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Ready,
    NeedEndpoints,
    Running(Algorithm),
    Finished(Summary),
    Aborted(Algorithm),
    Compared(Vec<Summary>),
    Cleared,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str(
                "Left click: start, end, walls | Right click: erase | Esc: abort | Q: quit",
            ),
            Self::NeedEndpoints => f.write_str("Place a start and an end first"),
            Self::Running(algorithm) => write!(f, "Running {algorithm}... (Esc to abort)"),
            Self::Finished(summary) => write!(f, "{summary}"),
            Self::Aborted(algorithm) => write!(f, "{algorithm} aborted"),
            Self::Compared(summaries) => {
                for (i, summary) in summaries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{summary}")?;
                }
                Ok(())
            }
            Self::Cleared => f.write_str("Board cleared"),
        }
    }
}

/// Everything the header band shows.
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    pub current: Current,
    pub elapsed: Duration,
    pub status: &'a Status,
}

impl Header<'_> {
    /// First header line: key bindings, selection and last run time.
    pub fn title_line(&self) -> String {
        format!(
            "1: Dijkstra | 2: A* | 3: All | C: Clear | Current: {} | Time: {:.4}s",
            self.current,
            self.elapsed.as_secs_f64()
        )
    }
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

/// Paint the header and every board cell onto `grid`.
pub fn draw(grid: &Grid, layout: Layout, board: &Board, header: &Header<'_>) {
    let style = colors::header_style();
    let band = grid.slice(Range::new(0, 0, grid.size().x, HEADER_HEIGHT));
    band.fill(Cell::new(' ', style));
    grid.text(Point::new(1, 0), &header.title_line(), style);
    grid.text(Point::new(1, 1), &header.status.to_string(), style);

    for spot in board.iter() {
        let style = colors::cell_style(spot.state());
        let origin = layout.screen_pos(spot.pos());
        for dy in 0..CELL_HEIGHT {
            for dx in 0..CELL_WIDTH {
                let ch = if dx == 0 { colors::GRID_LINE } else { ' ' };
                grid.set(origin.shift(dx, dy), Cell::new(ch, style));
            }
        }
    }
}
