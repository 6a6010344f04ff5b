//! Fixed layout constants and the run-time [`VisualizerConfig`].

use std::time::Duration;

/// Board side length, in cells.
pub const GRID_ROWS: i32 = 50;
/// Terminal columns per board cell.
pub const CELL_WIDTH: i32 = 2;
/// Terminal rows per board cell.
pub const CELL_HEIGHT: i32 = 1;
/// Terminal rows taken by the header band above the board.
pub const HEADER_HEIGHT: i32 = 2;
/// Pause after each animated search step.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(5);
pub const TITLE: &str = "Pathfinding Visualizer";

/// Run-time knobs for a [`Session`](crate::session::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
    /// Board side length. The binary always uses [`GRID_ROWS`].
    pub rows: i32,
    pub step_delay: Duration,
    pub title: String,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            step_delay: DEFAULT_STEP_DELAY,
            title: TITLE.to_string(),
        }
    }
}

impl VisualizerConfig {
    pub fn with_rows(mut self, rows: i32) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }
}
