//! Board model and shortest-path search for the pathviz visualizer.
//!
//! - [`Board`] is the N×N grid of [`Spot`]s the user paints on. Each spot
//!   carries an explicit [`CellState`] and a cached list of traversable
//!   neighbors, refreshed with [`Board::refresh_adjacency`].
//! - [`search`] runs Dijkstra or A* from a start to an end spot, marking
//!   frontier, visited and path spots on the board as it goes and calling a
//!   caller-supplied hook after every expansion so the run can be animated
//!   and cancelled.
//!
//! The search is uniform-cost (every move costs 1) over 4-directional moves;
//! A* uses the [`manhattan`] heuristic, which is consistent for that model.
//!
//! ```
//! use pathviz_paths::{Algorithm, Board, Outcome, search};
//! use pathviz_core::Point;
//!
//! let mut board = Board::build(5).unwrap();
//! board.refresh_adjacency();
//! let start = Point::from_row_col(0, 0);
//! let end = Point::from_row_col(4, 4);
//! let outcome = search(&mut board, start, end, Algorithm::AStar.heuristic_enabled(), |_| {}, || false).unwrap();
//! assert!(matches!(outcome, Outcome::Found(ref path) if path.len() == 9));
//! ```

mod board;
mod distance;
mod error;
mod frontier;
mod search;

pub use board::{Board, CellState, Painted, Spot};
pub use distance::manhattan;
pub use error::{PathError, Precondition};
pub use search::{Algorithm, Outcome, SearchReport, SearchState, UNREACHABLE, search};
