//! Interactive terminal pathfinding visualizer.
//!
//! Paint a start, an end and walls with the mouse, then watch Dijkstra or A*
//! expand across the board one frame per step. The [`Session`] ties the
//! board from `pathviz-paths` to a `pathviz-core` [`Screen`](pathviz_core::Screen)
//! over any [`Driver`](pathviz_core::Driver).

pub mod colors;
pub mod config;
pub mod input;
pub mod session;
pub mod view;

pub use config::VisualizerConfig;
pub use session::Session;
