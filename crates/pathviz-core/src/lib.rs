//! **pathviz-core**: building blocks shared by the pathviz crates.
//!
//! This crate provides geometry primitives, styled screen cells, a screen
//! grid with frame diffing, input messages, and the [`Driver`] abstraction a
//! back-end implements to show frames and report input. [`Screen`] ties a
//! driver to a pair of grids so callers only describe what a frame looks like.

pub mod app;
pub mod cell;
pub mod geom;
pub mod grid;
pub mod messages;
pub mod style;

pub use app::{Context, Driver, DriverResult, Screen};
pub use cell::Cell;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use messages::*;
pub use style::{Color, Style};
